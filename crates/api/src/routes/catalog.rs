//! Route definitions for the style and feeling catalog.
//!
//! ```text
//! STYLES:
//! GET    /            list_styles
//! GET    /{id}        get_style
//!
//! FEELINGS:
//! GET    /            list_feelings
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Style routes, mounted at `/styles`.
pub fn style_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_styles))
        .route("/{id}", get(catalog::get_style))
}

/// Feeling routes, mounted at `/feelings`.
pub fn feeling_router() -> Router<AppState> {
    Router::new().route("/", get(catalog::list_feelings))
}
