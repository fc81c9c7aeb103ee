pub mod catalog;
pub mod creations;
pub mod health;
pub mod partner;
pub mod prompts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /styles                      list styles (?free=true for free tier only)
/// /styles/{id}                 get style
/// /feelings                    list feelings
///
/// /prompts/compose             compose a poster prompt (POST)
///
/// /creations                   submit a poster creation (POST, bearer token)
///
/// /partner/metrics             partner dashboard counters (bearer token)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Static catalog.
        .nest("/styles", catalog::style_router())
        .nest("/feelings", catalog::feeling_router())
        // Prompt composer.
        .nest("/prompts", prompts::router())
        // Remote relays.
        .nest("/creations", creations::router())
        .nest("/partner", partner::router())
}
