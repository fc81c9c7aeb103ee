use axum::routing::get;
use axum::Router;

use crate::handlers::partner;
use crate::state::AppState;

/// Partner dashboard routes, mounted at `/partner`.
pub fn router() -> Router<AppState> {
    Router::new().route("/metrics", get(partner::metrics))
}
