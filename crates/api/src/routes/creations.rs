use axum::routing::post;
use axum::Router;

use crate::handlers::creations;
use crate::state::AppState;

/// Creation routes, mounted at `/creations`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(creations::create))
}
