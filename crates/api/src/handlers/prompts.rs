//! Handler for the prompt composer.

use atelier_core::prompt::{compose_prompt, PromptRequest};
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::body::JsonBody;
use crate::response::DataResponse;
use crate::state::AppState;

/// Composed prompt plus the feeling ids that did not resolve.
#[derive(Debug, Serialize)]
pub struct ComposeResponse {
    pub style_id: String,
    pub prompt: String,
    pub ignored_feeling_ids: Vec<String>,
}

/// POST /prompts/compose
///
/// Unknown feeling ids never fail the request; they are reported back in
/// `ignored_feeling_ids`.
pub async fn compose(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<PromptRequest>,
) -> AppResult<Json<DataResponse<ComposeResponse>>> {
    let prompt = compose_prompt(state.catalog, &request)?;
    let (_, ignored_feeling_ids) = state.catalog.resolve_feelings(request.feeling_ids.as_slice());

    Ok(Json(DataResponse {
        data: ComposeResponse {
            style_id: request.style_id,
            prompt,
            ignored_feeling_ids,
        },
    }))
}
