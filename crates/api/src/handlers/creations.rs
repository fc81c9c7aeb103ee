//! Handler for submitting a poster creation to the remote poster API.

use atelier_core::prompt::{compose_prompt, PromptRequest};
use atelier_events::AnalyticsEvent;
use atelier_remote::{CreationRequest, CreationResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::BearerToken;
use crate::middleware::body::JsonBody;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for creating a poster.
#[derive(Debug, Deserialize)]
pub struct CreatePosterRequest {
    pub upload_id: String,
    pub style_id: String,
    #[serde(default)]
    pub feeling_ids: Vec<String>,
}

/// POST /creations
///
/// Composes the prompt locally and relays the creation upstream with the
/// caller's token. An unknown style fails before anything is sent.
pub async fn create(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    JsonBody(input): JsonBody<CreatePosterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CreationResponse>>)> {
    if input.upload_id.trim().is_empty() {
        return Err(AppError::BadRequest("upload_id must not be empty".into()));
    }

    let prompt_request =
        PromptRequest::new(input.style_id.clone()).with_feelings(input.feeling_ids.iter().cloned());
    let prompt = compose_prompt(state.catalog, &prompt_request)?;

    let free = state.catalog.is_free_style(&input.style_id);
    let request = CreationRequest {
        upload_id: input.upload_id,
        style_id: input.style_id,
        feeling_ids: input.feeling_ids,
        prompt,
    };

    let created = state.remote.submit_creation(&token, &request).await?;
    tracing::info!(
        creation_id = %created.creation_id,
        style_id = %request.style_id,
        "Creation submitted"
    );

    state.action_bus.track(
        AnalyticsEvent::new("creation_submitted")
            .with_property("style_id", request.style_id.as_str())
            .with_property("free_style", free)
            .with_property("feeling_count", request.feeling_ids.len()),
    );

    Ok((StatusCode::ACCEPTED, Json(DataResponse { data: created })))
}
