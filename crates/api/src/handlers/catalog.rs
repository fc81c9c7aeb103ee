//! Handlers for browsing the style and feeling catalog.

use atelier_core::catalog::{FeelingDescriptor, StyleDescriptor};
use atelier_core::error::CoreError;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Filters for the style listing.
#[derive(Debug, Default, Deserialize)]
pub struct StyleListParams {
    /// When `true`, only styles usable without credits are returned.
    pub free: Option<bool>,
}

/// A style as returned to the UI: the descriptor plus its access tier.
#[derive(Debug, Serialize)]
pub struct StyleView {
    #[serde(flatten)]
    pub style: &'static StyleDescriptor,
    pub free: bool,
}

fn view(state: &AppState, style: &'static StyleDescriptor) -> StyleView {
    StyleView {
        style,
        free: state.catalog.is_free_style(&style.id),
    }
}

/// GET /styles
pub async fn list_styles(
    State(state): State<AppState>,
    Query(params): Query<StyleListParams>,
) -> Json<DataResponse<Vec<StyleView>>> {
    let only_free = params.free.unwrap_or(false);
    let styles = state
        .catalog
        .styles()
        .iter()
        .map(|style| view(&state, style))
        .filter(|v| !only_free || v.free)
        .collect();
    Json(DataResponse { data: styles })
}

/// GET /styles/{id}
pub async fn get_style(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<StyleView>>> {
    let style = state
        .catalog
        .style(&id)
        .ok_or(CoreError::StyleNotFound(id))?;
    Ok(Json(DataResponse {
        data: view(&state, style),
    }))
}

/// GET /feelings
pub async fn list_feelings(
    State(state): State<AppState>,
) -> Json<DataResponse<&'static [FeelingDescriptor]>> {
    Json(DataResponse {
        data: state.catalog.feelings(),
    })
}
