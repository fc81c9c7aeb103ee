//! Handler for the partner dashboard.

use atelier_core::dashboard::PartnerMetrics;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::BearerToken;
use crate::response::DataResponse;
use crate::state::AppState;

/// Upstream counters plus the derived rates the dashboard displays.
#[derive(Debug, Serialize)]
pub struct PartnerMetricsView {
    #[serde(flatten)]
    pub metrics: PartnerMetrics,
    pub conversion_rate: f64,
    pub save_rate: f64,
}

/// GET /partner/metrics
pub async fn metrics(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> AppResult<Json<DataResponse<PartnerMetricsView>>> {
    let metrics = state.remote.partner_metrics(&token).await?;
    Ok(Json(DataResponse {
        data: PartnerMetricsView {
            conversion_rate: metrics.conversion_rate(),
            save_rate: metrics.save_rate(),
            metrics,
        },
    }))
}
