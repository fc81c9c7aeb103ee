use atelier_core::error::CoreError;
use atelier_remote::RemoteApiError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`RemoteApiError`] for
/// failures talking to the remote poster API. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `atelier_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The remote poster API failed or rejected the request.
    #[error(transparent)]
    Remote(#[from] RemoteApiError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The JSON request body was missing, malformed, or the wrong shape.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::StyleNotFound(id) => (
                    StatusCode::NOT_FOUND,
                    "STYLE_NOT_FOUND",
                    format!("Style '{id}' not found"),
                ),
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Remote API errors ---
            AppError::Remote(err) => classify_remote_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InvalidBody(rejection) => {
                (rejection.status(), "INVALID_BODY", rejection.body_text())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a remote API error into an HTTP status, error code, and message.
///
/// - Upstream 401 passes through as 401 so the UI can prompt a login.
/// - Everything else maps to 502 with a sanitized message.
fn classify_remote_error(err: &RemoteApiError) -> (StatusCode, &'static str, String) {
    if err.is_unauthorized() {
        return (
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "Session expired or invalid".to_string(),
        );
    }
    tracing::error!(error = %err, "Remote API error");
    (
        StatusCode::BAD_GATEWAY,
        "UPSTREAM_ERROR",
        "The poster service is unavailable".to_string(),
    )
}
