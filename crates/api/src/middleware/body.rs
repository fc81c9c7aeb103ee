//! JSON body extractor whose rejections use the API error shape.

use axum::extract::FromRequest;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] on the request side. A missing
/// content type, malformed JSON, or a body of the wrong shape becomes an
/// [`AppError::InvalidBody`] with the `{error, code}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
