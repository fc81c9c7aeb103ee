//! Request and response bodies exchanged with the remote poster API.

use atelier_core::session::SessionUser;
use atelier_core::types::RemoteId;
use serde::{Deserialize, Serialize};

/// Body of `POST /creations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationRequest {
    /// Id of a photo previously uploaded to the remote API.
    pub upload_id: RemoteId,
    pub style_id: String,
    pub feeling_ids: Vec<String>,
    /// Fully composed generation prompt.
    pub prompt: String,
}

/// Response of `POST /creations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationResponse {
    pub creation_id: RemoteId,
    pub status: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}
