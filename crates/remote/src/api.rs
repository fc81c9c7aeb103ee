//! REST client for the remote poster API.

use async_trait::async_trait;
use atelier_core::dashboard::PartnerMetrics;
use atelier_core::error::CoreError;
use atelier_core::session::{SessionUser, SessionVerifier};
use reqwest::StatusCode;

use crate::messages::{CreationRequest, CreationResponse, LoginRequest, LoginResponse};

/// HTTP client for the remote poster API.
#[derive(Debug, Clone)]
pub struct RemoteApi {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the remote API layer.
#[derive(Debug, thiserror::Error)]
pub enum RemoteApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote API returned a non-2xx status code.
    #[error("Remote API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl RemoteApiError {
    /// Whether the remote API rejected the caller's credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RemoteApiError::ApiError { status: 401, .. })
    }
}

impl RemoteApi {
    /// Create a client for the API rooted at `api_url`, e.g.
    /// `https://api.example.com/v1`. A trailing slash is ignored.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Queue a poster generation.
    ///
    /// Sends `POST /creations` with the composed prompt on behalf of the
    /// bearer of `token`.
    pub async fn submit_creation(
        &self,
        token: &str,
        request: &CreationRequest,
    ) -> Result<CreationResponse, RemoteApiError> {
        tracing::debug!(style_id = %request.style_id, "Submitting creation");
        let response = self
            .client
            .post(self.url("/creations"))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Check whether `token` still identifies a live session.
    ///
    /// Sends `GET /auth/session`. A 401 yields `Ok(None)`.
    pub async fn check_session(&self, token: &str) -> Result<Option<SessionUser>, RemoteApiError> {
        let response = self
            .client
            .get(self.url("/auth/session"))
            .bearer_auth(token)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        Self::parse_response(response).await.map(Some)
    }

    /// Exchange credentials for a session token (`POST /auth/login`).
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, RemoteApiError> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Revoke the session behind `token` (`POST /auth/logout`).
    pub async fn logout(&self, token: &str) -> Result<(), RemoteApiError> {
        let response = self
            .client
            .post(self.url("/auth/logout"))
            .bearer_auth(token)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Fetch dashboard counters for a partner account
    /// (`GET /partner/metrics`).
    pub async fn partner_metrics(&self, token: &str) -> Result<PartnerMetrics, RemoteApiError> {
        let response = self
            .client
            .get(self.url("/partner/metrics"))
            .bearer_auth(token)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`RemoteApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, RemoteApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "Remote API returned an error");
            return Err(RemoteApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, RemoteApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), RemoteApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionVerifier for RemoteApi {
    async fn verify(&self, token: &str) -> Result<Option<SessionUser>, CoreError> {
        self.check_session(token)
            .await
            .map_err(|e| CoreError::Internal(format!("Session check failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = RemoteApi::new("http://localhost:8080/v1/");
        assert_eq!(api.api_url(), "http://localhost:8080/v1");
        assert_eq!(api.url("/creations"), "http://localhost:8080/v1/creations");
    }

    #[test]
    fn unauthorized_is_detected() {
        let err = RemoteApiError::ApiError {
            status: 401,
            body: String::new(),
        };
        assert!(err.is_unauthorized());
        let err = RemoteApiError::ApiError {
            status: 500,
            body: String::new(),
        };
        assert!(!err.is_unauthorized());
    }
}
