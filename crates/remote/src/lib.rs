//! Typed HTTP client for the remote poster API.
//!
//! The remote API owns image generation, accounts and partner reporting.
//! [`RemoteApi`] wraps its REST endpoints using [`reqwest`] and implements
//! [`SessionVerifier`](atelier_core::session::SessionVerifier) so a
//! [`SessionContext`](atelier_core::session::SessionContext) can revalidate
//! tokens against it.

pub mod api;
pub mod messages;

pub use api::{RemoteApi, RemoteApiError};
pub use messages::{CreationRequest, CreationResponse, LoginResponse};
