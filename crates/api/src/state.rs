use std::sync::Arc;

use atelier_core::Catalog;
use atelier_events::ActionBus;
use atelier_remote::RemoteApi;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or `'static`.
#[derive(Clone)]
pub struct AppState {
    /// Style and feeling tables, read-only for the process lifetime.
    pub catalog: &'static Catalog,
    /// Client for the remote poster API.
    pub remote: Arc<RemoteApi>,
    /// Action bus; the analytics sink subscribes to it.
    pub action_bus: Arc<ActionBus>,
}
