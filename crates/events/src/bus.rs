//! In-process action bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`ActionBus`] replaces ad-hoc global event names: components publish a
//! named [`UiAction`] and any interested component subscribes. It is
//! designed to be shared via `Arc<ActionBus>` across the application.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::analytics::AnalyticsEvent;

// ---------------------------------------------------------------------------
// UiAction
// ---------------------------------------------------------------------------

/// A named application action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UiAction {
    OpenLogin,
    OpenSignup,
    OpenPartnerInquiry,
    OpenTerms,
    OpenShare { creation_id: String },
    CloseModal,
    /// Emitted by the session owner after login, logout or revalidation.
    SessionChanged { authenticated: bool },
    /// Record an analytics event.
    Track(AnalyticsEvent),
}

impl UiAction {
    /// Stable action name, used in logs and analytics.
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::OpenLogin => "open_login",
            UiAction::OpenSignup => "open_signup",
            UiAction::OpenPartnerInquiry => "open_partner_inquiry",
            UiAction::OpenTerms => "open_terms",
            UiAction::OpenShare { .. } => "open_share",
            UiAction::CloseModal => "close_modal",
            UiAction::SessionChanged { .. } => "session_changed",
            UiAction::Track(_) => "track",
        }
    }
}

// ---------------------------------------------------------------------------
// ActionBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out action bus.
///
/// ```rust
/// use atelier_events::bus::{ActionBus, UiAction};
///
/// let bus = ActionBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.dispatch(UiAction::OpenLogin);
/// ```
pub struct ActionBus {
    sender: broadcast::Sender<UiAction>,
}

impl ActionBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed actions are dropped
    /// and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Dispatch an action to all current subscribers.
    ///
    /// Actions dispatched with no subscribers are dropped.
    pub fn dispatch(&self, action: UiAction) {
        tracing::trace!(action = action.name(), "Dispatching UI action");
        let _ = self.sender.send(action);
    }

    /// Shorthand for dispatching [`UiAction::OpenLogin`].
    pub fn open_login(&self) {
        self.dispatch(UiAction::OpenLogin);
    }

    /// Shorthand for dispatching [`UiAction::OpenSignup`].
    pub fn open_signup(&self) {
        self.dispatch(UiAction::OpenSignup);
    }

    pub fn track(&self, event: AnalyticsEvent) {
        self.dispatch(UiAction::Track(event));
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UiAction> {
        self.sender.subscribe()
    }
}

impl Default for ActionBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
