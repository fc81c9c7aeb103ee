//! Modal dialog state.
//!
//! [`ModalState`] is a plain reducer: at most one modal is open at a time.
//! [`ModalStore`] runs the reducer as a background task fed by the
//! [`ActionBus`](crate::bus::ActionBus) and publishes every change on a
//! `tokio::sync::watch` channel that views subscribe to.

use serde::Serialize;
use tokio::sync::{broadcast, watch};

use crate::bus::UiAction;

/// A modal dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "modal", rename_all = "snake_case")]
pub enum Modal {
    Login,
    Signup,
    PartnerInquiry,
    Terms,
    Share { creation_id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModalState {
    pub open: Option<Modal>,
    pub authenticated: bool,
}

impl ModalState {
    /// Apply an action. Returns `true` when the state changed.
    pub fn apply(&mut self, action: &UiAction) -> bool {
        let before = self.clone();
        match action {
            // Login and signup are pointless once signed in.
            UiAction::OpenLogin | UiAction::OpenSignup if self.authenticated => {}
            UiAction::OpenLogin => self.open = Some(Modal::Login),
            UiAction::OpenSignup => self.open = Some(Modal::Signup),
            UiAction::OpenPartnerInquiry => self.open = Some(Modal::PartnerInquiry),
            UiAction::OpenTerms => self.open = Some(Modal::Terms),
            UiAction::OpenShare { creation_id } => {
                self.open = Some(Modal::Share {
                    creation_id: creation_id.clone(),
                });
            }
            UiAction::CloseModal => self.open = None,
            UiAction::SessionChanged { authenticated } => {
                self.authenticated = *authenticated;
                if *authenticated && matches!(self.open, Some(Modal::Login | Modal::Signup)) {
                    self.open = None;
                }
            }
            UiAction::Track(_) => {}
        }
        *self != before
    }
}

/// Background reducer over the action bus.
pub struct ModalStore {
    state: ModalState,
    sender: watch::Sender<ModalState>,
}

impl ModalStore {
    /// Create a store and a receiver that observes its state.
    pub fn new(initial: ModalState) -> (Self, watch::Receiver<ModalState>) {
        let (sender, receiver) = watch::channel(initial.clone());
        (
            Self {
                state: initial,
                sender,
            },
            receiver,
        )
    }

    /// Apply actions until the bus closes, returning the final state.
    pub async fn run(mut self, mut receiver: broadcast::Receiver<UiAction>) -> ModalState {
        loop {
            match receiver.recv().await {
                Ok(action) => {
                    if self.state.apply(&action) {
                        tracing::debug!(
                            action = action.name(),
                            open = ?self.state.open,
                            "Modal state changed"
                        );
                        // No watchers is fine; the state is still tracked here.
                        let _ = self.sender.send(self.state.clone());
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Modal store lagged, some actions were dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::debug!("Action bus closed, modal store shutting down");
                    break;
                }
            }
        }
        self.state
    }
}
