//! Atelier application store.
//!
//! Cross-component signalling goes through named actions rather than
//! global event names:
//!
//! - [`ActionBus`] -- in-process publish/subscribe hub for [`UiAction`]s,
//!   backed by `tokio::sync::broadcast`.
//! - [`ModalStore`] -- background reducer tracking which modal dialog is
//!   open.
//! - [`AnalyticsSink`] -- background service recording [`AnalyticsEvent`]s.

pub mod analytics;
pub mod bus;
pub mod store;

pub use analytics::{AnalyticsEvent, AnalyticsSink};
pub use bus::{ActionBus, UiAction};
pub use store::{Modal, ModalState, ModalStore};
