//! Analytics event recording.
//!
//! [`AnalyticsSink`] subscribes to the [`ActionBus`](crate::bus::ActionBus)
//! and records every [`UiAction::Track`] as a structured `tracing` event
//! under the `analytics` target. Modal opens are recorded as well, so
//! funnels (e.g. how often signup is opened) need no extra
//! instrumentation at call sites.

use atelier_core::types::Timestamp;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::bus::UiAction;

/// A named analytics event with free-form properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    /// Snake-case event name, e.g. `"style_selected"`.
    pub name: String,
    pub properties: serde_json::Value,
    pub timestamp: Timestamp,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Set a single property, replacing any previous value.
    pub fn with_property(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        if let serde_json::Value::Object(map) = &mut self.properties {
            map.insert(key.to_string(), value.into());
        }
        self
    }
}

/// Background service that records analytics events.
pub struct AnalyticsSink;

impl AnalyticsSink {
    /// Run the recording loop until the bus is dropped. Returns the
    /// number of events recorded.
    pub async fn run(mut receiver: broadcast::Receiver<UiAction>) -> u64 {
        let mut recorded = 0;
        loop {
            match receiver.recv().await {
                Ok(action) => {
                    if let Some(event) = Self::event_for(&action) {
                        Self::record(&event);
                        recorded += 1;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Analytics sink lagged, some events were dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!(recorded, "Action bus closed, analytics sink shutting down");
                    break;
                }
            }
        }
        recorded
    }

    /// Map an action to the analytics event it produces, if any.
    pub fn event_for(action: &UiAction) -> Option<AnalyticsEvent> {
        match action {
            UiAction::Track(event) => Some(event.clone()),
            UiAction::OpenLogin
            | UiAction::OpenSignup
            | UiAction::OpenPartnerInquiry
            | UiAction::OpenTerms
            | UiAction::OpenShare { .. } => {
                Some(AnalyticsEvent::new("modal_opened").with_property("modal", action.name()))
            }
            UiAction::CloseModal | UiAction::SessionChanged { .. } => None,
        }
    }

    fn record(event: &AnalyticsEvent) {
        tracing::info!(
            target: "analytics",
            event = %event.name,
            properties = %event.properties,
            timestamp = %event.timestamp,
            "Analytics event"
        );
    }
}
