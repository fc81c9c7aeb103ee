//! Partner dashboard metric helpers.

use serde::{Deserialize, Serialize};

use crate::types::Cents;

/// Engagement and sales counters for a partner account over some period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerMetrics {
    pub views: u64,
    pub saves: u64,
    pub orders: u64,
    pub revenue_cents: Cents,
}

impl PartnerMetrics {
    /// Orders per view, or `0.0` when there are no views.
    pub fn conversion_rate(&self) -> f64 {
        ratio(self.orders, self.views)
    }

    /// Saves per view, or `0.0` when there are no views.
    pub fn save_rate(&self) -> f64 {
        ratio(self.saves, self.views)
    }

    /// Sum two periods.
    pub fn merge(self, other: Self) -> Self {
        Self {
            views: self.views + other.views,
            saves: self.saves + other.saves,
            orders: self.orders + other.orders,
            revenue_cents: self.revenue_cents + other.revenue_cents,
        }
    }

    /// Sum any number of daily snapshots.
    pub fn total<I: IntoIterator<Item = Self>>(snapshots: I) -> Self {
        snapshots.into_iter().fold(Self::default(), Self::merge)
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
