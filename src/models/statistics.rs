//! Derived event statistics model

use serde::{Deserialize, Serialize};

/// Summary statistics for one event, derived from its applications and
/// bookings. The gateway's value is authoritative when present; the local
/// aggregator recomputes the same shape as a fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStatistics {
    pub total_applications: i64,
    pub approved_applications: i64,
    pub rejected_applications: i64,
    pub pending_applications: i64,
    pub total_bookings: i64,
    pub total_revenue: f64,
    pub average_booking_value: f64,
}
