//! Booking model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a customer booking. The booking state machine is owned by the
/// server; the client carries it opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        };
        f.write_str(s)
    }
}

/// Minimal identity of a booking party (customer or photographer)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartySummary {
    pub id: Option<i64>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// A confirmed customer reservation with an approved photographer.
///
/// `customer` and `photographer` are normalized from heterogeneous server
/// shapes at the gateway boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub event_booking_id: i64,
    pub event_id: i64,
    pub event_photographer_id: i64,
    pub user_id: i64,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub status: BookingStatus,
    pub total_amount: f64,
    pub customer: PartySummary,
    pub photographer: PartySummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_booking_round_trips_through_json() {
        let start = Utc::now();
        let booking = Booking {
            event_booking_id: 9,
            event_id: 1,
            event_photographer_id: 7,
            user_id: 3,
            start_datetime: start,
            end_datetime: start + Duration::hours(2),
            status: BookingStatus::Confirmed,
            total_amount: 250_000.0,
            customer: PartySummary {
                id: Some(3),
                full_name: Some("Linh Tran".to_string()),
                avatar_url: None,
            },
            photographer: PartySummary::default(),
        };

        let json = serde_json::to_string(&booking).unwrap();
        let parsed: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.event_booking_id, 9);
        assert_eq!(parsed.status, BookingStatus::Confirmed);
        assert_eq!(parsed.customer.full_name.as_deref(), Some("Linh Tran"));
    }
}
