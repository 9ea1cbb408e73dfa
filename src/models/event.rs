//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::errors::{Result, VenueLensError};

/// Lifecycle status of a venue event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    Draft,
    Open,
    Active,
    Closed,
    Cancelled,
}

impl EventStatus {
    /// All statuses, in lifecycle order
    pub const ALL: [EventStatus; 5] = [
        EventStatus::Draft,
        EventStatus::Open,
        EventStatus::Active,
        EventStatus::Closed,
        EventStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "Draft",
            EventStatus::Open => "Open",
            EventStatus::Active => "Active",
            EventStatus::Closed => "Closed",
            EventStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A time-boxed promotional booking slot at a venue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: i64,
    pub location_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub original_price: Option<f64>,
    pub discounted_price: Option<f64>,
    pub max_photographers: i32,
    pub max_bookings_per_slot: i32,
    pub status: EventStatus,
    // Denormalized counters, recomputed from children by the server.
    #[serde(default)]
    pub approved_photographers_count: i32,
    #[serde(default)]
    pub total_bookings_count: i32,
    #[serde(default)]
    pub total_applications_count: i32,
}

impl Event {
    /// Whether the event has started relative to `now`
    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        now >= self.start_date
    }

    /// Whether the event has ended relative to `now`
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        now >= self.end_date
    }
}

/// Request payload for creating an event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub location_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub discounted_price: Option<f64>,
    pub original_price: Option<f64>,
    pub max_photographers: i32,
    pub max_bookings_per_slot: i32,
}

impl CreateEventRequest {
    /// Validate the request before it is sent to the gateway
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().len() < 3 {
            return Err(VenueLensError::InvalidInput(
                "Event name must be at least 3 characters".to_string(),
            ));
        }

        if self.end_date <= self.start_date {
            return Err(VenueLensError::InvalidInput(
                "Event end date must be after start date".to_string(),
            ));
        }

        if let (Some(original), Some(discounted)) = (self.original_price, self.discounted_price) {
            if discounted > original {
                return Err(VenueLensError::InvalidInput(
                    "Discounted price cannot exceed original price".to_string(),
                ));
            }
        }

        if self.max_photographers <= 0 {
            return Err(VenueLensError::InvalidInput(
                "Max photographers must be a positive integer".to_string(),
            ));
        }

        if self.max_bookings_per_slot <= 0 {
            return Err(VenueLensError::InvalidInput(
                "Max bookings per slot must be a positive integer".to_string(),
            ));
        }

        Ok(())
    }
}

/// Partial update payload for an event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_photographers: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bookings_per_slot: Option<i32>,
}
