//! Photographer application model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a photographer's application to join an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    Approved,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    /// Terminal statuses accept no further owner-side responses
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ApplicationStatus::Applied)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Withdrawn => "Withdrawn",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A photographer's request to participate in an event.
///
/// Identity is the composite key `(event_id, photographer_id)`. Display
/// fields are normalized at the gateway boundary; nothing downstream
/// branches on server shape variance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub event_id: i64,
    pub photographer_id: i64,
    pub photographer_name: Option<String>,
    pub avatar_url: Option<String>,
    pub special_rate: Option<f64>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    // Set iff status is Approved or Rejected.
    pub responded_at: Option<DateTime<Utc>>,
    // Present only when status is Rejected.
    pub rejection_reason: Option<String>,
}

impl Application {
    /// Whether this application matches the given composite key
    pub fn matches(&self, event_id: i64, photographer_id: i64) -> bool {
        self.event_id == event_id && self.photographer_id == photographer_id
    }
}

/// Request payload for the respond-application endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondApplicationRequest {
    pub event_id: i64,
    pub photographer_id: i64,
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}
