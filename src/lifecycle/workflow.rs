//! Application response workflow
//!
//! Owner-side approve/reject rules for photographer applications. Pure:
//! returns an updated copy, never touches projections or the network.

use chrono::{DateTime, Utc};

use crate::models::{Application, ApplicationStatus};
use crate::utils::errors::{Result, VenueLensError};

/// Owner decision on a pending application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseDecision {
    Approved,
    Rejected,
}

impl ResponseDecision {
    pub fn as_status(&self) -> ApplicationStatus {
        match self {
            ResponseDecision::Approved => ApplicationStatus::Approved,
            ResponseDecision::Rejected => ApplicationStatus::Rejected,
        }
    }
}

/// Evaluate an owner response against an application.
///
/// Only applications still in `Applied` may be responded to; rejections
/// must carry a non-empty reason. On success the returned copy has the new
/// status, `responded_at` set to `now`, and the trimmed rejection reason
/// (cleared for approvals).
pub fn respond(
    application: &Application,
    decision: ResponseDecision,
    rejection_reason: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Application> {
    if application.status != ApplicationStatus::Applied {
        return Err(VenueLensError::InvalidApplicationState {
            status: application.status,
        });
    }

    let reason = match decision {
        ResponseDecision::Approved => None,
        ResponseDecision::Rejected => {
            let trimmed = rejection_reason.map(str::trim).unwrap_or("");
            if trimmed.is_empty() {
                return Err(VenueLensError::MissingRejectionReason);
            }
            Some(trimmed.to_string())
        }
    };

    let mut updated = application.clone();
    updated.status = decision.as_status();
    updated.responded_at = Some(now);
    updated.rejection_reason = reason;
    Ok(updated)
}
