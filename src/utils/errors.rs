//! Error handling for VenueLens
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

use crate::models::ApplicationStatus;

/// Main error type for VenueLens operations
#[derive(Error, Debug)]
pub enum VenueLensError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Application not found for event {event_id}, photographer {photographer_id}")]
    ApplicationNotFound { event_id: i64, photographer_id: i64 },

    #[error("Invalid state transition: {from} -> {to}: {reason}")]
    InvalidStateTransition {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Rejection requires a rejection reason")]
    MissingRejectionReason,

    #[error("Application cannot be responded to in status {status}")]
    InvalidApplicationState { status: ApplicationStatus },

    #[error("Stale response ignored for event {event_id}")]
    SupersededRequest { event_id: i64 },

    #[error("Operation already in flight: {0}")]
    OperationInFlight(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for VenueLens operations
pub type Result<T> = std::result::Result<T, VenueLensError>;

impl VenueLensError {
    /// Check whether the error was raised by local validation,
    /// before any network call. Validation errors are never retried.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            VenueLensError::InvalidStateTransition { .. }
                | VenueLensError::MissingRejectionReason
                | VenueLensError::InvalidApplicationState { .. }
                | VenueLensError::InvalidInput(_)
                | VenueLensError::OperationInFlight(_)
        )
    }

    /// Check if the error is recoverable by retrying the operation
    pub fn is_recoverable(&self) -> bool {
        match self {
            VenueLensError::Http(_) => true,
            VenueLensError::Api { status, .. } => *status >= 500,
            VenueLensError::Io(_) => true,
            _ => false,
        }
    }
}
