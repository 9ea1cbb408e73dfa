//! VenueLens
//!
//! Client-side lifecycle engine for a photography-booking marketplace.
//! This library provides the venue-event status rules, the photographer
//! application workflow, derived booking statistics, and a controller that
//! mirrors the remote LocationEvent API into consistent in-memory
//! projections.

#![allow(non_snake_case)]

pub mod config;
pub mod lifecycle;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, VenueLensError};

// Re-export main components for easy access
pub use lifecycle::{allowed_transitions, can_transition, recompute, respond};
pub use services::{EventController, EventGateway};
pub use state::EventProjections;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
