//! State management module
//!
//! This module holds the controller-owned in-memory projections

pub mod projections;

pub use projections::{EventProjections, LocationDashboard, RequestToken};
