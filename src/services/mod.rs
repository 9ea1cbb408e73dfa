//! Services module
//!
//! This module contains the remote gateway and the lifecycle controller

pub mod controller;
pub mod gateway;

// Re-export commonly used services
pub use controller::EventController;
pub use gateway::{ApprovedPhotographer, EventGateway};
