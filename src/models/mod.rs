//! Data models module
//!
//! This module contains all data structures used throughout the crate

pub mod application;
pub mod booking;
pub mod event;
pub mod statistics;

// Re-export commonly used models
pub use application::{Application, ApplicationStatus, RespondApplicationRequest};
pub use booking::{Booking, BookingStatus, PartySummary};
pub use event::{CreateEventRequest, Event, EventStatus, UpdateEventRequest};
pub use statistics::EventStatistics;
