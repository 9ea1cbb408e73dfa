//! Event lifecycle rules
//!
//! Pure rule modules for the venue-event lifecycle: status transitions,
//! application responses, and derived statistics. No I/O lives here.

pub mod statistics;
pub mod transitions;
pub mod workflow;

pub use statistics::{approved_count, recompute};
pub use transitions::{
    allowed_transitions, can_transition, destructive_warning, EventSnapshot, TransitionCheck,
};
pub use workflow::{respond, ResponseDecision};
