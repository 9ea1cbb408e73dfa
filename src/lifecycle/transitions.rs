//! Event status transition rules
//!
//! Pure transition table for the event lifecycle. No side effects; the
//! controller decides what to do with the verdict and surfaces warnings
//! for destructive transitions before calling the gateway.

use chrono::{DateTime, Utc};

use crate::models::{Event, EventStatus};

/// Facts about an event needed to evaluate a transition
#[derive(Debug, Clone)]
pub struct EventSnapshot {
    pub name: String,
    pub approved_photographers_count: i32,
    pub has_bookings: bool,
    pub event_started: bool,
    pub event_ended: bool,
}

impl EventSnapshot {
    /// Derive a snapshot from an event as of `now`
    pub fn from_event(event: &Event, now: DateTime<Utc>) -> Self {
        Self {
            name: event.name.clone(),
            approved_photographers_count: event.approved_photographers_count,
            has_bookings: event.total_bookings_count > 0,
            event_started: event.has_started(now),
            event_ended: event.has_ended(now),
        }
    }

    fn has_approved_photographers(&self) -> bool {
        self.approved_photographers_count > 0
    }
}

/// Verdict of a transition check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionCheck {
    pub allowed: bool,
    pub reason: Option<String>,
}

impl TransitionCheck {
    fn ok() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    fn denied(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }
}

/// Check whether `current -> target` is a legal transition for the event
/// described by `snapshot`. Same-status pairs skip the table but still pass
/// through the semantic gates, so an event that no longer satisfies the
/// entry conditions for its own status cannot be re-confirmed into it.
pub fn can_transition(
    current: EventStatus,
    target: EventStatus,
    snapshot: &EventSnapshot,
) -> TransitionCheck {
    if current != target {
        // Table membership plus per-edge preconditions.
        let in_table = match (current, target) {
            (EventStatus::Draft, EventStatus::Open) => true,
            (EventStatus::Open, EventStatus::Draft) => true,
            (EventStatus::Open, EventStatus::Active) => true,
            (EventStatus::Open, EventStatus::Cancelled) => true,
            (EventStatus::Active, EventStatus::Closed) => {
                if !snapshot.event_ended {
                    return TransitionCheck::denied("event has not ended yet");
                }
                true
            }
            (EventStatus::Active, EventStatus::Cancelled) => true,
            (EventStatus::Closed, EventStatus::Active) => true,
            (EventStatus::Cancelled, EventStatus::Draft) => true,
            (EventStatus::Cancelled, EventStatus::Open) => true,
            _ => false,
        };

        if !in_table {
            return TransitionCheck::denied(format!(
                "illegal direct transition: {} -> {}",
                current, target
            ));
        }
    }

    // Semantic gates layered on top of table membership.
    if target == EventStatus::Open && snapshot.name.trim().len() < 3 {
        return TransitionCheck::denied("need a valid event name to open the event");
    }

    if target == EventStatus::Active && !snapshot.has_approved_photographers() {
        return TransitionCheck::denied(
            "need at least one approved photographer to activate the event",
        );
    }

    TransitionCheck::ok()
}

/// Statuses the event may legally move to from `current`. The same-status
/// no-op is not listed.
pub fn allowed_transitions(current: EventStatus, snapshot: &EventSnapshot) -> Vec<EventStatus> {
    EventStatus::ALL
        .into_iter()
        .filter(|&target| target != current && can_transition(current, target, snapshot).allowed)
        .collect()
}

/// Warning the caller should surface before committing a destructive
/// transition, if any.
pub fn destructive_warning(target: EventStatus) -> Option<&'static str> {
    match target {
        EventStatus::Cancelled => Some(
            "Cancelling voids all applications and bookings for this event; \
             refunds may be required",
        ),
        _ => None,
    }
}
