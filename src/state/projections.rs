//! In-memory event projections
//!
//! Explicit state container for everything the controller mirrors from the
//! remote API: the event list, the selected event, its applications,
//! bookings and statistics, plus the per-location dashboard. Owned by one
//! controller instance; mutated only through these methods and read through
//! `&` accessors.

use std::collections::HashMap;

use crate::models::{Application, Booking, Event, EventStatistics, EventStatus};

/// Per-location dashboard projection
#[derive(Debug, Clone, Default)]
pub struct LocationDashboard {
    pub events: Vec<Event>,
    pub event_count: i64,
}

/// Token identifying the latest issued request for one event. A response
/// carrying a stale token must not be applied to local state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    pub event_id: i64,
    generation: u64,
}

/// All controller-held local state
#[derive(Debug, Default)]
pub struct EventProjections {
    events: Vec<Event>,
    selected_event: Option<Event>,
    applications: Vec<Application>,
    bookings: Vec<Booking>,
    statistics: Option<EventStatistics>,
    dashboard: HashMap<i64, LocationDashboard>,
    last_error: Option<String>,
    creating_event: bool,
    updating_event: bool,
    responding: bool,
    tokens: HashMap<i64, u64>,
}

impl EventProjections {
    pub fn new() -> Self {
        Self::default()
    }

    // Read-only access for consumers.

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.selected_event.as_ref()
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn statistics(&self) -> Option<&EventStatistics> {
        self.statistics.as_ref()
    }

    pub fn dashboard(&self, location_id: i64) -> Option<&LocationDashboard> {
        self.dashboard.get(&location_id)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn find_event(&self, event_id: i64) -> Option<&Event> {
        self.events
            .iter()
            .find(|e| e.event_id == event_id)
            .or_else(|| {
                self.selected_event
                    .as_ref()
                    .filter(|e| e.event_id == event_id)
            })
    }

    pub fn find_application(&self, event_id: i64, photographer_id: i64) -> Option<&Application> {
        self.applications
            .iter()
            .find(|a| a.matches(event_id, photographer_id))
    }

    // Error slot: last error wins, cleared at the start of each operation.

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    // In-flight guards against re-entrant invocation of the same operation.

    pub fn creating_event(&self) -> bool {
        self.creating_event
    }

    pub fn set_creating_event(&mut self, in_flight: bool) {
        self.creating_event = in_flight;
    }

    pub fn updating_event(&self) -> bool {
        self.updating_event
    }

    pub fn set_updating_event(&mut self, in_flight: bool) {
        self.updating_event = in_flight;
    }

    pub fn responding(&self) -> bool {
        self.responding
    }

    pub fn set_responding(&mut self, in_flight: bool) {
        self.responding = in_flight;
    }

    // Request tokens: only the latest issued token per event is current.

    pub fn issue_token(&mut self, event_id: i64) -> RequestToken {
        let generation = self.tokens.entry(event_id).or_insert(0);
        *generation += 1;
        RequestToken {
            event_id,
            generation: *generation,
        }
    }

    pub fn is_current(&self, token: &RequestToken) -> bool {
        self.tokens.get(&token.event_id) == Some(&token.generation)
    }

    // Mutations.

    /// Append a freshly created event to the list and its location dashboard
    pub fn insert_event(&mut self, event: Event) {
        if let Some(dashboard) = self.dashboard.get_mut(&event.location_id) {
            dashboard.events.push(event.clone());
            dashboard.event_count += 1;
        }
        self.events.push(event);
    }

    /// Replace the event by id in every collection holding a copy
    pub fn replace_event(&mut self, event: &Event) {
        for existing in self.events.iter_mut() {
            if existing.event_id == event.event_id {
                *existing = event.clone();
            }
        }
        if let Some(selected) = self.selected_event.as_mut() {
            if selected.event_id == event.event_id {
                *selected = event.clone();
            }
        }
        if let Some(dashboard) = self.dashboard.get_mut(&event.location_id) {
            for existing in dashboard.events.iter_mut() {
                if existing.event_id == event.event_id {
                    *existing = event.clone();
                }
            }
        }
    }

    /// Mutate only the status field of every copy of the event
    pub fn set_event_status(&mut self, event_id: i64, status: EventStatus) {
        for event in self.events.iter_mut() {
            if event.event_id == event_id {
                event.status = status;
            }
        }
        if let Some(selected) = self.selected_event.as_mut() {
            if selected.event_id == event_id {
                selected.status = status;
            }
        }
        for dashboard in self.dashboard.values_mut() {
            for event in dashboard.events.iter_mut() {
                if event.event_id == event_id {
                    event.status = status;
                }
            }
        }
    }

    /// Mutate only the approved-photographer counter of every copy
    pub fn set_approved_count(&mut self, event_id: i64, count: i32) {
        for event in self.events.iter_mut() {
            if event.event_id == event_id {
                event.approved_photographers_count = count;
            }
        }
        if let Some(selected) = self.selected_event.as_mut() {
            if selected.event_id == event_id {
                selected.approved_photographers_count = count;
            }
        }
        for dashboard in self.dashboard.values_mut() {
            for event in dashboard.events.iter_mut() {
                if event.event_id == event_id {
                    event.approved_photographers_count = count;
                }
            }
        }
    }

    /// Remove the event from the list and dashboard, decrementing the
    /// counter. The selected event and child projections are the caller's
    /// to clear.
    pub fn remove_event(&mut self, event_id: i64) {
        self.events.retain(|e| e.event_id != event_id);
        for dashboard in self.dashboard.values_mut() {
            let before = dashboard.events.len();
            dashboard.events.retain(|e| e.event_id != event_id);
            dashboard.event_count -= (before - dashboard.events.len()) as i64;
        }
        self.tokens.remove(&event_id);
    }

    /// Replace the event list for one location wholesale
    pub fn replace_location_events(&mut self, location_id: i64, events: Vec<Event>) {
        self.events.retain(|e| e.location_id != location_id);
        self.events.extend(events.iter().cloned());

        let dashboard = self.dashboard.entry(location_id).or_default();
        dashboard.event_count = events.len() as i64;
        dashboard.events = events;
    }

    pub fn set_selected_event(&mut self, event: Option<Event>) {
        self.selected_event = event;
    }

    pub fn set_applications(&mut self, applications: Vec<Application>) {
        self.applications = applications;
    }

    pub fn set_bookings(&mut self, bookings: Vec<Booking>) {
        self.bookings = bookings;
    }

    pub fn set_statistics(&mut self, statistics: Option<EventStatistics>) {
        self.statistics = statistics;
    }

    /// Replace the matching application in place, preserving list position
    /// for UI stability. Returns false when no entry matches.
    pub fn replace_application(&mut self, updated: &Application) -> bool {
        for application in self.applications.iter_mut() {
            if application.matches(updated.event_id, updated.photographer_id) {
                *application = updated.clone();
                return true;
            }
        }
        false
    }
}
