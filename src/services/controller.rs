//! Event lifecycle controller
//!
//! Single point of mutation for event-related local state. Every operation
//! validates against the locally known snapshot first (no network round-trip
//! for an illegal request), then delegates to the gateway, and only mutates
//! the projections on success. Failures store a message in the error slot
//! and leave all prior state untouched.

use chrono::Utc;
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::lifecycle::{
    approved_count, can_transition, destructive_warning, recompute, respond, EventSnapshot,
    ResponseDecision,
};
use crate::models::{
    Application, CreateEventRequest, Event, EventStatistics, EventStatus,
    RespondApplicationRequest, UpdateEventRequest,
};
use crate::services::gateway::{ApprovedPhotographer, EventGateway};
use crate::state::EventProjections;
use crate::utils::errors::{Result, VenueLensError};
use crate::utils::logging;

/// Controller owning one gateway and one set of projections.
///
/// One instance per screen/session; consumers read projections through
/// [`EventController::projections`] and never mutate them directly.
pub struct EventController {
    gateway: EventGateway,
    projections: EventProjections,
}

impl EventController {
    /// Create a new EventController around a gateway
    pub fn new(gateway: EventGateway) -> Self {
        Self {
            gateway,
            projections: EventProjections::new(),
        }
    }

    /// Read-only access to the local projections
    pub fn projections(&self) -> &EventProjections {
        &self.projections
    }

    /// Warning to surface before a destructive status change, if any
    pub fn destructive_warning(&self, target: EventStatus) -> Option<&'static str> {
        destructive_warning(target)
    }

    /// Create an event and append it to the list and location dashboard
    pub async fn create_event(&mut self, request: CreateEventRequest) -> Result<Event> {
        self.projections.clear_error();

        if self.projections.creating_event() {
            let err = VenueLensError::OperationInFlight("create_event".to_string());
            self.projections.set_error(err.to_string());
            return Err(err);
        }
        if let Err(err) = request.validate() {
            self.projections.set_error(err.to_string());
            return Err(err);
        }

        self.projections.set_creating_event(true);
        let result = self.gateway.create_event(&request).await;
        self.projections.set_creating_event(false);

        match result {
            Ok(event) => {
                info!(event_id = event.event_id, location_id = event.location_id, name = %event.name, "Event created");
                self.projections.insert_event(event.clone());
                Ok(event)
            }
            Err(err) => {
                self.projections.set_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Update an event and broadcast the new copy to every projection
    pub async fn update_event(
        &mut self,
        event_id: i64,
        patch: UpdateEventRequest,
    ) -> Result<Event> {
        self.projections.clear_error();

        if self.projections.updating_event() {
            let err = VenueLensError::OperationInFlight("update_event".to_string());
            self.projections.set_error(err.to_string());
            return Err(err);
        }

        self.projections.set_updating_event(true);
        let token = self.projections.issue_token(event_id);
        let result = self.gateway.update_event(event_id, &patch).await;
        self.projections.set_updating_event(false);

        match result {
            Ok(event) => {
                if !self.projections.is_current(&token) {
                    warn!(event_id = event_id, "Discarding superseded update response");
                    return Err(VenueLensError::SupersededRequest { event_id });
                }
                info!(event_id = event_id, "Event updated");
                self.projections.replace_event(&event);
                Ok(event)
            }
            Err(err) => {
                self.projections.set_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Change event status after validating the transition locally.
    ///
    /// A same-status change is a no-op success and never reaches the
    /// gateway. On success only the status field is mutated across the
    /// projections, avoiding a full refetch.
    pub async fn change_status(&mut self, event_id: i64, target: EventStatus) -> Result<()> {
        self.projections.clear_error();

        let (current, snapshot) = match self.projections.find_event(event_id) {
            Some(event) => (event.status, EventSnapshot::from_event(event, Utc::now())),
            None => {
                let err = VenueLensError::EventNotFound { event_id };
                self.projections.set_error(err.to_string());
                return Err(err);
            }
        };

        if current == target {
            debug!(event_id = event_id, status = %target, "Status unchanged, skipping gateway call");
            return Ok(());
        }

        let check = can_transition(current, target, &snapshot);
        if !check.allowed {
            let reason = check
                .reason
                .unwrap_or_else(|| "illegal direct transition".to_string());
            let err = VenueLensError::InvalidStateTransition {
                from: current.to_string(),
                to: target.to_string(),
                reason,
            };
            self.projections.set_error(err.to_string());
            return Err(err);
        }

        if let Some(warning) = destructive_warning(target) {
            logging::log_destructive_operation(event_id, "change_status", warning);
        }

        let token = self.projections.issue_token(event_id);
        match self.gateway.change_status(event_id, target).await {
            Ok(()) => {
                if !self.projections.is_current(&token) {
                    warn!(event_id = event_id, "Discarding superseded status response");
                    return Err(VenueLensError::SupersededRequest { event_id });
                }
                logging::log_status_change(event_id, current, target);
                self.projections.set_event_status(event_id, target);
                Ok(())
            }
            Err(err) => {
                self.projections.set_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Delete an event and remove it from the list and dashboard. The
    /// selected event, if it matched, is the caller's to clear.
    pub async fn delete_event(&mut self, event_id: i64) -> Result<()> {
        self.projections.clear_error();

        match self.gateway.delete_event(event_id).await {
            Ok(()) => {
                info!(event_id = event_id, "Event deleted");
                self.projections.remove_event(event_id);
                Ok(())
            }
            Err(err) => {
                self.projections.set_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Respond to a photographer application.
    ///
    /// Runs the workflow rules locally before any network call; on success
    /// the matching entry is replaced in place (list position preserved) and
    /// the approved-photographer counter plus statistics are recomputed.
    pub async fn respond_to_application(
        &mut self,
        event_id: i64,
        photographer_id: i64,
        decision: ResponseDecision,
        rejection_reason: Option<&str>,
    ) -> Result<Application> {
        self.projections.clear_error();

        if self.projections.responding() {
            let err = VenueLensError::OperationInFlight("respond_to_application".to_string());
            self.projections.set_error(err.to_string());
            return Err(err);
        }

        let response = match self.projections.find_application(event_id, photographer_id) {
            Some(application) => respond(application, decision, rejection_reason, Utc::now()),
            None => Err(VenueLensError::ApplicationNotFound {
                event_id,
                photographer_id,
            }),
        };
        let updated = match response {
            Ok(updated) => updated,
            Err(err) => {
                self.projections.set_error(err.to_string());
                return Err(err);
            }
        };

        let request = RespondApplicationRequest {
            event_id,
            photographer_id,
            status: updated.status,
            rejection_reason: updated.rejection_reason.clone(),
        };

        self.projections.set_responding(true);
        let result = self.gateway.respond_application(&request).await;
        self.projections.set_responding(false);

        match result {
            Ok(()) => {
                logging::log_application_response(
                    event_id,
                    photographer_id,
                    decision == ResponseDecision::Approved,
                );
                self.projections.replace_application(&updated);
                self.recompute_locally(event_id);
                Ok(updated)
            }
            Err(err) => {
                self.projections.set_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Re-fetch the event list for one location and replace the projection
    /// wholesale. A 404 is "no events yet" and leaves the error slot empty.
    pub async fn refresh_events(&mut self, location_id: i64) -> Result<()> {
        self.projections.clear_error();

        match self.gateway.list_events(location_id).await {
            Ok(events) => {
                debug!(
                    location_id = location_id,
                    count = events.len(),
                    "Location events refreshed"
                );
                self.projections.replace_location_events(location_id, events);
                Ok(())
            }
            Err(err) => {
                self.projections.set_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Refresh several locations concurrently; the first failure is
    /// reported after every fetch has settled.
    pub async fn refresh_locations(&mut self, location_ids: &[i64]) -> Result<()> {
        self.projections.clear_error();

        let gateway = self.gateway.clone();
        let fetches = location_ids
            .iter()
            .map(|&location_id| {
                let gateway = gateway.clone();
                async move { (location_id, gateway.list_events(location_id).await) }
            })
            .collect::<Vec<_>>();

        let mut first_error = None;
        for (location_id, result) in join_all(fetches).await {
            match result {
                Ok(events) => {
                    self.projections.replace_location_events(location_id, events);
                }
                Err(err) => {
                    warn!(location_id = location_id, error = %err, "Location refresh failed");
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }

        match first_error {
            Some(err) => {
                self.projections.set_error(err.to_string());
                Err(err)
            }
            None => Ok(()),
        }
    }

    /// Select an event: fetch its detail, applications, bookings and
    /// statistics into the projections. Gateway statistics win over the
    /// local recompute when present.
    pub async fn select_event(&mut self, event_id: i64) -> Result<()> {
        self.projections.clear_error();

        let detail = match self.gateway.event_detail(event_id).await {
            Ok(Some(event)) => event,
            Ok(None) => {
                let err = VenueLensError::EventNotFound { event_id };
                self.projections.set_error(err.to_string());
                return Err(err);
            }
            Err(err) => {
                self.projections.set_error(err.to_string());
                return Err(err);
            }
        };

        let (applications, bookings, statistics) = match futures::try_join!(
            self.gateway.list_applications(event_id),
            self.gateway.list_bookings(event_id),
            self.gateway.statistics(event_id),
        ) {
            Ok(results) => results,
            Err(err) => {
                self.projections.set_error(err.to_string());
                return Err(err);
            }
        };

        let statistics =
            statistics.unwrap_or_else(|| recompute(&applications, &bookings));

        debug!(
            event_id = event_id,
            applications = applications.len(),
            bookings = bookings.len(),
            "Event selected"
        );
        self.projections.set_selected_event(Some(detail));
        self.projections.set_applications(applications);
        self.projections.set_bookings(bookings);
        self.projections.set_statistics(Some(statistics));
        Ok(())
    }

    /// Clear the selected event and its child projections
    pub fn clear_selection(&mut self) {
        self.projections.set_selected_event(None);
        self.projections.set_applications(Vec::new());
        self.projections.set_bookings(Vec::new());
        self.projections.set_statistics(None);
    }

    /// Refresh statistics for an event; the gateway value is authoritative,
    /// the local recompute is the fallback when the server has none.
    pub async fn refresh_statistics(&mut self, event_id: i64) -> Result<EventStatistics> {
        self.projections.clear_error();

        match self.gateway.statistics(event_id).await {
            Ok(Some(statistics)) => {
                self.projections.set_statistics(Some(statistics.clone()));
                Ok(statistics)
            }
            Ok(None) => {
                let statistics =
                    recompute(self.projections.applications(), self.projections.bookings());
                self.projections.set_statistics(Some(statistics.clone()));
                Ok(statistics)
            }
            Err(err) => {
                self.projections.set_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Fetch photographers approved for an event
    pub async fn approved_photographers(
        &mut self,
        event_id: i64,
    ) -> Result<Vec<ApprovedPhotographer>> {
        self.projections.clear_error();

        match self.gateway.approved_photographers(event_id).await {
            Ok(photographers) => Ok(photographers),
            Err(err) => {
                self.projections.set_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Recompute local aggregates after an application/booking mutation
    fn recompute_locally(&mut self, event_id: i64) {
        let statistics = recompute(self.projections.applications(), self.projections.bookings());
        let approved = approved_count(self.projections.applications());
        self.projections.set_statistics(Some(statistics));
        self.projections.set_approved_count(event_id, approved);
    }
}
