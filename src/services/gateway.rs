//! Remote event gateway
//!
//! reqwest client for the marketplace LocationEvent API. This is the only
//! place that sees raw server shapes: responses are unwrapped from the
//! optional `{data: ...}` envelope and normalized into canonical models
//! before they reach the lifecycle rules. A 404 on any list endpoint means
//! "no items yet", never an error.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::models::{
    Application, ApplicationStatus, Booking, BookingStatus, CreateEventRequest, Event,
    EventStatistics, EventStatus, PartySummary, RespondApplicationRequest, UpdateEventRequest,
};
use crate::utils::errors::{Result, VenueLensError};

const BASE_PATH: &str = "/api/LocationEvent";

/// Responses may arrive bare or wrapped in a `{data: ...}` envelope
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

/// Nested party object as some server responses shape it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParty {
    id: Option<i64>,
    full_name: Option<String>,
    avatar_url: Option<String>,
}

impl From<RawParty> for PartySummary {
    fn from(raw: RawParty) -> Self {
        PartySummary {
            id: raw.id,
            full_name: raw.full_name,
            avatar_url: raw.avatar_url,
        }
    }
}

/// Application as the server returns it: photographer identity may arrive
/// nested or as flat fallback fields depending on the endpoint version
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawApplication {
    event_id: i64,
    photographer_id: i64,
    photographer: Option<RawParty>,
    photographer_name: Option<String>,
    avatar_url: Option<String>,
    special_rate: Option<f64>,
    status: ApplicationStatus,
    applied_at: chrono::DateTime<chrono::Utc>,
    responded_at: Option<chrono::DateTime<chrono::Utc>>,
    rejection_reason: Option<String>,
}

impl RawApplication {
    fn normalize(self) -> Application {
        let (nested_name, nested_avatar) = match self.photographer {
            Some(party) => (party.full_name, party.avatar_url),
            None => (None, None),
        };
        Application {
            event_id: self.event_id,
            photographer_id: self.photographer_id,
            photographer_name: nested_name.or(self.photographer_name),
            avatar_url: nested_avatar.or(self.avatar_url),
            special_rate: self.special_rate,
            status: self.status,
            applied_at: self.applied_at,
            responded_at: self.responded_at,
            rejection_reason: self.rejection_reason,
        }
    }
}

/// Booking as the server returns it, with nested-or-flat party shapes
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBooking {
    event_booking_id: i64,
    event_id: i64,
    event_photographer_id: i64,
    user_id: i64,
    start_datetime: chrono::DateTime<chrono::Utc>,
    end_datetime: chrono::DateTime<chrono::Utc>,
    status: BookingStatus,
    total_amount: f64,
    customer: Option<RawParty>,
    user_full_name: Option<String>,
    photographer: Option<RawParty>,
    photographer_name: Option<String>,
}

impl RawBooking {
    fn normalize(self) -> Booking {
        let customer = match self.customer {
            Some(party) => party.into(),
            None => PartySummary {
                id: Some(self.user_id),
                full_name: self.user_full_name,
                avatar_url: None,
            },
        };
        let photographer = match self.photographer {
            Some(party) => party.into(),
            None => PartySummary {
                id: Some(self.event_photographer_id),
                full_name: self.photographer_name,
                avatar_url: None,
            },
        };
        Booking {
            event_booking_id: self.event_booking_id,
            event_id: self.event_id,
            event_photographer_id: self.event_photographer_id,
            user_id: self.user_id,
            start_datetime: self.start_datetime,
            end_datetime: self.end_datetime,
            status: self.status,
            total_amount: self.total_amount,
            customer,
            photographer,
        }
    }
}

/// A photographer approved for an event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedPhotographer {
    pub photographer_id: i64,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub special_rate: Option<f64>,
}

/// HTTP client for the LocationEvent API
#[derive(Debug, Clone)]
pub struct EventGateway {
    client: Client,
    base_url: Url,
    bearer_token: Option<String>,
}

impl EventGateway {
    /// Create a new EventGateway from API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("VenueLens/1.0")
            .build()
            .map_err(VenueLensError::Http)?;

        let base_url = Url::parse(&config.base_url)?;

        Ok(Self {
            client,
            base_url,
            bearer_token: config.bearer_token.clone(),
        })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(&format!("{}{}", BASE_PATH, path))?;
        let mut builder = self.client.request(method, url);
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    /// Send a GET and parse the enveloped JSON body; 404 becomes `None`
    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let response = self.request(Method::GET, path)?.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(path = path, "GET returned 404, treating as empty");
            return Ok(None);
        }
        let value = Self::parse_body(Self::check_success(response).await?).await?;
        Ok(Some(value))
    }

    /// Map a non-2xx response into an API error with a best-effort message
    async fn check_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .ok()
            .filter(|body| !body.trim().is_empty())
            .unwrap_or_else(|| status.to_string());
        warn!(status = status.as_u16(), message = %message, "LocationEvent API request failed");
        Err(VenueLensError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.into_inner())
    }

    /// List events for a venue; 404 means the venue has no events yet
    pub async fn list_events(&self, location_id: i64) -> Result<Vec<Event>> {
        debug!(location_id = location_id, "Fetching events for location");
        let events = self
            .get_optional(&format!("/location/{}", location_id))
            .await?
            .unwrap_or_default();
        Ok(events)
    }

    /// Fetch one event with its nested detail; 404 means it no longer exists
    pub async fn event_detail(&self, event_id: i64) -> Result<Option<Event>> {
        debug!(event_id = event_id, "Fetching event detail");
        self.get_optional(&format!("/{}/detail", event_id)).await
    }

    /// Create an event
    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<Event> {
        debug!(location_id = request.location_id, name = %request.name, "Creating event");
        let response = self.request(Method::POST, "/")?.json(request).send().await?;
        Self::parse_body(Self::check_success(response).await?).await
    }

    /// Apply a partial update to an event
    pub async fn update_event(&self, event_id: i64, patch: &UpdateEventRequest) -> Result<Event> {
        debug!(event_id = event_id, "Updating event");
        let response = self
            .request(Method::PUT, &format!("/{}", event_id))?
            .json(patch)
            .send()
            .await?;
        Self::parse_body(Self::check_success(response).await?).await
    }

    /// Change event status. The server expects the raw status string as a
    /// JSON string body and returns no required payload.
    pub async fn change_status(&self, event_id: i64, status: EventStatus) -> Result<()> {
        debug!(event_id = event_id, status = %status, "Changing event status");
        let response = self
            .request(Method::PATCH, &format!("/{}/status", event_id))?
            .json(&status)
            .send()
            .await?;
        Self::check_success(response).await?;
        Ok(())
    }

    /// Delete an event
    pub async fn delete_event(&self, event_id: i64) -> Result<()> {
        debug!(event_id = event_id, "Deleting event");
        let response = self
            .request(Method::DELETE, &format!("/{}", event_id))?
            .send()
            .await?;
        Self::check_success(response).await?;
        Ok(())
    }

    /// List applications for an event, normalized into canonical shape
    pub async fn list_applications(&self, event_id: i64) -> Result<Vec<Application>> {
        debug!(event_id = event_id, "Fetching applications");
        let raw: Vec<RawApplication> = self
            .get_optional(&format!("/{}/applications", event_id))
            .await?
            .unwrap_or_default();
        Ok(raw.into_iter().map(RawApplication::normalize).collect())
    }

    /// Record an owner response to an application
    pub async fn respond_application(&self, request: &RespondApplicationRequest) -> Result<()> {
        debug!(
            event_id = request.event_id,
            photographer_id = request.photographer_id,
            status = %request.status,
            "Responding to application"
        );
        let response = self
            .request(Method::POST, "/respond-application")?
            .json(request)
            .send()
            .await?;
        Self::check_success(response).await?;
        Ok(())
    }

    /// List bookings for an event, normalized into customer/photographer
    /// sub-objects
    pub async fn list_bookings(&self, event_id: i64) -> Result<Vec<Booking>> {
        debug!(event_id = event_id, "Fetching bookings");
        let raw: Vec<RawBooking> = self
            .get_optional(&format!("/{}/bookings", event_id))
            .await?
            .unwrap_or_default();
        Ok(raw.into_iter().map(RawBooking::normalize).collect())
    }

    /// Fetch server-side statistics; 404 means none are available
    pub async fn statistics(&self, event_id: i64) -> Result<Option<EventStatistics>> {
        debug!(event_id = event_id, "Fetching event statistics");
        self.get_optional(&format!("/{}/statistics", event_id)).await
    }

    /// List photographers approved for an event
    pub async fn approved_photographers(&self, event_id: i64) -> Result<Vec<ApprovedPhotographer>> {
        debug!(event_id = event_id, "Fetching approved photographers");
        let photographers = self
            .get_optional(&format!("/{}/approved-photographers", event_id))
            .await?
            .unwrap_or_default();
        Ok(photographers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_unwraps_wrapped_payload() {
        let json = r#"{"data": [1, 2, 3]}"#;
        let envelope: Envelope<Vec<i32>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_inner(), vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_passes_bare_payload_through() {
        let json = r#"[1, 2, 3]"#;
        let envelope: Envelope<Vec<i32>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_inner(), vec![1, 2, 3]);
    }

    #[test]
    fn test_application_normalization_prefers_nested_party() {
        let json = r#"{
            "eventId": 1,
            "photographerId": 7,
            "photographer": {"id": 7, "fullName": "Minh Pham", "avatarUrl": "https://cdn.example/7.jpg"},
            "photographerName": "stale flat name",
            "status": "Applied",
            "appliedAt": "2026-08-01T09:00:00Z"
        }"#;
        let raw: RawApplication = serde_json::from_str(json).unwrap();
        let application = raw.normalize();
        assert_eq!(application.photographer_name.as_deref(), Some("Minh Pham"));
        assert_eq!(
            application.avatar_url.as_deref(),
            Some("https://cdn.example/7.jpg")
        );
    }

    #[test]
    fn test_application_normalization_falls_back_to_flat_fields() {
        let json = r#"{
            "eventId": 1,
            "photographerId": 7,
            "photographerName": "Minh Pham",
            "status": "Applied",
            "appliedAt": "2026-08-01T09:00:00Z"
        }"#;
        let raw: RawApplication = serde_json::from_str(json).unwrap();
        let application = raw.normalize();
        assert_eq!(application.photographer_name.as_deref(), Some("Minh Pham"));
        assert!(application.avatar_url.is_none());
    }

    #[test]
    fn test_booking_normalization_builds_parties_from_flat_fields() {
        let json = r#"{
            "eventBookingId": 9,
            "eventId": 1,
            "eventPhotographerId": 7,
            "userId": 3,
            "startDatetime": "2026-08-01T10:00:00Z",
            "endDatetime": "2026-08-01T12:00:00Z",
            "status": "Confirmed",
            "totalAmount": 250000.0,
            "userFullName": "Linh Tran",
            "photographerName": "Minh Pham"
        }"#;
        let raw: RawBooking = serde_json::from_str(json).unwrap();
        let booking = raw.normalize();
        assert_eq!(booking.customer.id, Some(3));
        assert_eq!(booking.customer.full_name.as_deref(), Some("Linh Tran"));
        assert_eq!(booking.photographer.id, Some(7));
        assert_eq!(booking.photographer.full_name.as_deref(), Some("Minh Pham"));
    }
}
