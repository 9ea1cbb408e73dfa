//! Test data helpers for the integration suites
//!
//! Builders for LocationEvent API JSON payloads and a gateway wired to a
//! wiremock server.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::MockServer;

use VenueLens::config::ApiConfig;
use VenueLens::services::EventGateway;

/// Gateway pointed at the mock server, no bearer token
pub fn gateway_for(server: &MockServer) -> EventGateway {
    EventGateway::new(&ApiConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
        bearer_token: None,
    })
    .expect("gateway construction")
}

/// Gateway pointed at the mock server with a bearer token configured
pub fn gateway_with_token(server: &MockServer, token: &str) -> EventGateway {
    EventGateway::new(&ApiConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
        bearer_token: Some(token.to_string()),
    })
    .expect("gateway construction")
}

/// Event payload as the server returns it
pub fn event_json(
    event_id: i64,
    location_id: i64,
    name: &str,
    status: &str,
    approved_photographers: i32,
) -> Value {
    json!({
        "eventId": event_id,
        "locationId": location_id,
        "name": name,
        "description": null,
        "startDate": "2026-09-01T08:00:00Z",
        "endDate": "2026-09-03T18:00:00Z",
        "originalPrice": 150000.0,
        "discountedPrice": 120000.0,
        "maxPhotographers": 5,
        "maxBookingsPerSlot": 3,
        "status": status,
        "approvedPhotographersCount": approved_photographers,
        "totalBookingsCount": 0,
        "totalApplicationsCount": 0
    })
}

/// Application payload with a nested photographer object
pub fn application_json(event_id: i64, photographer_id: i64, status: &str) -> Value {
    json!({
        "eventId": event_id,
        "photographerId": photographer_id,
        "photographer": {
            "id": photographer_id,
            "fullName": format!("Photographer {}", photographer_id),
            "avatarUrl": null
        },
        "specialRate": 120000.0,
        "status": status,
        "appliedAt": "2026-08-20T10:00:00Z",
        "respondedAt": null,
        "rejectionReason": null
    })
}

/// Booking payload with a nested customer object
pub fn booking_json(event_booking_id: i64, event_id: i64, total_amount: f64) -> Value {
    json!({
        "eventBookingId": event_booking_id,
        "eventId": event_id,
        "eventPhotographerId": 7,
        "userId": 3,
        "startDatetime": "2026-09-01T10:00:00Z",
        "endDatetime": "2026-09-01T12:00:00Z",
        "status": "Confirmed",
        "totalAmount": total_amount,
        "customer": {
            "id": 3,
            "fullName": "Linh Tran",
            "avatarUrl": null
        }
    })
}
