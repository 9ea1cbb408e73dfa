//! HTTP-boundary tests for the event gateway against a mock API

mod helpers;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{application_json, booking_json, event_json, gateway_for, gateway_with_token};
use VenueLens::models::{ApplicationStatus, EventStatus, RespondApplicationRequest};
use VenueLens::VenueLensError;

#[tokio::test]
async fn list_events_treats_404_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/LocationEvent/location/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let events = gateway.list_events(42).await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn list_events_unwraps_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/LocationEvent/location/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [event_json(1, 42, "Golden Hour Sessions", "Open", 0)]
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let events = gateway.list_events(42).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_id, 1);
    assert_eq!(events[0].status, EventStatus::Open);
}

#[tokio::test]
async fn list_events_accepts_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/LocationEvent/location/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            event_json(1, 42, "Golden Hour Sessions", "Draft", 0),
            event_json(2, 42, "Studio Nights", "Open", 2),
        ])))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let events = gateway.list_events(42).await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].approved_photographers_count, 2);
}

#[tokio::test]
async fn requests_carry_bearer_token_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/LocationEvent/location/42"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_with_token(&server, "secret-token");
    gateway.list_events(42).await.unwrap();
}

#[tokio::test]
async fn event_detail_404_becomes_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/LocationEvent/99/detail"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    assert!(gateway.event_detail(99).await.unwrap().is_none());
}

#[tokio::test]
async fn statistics_404_becomes_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/LocationEvent/1/statistics"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    assert!(gateway.statistics(1).await.unwrap().is_none());
}

#[tokio::test]
async fn server_error_surfaces_body_as_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/LocationEvent/1/detail"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database exploded"))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let err = gateway.event_detail(1).await.unwrap_err();
    assert_matches!(err, VenueLensError::Api { status: 500, ref message } if message.contains("database exploded"));
}

#[tokio::test]
async fn change_status_sends_raw_status_string() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/LocationEvent/1/status"))
        .and(body_json(json!("Open")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    gateway.change_status(1, EventStatus::Open).await.unwrap();
}

#[tokio::test]
async fn respond_application_posts_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/LocationEvent/respond-application"))
        .and(body_json(json!({
            "eventId": 1,
            "photographerId": 7,
            "status": "Rejected",
            "rejectionReason": "portfolio mismatch"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    gateway
        .respond_application(&RespondApplicationRequest {
            event_id: 1,
            photographer_id: 7,
            status: ApplicationStatus::Rejected,
            rejection_reason: Some("portfolio mismatch".to_string()),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn applications_are_normalized_from_nested_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/LocationEvent/1/applications"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [application_json(1, 7, "Applied")] })),
        )
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let applications = gateway.list_applications(1).await.unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(
        applications[0].photographer_name.as_deref(),
        Some("Photographer 7")
    );
    assert_eq!(applications[0].status, ApplicationStatus::Applied);
}

#[tokio::test]
async fn bookings_are_normalized_into_party_objects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/LocationEvent/1/bookings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([booking_json(9, 1, 250000.0)])),
        )
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let bookings = gateway.list_bookings(1).await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].customer.full_name.as_deref(), Some("Linh Tran"));
    assert_eq!(bookings[0].total_amount, 250000.0);
}

#[tokio::test]
async fn delete_event_accepts_empty_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/LocationEvent/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    gateway.delete_event(1).await.unwrap();
}
