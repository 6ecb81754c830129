//! HTTP API integration tests.
//!
//! Exercises the full booking lifecycle over the real router: purchase,
//! fetch, list, update, cancel, and the error envelopes for validation
//! failures and missing bookings.

#![allow(clippy::unwrap_used)] // Integration tests can unwrap for setup
#![allow(clippy::expect_used)]

use axum_test::TestServer;
use booking_api::{
    build_router, AppState, BookingPolicy, InMemoryBookingStore, MockPaymentGateway,
    MockSeatReservationService, TicketService,
};
use axum::http::StatusCode;
use serde_json::{json, Value};

fn server() -> TestServer {
    let state = AppState::new(
        InMemoryBookingStore::shared(),
        MockPaymentGateway::shared(),
        MockSeatReservationService::shared(),
        TicketService::new(BookingPolicy::default()),
    );
    TestServer::new(build_router(state)).unwrap()
}

async fn purchase(server: &TestServer, account: i64, tickets: Value) -> Value {
    let response = server
        .post("/tickets")
        .json(&json!({ "accountid": account, "ticketRequests": tickets }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let server = server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn purchase_records_booking_with_derived_totals() {
    let server = server();

    let body = purchase(
        &server,
        1,
        json!([
            {"ticketType": "ADULT", "noOfTickets": 2},
            {"ticketType": "CHILD", "noOfTickets": 1},
            {"ticketType": "INFANT", "noOfTickets": 1},
        ]),
    )
    .await;

    assert_eq!(body["success"], true);
    let booking = &body["booking"];
    assert_eq!(booking["accountId"], 1);
    assert_eq!(booking["totalSeats"], 3);
    assert_eq!(booking["totalAmount"], 2 * 2500 + 1500);
    assert_eq!(booking["status"], "CONFIRMED");
    assert_eq!(booking["meta"]["note"], "Created via /tickets");
    assert_eq!(booking["ticketRequests"].as_array().unwrap().len(), 3);
    assert_eq!(booking["createdAt"], booking["updatedAt"]);
}

#[tokio::test]
async fn purchase_without_adult_is_rejected() {
    let server = server();

    let response = server
        .post("/tickets")
        .json(&json!({
            "accountid": 1,
            "ticketRequests": [{"ticketType": "CHILD", "noOfTickets": 1}],
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "child and infant tickets cannot be purchased without an adult ticket"
    );

    // No booking was created.
    let listing = server.get("/tickets/account/1").await.json::<Value>();
    assert!(listing["bookings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn purchase_validation_failures_use_the_error_envelope() {
    let server = server();

    for (account, tickets) in [
        // non-positive account id
        (0, json!([{"ticketType": "ADULT", "noOfTickets": 1}])),
        // empty request
        (1, json!([])),
        // over the 25-ticket maximum
        (1, json!([{"ticketType": "ADULT", "noOfTickets": 26}])),
        // more infants than adults
        (
            1,
            json!([
                {"ticketType": "ADULT", "noOfTickets": 1},
                {"ticketType": "INFANT", "noOfTickets": 2},
            ]),
        ),
        // zero quantity
        (1, json!([{"ticketType": "ADULT", "noOfTickets": 0}])),
    ] {
        let response = server
            .post("/tickets")
            .json(&json!({ "accountid": account, "ticketRequests": tickets }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn booking_can_be_fetched_by_id() {
    let server = server();

    let created = purchase(
        &server,
        7,
        json!([{"ticketType": "ADULT", "noOfTickets": 1}]),
    )
    .await;
    let id = created["booking"]["id"].as_str().unwrap();

    let response = server.get(&format!("/tickets/{id}")).await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["booking"], created["booking"]);
}

#[tokio::test]
async fn missing_and_malformed_booking_ids_are_404() {
    let server = server();

    for path in [
        "/tickets/550e8400-e29b-41d4-a716-446655440000",
        "/tickets/not-a-uuid",
    ] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body = response.json::<Value>();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Booking not found");
    }
}

#[tokio::test]
async fn account_listing_returns_only_that_accounts_bookings() {
    let server = server();

    let first = purchase(
        &server,
        1,
        json!([{"ticketType": "ADULT", "noOfTickets": 1}]),
    )
    .await;
    purchase(
        &server,
        2,
        json!([{"ticketType": "ADULT", "noOfTickets": 1}]),
    )
    .await;
    let third = purchase(
        &server,
        1,
        json!([{"ticketType": "ADULT", "noOfTickets": 2}]),
    )
    .await;

    let response = server.get("/tickets/account/1").await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);

    let bookings = body["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0]["id"], first["booking"]["id"]);
    assert_eq!(bookings[1]["id"], third["booking"]["id"]);

    let empty = server.get("/tickets/account/999").await.json::<Value>();
    assert!(empty["bookings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn update_revalidates_and_recomputes_totals() {
    let server = server();

    let created = purchase(
        &server,
        3,
        json!([{"ticketType": "ADULT", "noOfTickets": 1}]),
    )
    .await;
    let id = created["booking"]["id"].as_str().unwrap();

    let response = server
        .put(&format!("/tickets/{id}"))
        .json(&json!({
            "ticketRequests": [
                {"ticketType": "ADULT", "noOfTickets": 2},
                {"ticketType": "CHILD", "noOfTickets": 2},
            ],
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    let booking = &body["booking"];
    assert_eq!(booking["totalSeats"], 4);
    assert_eq!(booking["totalAmount"], 2 * 2500 + 2 * 1500);
    assert_eq!(booking["status"], "CONFIRMED");
    assert_eq!(booking["meta"]["note"], "Created via /tickets");
    assert_eq!(booking["meta"]["updatedBy"], "PUT /tickets/:bookingId");
    assert!(body["note"].is_string());
}

#[tokio::test]
async fn update_rejects_invalid_mixes_and_missing_bookings() {
    let server = server();

    let created = purchase(
        &server,
        3,
        json!([{"ticketType": "ADULT", "noOfTickets": 1}]),
    )
    .await;
    let id = created["booking"]["id"].as_str().unwrap();

    // Invalid replacement mix: child without adult.
    let response = server
        .put(&format!("/tickets/{id}"))
        .json(&json!({"ticketRequests": [{"ticketType": "CHILD", "noOfTickets": 1}]}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Stored booking is untouched.
    let fetched = server.get(&format!("/tickets/{id}")).await.json::<Value>();
    assert_eq!(fetched["booking"]["totalSeats"], 1);

    // Unknown booking.
    let response = server
        .put("/tickets/550e8400-e29b-41d4-a716-446655440000")
        .json(&json!({"ticketRequests": [{"ticketType": "ADULT", "noOfTickets": 1}]}))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cancel_is_soft_and_rejects_a_second_cancel() {
    let server = server();

    let created = purchase(
        &server,
        5,
        json!([{"ticketType": "ADULT", "noOfTickets": 2}]),
    )
    .await;
    let id = created["booking"]["id"].as_str().unwrap();

    let response = server.delete(&format!("/tickets/{id}")).await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);

    // Record is retained with status CANCELLED.
    let fetched = server.get(&format!("/tickets/{id}")).await.json::<Value>();
    assert_eq!(fetched["booking"]["status"], "CANCELLED");

    // Second cancel fails at the API layer.
    let response = server.delete(&format!("/tickets/{id}")).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Booking already cancelled"
    );

    // So does updating a cancelled booking.
    let response = server
        .put(&format!("/tickets/{id}"))
        .json(&json!({"ticketRequests": [{"ticketType": "ADULT", "noOfTickets": 1}]}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Cannot update a cancelled booking"
    );
}

#[tokio::test]
async fn cancel_missing_booking_is_404() {
    let server = server();

    let response = server.delete("/tickets/not-a-uuid").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Booking not found");
}
