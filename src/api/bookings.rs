//! Booking API endpoints.
//!
//! The `/tickets` surface:
//! - POST /tickets - purchase tickets and record a booking
//! - GET /tickets/account/:accountId - list bookings for an account
//! - GET /tickets/:bookingId - fetch one booking
//! - PUT /tickets/:bookingId - replace a booking's tickets and totals
//! - DELETE /tickets/:bookingId - soft-cancel a booking
//!
//! Request bodies are parsed into strongly-typed values at this boundary
//! before the ticket service sees them, so every malformed or rule-breaking
//! input comes back as a 400 with the `{"success": false, "error": msg}`
//! envelope.

use crate::error::AppError;
use crate::server::state::AppState;
use crate::types::{
    AccountId, Booking, BookingId, BookingPatch, BookingStatus, NewBooking, TicketRequest,
    TicketType,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for purchasing tickets.
#[derive(Debug, Deserialize)]
pub struct PurchaseBody {
    /// Account making the purchase
    #[serde(rename = "accountid")]
    pub account_id: i64,
    /// Requested (ticket type, quantity) pairs
    #[serde(rename = "ticketRequests")]
    pub ticket_requests: Vec<TicketRequestBody>,
}

/// Request body for updating a booking's tickets.
#[derive(Debug, Deserialize)]
pub struct UpdateBody {
    /// Replacement (ticket type, quantity) pairs
    #[serde(rename = "ticketRequests")]
    pub ticket_requests: Vec<TicketRequestBody>,
}

/// One (ticket type, quantity) entry as it appears on the wire.
#[derive(Debug, Deserialize)]
pub struct TicketRequestBody {
    /// Ticket category
    #[serde(rename = "ticketType")]
    pub ticket_type: TicketType,
    /// Number of tickets of that category
    #[serde(rename = "noOfTickets")]
    pub no_of_tickets: u32,
}

/// Response carrying a single booking.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    /// Always `true`
    pub success: bool,
    /// The booking record
    pub booking: Booking,
}

/// Response for listing an account's bookings.
#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    /// Always `true`
    pub success: bool,
    /// Matching bookings, possibly empty
    pub bookings: Vec<Booking>,
}

/// Response after updating a booking.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    /// Always `true`
    pub success: bool,
    /// The updated booking record
    pub booking: Booking,
    /// Caveat about side effects not re-run
    pub note: String,
}

/// Response after cancelling a booking.
#[derive(Debug, Serialize)]
pub struct CancelResponse {
    /// Always `true`
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Purchase tickets and record the resulting booking.
///
/// Validates the request, computes totals, charges the payment gateway,
/// reserves seats, and persists the booking. The collaborators are assumed
/// to succeed; there is no compensating action if the store write fails
/// after a charge.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:8080/tickets \
///   -H "Content-Type: application/json" \
///   -d '{
///     "accountid": 1,
///     "ticketRequests": [
///       {"ticketType": "ADULT", "noOfTickets": 2},
///       {"ticketType": "CHILD", "noOfTickets": 1},
///       {"ticketType": "INFANT", "noOfTickets": 1}
///     ]
///   }'
/// ```
pub async fn purchase_tickets(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let body: PurchaseBody = parse_body(payload)?;

    let account = AccountId::new(body.account_id)?;
    let tickets = parse_tickets(body.ticket_requests)?;

    state.tickets.validate(account, &tickets)?;
    let total_amount = state.tickets.total_price(&tickets);
    let total_seats = state.tickets.total_seats(&tickets);

    state
        .payments
        .charge(account, total_amount)
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;
    state
        .seats
        .reserve_seats(account, total_seats)
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;

    let booking = state.store.create(NewBooking {
        account_id: account,
        ticket_requests: tickets,
        total_amount,
        total_seats,
        meta: HashMap::from([("note".to_string(), "Created via /tickets".to_string())]),
    });

    tracing::info!(
        booking_id = %booking.id,
        account_id = %account,
        total_amount = total_amount.cents(),
        total_seats,
        "booking created"
    );

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            success: true,
            booking,
        }),
    ))
}

/// List all bookings for an account.
///
/// The path segment is compared against stored account ids in string form,
/// so an unparseable account id simply matches nothing.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/tickets/account/1
/// ```
pub async fn list_account_bookings(
    Path(account_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BookingListResponse>, AppError> {
    let bookings = state.store.get_by_account(&account_id);
    Ok(Json(BookingListResponse {
        success: true,
        bookings,
    }))
}

/// Fetch one booking by id.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/tickets/550e8400-e29b-41d4-a716-446655440000
/// ```
pub async fn get_booking(
    Path(booking_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = lookup(&state, &booking_id)?;
    Ok(Json(BookingResponse {
        success: true,
        booking,
    }))
}

/// Replace a booking's tickets, re-validating and recomputing totals.
///
/// Payment and seat side effects are NOT re-run: the stored record and its
/// totals change, but nothing is charged, refunded, or reallocated.
///
/// # Example
///
/// ```bash
/// curl -X PUT http://localhost:8080/tickets/550e8400-e29b-41d4-a716-446655440000 \
///   -H "Content-Type: application/json" \
///   -d '{"ticketRequests": [{"ticketType": "ADULT", "noOfTickets": 3}]}'
/// ```
pub async fn update_booking(
    Path(booking_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<UpdateResponse>, AppError> {
    let existing = lookup(&state, &booking_id)?;
    if existing.status == BookingStatus::Cancelled {
        return Err(AppError::bad_request("Cannot update a cancelled booking"));
    }

    let body: UpdateBody = parse_body(payload)?;
    let tickets = parse_tickets(body.ticket_requests)?;

    state.tickets.validate(existing.account_id, &tickets)?;
    let total_amount = state.tickets.total_price(&tickets);
    let total_seats = state.tickets.total_seats(&tickets);

    let mut meta = existing.meta;
    meta.insert(
        "updatedBy".to_string(),
        "PUT /tickets/:bookingId".to_string(),
    );

    let booking = state
        .store
        .update(
            existing.id,
            BookingPatch {
                ticket_requests: Some(tickets),
                total_amount: Some(total_amount),
                total_seats: Some(total_seats),
                meta: Some(meta),
            },
        )
        .ok_or_else(AppError::booking_not_found)?;

    tracing::info!(
        booking_id = %booking.id,
        total_amount = total_amount.cents(),
        total_seats,
        "booking updated"
    );

    Ok(Json(UpdateResponse {
        success: true,
        booking,
        note: "Updated in store. Implement payment/seat changes in production.".to_string(),
    }))
}

/// Soft-cancel a booking.
///
/// The record is retained with status CANCELLED. Nothing is refunded and no
/// seats are released.
///
/// # Example
///
/// ```bash
/// curl -X DELETE http://localhost:8080/tickets/550e8400-e29b-41d4-a716-446655440000
/// ```
pub async fn cancel_booking(
    Path(booking_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CancelResponse>, AppError> {
    let existing = lookup(&state, &booking_id)?;
    if existing.status == BookingStatus::Cancelled {
        return Err(AppError::bad_request("Booking already cancelled"));
    }

    if !state.store.soft_delete(existing.id) {
        return Err(AppError::internal("Failed to cancel booking"));
    }

    tracing::info!(booking_id = %existing.id, "booking cancelled");

    Ok(Json(CancelResponse {
        success: true,
        message: "Booking cancelled (soft). Implement refunds/seatrelease in production."
            .to_string(),
    }))
}

// ============================================================================
// Boundary parsing
// ============================================================================

/// Deserialize a JSON body, mapping failures to a 400 in the standard
/// envelope rather than Axum's default rejection.
fn parse_body<T: serde::de::DeserializeOwned>(payload: Value) -> Result<T, AppError> {
    serde_json::from_value(payload).map_err(|e| AppError::bad_request(e.to_string()))
}

/// Convert wire ticket entries into validated [`TicketRequest`]s.
fn parse_tickets(entries: Vec<TicketRequestBody>) -> Result<Vec<TicketRequest>, AppError> {
    entries
        .into_iter()
        .map(|entry| TicketRequest::new(entry.ticket_type, entry.no_of_tickets))
        .collect::<Result<Vec<_>, _>>()
        .map_err(AppError::from)
}

/// Resolve a path segment to a stored booking; anything that is not a known
/// booking id is a 404.
fn lookup(state: &AppState, raw: &str) -> Result<Booking, AppError> {
    BookingId::parse(raw)
        .and_then(|id| state.store.get(id))
        .ok_or_else(AppError::booking_not_found)
}
