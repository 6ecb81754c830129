//! Router configuration for the booking API.

use super::health::health_check;
use super::state::AppState;
use crate::api::bookings;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// Configures the health check and the `/tickets` surface, with request
/// tracing on every route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/tickets", post(bookings::purchase_tickets))
        .route(
            "/tickets/account/:account_id",
            get(bookings::list_account_bookings),
        )
        .route("/tickets/:booking_id", get(bookings::get_booking))
        .route("/tickets/:booking_id", put(bookings::update_booking))
        .route("/tickets/:booking_id", delete(bookings::cancel_booking))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
