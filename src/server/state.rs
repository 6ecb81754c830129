//! Application state for the booking HTTP server.

use crate::payment::PaymentGateway;
use crate::seats::SeatReservationService;
use crate::store::BookingStore;
use crate::tickets::TicketService;
use std::sync::Arc;

/// Shared resources for all HTTP handlers.
///
/// Cloned (cheaply via Arc) for each request. The store and the two
/// side-effect collaborators sit behind trait objects so the demo in-memory
/// and mock implementations can be swapped for real ones without touching
/// the handlers.
#[derive(Clone)]
pub struct AppState {
    /// Booking persistence
    pub store: Arc<dyn BookingStore>,
    /// Payment charging collaborator
    pub payments: Arc<dyn PaymentGateway>,
    /// Seat reservation collaborator
    pub seats: Arc<dyn SeatReservationService>,
    /// Purchase validation and totals
    pub tickets: TicketService,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(
        store: Arc<dyn BookingStore>,
        payments: Arc<dyn PaymentGateway>,
        seats: Arc<dyn SeatReservationService>,
        tickets: TicketService,
    ) -> Self {
        Self {
            store,
            payments,
            seats,
            tickets,
        }
    }
}
