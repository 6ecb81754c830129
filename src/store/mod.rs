//! Booking persistence.
//!
//! [`BookingStore`] is the seam between the API layer and storage: the demo
//! implementation is an in-memory map, and a persistent backend can be
//! swapped in without touching the handlers.
//!
//! Store operations never fail; absence is communicated through `None` and
//! `false` returns, leaving every HTTP status decision to the API layer.
//! The store also never validates or derives anything: totals arrive
//! pre-computed by the ticket service and patches are applied as-is.

pub mod memory;

pub use memory::InMemoryBookingStore;

use crate::types::{Booking, BookingId, BookingPatch, NewBooking};

/// Keyed collection of booking records.
pub trait BookingStore: Send + Sync {
    /// Inserts a new booking: assigns a fresh id, sets status to
    /// `Confirmed`, stamps both timestamps with the current time, and
    /// returns the stored record.
    fn create(&self, fields: NewBooking) -> Booking;

    /// Returns the booking with this id, if any.
    fn get(&self, id: BookingId) -> Option<Booking>;

    /// Returns all bookings whose account id, rendered as a string, equals
    /// `account` (insertion order).
    fn get_by_account(&self, account: &str) -> Vec<Booking>;

    /// Merges `patch` into an existing booking, refreshes `updated_at`, and
    /// returns the updated record; `None` if the id is absent.
    fn update(&self, id: BookingId, patch: BookingPatch) -> Option<Booking>;

    /// Marks a booking `Cancelled` and refreshes `updated_at`, keeping the
    /// record in place. Returns `false` when the id is absent or the
    /// booking is already cancelled.
    fn soft_delete(&self, id: BookingId) -> bool;
}
