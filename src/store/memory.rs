//! In-memory booking store.
//!
//! Process-wide state behind a `RwLock`; nothing survives a restart. An
//! insertion-order index keeps account listings deterministic. Concurrent
//! updates to the same booking are last-write-wins.

use super::BookingStore;
use crate::types::{Booking, BookingId, BookingPatch, BookingStatus, NewBooking};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
struct Shelf {
    bookings: HashMap<BookingId, Booking>,
    order: Vec<BookingId>,
}

/// Booking store backed by a locked in-memory map.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    inner: RwLock<Shelf>,
}

impl InMemoryBookingStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn BookingStore> {
        Arc::new(Self::new())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Shelf> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Shelf> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BookingStore for InMemoryBookingStore {
    fn create(&self, fields: NewBooking) -> Booking {
        let now = Utc::now();
        let booking = Booking {
            id: BookingId::new(),
            account_id: fields.account_id,
            ticket_requests: fields.ticket_requests,
            total_amount: fields.total_amount,
            total_seats: fields.total_seats,
            status: BookingStatus::Confirmed,
            created_at: now,
            updated_at: now,
            meta: fields.meta,
        };

        let mut shelf = self.write();
        shelf.order.push(booking.id);
        shelf.bookings.insert(booking.id, booking.clone());
        booking
    }

    fn get(&self, id: BookingId) -> Option<Booking> {
        self.read().bookings.get(&id).cloned()
    }

    fn get_by_account(&self, account: &str) -> Vec<Booking> {
        let shelf = self.read();
        shelf
            .order
            .iter()
            .filter_map(|id| shelf.bookings.get(id))
            .filter(|booking| booking.account_id.to_string() == account)
            .cloned()
            .collect()
    }

    fn update(&self, id: BookingId, patch: BookingPatch) -> Option<Booking> {
        let mut shelf = self.write();
        let booking = shelf.bookings.get_mut(&id)?;

        if let Some(ticket_requests) = patch.ticket_requests {
            booking.ticket_requests = ticket_requests;
        }
        if let Some(total_amount) = patch.total_amount {
            booking.total_amount = total_amount;
        }
        if let Some(total_seats) = patch.total_seats {
            booking.total_seats = total_seats;
        }
        if let Some(meta) = patch.meta {
            booking.meta = meta;
        }
        booking.updated_at = Utc::now();

        Some(booking.clone())
    }

    fn soft_delete(&self, id: BookingId) -> bool {
        let mut shelf = self.write();
        let Some(booking) = shelf.bookings.get_mut(&id) else {
            return false;
        };
        if booking.status == BookingStatus::Cancelled {
            return false;
        }

        booking.status = BookingStatus::Cancelled;
        booking.updated_at = Utc::now();
        true
    }
}
