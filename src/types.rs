//! Domain types for the booking API.
//!
//! Value objects are validated at construction: a [`TicketRequest`] cannot
//! hold a zero quantity and an [`AccountId`] cannot be non-positive, so the
//! service layer only ever sees well-formed values.

use crate::tickets::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a booking
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(Uuid);

impl BookingId {
    /// Creates a new random `BookingId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a `BookingId` from a `Uuid`
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a `BookingId` from its string form.
    ///
    /// Returns `None` for anything that is not a UUID; callers treat that
    /// the same as an id absent from the store.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }

    /// Get the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account identifier, guaranteed positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64")]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an `AccountId`, rejecting non-positive values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAccount`] when `raw <= 0`.
    pub fn new(raw: i64) -> Result<Self, ValidationError> {
        if raw > 0 {
            Ok(Self(raw))
        } else {
            Err(ValidationError::InvalidAccount { raw })
        }
    }

    /// Returns the numeric account id
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = ValidationError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money (cents-based to avoid floating point errors)
// ============================================================================

/// Represents money in integer currency units (cents).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Zero amount
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from cents
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Returns the amount in cents
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, saturating at `u64::MAX`
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Multiplies the amount by a quantity, saturating at `u64::MAX`
    #[must_use]
    pub const fn saturating_mul(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// ============================================================================
// Tickets
// ============================================================================

/// Category of ticket with an associated unit price and seat rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Occupies no seat and is free; sits on an adult's lap
    Infant,
    /// Occupies a seat at the child rate
    Child,
    /// Occupies a seat at the adult rate
    Adult,
}

impl TicketType {
    /// Whether this ticket type consumes a seat
    #[must_use]
    pub const fn occupies_seat(&self) -> bool {
        matches!(self, Self::Child | Self::Adult)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infant => write!(f, "INFANT"),
            Self::Child => write!(f, "CHILD"),
            Self::Adult => write!(f, "ADULT"),
        }
    }
}

/// A (ticket type, quantity) pair within a purchase.
///
/// Immutable once constructed; the quantity is always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TicketRequestWire")]
pub struct TicketRequest {
    #[serde(rename = "ticketType")]
    ticket_type: TicketType,
    #[serde(rename = "noOfTickets")]
    quantity: u32,
}

impl TicketRequest {
    /// Creates a `TicketRequest`, rejecting a zero quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroQuantity`] when `quantity == 0`.
    pub const fn new(ticket_type: TicketType, quantity: u32) -> Result<Self, ValidationError> {
        if quantity == 0 {
            Err(ValidationError::ZeroQuantity { ticket_type })
        } else {
            Ok(Self {
                ticket_type,
                quantity,
            })
        }
    }

    /// Returns the ticket type
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Returns the number of tickets requested
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Wire form of a ticket request (`{"ticketType": ..., "noOfTickets": ...}`).
#[derive(Debug, Deserialize)]
struct TicketRequestWire {
    #[serde(rename = "ticketType")]
    ticket_type: TicketType,
    #[serde(rename = "noOfTickets")]
    no_of_tickets: u32,
}

impl TryFrom<TicketRequestWire> for TicketRequest {
    type Error = ValidationError;

    fn try_from(wire: TicketRequestWire) -> Result<Self, Self::Error> {
        Self::new(wire.ticket_type, wire.no_of_tickets)
    }
}

// ============================================================================
// Bookings
// ============================================================================

/// Booking lifecycle status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Purchase completed and recorded
    Confirmed,
    /// Soft-cancelled; the record is retained
    Cancelled,
    /// Recorded but not yet confirmed
    Pending,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmed => write!(f, "CONFIRMED"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::Pending => write!(f, "PENDING"),
        }
    }
}

/// A persisted record of a ticket purchase.
///
/// `total_amount` and `total_seats` are always derived from
/// `ticket_requests` by the ticket service at write time; the store never
/// computes them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique booking identifier, assigned at creation and never reused
    pub id: BookingId,
    /// Account that made the purchase
    pub account_id: AccountId,
    /// Snapshot of the requested tickets
    pub ticket_requests: Vec<TicketRequest>,
    /// Total price in integer currency units
    pub total_amount: Money,
    /// Total seats consumed (infants excluded)
    pub total_seats: u32,
    /// Current lifecycle status
    pub status: BookingStatus,
    /// When the booking was created
    pub created_at: DateTime<Utc>,
    /// When the booking was last modified
    pub updated_at: DateTime<Utc>,
    /// Free-form annotations
    pub meta: HashMap<String, String>,
}

/// Fields for creating a booking; the store assigns id, status, timestamps.
#[derive(Clone, Debug)]
pub struct NewBooking {
    /// Account that made the purchase
    pub account_id: AccountId,
    /// Snapshot of the requested tickets
    pub ticket_requests: Vec<TicketRequest>,
    /// Total price, derived by the ticket service
    pub total_amount: Money,
    /// Total seats, derived by the ticket service
    pub total_seats: u32,
    /// Free-form annotations
    pub meta: HashMap<String, String>,
}

/// Partial update applied to an existing booking.
///
/// The store merges whatever is present and refreshes `updated_at`; it does
/// not validate contents. Callers re-validate before building a patch.
#[derive(Clone, Debug, Default)]
pub struct BookingPatch {
    /// Replacement ticket snapshot
    pub ticket_requests: Option<Vec<TicketRequest>>,
    /// Replacement total price
    pub total_amount: Option<Money>,
    /// Replacement seat total
    pub total_seats: Option<u32>,
    /// Replacement annotations
    pub meta: Option<HashMap<String, String>>,
}
