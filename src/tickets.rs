//! Ticket purchase validation and total computation.
//!
//! [`TicketService`] is the pure core of the system: given a list of
//! [`TicketRequest`]s it decides accept/reject against the business rules
//! and derives the price and seat totals. It performs no I/O; payment and
//! seat reservation are separate collaborators invoked by the API layer.
//!
//! Business rules:
//! - at least one ticket per purchase, at most the policy maximum
//! - infant and child tickets require an adult ticket in the same purchase
//! - each infant sits on an adult's lap, so infants cannot outnumber adults
//!   and consume no seat

use crate::types::{AccountId, Money, TicketRequest, TicketType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A purchase request that failed validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Account id was zero or negative
    #[error("account id must be a positive integer (got {raw})")]
    InvalidAccount {
        /// The rejected value
        raw: i64,
    },

    /// A ticket request carried a zero quantity
    #[error("number of {ticket_type} tickets must be at least 1")]
    ZeroQuantity {
        /// The ticket type with the zero quantity
        ticket_type: TicketType,
    },

    /// The purchase contained no ticket requests
    #[error("at least one ticket must be requested")]
    EmptyRequest,

    /// The purchase exceeded the per-purchase ticket maximum
    #[error("cannot purchase more than {max} tickets at a time (requested {requested})")]
    TooManyTickets {
        /// Total tickets requested
        requested: u32,
        /// Policy maximum
        max: u32,
    },

    /// Infant or child tickets were requested without an adult ticket
    #[error("child and infant tickets cannot be purchased without an adult ticket")]
    AdultRequired,

    /// More infants than adults to hold them
    #[error("each infant must be accompanied by an adult ({infants} infants, {adults} adults)")]
    InfantsExceedAdults {
        /// Infant tickets requested
        infants: u32,
        /// Adult tickets requested
        adults: u32,
    },
}

/// Pricing and capacity rules applied to every purchase.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BookingPolicy {
    /// Maximum total tickets in a single purchase
    pub max_tickets_per_purchase: u32,
    /// Unit price of an adult ticket
    pub adult_price: Money,
    /// Unit price of a child ticket
    pub child_price: Money,
    /// Unit price of an infant ticket (zero by default)
    pub infant_price: Money,
}

impl BookingPolicy {
    /// Unit price for a ticket type
    #[must_use]
    pub const fn unit_price(&self, ticket_type: TicketType) -> Money {
        match ticket_type {
            TicketType::Infant => self.infant_price,
            TicketType::Child => self.child_price,
            TicketType::Adult => self.adult_price,
        }
    }
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: 25,
            adult_price: Money::from_cents(2500),
            child_price: Money::from_cents(1500),
            infant_price: Money::ZERO,
        }
    }
}

/// Ticket counts by type within one purchase.
#[derive(Clone, Copy, Debug, Default)]
struct TicketCounts {
    infants: u32,
    children: u32,
    adults: u32,
}

impl TicketCounts {
    fn tally(tickets: &[TicketRequest]) -> Self {
        tickets.iter().fold(Self::default(), |mut counts, request| {
            let slot = match request.ticket_type() {
                TicketType::Infant => &mut counts.infants,
                TicketType::Child => &mut counts.children,
                TicketType::Adult => &mut counts.adults,
            };
            *slot = slot.saturating_add(request.quantity());
            counts
        })
    }

    const fn total(&self) -> u32 {
        self.infants
            .saturating_add(self.children)
            .saturating_add(self.adults)
    }
}

/// Validates purchase requests and computes totals.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicketService {
    policy: BookingPolicy,
}

impl TicketService {
    /// Creates a service applying the given policy
    #[must_use]
    pub const fn new(policy: BookingPolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy in force
    #[must_use]
    pub const fn policy(&self) -> &BookingPolicy {
        &self.policy
    }

    /// Validates a purchase against the business rules.
    ///
    /// The account id and individual quantities are already guaranteed valid
    /// by [`AccountId::new`] and [`TicketRequest::new`]; this checks the
    /// rules that only hold for the purchase as a whole.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] the purchase violates.
    pub fn validate(
        &self,
        account: AccountId,
        tickets: &[TicketRequest],
    ) -> Result<(), ValidationError> {
        if tickets.is_empty() {
            return Err(ValidationError::EmptyRequest);
        }

        let counts = TicketCounts::tally(tickets);
        let requested = counts.total();
        if requested > self.policy.max_tickets_per_purchase {
            return Err(ValidationError::TooManyTickets {
                requested,
                max: self.policy.max_tickets_per_purchase,
            });
        }

        if counts.adults == 0 && (counts.infants > 0 || counts.children > 0) {
            return Err(ValidationError::AdultRequired);
        }

        if counts.infants > counts.adults {
            return Err(ValidationError::InfantsExceedAdults {
                infants: counts.infants,
                adults: counts.adults,
            });
        }

        tracing::debug!(
            account = %account,
            adults = counts.adults,
            children = counts.children,
            infants = counts.infants,
            "purchase request validated"
        );
        Ok(())
    }

    /// Total price of a purchase: Σ quantity × unit price. Pure.
    #[must_use]
    pub fn total_price(&self, tickets: &[TicketRequest]) -> Money {
        tickets.iter().fold(Money::ZERO, |total, request| {
            total.saturating_add(
                self.policy
                    .unit_price(request.ticket_type())
                    .saturating_mul(request.quantity()),
            )
        })
    }

    /// Total seats consumed: adult and child tickets only. Pure.
    #[must_use]
    pub fn total_seats(&self, tickets: &[TicketRequest]) -> u32 {
        tickets
            .iter()
            .filter(|request| request.ticket_type().occupies_seat())
            .fold(0, |total: u32, request| {
                total.saturating_add(request.quantity())
            })
    }
}
