//! Ticket Booking API - a small HTTP service for purchasing event tickets.
//!
//! Accepts purchase requests, validates them against business rules
//! (ticket-type mix, account eligibility, per-purchase capacity), computes
//! price and seat totals, and records bookings that can later be listed,
//! fetched, updated, or soft-cancelled.
//!
//! # Architecture
//!
//! ```text
//! HTTP (Axum handlers)
//!   │  parse into typed PurchaseRequest at the boundary
//!   ▼
//! TicketService ── pure validation + totals (no I/O)
//!   │
//!   ▼
//! PaymentGateway / SeatReservationService ── injected collaborators (mocked)
//!   │
//!   ▼
//! BookingStore ── in-memory map behind a trait seam
//! ```
//!
//! # Deliberate gaps
//!
//! Payment processing, real seat inventory, persistence beyond the process
//! lifetime, and authentication are all out of scope. There is no rollback
//! when a side effect succeeds and a later step fails, and `PUT`/`DELETE`
//! never re-run or compensate the payment and seat side effects.

pub mod api;
pub mod config;
pub mod error;
pub mod payment;
pub mod seats;
pub mod server;
pub mod store;
pub mod tickets;
pub mod types;

pub use config::Config;
pub use error::AppError;
pub use payment::{MockPaymentGateway, PaymentGateway};
pub use seats::{MockSeatReservationService, SeatReservationService};
pub use server::{build_router, AppState};
pub use store::{BookingStore, InMemoryBookingStore};
pub use tickets::{BookingPolicy, TicketService, ValidationError};
pub use types::*;
