//! HTTP API endpoints.

pub mod bookings;
