//! Seat reservation collaborator.
//!
//! Allocates physical seats for a purchase. Like the payment gateway this is
//! an external interface: the API only calls `reserve_seats`, and released
//! seats on cancellation are a known gap. The mock always succeeds.

use crate::types::AccountId;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Seat reservation result
pub type SeatResult<T> = Result<T, SeatReservationError>;

/// Seat reservation collaborator error
#[derive(Debug, Clone, thiserror::Error)]
pub enum SeatReservationError {
    /// Not enough seats available
    #[error("insufficient seats: {message}")]
    Insufficient {
        /// Error message
        message: String,
    },
    /// The reservation service was unreachable
    #[error("seat reservation service unavailable: {message}")]
    Unavailable {
        /// Error message
        message: String,
    },
}

/// Seat reservation service trait.
pub trait SeatReservationService: Send + Sync {
    /// Reserve `seat_count` seats for an account.
    ///
    /// # Errors
    ///
    /// Returns [`SeatReservationError`] if the reservation fails.
    fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Pin<Box<dyn Future<Output = SeatResult<()>> + Send>>;
}

/// Mock seat reservation service (always succeeds).
#[derive(Clone, Copy, Debug, Default)]
pub struct MockSeatReservationService;

impl MockSeatReservationService {
    /// Creates a new mock seat reservation service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservationService> {
        Arc::new(Self::new())
    }
}

impl SeatReservationService for MockSeatReservationService {
    fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Pin<Box<dyn Future<Output = SeatResult<()>> + Send>> {
        Box::pin(async move {
            tracing::info!(
                account_id = %account_id,
                seats = seat_count,
                "mock seats reserved"
            );
            Ok(())
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_reservation_succeeds() {
        let service = MockSeatReservationService::new();
        let account = AccountId::new(7).unwrap();

        assert!(service.reserve_seats(account, 3).await.is_ok());
    }
}
