//! Payment collaborator for ticket purchases.
//!
//! The booking API only ever calls `charge`; refunds on cancellation are a
//! known gap carried over from the original system. In production this would
//! be a real payment service integration; the mock always succeeds.

use crate::types::{AccountId, Money};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Payment result
pub type PaymentResult<T> = Result<T, PaymentError>;

/// Payment collaborator error
#[derive(Debug, Clone, thiserror::Error)]
pub enum PaymentError {
    /// The account could not be charged
    #[error("charge declined: {reason}")]
    Declined {
        /// Decline reason
        reason: String,
    },
    /// The payment service was unreachable
    #[error("payment service unavailable: {message}")]
    Unavailable {
        /// Error message
        message: String,
    },
}

/// Receipt returned by a successful charge.
#[derive(Debug, Clone)]
pub struct ChargeReceipt {
    /// Account that was charged
    pub account_id: AccountId,
    /// Amount charged
    pub amount: Money,
    /// Provider transaction id
    pub transaction_id: String,
}

/// Payment service trait.
///
/// Abstraction over whatever charges the account for a purchase.
pub trait PaymentGateway: Send + Sync {
    /// Charge an account for the given amount.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError`] if the charge fails.
    fn charge(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Pin<Box<dyn Future<Output = PaymentResult<ChargeReceipt>> + Send>>;
}

/// Mock payment gateway (always succeeds).
#[derive(Clone, Copy, Debug, Default)]
pub struct MockPaymentGateway;

impl MockPaymentGateway {
    /// Creates a new mock payment gateway
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn PaymentGateway> {
        Arc::new(Self::new())
    }
}

impl PaymentGateway for MockPaymentGateway {
    fn charge(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Pin<Box<dyn Future<Output = PaymentResult<ChargeReceipt>> + Send>> {
        Box::pin(async move {
            let transaction_id = format!("mock_txn_{}", uuid::Uuid::new_v4());

            tracing::info!(
                account_id = %account_id,
                amount = amount.cents(),
                transaction_id = %transaction_id,
                "mock payment charged"
            );

            Ok(ChargeReceipt {
                account_id,
                amount,
                transaction_id,
            })
        })
    }
}
