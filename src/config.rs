//! Configuration management for the booking API.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::tickets::BookingPolicy;
use crate::types::Money;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Pricing and capacity rules
    pub policy: BookingPolicy,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(8080),
                log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            },
            policy: BookingPolicy {
                max_tickets_per_purchase: env::var("MAX_TICKETS_PER_PURCHASE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(25),
                adult_price: price_from_env("ADULT_TICKET_PRICE", 2500),
                child_price: price_from_env("CHILD_TICKET_PRICE", 1500),
                infant_price: price_from_env("INFANT_TICKET_PRICE", 0),
            },
        }
    }

    /// Address the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn price_from_env(var: &str, default_cents: u64) -> Money {
    env::var(var)
        .ok()
        .and_then(|s| s.parse().ok())
        .map_or(Money::from_cents(default_cents), Money::from_cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_constants() {
        let policy = BookingPolicy::default();
        assert_eq!(policy.max_tickets_per_purchase, 25);
        assert_eq!(policy.adult_price, Money::from_cents(2500));
        assert_eq!(policy.child_price, Money::from_cents(1500));
        assert!(policy.infant_price.is_zero());
    }
}
