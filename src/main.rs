//! Booking API server.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! # then
//! curl -X POST http://localhost:8080/tickets \
//!   -H "Content-Type: application/json" \
//!   -d '{"accountid":1,"ticketRequests":[{"ticketType":"ADULT","noOfTickets":2}]}'
//! ```

use booking_api::{
    build_router, AppState, Config, InMemoryBookingStore, MockPaymentGateway,
    MockSeatReservationService, TicketService,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,booking_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        address = %config.bind_address(),
        max_tickets = config.policy.max_tickets_per_purchase,
        "configuration loaded"
    );

    // Wire up state: in-memory store, mock collaborators
    let state = AppState::new(
        InMemoryBookingStore::shared(),
        MockPaymentGateway::shared(),
        MockSeatReservationService::shared(),
        TicketService::new(config.policy),
    );
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("🎫 Booking API listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
}
