//! # confbook-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the booking ledger. Binds to a
//! configurable port (default 8080).
//!
//! ## Startup Semantics
//!
//! The snapshot at `CONFBOOK_STATE` (default `bookings.json`) is loaded if
//! present. An absent snapshot initializes a fresh conference from
//! `CONFBOOK_CONFERENCE` / `CONFBOOK_TICKETS` (defaults: "Rust Conference",
//! 100) and writes the first snapshot. A present-but-unreadable snapshot is
//! fatal — the server refuses to start rather than discard existing data.

use confbook_api::state::AppState;
use confbook_ledger::{Conference, Ledger};
use confbook_store::SnapshotStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let state_path =
        std::env::var("CONFBOOK_STATE").unwrap_or_else(|_| "bookings.json".to_string());
    let store = SnapshotStore::new(&state_path);

    let ledger = match store.load().map_err(|e| {
        tracing::error!("refusing to start with a broken snapshot: {e}");
        e
    })? {
        Some(ledger) => {
            tracing::info!(
                path = %state_path,
                bookings = ledger.bookings().len(),
                "loaded existing ledger"
            );
            ledger
        }
        None => {
            let name = std::env::var("CONFBOOK_CONFERENCE")
                .unwrap_or_else(|_| "Rust Conference".to_string());
            let tickets: u32 = std::env::var("CONFBOOK_TICKETS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(100);

            let ledger = Ledger::new(Conference::new(&name, tickets)?);
            store.save(&ledger)?;
            tracing::info!(conference = %name, tickets, "initialized fresh ledger");
            ledger
        }
    };

    let app = confbook_api::app(AppState::new(ledger, store));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("confbook API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
