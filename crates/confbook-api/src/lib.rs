//! # confbook-api — Web Front-End for the Booking Ledger
//!
//! A minimal browser path to the same four ledger operations the CLI
//! exposes. One HTML form, four JSON handlers, no sessions, no auth, no
//! pagination.
//!
//! ## API Surface
//!
//! | Route                  | Method | Purpose                                |
//! |------------------------|--------|----------------------------------------|
//! | `/`                    | GET    | HTML booking form with remaining count |
//! | `/bookings`            | GET    | List bookings (`?email=` filters)      |
//! | `/bookings`            | POST   | Create a booking (form data)           |
//! | `/bookings/:id`        | GET    | Fetch one booking                      |
//! | `/bookings/:id`        | DELETE | Cancel a booking                       |
//!
//! Every handler goes through the shared mutex-guarded ledger handle and
//! persists a snapshot after each mutation (warn-and-continue on save
//! failure).

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
