//! # Route Modules

pub mod bookings;

use axum::Router;

use crate::state::AppState;

/// Build the full application router (before middleware and state).
pub fn router() -> Router<AppState> {
    bookings::router()
}
