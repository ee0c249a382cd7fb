//! # Booking Identifier
//!
//! Newtype for booking identifiers. Identifiers are assigned by the ledger
//! from a monotonically increasing counter and are never reused, even after
//! the booking they named is cancelled.

use serde::{Deserialize, Serialize};

/// A unique identifier for a booking.
///
/// Assigned at creation from the ledger's counter; strictly increasing
/// across the life of a ledger. Serializes as a plain unsigned integer in
/// the snapshot document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookingId(u64);

impl BookingId {
    /// Wrap a raw identifier value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw identifier value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BookingId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for BookingId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}
