//! # Conference Inventory
//!
//! The conference record: name, total capacity, and the tickets not yet
//! allocated to any active booking. Capacity arithmetic is confined to this
//! module — the ledger debits and credits through [`Conference::allocate`]
//! and [`Conference::restore`], never by touching the counts directly.

use serde::{Deserialize, Serialize};

use confbook_core::ValidationError;

/// A conference with a fixed ticket capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    name: String,
    total_tickets: u32,
    remaining_tickets: u32,
}

impl Conference {
    /// Create a conference with all tickets available.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroCapacity`] if `total_tickets` is zero.
    pub fn new(name: impl Into<String>, total_tickets: u32) -> Result<Self, ValidationError> {
        if total_tickets == 0 {
            return Err(ValidationError::ZeroCapacity);
        }
        Ok(Self {
            name: name.into(),
            total_tickets,
            remaining_tickets: total_tickets,
        })
    }

    /// The conference name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fixed total capacity.
    pub fn total_tickets(&self) -> u32 {
        self.total_tickets
    }

    /// Tickets not yet allocated to any active booking.
    pub fn remaining_tickets(&self) -> u32 {
        self.remaining_tickets
    }

    /// Whether no tickets remain.
    pub fn sold_out(&self) -> bool {
        self.remaining_tickets == 0
    }

    /// Debit `count` tickets from the remaining pool.
    ///
    /// The caller (the ledger) has already verified `count <= remaining`;
    /// saturation keeps the count non-negative even if that check is ever
    /// bypassed, and the invariant checker will flag the inconsistency.
    pub(crate) fn allocate(&mut self, count: u32) {
        debug_assert!(count <= self.remaining_tickets);
        self.remaining_tickets = self.remaining_tickets.saturating_sub(count);
    }

    /// Credit `count` tickets back to the remaining pool.
    pub(crate) fn restore(&mut self, count: u32) {
        debug_assert!(self.remaining_tickets + count <= self.total_tickets);
        self.remaining_tickets = (self.remaining_tickets + count).min(self.total_tickets);
    }
}
