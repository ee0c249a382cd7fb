//! # Ledger State Machine
//!
//! The ledger owns the conference, the insertion-ordered booking collection,
//! and the identifier counter. [`Ledger::book`] and [`Ledger::cancel`] are
//! the only state transitions; both validate every precondition before the
//! first mutation, so a rejected operation leaves the ledger byte-identical
//! to its state before the call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use confbook_core::{
    AttendeeName, BookingId, EmailAddress, TicketCount, Timestamp, ValidationError,
};

use crate::booking::Booking;
use crate::conference::Conference;

/// Errors raised by ledger operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Input failed validation (bad name, email, or ticket count).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Not enough tickets remain to satisfy the request.
    #[error("only {remaining} ticket(s) remaining, requested {requested}")]
    Capacity {
        /// Tickets the caller asked for.
        requested: u32,
        /// Tickets still available.
        remaining: u32,
    },

    /// No booking with the given identifier exists.
    #[error("booking {0} not found")]
    NotFound(BookingId),

    /// The ledger state violates its own invariant. Raised only by
    /// [`Ledger::check_invariants`], e.g. on a tampered snapshot.
    #[error("ledger state inconsistent: {0}")]
    Inconsistent(String),
}

/// The authoritative record of conference capacity and bookings.
///
/// Serializes directly as the snapshot document: `conference`, `bookings`,
/// `next_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    conference: Conference,
    bookings: Vec<Booking>,
    next_id: u64,
}

impl Ledger {
    /// Create an empty ledger for the given conference.
    ///
    /// The first booking will receive identifier 1.
    pub fn new(conference: Conference) -> Self {
        Self {
            conference,
            bookings: Vec::new(),
            next_id: 1,
        }
    }

    /// The conference record.
    pub fn conference(&self) -> &Conference {
        &self.conference
    }

    /// All active bookings in insertion order.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// The identifier the next successful booking will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Reserve tickets for an attendee.
    ///
    /// Validates the names (at least 2 characters after trimming), the email
    /// shape, and the ticket count, then checks remaining capacity. On
    /// success the booking is stored with the next identifier (strictly
    /// increasing, never reused even after cancellation), names title-cased
    /// and email lowercased, and the remaining count is debited.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Validation`] for bad input, [`LedgerError::Capacity`]
    /// when fewer tickets remain than requested. The ledger is unchanged on
    /// any error.
    pub fn book(
        &mut self,
        first: &str,
        last: &str,
        email: &str,
        tickets: u32,
    ) -> Result<Booking, LedgerError> {
        // Validate everything before the first mutation.
        let first_name = AttendeeName::parse("first name", first)?;
        let last_name = AttendeeName::parse("last name", last)?;
        let email = EmailAddress::parse(email)?;
        let tickets = TicketCount::new(tickets)?;

        let remaining = self.conference.remaining_tickets();
        if tickets.get() > remaining {
            return Err(LedgerError::Capacity {
                requested: tickets.get(),
                remaining,
            });
        }

        let booking = Booking {
            id: BookingId::new(self.next_id),
            first_name,
            last_name,
            email,
            tickets,
            booked_at: Timestamp::now(),
        };

        self.conference.allocate(tickets.get());
        self.bookings.push(booking.clone());
        self.next_id += 1;

        Ok(booking)
    }

    /// Cancel a booking and restore its tickets to the remaining pool.
    ///
    /// The booking record is removed entirely; surviving bookings keep
    /// their insertion order. Returns the removed booking.
    ///
    /// # Errors
    ///
    /// [`LedgerError::NotFound`] if no booking has the identifier; the
    /// ledger is unchanged.
    pub fn cancel(&mut self, id: BookingId) -> Result<Booking, LedgerError> {
        let index = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or(LedgerError::NotFound(id))?;

        // Order-preserving removal.
        let booking = self.bookings.remove(index);
        self.conference.restore(booking.tickets.get());
        Ok(booking)
    }

    /// Look up a booking by identifier.
    pub fn find_by_id(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// All bookings whose email matches `email`, case-insensitively,
    /// in insertion order.
    pub fn find_by_email(&self, email: &str) -> Vec<&Booking> {
        let needle = email.trim().to_lowercase();
        self.bookings
            .iter()
            .filter(|b| b.email.as_str() == needle)
            .collect()
    }

    /// Verify internal consistency.
    ///
    /// Checks that remaining + allocated == total, that no booking exceeds
    /// the identifier counter, and that identifiers are unique. Run on
    /// every snapshot load so a hand-edited or corrupted file cannot put an
    /// inconsistent ledger into service.
    pub fn check_invariants(&self) -> Result<(), LedgerError> {
        let allocated: u64 = self.bookings.iter().map(|b| u64::from(b.tickets.get())).sum();
        let remaining = u64::from(self.conference.remaining_tickets());
        let total = u64::from(self.conference.total_tickets());

        if remaining + allocated != total {
            return Err(LedgerError::Inconsistent(format!(
                "remaining {remaining} + allocated {allocated} != total {total}"
            )));
        }

        let mut seen = std::collections::HashSet::new();
        for booking in &self.bookings {
            if booking.id.as_u64() >= self.next_id {
                return Err(LedgerError::Inconsistent(format!(
                    "booking {} is not below the identifier counter {}",
                    booking.id, self.next_id
                )));
            }
            if !seen.insert(booking.id) {
                return Err(LedgerError::Inconsistent(format!(
                    "duplicate booking identifier {}",
                    booking.id
                )));
            }
        }

        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// One step of a randomized operation sequence.
    #[derive(Debug, Clone)]
    enum Op {
        /// Attempt a booking; counts of 0 and counts above capacity
        /// exercise the rejection paths.
        Book { tickets: u32 },
        /// Attempt a cancellation of an arbitrary identifier; unknown
        /// identifiers exercise the NotFound path.
        Cancel { id: u64 },
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u32..8).prop_map(|tickets| Op::Book { tickets }),
            (0u64..30).prop_map(|id| Op::Cancel { id }),
        ]
    }

    proptest! {
        /// For all sequences of book/cancel operations, the capacity
        /// invariant holds after every single operation.
        #[test]
        fn invariant_holds_after_every_operation(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let mut ledger = Ledger::new(Conference::new("PropConf", 20).unwrap());
            for op in ops {
                match op {
                    Op::Book { tickets } => {
                        let _ = ledger.book("Ann", "Lee", "ann@x.com", tickets);
                    }
                    Op::Cancel { id } => {
                        let _ = ledger.cancel(BookingId::new(id));
                    }
                }
                prop_assert!(ledger.check_invariants().is_ok());
            }
        }

        /// Identifiers assigned across any operation sequence are strictly
        /// increasing.
        #[test]
        fn identifiers_strictly_increase(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let mut ledger = Ledger::new(Conference::new("PropConf", 200).unwrap());
            let mut last_id = 0u64;
            for op in ops {
                match op {
                    Op::Book { tickets } => {
                        if let Ok(booking) = ledger.book("Ann", "Lee", "ann@x.com", tickets) {
                            prop_assert!(booking.id.as_u64() > last_id);
                            last_id = booking.id.as_u64();
                        }
                    }
                    Op::Cancel { id } => {
                        let _ = ledger.cancel(BookingId::new(id));
                    }
                }
            }
        }
    }
}
