//! # Shared Ledger Handle
//!
//! Thread-safe, cloneable handle around the ledger. Mutating operations
//! (book, cancel) are mutually exclusive with each other and with reads —
//! one exclusive lock around each read-modify-write region.
//!
//! The lock is `parking_lot::Mutex`, not `tokio::sync::Mutex`, because no
//! caller holds it across an `.await` point: every ledger operation is
//! in-memory and bounded by the booking count. `parking_lot` is also
//! non-poisonable — a panicking handler does not permanently wedge the
//! ledger.

use std::sync::Arc;

use parking_lot::Mutex;

use confbook_core::BookingId;

use crate::booking::Booking;
use crate::ledger::{Ledger, LedgerError};

/// Cloneable handle to the single ledger instance shared by front-ends.
#[derive(Debug)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl Clone for SharedLedger {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedLedger {
    /// Wrap a ledger for sharing.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Reserve tickets under the exclusive lock.
    pub fn book(
        &self,
        first: &str,
        last: &str,
        email: &str,
        tickets: u32,
    ) -> Result<Booking, LedgerError> {
        self.inner.lock().book(first, last, email, tickets)
    }

    /// Cancel a booking under the exclusive lock.
    pub fn cancel(&self, id: BookingId) -> Result<Booking, LedgerError> {
        self.inner.lock().cancel(id)
    }

    /// Run a read-only closure against the ledger under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&Ledger) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Clone the full ledger state for serialization.
    ///
    /// Copy-then-release: the caller serializes and writes the snapshot
    /// after this returns, so the I/O never happens under the lock.
    pub fn snapshot(&self) -> Ledger {
        self.inner.lock().clone()
    }
}
