#![deny(missing_docs)]

//! # confbook-ledger — The Booking Ledger
//!
//! The authoritative in-memory record of one conference's ticket inventory
//! and attendee bookings. All mutation flows through [`Ledger::book`] and
//! [`Ledger::cancel`], which are all-or-nothing: they either apply entirely
//! or leave the ledger untouched.
//!
//! ## Load-Bearing Invariant
//!
//! ```text
//! remaining_tickets + sum(tickets over active bookings) == total_tickets
//! ```
//!
//! Every operation preserves this. [`Ledger::check_invariants`] verifies it
//! (plus identifier uniqueness and counter monotonicity) and is run on every
//! snapshot load.
//!
//! ## Sharing
//!
//! Front-ends hold a [`SharedLedger`] — an `Arc<parking_lot::Mutex<Ledger>>`
//! wrapper that serializes every read-modify-write region behind one
//! exclusive lock. Snapshot-for-save is copy-then-release: the state is
//! cloned under the lock and serialized after it is dropped.

pub mod booking;
pub mod conference;
pub mod ledger;
pub mod shared;

pub use booking::Booking;
pub use conference::Conference;
pub use ledger::{Ledger, LedgerError};
pub use shared::SharedLedger;
