#![deny(missing_docs)]

//! # confbook-core — Foundational Types for the Booking Ledger
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde`, `thiserror`,
//! and `chrono` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** A [`BookingId`] is not a
//!    bare `u64`, and an [`EmailAddress`] is not a bare `String`. Invalid
//!    values cannot be constructed.
//!
//! 2. **Validation at construction time.** [`AttendeeName`],
//!    [`EmailAddress`], and [`TicketCount`] reject malformed input when
//!    parsed and normalize casing on the way in, so everything downstream
//!    (the ledger, the snapshot, the CSV export) sees one canonical form.
//!
//! 3. **[`Timestamp`] is UTC-only with seconds precision.** Booking times
//!    render identically in the snapshot document and the CSV export:
//!    `YYYY-MM-DDTHH:MM:SSZ`.
//!
//! 4. **Structured errors with `thiserror`.** No `Box<dyn Error>`, no
//!    `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod primitives;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use error::ValidationError;
pub use identity::BookingId;
pub use primitives::{AttendeeName, EmailAddress, TicketCount};
pub use temporal::Timestamp;
