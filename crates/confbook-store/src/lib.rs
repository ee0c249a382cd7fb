#![deny(missing_docs)]

//! # confbook-store — Snapshot Persistence and CSV Export
//!
//! Durably stores and restores the full ledger state (conference +
//! bookings + identifier counter) as a single versionless JSON document,
//! and exports the booking list as CSV.
//!
//! ## Crash Safety
//!
//! [`SnapshotStore::save`] writes to a sibling temp file, fsyncs, and
//! atomically renames over the target. A crash mid-write leaves the
//! previously committed snapshot intact — readers see either the old or
//! the fully-written new document, never a partial one.
//!
//! ## Absent vs Corrupt
//!
//! [`SnapshotStore::load`] returns `Ok(None)` when the snapshot file does
//! not exist (first run) and an error when it exists but cannot be read,
//! parsed, or fails the ledger's consistency check. Callers must treat the
//! two cases differently: absent means "initialize fresh", corrupt means
//! "existing data is broken — stop".

pub mod error;
pub mod export;
pub mod snapshot;

pub use error::StoreError;
pub use export::export_csv;
pub use snapshot::SnapshotStore;
