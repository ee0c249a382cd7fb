//! # Application State
//!
//! Shared state for the Axum application: the mutex-guarded ledger handle
//! and the snapshot store. Cloning is cheap — both members are `Arc`-backed.

use std::sync::Arc;

use confbook_ledger::{Ledger, SharedLedger};
use confbook_store::SnapshotStore;

/// State passed to all route handlers via the `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The single shared ledger instance.
    pub ledger: SharedLedger,
    /// Snapshot persistence for the ledger.
    pub store: Arc<SnapshotStore>,
}

impl AppState {
    /// Build application state from a ledger and its store.
    pub fn new(ledger: Ledger, store: SnapshotStore) -> Self {
        Self {
            ledger: SharedLedger::new(ledger),
            store: Arc::new(store),
        }
    }

    /// Persist the current ledger state, warning instead of failing.
    ///
    /// The mutation that triggered this call has already committed in
    /// memory; on save failure the on-disk state diverges until the next
    /// successful save. Copy-then-release: the snapshot is cloned under
    /// the lock, serialized and written after it is dropped.
    pub fn persist_or_warn(&self) {
        let snapshot = self.ledger.snapshot();
        if let Err(err) = self.store.save(&snapshot) {
            tracing::warn!(
                path = %self.store.path().display(),
                error = %err,
                "snapshot save failed"
            );
        }
    }
}
