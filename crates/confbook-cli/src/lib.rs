//! # confbook-cli — Subcommand Handlers
//!
//! One module per subcommand. Every handler takes its parsed `Args` plus
//! the snapshot path and returns a process exit code: 0 for success, 1 for
//! a user-recoverable outcome (validation failure, sold out, not found).
//! Genuine failures — a broken snapshot, an unwritable export path — are
//! `anyhow` errors.

pub mod book;
pub mod cancel;
pub mod export;
pub mod find;
pub mod init;
pub mod list;
pub mod stats;

use std::path::Path;

use anyhow::{bail, Context, Result};

use confbook_ledger::Ledger;
use confbook_store::SnapshotStore;

/// Load the ledger, treating an absent snapshot as a usage error and a
/// corrupt one as fatal.
///
/// Every subcommand except `init` goes through here, so a present-but-
/// unreadable snapshot always stops the command instead of silently
/// starting from an empty ledger.
pub fn open_ledger(store: &SnapshotStore) -> Result<Ledger> {
    match store.load() {
        Ok(Some(ledger)) => Ok(ledger),
        Ok(None) => bail!(
            "no snapshot found at {}; run `confbook init` first",
            store.path().display()
        ),
        Err(err) => Err(err).with_context(|| {
            format!(
                "refusing to run with a broken snapshot at {}",
                store.path().display()
            )
        }),
    }
}

/// Persist the ledger, warning instead of failing.
///
/// The in-memory mutation has already committed; on a save failure the
/// on-disk state diverges until the next successful save, and the user is
/// told so.
pub fn save_or_warn(store: &SnapshotStore, ledger: &Ledger) {
    if let Err(err) = store.save(ledger) {
        tracing::warn!(path = %store.path().display(), error = %err, "snapshot save failed");
        eprintln!("Warning: could not save snapshot: {err}");
    }
}

/// Resolve a snapshot store for the given path.
pub fn store_at(state_path: &Path) -> SnapshotStore {
    SnapshotStore::new(state_path)
}
