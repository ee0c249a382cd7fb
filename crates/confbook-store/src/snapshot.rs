//! # Snapshot Store
//!
//! Saves and restores the ledger as a single pretty-printed JSON document:
//! `conference {name, total_tickets, remaining_tickets}`, `bookings[]`,
//! `next_id`. Field names are stable — the document carries no version
//! marker.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use confbook_ledger::Ledger;

use crate::error::StoreError;

/// Filesystem-backed snapshot storage for one ledger.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store that reads and writes the given snapshot path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a snapshot file currently exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Durably write the full ledger state.
    ///
    /// Writes the document to `<path>.tmp` in the same directory, fsyncs,
    /// then atomically renames over the target, so a crash mid-write never
    /// corrupts the previously committed snapshot. Parent directories are
    /// created as needed.
    pub fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut document = serde_json::to_vec_pretty(ledger).map_err(StoreError::Encode)?;
        document.push(b'\n');

        // Sibling temp file: the rename below is atomic only within one
        // filesystem.
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(&document)?;
        file.sync_all()?;
        drop(file);

        if let Err(err) = fs::rename(&tmp, &self.path) {
            // Leave no stray temp file behind on failure.
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }

        tracing::debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }

    /// Read and restore the ledger from the snapshot.
    ///
    /// Returns `Ok(None)` when the file is absent (first run). A snapshot
    /// that is present but unreadable, unparseable, or internally
    /// inconsistent is an error — never silently replaced with an empty
    /// ledger.
    pub fn load(&self) -> Result<Option<Ledger>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let ledger: Ledger =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        ledger
            .check_invariants()
            .map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            path = %self.path.display(),
            bookings = ledger.bookings().len(),
            "snapshot loaded"
        );
        Ok(Some(ledger))
    }
}

/// Sibling temp path for the atomic-rename write (`bookings.json.tmp`).
fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}
