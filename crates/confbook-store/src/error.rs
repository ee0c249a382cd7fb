//! Store-specific error types.
//!
//! Every error carries the snapshot path where it applies, so a failed
//! startup names the file an operator has to look at.

use std::path::PathBuf;

use thiserror::Error;

use confbook_ledger::LedgerError;

/// Errors that can occur during snapshot persistence or CSV export.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot file exists but is not valid JSON / not a ledger
    /// document.
    #[error("failed to parse snapshot at {path}: {source}")]
    Parse {
        /// Path of the unreadable snapshot.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The snapshot parsed but its contents violate the ledger invariant
    /// (e.g. remaining tickets inconsistent with the booking list).
    #[error("snapshot at {path} is inconsistent: {source}")]
    Corrupt {
        /// Path of the inconsistent snapshot.
        path: PathBuf,
        /// The invariant violation.
        source: LedgerError,
    },

    /// Serializing the ledger to JSON failed.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// I/O error while reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_names_the_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StoreError::Parse {
            path: PathBuf::from("/data/bookings.json"),
            source,
        };
        assert!(format!("{err}").contains("/data/bookings.json"));
    }

    #[test]
    fn io_error_from_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = StoreError::from(io);
        assert!(format!("{err}").contains("access denied"));
    }
}
