//! # CSV Export
//!
//! Writes the booking list as comma-separated values: a mandatory header
//! row, then one row per booking in insertion order with the timestamp in
//! RFC 3339. Read-only with respect to the ledger.

use std::fs;
use std::path::Path;

use confbook_ledger::Ledger;

use crate::error::StoreError;

/// The mandatory header row.
const HEADER: &str = "id,first_name,last_name,email,tickets,booked_at";

/// Export all bookings to a CSV file at `path`.
///
/// # Errors
///
/// Returns [`StoreError::Io`] when the file cannot be created or written;
/// the ledger is unaffected either way.
pub fn export_csv(ledger: &Ledger, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let mut out = String::with_capacity(64 * (ledger.bookings().len() + 1));
    out.push_str(HEADER);
    out.push('\n');

    for booking in ledger.bookings() {
        let row = [
            booking.id.to_string(),
            field(booking.first_name.as_str()),
            field(booking.last_name.as_str()),
            field(booking.email.as_str()),
            booking.tickets.to_string(),
            booking.booked_at.to_rfc3339(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    fs::write(path.as_ref(), out)?;
    tracing::debug!(
        path = %path.as_ref().display(),
        rows = ledger.bookings().len(),
        "bookings exported"
    );
    Ok(())
}

/// Quote a field if it contains a comma, quote, or line break;
/// embedded quotes are doubled.
fn field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confbook_ledger::Conference;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new(Conference::new("RustConf", 10).unwrap());
        ledger.book("Ann", "Lee", "ann@x.com", 3).unwrap();
        ledger.book("Bo", "Li", "bo@x.com", 2).unwrap();
        ledger
    }

    #[test]
    fn export_writes_header_and_one_row_per_booking() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.csv");

        export_csv(&sample_ledger(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,first_name,last_name,email,tickets,booked_at");
        assert!(lines[1].starts_with("1,Ann,Lee,ann@x.com,3,"));
        assert!(lines[2].starts_with("2,Bo,Li,bo@x.com,2,"));
    }

    #[test]
    fn export_of_empty_ledger_is_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.csv");
        let ledger = Ledger::new(Conference::new("RustConf", 10).unwrap());

        export_csv(&ledger, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "id,first_name,last_name,email,tickets,booked_at\n");
    }

    #[test]
    fn rows_follow_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.csv");
        export_csv(&sample_ledger(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let first_of_each: Vec<_> = content
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(first_of_each, vec!["1", "2"]);
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.csv");
        export_csv(&sample_ledger(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let booked_at = content.lines().nth(1).unwrap().split(',').nth(5).unwrap();
        assert!(booked_at.ends_with('Z'));
        assert_eq!(booked_at.len(), "2026-08-01T09:00:00Z".len());
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.csv");

        let mut ledger = Ledger::new(Conference::new("RustConf", 10).unwrap());
        ledger.book("Ann", "lee, jr", "ann@x.com", 1).unwrap();
        export_csv(&ledger, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.lines().nth(1).unwrap().contains("\"Lee, Jr\""));
    }

    #[test]
    fn export_to_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("bookings.csv");
        let err = export_csv(&sample_ledger(), &path).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
