//! # Cancel Subcommand
//!
//! Removes a booking by identifier and restores its tickets to the pool.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use confbook_core::BookingId;

/// Arguments for `confbook cancel`.
#[derive(Args, Debug)]
pub struct CancelArgs {
    /// Identifier of the booking to cancel.
    #[arg(value_name = "ID")]
    pub id: BookingId,
}

/// Execute the cancel subcommand.
pub fn run_cancel(args: &CancelArgs, state_path: &Path) -> Result<u8> {
    let store = crate::store_at(state_path);
    let mut ledger = crate::open_ledger(&store)?;

    match ledger.cancel(args.id) {
        Ok(booking) => {
            crate::save_or_warn(&store, &ledger);
            println!(
                "Booking #{} cancelled; {} ticket(s) restored.",
                booking.id, booking.tickets
            );
            Ok(0)
        }
        Err(err) => {
            println!("Error: {err}");
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{run_book, BookArgs};
    use crate::init::{run_init, InitArgs};

    fn seeded_ledger(path: &Path) {
        run_init(
            &InitArgs {
                name: "RustConf".to_string(),
                tickets: 10,
                force: false,
            },
            path,
        )
        .unwrap();
        run_book(
            &BookArgs {
                first: "Ann".to_string(),
                last: "Lee".to_string(),
                email: "ann@x.com".to_string(),
                tickets: 3,
            },
            path,
        )
        .unwrap();
    }

    #[test]
    fn cancel_restores_tickets_in_the_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        seeded_ledger(&path);

        let code = run_cancel(
            &CancelArgs {
                id: BookingId::new(1),
            },
            &path,
        )
        .unwrap();
        assert_eq!(code, 0);

        let ledger = crate::open_ledger(&crate::store_at(&path)).unwrap();
        assert!(ledger.bookings().is_empty());
        assert_eq!(ledger.conference().remaining_tickets(), 10);
    }

    #[test]
    fn cancel_unknown_id_is_a_user_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        seeded_ledger(&path);

        let code = run_cancel(
            &CancelArgs {
                id: BookingId::new(42),
            },
            &path,
        )
        .unwrap();
        assert_eq!(code, 1);

        let ledger = crate::open_ledger(&crate::store_at(&path)).unwrap();
        assert_eq!(ledger.bookings().len(), 1);
    }
}
