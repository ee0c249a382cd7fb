//! # Find Subcommand
//!
//! Looks up bookings by identifier or by email (case-insensitive).

use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;

use confbook_core::BookingId;
use confbook_ledger::Booking;

/// Arguments for `confbook find`.
#[derive(Args, Debug)]
pub struct FindArgs {
    /// Booking identifier to look up.
    #[arg(long, conflicts_with = "email")]
    pub id: Option<BookingId>,

    /// Email address to look up (case-insensitive).
    #[arg(long)]
    pub email: Option<String>,
}

/// Execute the find subcommand. Exit code 1 means no match.
pub fn run_find(args: &FindArgs, state_path: &Path) -> Result<u8> {
    let store = crate::store_at(state_path);
    let ledger = crate::open_ledger(&store)?;

    match (&args.id, &args.email) {
        (Some(id), _) => match ledger.find_by_id(*id) {
            Some(booking) => {
                print_booking(booking);
                Ok(0)
            }
            None => {
                println!("Not found.");
                Ok(1)
            }
        },
        (None, Some(email)) => {
            let matches = ledger.find_by_email(email);
            if matches.is_empty() {
                println!("No bookings for that email.");
                return Ok(1);
            }
            for booking in matches {
                print_booking(booking);
            }
            Ok(0)
        }
        (None, None) => bail!("pass --id or --email"),
    }
}

fn print_booking(booking: &Booking) {
    println!(
        "#{} — {}, {}, {} ticket(s), booked {}",
        booking.id,
        booking.full_name(),
        booking.email,
        booking.tickets,
        booking.booked_at
    );
}
