//! # Book Subcommand
//!
//! Reserves tickets for an attendee, persists the snapshot, and schedules
//! the detached confirmation notification.

use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Args;

use confbook_ledger::Booking;

/// Simulated hand-off delay before the confirmation is logged.
pub const CONFIRMATION_DELAY: Duration = Duration::from_secs(2);

/// Arguments for `confbook book`.
#[derive(Args, Debug)]
pub struct BookArgs {
    /// Attendee first name.
    #[arg(long)]
    pub first: String,

    /// Attendee last name.
    #[arg(long)]
    pub last: String,

    /// Attendee email address.
    #[arg(long)]
    pub email: String,

    /// Number of tickets.
    #[arg(long, default_value_t = 1)]
    pub tickets: u32,
}

/// Execute the book subcommand.
pub fn run_book(args: &BookArgs, state_path: &Path) -> Result<u8> {
    let store = crate::store_at(state_path);
    let mut ledger = crate::open_ledger(&store)?;

    if ledger.conference().sold_out() {
        println!("Sorry, '{}' is sold out.", ledger.conference().name());
        return Ok(1);
    }

    match ledger.book(&args.first, &args.last, &args.email, args.tickets) {
        Ok(booking) => {
            crate::save_or_warn(&store, &ledger);
            println!(
                "Booked! #{} — {} for {} ticket(s) to '{}'.",
                booking.id,
                booking.full_name(),
                booking.tickets,
                ledger.conference().name()
            );
            // Fire-and-forget: a confirmation still in flight when the
            // process exits is dropped.
            let _ = spawn_confirmation(
                booking,
                ledger.conference().name().to_string(),
                CONFIRMATION_DELAY,
            );
            Ok(0)
        }
        Err(err) => {
            println!("Error: {err}");
            Ok(1)
        }
    }
}

/// Schedule the confirmation notification on a detached thread.
///
/// The thread owns a copy of the committed booking and the conference name;
/// it never re-reads live ledger state.
pub fn spawn_confirmation(
    booking: Booking,
    conference: String,
    delay: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        thread::sleep(delay);
        tracing::info!(
            booking = %booking.id,
            email = %booking.email,
            tickets = %booking.tickets,
            conference = %conference,
            "confirmation sent"
        );
    })
}
