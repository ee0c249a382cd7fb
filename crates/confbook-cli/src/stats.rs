//! # Stats Subcommand
//!
//! Prints the conference totals and a quick attendee overview.

use std::path::Path;

use anyhow::Result;
use clap::Args;

/// Arguments for `confbook stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {}

/// Execute the stats subcommand.
pub fn run_stats(_args: &StatsArgs, state_path: &Path) -> Result<u8> {
    let store = crate::store_at(state_path);
    let ledger = crate::open_ledger(&store)?;
    let conference = ledger.conference();

    println!("Conference: {}", conference.name());
    println!("Total tickets: {}", conference.total_tickets());
    println!("Remaining tickets: {}", conference.remaining_tickets());
    println!("Total bookings: {}", ledger.bookings().len());

    if !ledger.bookings().is_empty() {
        let names: Vec<&str> = ledger
            .bookings()
            .iter()
            .map(|b| b.first_name.as_str())
            .collect();
        println!("Attendees (first names): {}", names.join(", "));
    }
    Ok(0)
}
