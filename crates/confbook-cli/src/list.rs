//! # List Subcommand
//!
//! Prints all bookings in insertion order.

use std::path::Path;

use anyhow::Result;
use clap::Args;

/// Arguments for `confbook list`.
#[derive(Args, Debug)]
pub struct ListArgs {}

/// Execute the list subcommand.
pub fn run_list(_args: &ListArgs, state_path: &Path) -> Result<u8> {
    let store = crate::store_at(state_path);
    let ledger = crate::open_ledger(&store)?;

    if ledger.bookings().is_empty() {
        println!("No bookings yet.");
        return Ok(0);
    }

    println!(
        "{:<6} {:<24} {:<28} {:>7}  {}",
        "ID", "NAME", "EMAIL", "TICKETS", "BOOKED AT"
    );
    for booking in ledger.bookings() {
        println!(
            "{:<6} {:<24} {:<28} {:>7}  {}",
            booking.id,
            booking.full_name(),
            booking.email,
            booking.tickets,
            booking.booked_at
        );
    }
    Ok(0)
}
