//! # Export Subcommand
//!
//! Writes the booking list to a CSV file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use confbook_store::export_csv;

/// Arguments for `confbook export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output path for the CSV file.
    #[arg(long, default_value = "bookings.csv", value_name = "FILE")]
    pub out: PathBuf,
}

/// Execute the export subcommand.
pub fn run_export(args: &ExportArgs, state_path: &Path) -> Result<u8> {
    let store = crate::store_at(state_path);
    let ledger = crate::open_ledger(&store)?;

    export_csv(&ledger, &args.out)
        .with_context(|| format!("failed to export to {}", args.out.display()))?;

    println!(
        "Exported {} booking(s) to {}",
        ledger.bookings().len(),
        args.out.display()
    );
    Ok(0)
}
