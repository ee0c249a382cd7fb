//! # Init Subcommand
//!
//! Creates a fresh conference ledger and writes the first snapshot.
//! Refuses to replace an existing snapshot unless `--force` is passed.

use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;

use confbook_ledger::{Conference, Ledger};

/// Arguments for `confbook init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Conference name.
    #[arg(long, default_value = "Rust Conference")]
    pub name: String,

    /// Total number of tickets.
    #[arg(long, default_value_t = 100)]
    pub tickets: u32,

    /// Replace an existing snapshot.
    #[arg(long)]
    pub force: bool,
}

/// Execute the init subcommand.
pub fn run_init(args: &InitArgs, state_path: &Path) -> Result<u8> {
    let store = crate::store_at(state_path);
    if store.exists() && !args.force {
        bail!(
            "snapshot already exists at {}; pass --force to replace it",
            state_path.display()
        );
    }

    let conference = Conference::new(&args.name, args.tickets)?;
    let ledger = Ledger::new(conference);
    store.save(&ledger)?;

    println!(
        "Initialized '{}' with {} tickets at {}",
        args.name,
        args.tickets,
        state_path.display()
    );
    Ok(0)
}
