//! # confbook CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;

use clap::Parser;

/// Conference ticket-booking record keeper.
///
/// Tracks one conference's ticket inventory and attendee bookings in a
/// durable JSON snapshot. Run `confbook init` once, then book, cancel,
/// find, and export.
#[derive(Parser, Debug)]
#[command(name = "confbook", version, about)]
struct Cli {
    /// Path of the ledger snapshot file.
    #[arg(
        long,
        global = true,
        env = "CONFBOOK_STATE",
        default_value = "bookings.json",
        value_name = "FILE"
    )]
    state: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Create a fresh conference ledger.
    Init(confbook_cli::init::InitArgs),
    /// Book tickets for an attendee.
    Book(confbook_cli::book::BookArgs),
    /// Cancel a booking and restore its tickets.
    Cancel(confbook_cli::cancel::CancelArgs),
    /// List all bookings.
    List(confbook_cli::list::ListArgs),
    /// Find bookings by identifier or email.
    Find(confbook_cli::find::FindArgs),
    /// Show conference statistics.
    Stats(confbook_cli::stats::StatsArgs),
    /// Export bookings to CSV.
    Export(confbook_cli::export::ExportArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let code = match &cli.command {
        Commands::Init(args) => confbook_cli::init::run_init(args, &cli.state)?,
        Commands::Book(args) => confbook_cli::book::run_book(args, &cli.state)?,
        Commands::Cancel(args) => confbook_cli::cancel::run_cancel(args, &cli.state)?,
        Commands::List(args) => confbook_cli::list::run_list(args, &cli.state)?,
        Commands::Find(args) => confbook_cli::find::run_find(args, &cli.state)?,
        Commands::Stats(args) => confbook_cli::stats::run_stats(args, &cli.state)?,
        Commands::Export(args) => confbook_cli::export::run_export(args, &cli.state)?,
    };

    std::process::exit(code.into());
}
