//! Command-line interface definitions.

pub mod edit;
pub mod export;
pub mod output;
pub mod show;
pub mod stats;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::config::Config;
use crate::db;
use crate::domain::Outcome;
use crate::error::Result;
use crate::store::SqliteBetStore;

/// Turfbook - personal horse-racing betting ledger.
#[derive(Parser, Debug)]
#[command(name = "turfbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "turfbook.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the ledger with per-bet and running profit/loss
    Show(ShowArgs),

    /// Show bankroll statistics
    Stats(StatsArgs),

    /// Add a bet to the end of the ledger
    Add(AddArgs),

    /// Edit fields of an existing bet
    Edit(EditArgs),

    /// Record the outcome of a bet
    Settle(SettleArgs),

    /// Delete a bet from the ledger
    Delete(DeleteArgs),

    /// Export the raw ledger as JSON
    Export(ExportArgs),
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Sort the view by race date (running totals stay in ledger order)
    #[arg(long)]
    pub by_date: bool,
}

/// Arguments for the `stats` subcommand.
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Override the configured starting bank
    #[arg(long)]
    pub bank: Option<Decimal>,
}

/// Arguments for the `add` subcommand.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Bookmaker name
    #[arg(long, default_value = "")]
    pub bookie: String,

    /// Horse name
    #[arg(long, default_value = "")]
    pub horse: String,

    /// Trainer name
    #[arg(long, default_value = "")]
    pub trainer: String,

    /// Jockey name
    #[arg(long, default_value = "")]
    pub jockey: String,

    /// Race date (YYYY-MM-DD), today if omitted
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Decimal odds (8 means 8/1)
    #[arg(long)]
    pub odds: Option<Decimal>,

    /// Unit stake
    #[arg(long)]
    pub stake: Option<Decimal>,

    /// Record as win-only instead of each-way
    #[arg(long)]
    pub win_only: bool,

    /// Place fraction divisor, e.g. 5 for 1/5 odds
    #[arg(long, default_value = "5")]
    pub place_fraction: Decimal,

    /// Outcome, defaults to pending
    #[arg(long, default_value = "pending")]
    pub outcome: Outcome,
}

/// Arguments for the `edit` subcommand.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Bet id, a unique prefix is enough
    pub id: String,

    #[arg(long)]
    pub bookie: Option<String>,

    #[arg(long)]
    pub horse: Option<String>,

    #[arg(long)]
    pub trainer: Option<String>,

    #[arg(long)]
    pub jockey: Option<String>,

    /// Race date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Decimal odds
    #[arg(long)]
    pub odds: Option<Decimal>,

    /// Unit stake
    #[arg(long)]
    pub stake: Option<Decimal>,

    /// Mark the bet each-way
    #[arg(long, conflicts_with = "win_only")]
    pub each_way: bool,

    /// Mark the bet win-only
    #[arg(long)]
    pub win_only: bool,

    /// Place fraction divisor
    #[arg(long)]
    pub place_fraction: Option<Decimal>,

    #[arg(long)]
    pub outcome: Option<Outcome>,

    /// Manual profit/loss override (free bets, odds boosts)
    #[arg(long, conflicts_with = "clear_profit")]
    pub profit: Option<Decimal>,

    /// Remove a manual profit/loss override
    #[arg(long)]
    pub clear_profit: bool,
}

/// Arguments for the `settle` subcommand.
#[derive(Parser, Debug)]
pub struct SettleArgs {
    /// Bet id, a unique prefix is enough
    pub id: String,

    /// Settled outcome: won, placed, lost or void
    pub outcome: Outcome,

    /// Manual profit/loss override for this bet
    #[arg(long)]
    pub profit: Option<Decimal>,
}

/// Arguments for the `delete` subcommand.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Bet id, a unique prefix is enough
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `export` subcommand.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Commands, config: &Config) -> Result<()> {
    let store = open_store(config)?;
    match command {
        Commands::Show(args) => show::execute(&store, config, &args),
        Commands::Stats(args) => stats::execute(&store, config, &args),
        Commands::Add(args) => edit::execute_add(&store, &args),
        Commands::Edit(args) => edit::execute_edit(&store, &args),
        Commands::Settle(args) => edit::execute_settle(&store, &args),
        Commands::Delete(args) => edit::execute_delete(&store, &args),
        Commands::Export(args) => export::execute(&store, &args),
    }
}

/// Open the configured SQLite store, applying migrations on first use.
fn open_store(config: &Config) -> Result<SqliteBetStore> {
    let pool = db::create_pool(&config.database.path)?;
    db::run_migrations(&pool)?;
    Ok(SqliteBetStore::new(pool))
}
