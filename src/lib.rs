//! Turfbook - a personal horse-racing betting ledger.
//!
//! Records bets (bookie, horse, odds, stake, each-way terms, outcome)
//! and computes per-bet profit/loss, a running total and bankroll
//! statistics, persisted to a local SQLite database.
//!
//! # Architecture
//!
//! The heart of the crate is the pure calculation engine in
//! [`domain`]: `compute` maps the raw ledger plus a starting bank to
//! computed figures, with no I/O and no hidden state. Everything else
//! is plumbing around it:
//!
//! - [`domain`] - Bet records, outcomes and the profit/loss engine
//! - [`port`] - The `BetStore` trait the engine's callers persist through
//! - [`store`] - SQLite and in-memory store adapters
//! - [`db`] - Diesel connection pool, schema and embedded migrations
//! - [`config`] - TOML configuration with logging setup
//! - [`cli`] - clap command definitions and handlers
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use turfbook::domain::{compute, BetRecord, Outcome};
//!
//! let mut bet = BetRecord::blank();
//! bet.odds = Some(dec!(8));
//! bet.stake = Some(dec!(2));
//! bet.each_way = false;
//! bet.outcome = Outcome::Won;
//!
//! let (computed, summary) = compute(&[bet], dec!(100));
//! assert_eq!(computed[0].profit_loss, dec!(16));
//! assert_eq!(summary.current_bank, dec!(116));
//! ```

pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod port;
pub mod store;
