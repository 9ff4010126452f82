//! Bet record types.
//!
//! This module provides the value types that flow through the ledger:
//!
//! - [`BetRecord`] - One wagered bet as the user entered it
//! - [`Outcome`] - The settled result of a bet
//! - [`BetId`] - Opaque unique identifier for a record
//!
//! Numeric fields the user may leave blank (`odds`, `stake`,
//! `place_fraction`, `manual_profit_loss`) are `Option<Decimal>`. Parsing
//! from user input happens at the CLI boundary; the calculator decides
//! validity (`> 0`) itself, so an unset or nonsensical value contributes
//! zero rather than failing the computation.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique identifier for a bet record.
///
/// Assigned once at creation and never reused, even after deletion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BetId(String);

impl BetId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BetId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for BetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for BetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The settled result of a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Placed,
    Lost,
    Void,
    Pending,
}

impl Outcome {
    /// Stable text form used for persistence and display.
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Won => "Won",
            Outcome::Placed => "Placed",
            Outcome::Lost => "Lost",
            Outcome::Void => "Void",
            Outcome::Pending => "Pending",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an [`Outcome`] from text.
#[derive(Debug, thiserror::Error)]
#[error("unknown outcome '{0}' (expected won, placed, lost, void or pending)")]
pub struct ParseOutcomeError(String);

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "won" | "win" => Ok(Outcome::Won),
            "placed" | "place" => Ok(Outcome::Placed),
            "lost" | "loss" => Ok(Outcome::Lost),
            "void" => Ok(Outcome::Void),
            "pending" => Ok(Outcome::Pending),
            _ => Err(ParseOutcomeError(s.to_string())),
        }
    }
}

/// One wagered bet, as entered by the user.
///
/// `odds` are decimal odds (8 means 8/1). For each-way bets the `stake`
/// is the unit stake: the total outlay is twice the stake, one unit on
/// the win leg and one on the place leg, with the place leg paying
/// `odds / place_fraction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetRecord {
    pub id: BetId,
    pub bookie: String,
    pub date: NaiveDate,
    pub horse: String,
    pub trainer: String,
    pub jockey: String,
    pub odds: Option<Decimal>,
    pub stake: Option<Decimal>,
    pub each_way: bool,
    pub place_fraction: Option<Decimal>,
    pub outcome: Outcome,
    /// Manual override for free bets, odds boosts, or anything the
    /// automatic math cannot express. When set it replaces the computed
    /// profit/loss entirely.
    pub manual_profit_loss: Option<Decimal>,
}

impl BetRecord {
    /// Create a blank record dated today: outcome pending, each-way on,
    /// 1/5 place odds, everything else unset.
    pub fn blank() -> Self {
        Self {
            id: BetId::new(),
            bookie: String::new(),
            date: Utc::now().date_naive(),
            horse: String::new(),
            trainer: String::new(),
            jockey: String::new(),
            odds: None,
            stake: None,
            each_way: true,
            place_fraction: Some(Decimal::from(5)),
            outcome: Outcome::Pending,
            manual_profit_loss: None,
        }
    }
}

/// A [`BetRecord`] augmented with derived figures.
///
/// Both fields are recomputed from scratch on every change and are never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedBet {
    pub bet: BetRecord,
    /// Net financial result of this single bet.
    pub profit_loss: Decimal,
    /// Cumulative profit/loss over this record and all preceding records
    /// in ledger order.
    pub running_profit_loss: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_unique() {
        assert_ne!(BetId::new(), BetId::new());
    }

    #[test]
    fn outcome_parses_case_insensitively() {
        assert_eq!("WON".parse::<Outcome>().unwrap(), Outcome::Won);
        assert_eq!("place".parse::<Outcome>().unwrap(), Outcome::Placed);
        assert_eq!("void".parse::<Outcome>().unwrap(), Outcome::Void);
        assert!("each-way".parse::<Outcome>().is_err());
    }

    #[test]
    fn outcome_display_roundtrips() {
        for outcome in [
            Outcome::Won,
            Outcome::Placed,
            Outcome::Lost,
            Outcome::Void,
            Outcome::Pending,
        ] {
            assert_eq!(outcome.to_string().parse::<Outcome>().unwrap(), outcome);
        }
    }

    #[test]
    fn blank_record_matches_editor_defaults() {
        let bet = BetRecord::blank();
        assert_eq!(bet.outcome, Outcome::Pending);
        assert!(bet.each_way);
        assert_eq!(bet.place_fraction, Some(Decimal::from(5)));
        assert!(bet.odds.is_none());
        assert!(bet.stake.is_none());
    }
}
