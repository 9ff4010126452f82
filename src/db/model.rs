//! Database model types for Diesel ORM.
//!
//! Money columns are stored as decimal strings rather than floats so
//! that values round-trip exactly.

use diesel::prelude::*;

use super::schema::bets;

/// Database row for a bet record.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = bets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BetRow {
    pub id: String,
    /// Ledger order. The running profit/loss follows this, not the date.
    pub position: i32,
    pub bookie: String,
    pub race_date: String,
    pub horse: String,
    pub trainer: String,
    pub jockey: String,
    pub odds: Option<String>,
    pub stake: Option<String>,
    pub each_way: bool,
    pub place_fraction: Option<String>,
    pub outcome: String,
    pub manual_profit_loss: Option<String>,
}
