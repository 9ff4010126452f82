//! SQLite store implementation using Diesel.

use std::str::FromStr;

use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::Decimal;
use tracing::warn;

use crate::db::model::BetRow;
use crate::db::schema::bets;
use crate::db::DbPool;
use crate::domain::{BetId, BetRecord, Outcome};
use crate::error::{Error, Result};
use crate::port::BetStore;

/// SQLite-backed bet store.
///
/// The ledger is persisted as whole-collection replace: `save_all`
/// deletes and re-inserts every row inside one transaction, so a failed
/// save never leaves a partially written ledger behind.
pub struct SqliteBetStore {
    pool: DbPool,
}

impl SqliteBetStore {
    /// Create a new SQLite bet store.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn to_row(bet: &BetRecord, position: i32) -> BetRow {
        BetRow {
            id: bet.id.to_string(),
            position,
            bookie: bet.bookie.clone(),
            race_date: bet.date.format("%Y-%m-%d").to_string(),
            horse: bet.horse.clone(),
            trainer: bet.trainer.clone(),
            jockey: bet.jockey.clone(),
            odds: bet.odds.map(|d| d.to_string()),
            stake: bet.stake.map(|d| d.to_string()),
            each_way: bet.each_way,
            place_fraction: bet.place_fraction.map(|d| d.to_string()),
            outcome: bet.outcome.as_str().to_string(),
            manual_profit_loss: bet.manual_profit_loss.map(|d| d.to_string()),
        }
    }

    fn from_row(row: BetRow) -> Result<BetRecord> {
        let date = NaiveDate::parse_from_str(&row.race_date, "%Y-%m-%d")
            .map_err(|e| Error::Parse(format!("bad date '{}': {e}", row.race_date)))?;

        let outcome = row.outcome.parse::<Outcome>().unwrap_or_else(|e| {
            warn!(id = %row.id, %e, "treating unknown outcome as pending");
            Outcome::Pending
        });

        Ok(BetRecord {
            id: BetId::from(row.id),
            bookie: row.bookie,
            date,
            horse: row.horse,
            trainer: row.trainer,
            jockey: row.jockey,
            odds: parse_decimal(row.odds.as_deref()),
            stake: parse_decimal(row.stake.as_deref()),
            each_way: row.each_way,
            place_fraction: parse_decimal(row.place_fraction.as_deref()),
            outcome,
            manual_profit_loss: parse_decimal(row.manual_profit_loss.as_deref()),
        })
    }
}

/// Unreadable numeric text degrades to unset rather than failing the
/// whole load; the calculator treats unset as zero anyway.
fn parse_decimal(text: Option<&str>) -> Option<Decimal> {
    text.and_then(|t| Decimal::from_str(t).ok())
}

impl BetStore for SqliteBetStore {
    fn load_all(&self) -> Result<Vec<BetRecord>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<BetRow> = bets::table
            .order(bets::position.asc())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(Self::from_row).collect()
    }

    fn save_all(&self, records: &[BetRecord]) -> Result<()> {
        let rows: Vec<BetRow> = records
            .iter()
            .enumerate()
            .map(|(i, bet)| Self::to_row(bet, i as i32))
            .collect();

        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(bets::table).execute(conn)?;
            diesel::insert_into(bets::table).values(&rows).execute(conn)?;
            Ok(())
        })
        .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations};
    use rust_decimal_macros::dec;

    fn setup_store() -> SqliteBetStore {
        let pool = create_pool(":memory:").expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        SqliteBetStore::new(pool)
    }

    fn sample_bet() -> BetRecord {
        BetRecord {
            bookie: "365".into(),
            horse: "Northcliff".into(),
            trainer: "Mike Murphy & Michael Keady".into(),
            jockey: "Harry Davies".into(),
            odds: Some(dec!(8)),
            stake: Some(dec!(2.00)),
            place_fraction: Some(dec!(5)),
            outcome: Outcome::Won,
            ..BetRecord::blank()
        }
    }

    #[test]
    fn ledger_roundtrip_preserves_fields() {
        let store = setup_store();
        let bet = sample_bet();

        store.save_all(std::slice::from_ref(&bet)).unwrap();
        let loaded = store.load_all().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], bet);
    }

    #[test]
    fn save_replaces_rather_than_appends() {
        let store = setup_store();
        store.save_all(&[sample_bet(), sample_bet()]).unwrap();
        store.save_all(&[sample_bet()]).unwrap();

        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn load_returns_ledger_order_not_date_order() {
        let store = setup_store();
        let mut newer = sample_bet();
        newer.date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut older = sample_bet();
        older.date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

        // Newer bet entered first stays first.
        let ledger = vec![newer.clone(), older.clone()];
        store.save_all(&ledger).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded[0].id, newer.id);
        assert_eq!(loaded[1].id, older.id);
    }

    #[test]
    fn unset_fields_stay_unset() {
        let store = setup_store();
        let bet = BetRecord::blank();

        store.save_all(std::slice::from_ref(&bet)).unwrap();
        let loaded = store.load_all().unwrap();

        assert!(loaded[0].odds.is_none());
        assert!(loaded[0].stake.is_none());
        assert!(loaded[0].manual_profit_loss.is_none());
        assert_eq!(loaded[0].outcome, Outcome::Pending);
    }

    #[test]
    fn empty_ledger_loads_empty() {
        let store = setup_store();
        assert!(store.load_all().unwrap().is_empty());
    }
}
