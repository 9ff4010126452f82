//! End-to-end flow through the library: persist a ledger, load it back
//! and compute the figures.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use turfbook::db::{create_pool, run_migrations};
use turfbook::domain::{compute, BetRecord, Outcome};
use turfbook::port::BetStore;
use turfbook::store::{MemoryStore, SqliteBetStore};

fn sample_ledger() -> Vec<BetRecord> {
    let each_way = |date, odds, fraction, outcome, horse: &str| BetRecord {
        bookie: "365".into(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        horse: horse.into(),
        odds: Some(odds),
        stake: Some(dec!(2.00)),
        each_way: true,
        place_fraction: Some(fraction),
        outcome,
        ..BetRecord::blank()
    };

    vec![
        each_way("2024-02-23", dec!(8), dec!(5), Outcome::Won, "Northcliff"),
        each_way("2024-02-23", dec!(26), dec!(5), Outcome::Placed, "One Last Hug"),
        BetRecord {
            bookie: "365".into(),
            date: NaiveDate::parse_from_str("2024-02-24", "%Y-%m-%d").unwrap(),
            horse: "Cobh Harbour".into(),
            odds: Some(dec!(13)),
            stake: Some(dec!(2.00)),
            each_way: false,
            place_fraction: None,
            outcome: Outcome::Lost,
            ..BetRecord::blank()
        },
    ]
}

#[test]
fn sqlite_roundtrip_then_compute() {
    let pool = create_pool(":memory:").unwrap();
    run_migrations(&pool).unwrap();
    let store = SqliteBetStore::new(pool);

    store.save_all(&sample_ledger()).unwrap();
    let loaded = store.load_all().unwrap();
    let (computed, summary) = compute(&loaded, dec!(100));

    // Each-way won at 8 with 1/5 place odds: 16 + 3.2.
    assert_eq!(computed[0].profit_loss, dec!(19.2));
    // Each-way placed at 26 with 1/5: 2 * 26/5 - 2.
    assert_eq!(computed[1].profit_loss, dec!(8.4));
    // Win-only lost forfeits the stake.
    assert_eq!(computed[2].profit_loss, dec!(-2));

    let running: Vec<_> = computed.iter().map(|c| c.running_profit_loss).collect();
    assert_eq!(running, vec![dec!(19.2), dec!(27.6), dec!(25.6)]);

    assert_eq!(summary.current_bank, dec!(125.6));
    assert_eq!(summary.wins, 1);
    assert_eq!(summary.places, 1);
    assert_eq!(summary.losses, 1);
    assert_eq!(summary.total_bets, 3);
}

#[test]
fn memory_and_sqlite_stores_agree() {
    let ledger = sample_ledger();

    let memory = MemoryStore::new();
    memory.save_all(&ledger).unwrap();

    let pool = create_pool(":memory:").unwrap();
    run_migrations(&pool).unwrap();
    let sqlite = SqliteBetStore::new(pool);
    sqlite.save_all(&ledger).unwrap();

    assert_eq!(memory.load_all().unwrap(), sqlite.load_all().unwrap());
}

#[test]
fn recompute_after_reload_is_stable() {
    let pool = create_pool(":memory:").unwrap();
    run_migrations(&pool).unwrap();
    let store = SqliteBetStore::new(pool);

    store.save_all(&sample_ledger()).unwrap();
    let first = compute(&store.load_all().unwrap(), dec!(100));
    let second = compute(&store.load_all().unwrap(), dec!(100));
    assert_eq!(first, second);
}
