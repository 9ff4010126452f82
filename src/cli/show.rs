//! Handler for the `show` command: the computed ledger table.

use rust_decimal::Decimal;
use tabled::{Table, Tabled};

use crate::cli::output::{self, format_money};
use crate::cli::ShowArgs;
use crate::config::Config;
use crate::domain::{self, ComputedBet};
use crate::error::Result;
use crate::port::BetStore;

#[derive(Tabled)]
struct LedgerRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Bookie")]
    bookie: String,
    #[tabled(rename = "Horse")]
    horse: String,
    #[tabled(rename = "Trainer")]
    trainer: String,
    #[tabled(rename = "Jockey")]
    jockey: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "E/W")]
    each_way: String,
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "P/L")]
    profit_loss: String,
    #[tabled(rename = "Running")]
    running: String,
}

impl LedgerRow {
    fn from_computed(computed: &ComputedBet) -> Self {
        let bet = &computed.bet;
        Self {
            id: short_id(bet.id.as_str()),
            date: bet.date.format("%Y-%m-%d").to_string(),
            bookie: bet.bookie.clone(),
            horse: bet.horse.clone(),
            trainer: bet.trainer.clone(),
            jockey: bet.jockey.clone(),
            odds: optional_number(bet.odds),
            stake: bet.stake.map(format_money).unwrap_or_else(|| "-".into()),
            each_way: each_way_label(bet.each_way, bet.place_fraction),
            outcome: bet.outcome.to_string(),
            profit_loss: format_money(computed.profit_loss),
            running: format_money(computed.running_profit_loss),
        }
    }
}

/// Render the ledger. Running totals are always computed over ledger
/// order first; `--by-date` only reorders the finished rows.
pub fn execute(store: &dyn BetStore, config: &Config, args: &ShowArgs) -> Result<()> {
    let bets = store.load_all()?;
    let (mut computed, summary) = domain::compute(&bets, config.ledger.starting_bank);

    if computed.is_empty() {
        output::note("Ledger is empty.");
        output::note(&format!(
            "Record your first bet with {}",
            output::highlight("turfbook add")
        ));
        return Ok(());
    }

    if args.by_date {
        computed.sort_by_key(|c| c.bet.date);
    }

    let rows: Vec<LedgerRow> = computed.iter().map(LedgerRow::from_computed).collect();
    let table = Table::new(rows).to_string();

    println!();
    for line in table.lines() {
        println!("  {line}");
    }
    println!();
    println!(
        "  {} bets settled, bank {}",
        summary.total_bets,
        format_money(summary.current_bank)
    );
    println!();

    Ok(())
}

fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

fn optional_number(value: Option<Decimal>) -> String {
    value.map(|v| v.normalize().to_string()).unwrap_or_else(|| "-".into())
}

fn each_way_label(each_way: bool, place_fraction: Option<Decimal>) -> String {
    if !each_way {
        return "-".into();
    }
    match place_fraction {
        Some(f) => format!("1/{}", f.normalize()),
        None => "E/W".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn each_way_label_shows_the_place_odds() {
        assert_eq!(each_way_label(true, Some(dec!(5))), "1/5");
        assert_eq!(each_way_label(true, None), "E/W");
        assert_eq!(each_way_label(false, Some(dec!(5))), "-");
    }

    #[test]
    fn unset_odds_render_as_a_dash() {
        assert_eq!(optional_number(None), "-");
        assert_eq!(optional_number(Some(dec!(8.00))), "8");
    }
}
