//! Handler for the `stats` command.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::cli::output::{self, format_money};
use crate::cli::StatsArgs;
use crate::config::Config;
use crate::domain;
use crate::error::Result;
use crate::port::BetStore;

/// Print the bankroll summary panel.
pub fn execute(store: &dyn BetStore, config: &Config, args: &StatsArgs) -> Result<()> {
    let bets = store.load_all()?;
    let starting_bank = args.bank.unwrap_or(config.ledger.starting_bank);
    let (_, summary) = domain::compute(&bets, starting_bank);

    let marker = if summary.running_profit_loss >= Decimal::ZERO {
        "✓"
    } else {
        "✗"
    };

    output::section("Bank");
    output::key_value("Start", format_money(summary.starting_bank));
    output::key_value("Current", format_money(summary.current_bank));
    output::key_value(
        "Running P/L",
        format!("{} {marker}", format_money(summary.running_profit_loss)),
    );
    // Staking guidance: 2% and 5% of the current bank.
    output::key_value(
        "Spend per bet 2%",
        format_money(summary.current_bank * dec!(0.02)),
    );
    output::key_value(
        "Spend per bet 5%",
        format_money(summary.current_bank * dec!(0.05)),
    );

    output::section("Totals");
    output::key_value("Wins", summary.wins);
    output::key_value("Places", summary.places);
    output::key_value("Losses", summary.losses);
    output::key_value("Total bets", summary.total_bets);
    output::key_value(
        "Strike rate",
        summary
            .strike_rate()
            .map(|r| format!("{r:.1}%"))
            .unwrap_or_else(|| "N/A".to_string()),
    );
    println!();

    Ok(())
}
