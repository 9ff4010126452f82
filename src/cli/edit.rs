//! Handlers for ledger mutations: add, edit, settle, delete.
//!
//! Every handler follows the same load-mutate-save shape: the ledger is
//! fetched whole, changed in memory and written back whole. A failed
//! save propagates the error before anything persisted is touched, so
//! the stored ledger never ends up half-written.

use dialoguer::Confirm;
use tracing::info;

use crate::cli::output;
use crate::cli::{AddArgs, DeleteArgs, EditArgs, SettleArgs};
use crate::domain::BetRecord;
use crate::error::{Error, Result};
use crate::port::BetStore;

/// Append a new bet to the end of the ledger.
pub fn execute_add(store: &dyn BetStore, args: &AddArgs) -> Result<()> {
    let mut bets = store.load_all()?;

    let mut bet = BetRecord::blank();
    bet.bookie = args.bookie.clone();
    bet.horse = args.horse.clone();
    bet.trainer = args.trainer.clone();
    bet.jockey = args.jockey.clone();
    if let Some(date) = args.date {
        bet.date = date;
    }
    bet.odds = args.odds;
    bet.stake = args.stake;
    bet.each_way = !args.win_only;
    bet.place_fraction = if args.win_only {
        None
    } else {
        Some(args.place_fraction)
    };
    bet.outcome = args.outcome;

    let id = bet.id.clone();
    bets.push(bet);
    store.save_all(&bets)?;

    info!(%id, "bet added");
    output::ok(&format!("Added bet {}", short(id.as_str())));
    Ok(())
}

/// Apply field-at-a-time edits to one bet.
pub fn execute_edit(store: &dyn BetStore, args: &EditArgs) -> Result<()> {
    let mut bets = store.load_all()?;
    let index = resolve(&bets, &args.id)?;
    let bet = &mut bets[index];

    if let Some(bookie) = &args.bookie {
        bet.bookie = bookie.clone();
    }
    if let Some(horse) = &args.horse {
        bet.horse = horse.clone();
    }
    if let Some(trainer) = &args.trainer {
        bet.trainer = trainer.clone();
    }
    if let Some(jockey) = &args.jockey {
        bet.jockey = jockey.clone();
    }
    if let Some(date) = args.date {
        bet.date = date;
    }
    if let Some(odds) = args.odds {
        bet.odds = Some(odds);
    }
    if let Some(stake) = args.stake {
        bet.stake = Some(stake);
    }
    if args.each_way {
        bet.each_way = true;
    }
    if args.win_only {
        bet.each_way = false;
    }
    if let Some(fraction) = args.place_fraction {
        bet.place_fraction = Some(fraction);
    }
    if let Some(outcome) = args.outcome {
        bet.outcome = outcome;
    }
    if let Some(profit) = args.profit {
        bet.manual_profit_loss = Some(profit);
    }
    if args.clear_profit {
        bet.manual_profit_loss = None;
    }

    let id = bet.id.clone();
    store.save_all(&bets)?;

    info!(%id, "bet updated");
    output::ok(&format!("Updated bet {}", short(id.as_str())));
    Ok(())
}

/// Record the outcome of a bet.
pub fn execute_settle(store: &dyn BetStore, args: &SettleArgs) -> Result<()> {
    let mut bets = store.load_all()?;
    let index = resolve(&bets, &args.id)?;

    bets[index].outcome = args.outcome;
    if let Some(profit) = args.profit {
        bets[index].manual_profit_loss = Some(profit);
    }

    let id = bets[index].id.clone();
    store.save_all(&bets)?;

    info!(%id, outcome = %args.outcome, "bet settled");
    output::ok(&format!(
        "Settled bet {} as {}",
        short(id.as_str()),
        args.outcome
    ));
    Ok(())
}

/// Remove a bet from the ledger after confirmation.
pub fn execute_delete(store: &dyn BetStore, args: &DeleteArgs) -> Result<()> {
    let mut bets = store.load_all()?;
    let index = resolve(&bets, &args.id)?;

    let label = if bets[index].horse.is_empty() {
        short(bets[index].id.as_str())
    } else {
        bets[index].horse.clone()
    };

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete bet on '{label}'?"))
            .default(false)
            .interact()?;
        if !confirmed {
            output::note("Aborted.");
            return Ok(());
        }
    }

    let removed = bets.remove(index);
    store.save_all(&bets)?;

    info!(id = %removed.id, "bet deleted");
    output::ok(&format!("Deleted bet {}", short(removed.id.as_str())));
    Ok(())
}

/// Find the single bet whose id starts with the given prefix.
fn resolve(bets: &[BetRecord], prefix: &str) -> Result<usize> {
    let mut matches = bets
        .iter()
        .enumerate()
        .filter(|(_, b)| b.id.as_str().starts_with(prefix));

    match (matches.next(), matches.next()) {
        (Some((index, _)), None) => Ok(index),
        (None, _) => Err(Error::UnknownBet(prefix.to_string())),
        (Some(_), Some(_)) => Err(Error::AmbiguousBet(prefix.to_string())),
    }
}

fn short(id: &str) -> String {
    id.chars().take(8).collect()
}
