//! The profit/loss calculation engine.
//!
//! [`compute`] turns the raw ledger into per-bet results, a running
//! total and a summary. It is pure and total: every input produces a
//! defined numeric result, malformed or unset fields contribute zero,
//! and `Decimal` arithmetic means NaN or infinity can never appear in
//! the output.
//!
//! The running total follows ledger order, which is insertion order.
//! Any sorting is a display concern and must happen after computation,
//! never before.

use rust_decimal::Decimal;

use super::bet::{BetRecord, ComputedBet, Outcome};

/// Summary figures derived from the full computed ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    pub starting_bank: Decimal,
    /// `starting_bank` plus the final running profit/loss.
    pub current_bank: Decimal,
    /// Running profit/loss of the last record, zero for an empty ledger.
    pub running_profit_loss: Decimal,
    pub wins: usize,
    pub places: usize,
    pub losses: usize,
    /// Count of settled records, i.e. every outcome except `Pending`.
    pub total_bets: usize,
}

impl LedgerSummary {
    /// Wins as a percentage of settled bets, `None` when nothing has
    /// settled yet.
    #[must_use]
    pub fn strike_rate(&self) -> Option<f64> {
        if self.total_bets == 0 {
            None
        } else {
            Some(self.wins as f64 / self.total_bets as f64 * 100.0)
        }
    }
}

/// Compute per-bet and running profit/loss plus summary stats.
///
/// Output order and length match the input. Calling this again on the
/// same input yields identical results; there is no hidden state.
pub fn compute(bets: &[BetRecord], starting_bank: Decimal) -> (Vec<ComputedBet>, LedgerSummary) {
    let mut running = Decimal::ZERO;
    let mut computed = Vec::with_capacity(bets.len());

    for bet in bets {
        let profit_loss = profit_loss(bet);
        running += profit_loss;
        computed.push(ComputedBet {
            bet: bet.clone(),
            profit_loss,
            running_profit_loss: running,
        });
    }

    let summary = LedgerSummary {
        starting_bank,
        current_bank: starting_bank + running,
        running_profit_loss: running,
        wins: count_outcome(bets, Outcome::Won),
        places: count_outcome(bets, Outcome::Placed),
        losses: count_outcome(bets, Outcome::Lost),
        total_bets: bets.iter().filter(|b| b.outcome != Outcome::Pending).count(),
    };

    (computed, summary)
}

/// Net profit/loss of a single bet.
///
/// A manual override, when set, is the answer; stake, odds and outcome
/// are not consulted at all. Otherwise a bet with no positive stake and
/// odds is not yet actionable and contributes zero.
pub fn profit_loss(bet: &BetRecord) -> Decimal {
    if let Some(manual) = bet.manual_profit_loss {
        return manual;
    }

    let stake = match positive(bet.stake) {
        Some(s) => s,
        None => return Decimal::ZERO,
    };
    let odds = match positive(bet.odds) {
        Some(o) => o,
        None => return Decimal::ZERO,
    };

    if bet.each_way {
        // Unit stake on each leg, so the total outlay is stake * 2.
        let place_fraction = match positive(bet.place_fraction) {
            Some(f) => f,
            None => return Decimal::ZERO,
        };
        let win_profit = stake * odds;
        let place_profit = stake * (odds / place_fraction);
        match bet.outcome {
            Outcome::Won => win_profit + place_profit,
            // The win half of the stake is lost.
            Outcome::Placed => place_profit - stake,
            Outcome::Lost => -stake * Decimal::TWO,
            Outcome::Void | Outcome::Pending => Decimal::ZERO,
        }
    } else {
        match bet.outcome {
            Outcome::Won => stake * odds,
            // A place on a win-only bet is a loss.
            Outcome::Placed | Outcome::Lost => -stake,
            Outcome::Void | Outcome::Pending => Decimal::ZERO,
        }
    }
}

/// Treat a field as set only when it holds a positive value.
fn positive(field: Option<Decimal>) -> Option<Decimal> {
    field.filter(|v| *v > Decimal::ZERO)
}

fn count_outcome(bets: &[BetRecord], outcome: Outcome) -> usize {
    bets.iter().filter(|b| b.outcome == outcome).count()
}
