//! Store-agnostic domain logic: bet records and the profit/loss engine.

mod bet;
mod ledger;

pub use bet::{BetId, BetRecord, ComputedBet, Outcome, ParseOutcomeError};
pub use ledger::{compute, profit_loss, LedgerSummary};
