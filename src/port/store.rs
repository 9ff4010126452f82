//! Store port for ledger persistence.

use crate::domain::BetRecord;
use crate::error::Result;

/// Persistence for the bet collection.
///
/// The store is deliberately dumb: the whole ledger is fetched and
/// replaced as one unit, and `load_all` must return records in ledger
/// order since that order drives the running profit/loss.
///
/// # Implementation Notes
///
/// - `save_all` must be atomic: a failed save leaves the previously
///   persisted collection untouched.
/// - Implementations must be thread-safe (`Send + Sync`).
pub trait BetStore: Send + Sync {
    /// Load every record in ledger order.
    fn load_all(&self) -> Result<Vec<BetRecord>>;

    /// Replace the entire persisted collection.
    fn save_all(&self, bets: &[BetRecord]) -> Result<()>;
}
