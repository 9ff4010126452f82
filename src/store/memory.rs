//! In-memory store, used by tests that need a [`BetStore`] without a
//! database behind it.

use parking_lot::Mutex;

use crate::domain::BetRecord;
use crate::error::Result;
use crate::port::BetStore;

/// A [`BetStore`] that keeps the ledger in memory only.
#[derive(Default)]
pub struct MemoryStore {
    bets: Mutex<Vec<BetRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an initial ledger.
    pub fn with_bets(bets: Vec<BetRecord>) -> Self {
        Self {
            bets: Mutex::new(bets),
        }
    }
}

impl BetStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<BetRecord>> {
        Ok(self.bets.lock().clone())
    }

    fn save_all(&self, bets: &[BetRecord]) -> Result<()> {
        *self.bets.lock() = bets.to_vec();
        Ok(())
    }
}
