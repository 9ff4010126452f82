//! Persistence adapters for the [`BetStore`](crate::port::BetStore) port.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteBetStore;
