//! Trait definitions for external collaborators. Depend only on domain.

mod store;

pub use store::BetStore;
