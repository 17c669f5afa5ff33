//! Persistence for the boss list.
//!
//! Only static fields (map, level, interval) are stored. Countdown and
//! selection state never reach disk, so every load starts all timers idle.

mod error;
mod json;

pub use error::StorageError;
pub use json::JsonFileStore;

use bosswatch_types::BossRecord;

use crate::boss::BossRegistry;

/// Load/save boundary for the boss list
pub trait BossStore {
    fn load(&self) -> Result<Vec<BossRecord>, StorageError>;
    fn save(&self, records: &[BossRecord]) -> Result<(), StorageError>;
}

/// Load a registry from a store, rejecting the whole list if any entry is invalid.
pub fn load_registry(store: &impl BossStore) -> Result<BossRegistry, StorageError> {
    let records = store.load()?;
    let registry = BossRegistry::from_records(&records)?;
    tracing::info!(count = registry.len(), "Boss list loaded");
    Ok(registry)
}

/// Write a registry's static fields to a store.
pub fn save_registry(store: &impl BossStore, registry: &BossRegistry) -> Result<(), StorageError> {
    store.save(&registry.to_records())?;
    tracing::info!(count = registry.len(), "Boss list saved");
    Ok(())
}
