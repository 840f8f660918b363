use dashmap::{DashMap, mapref::entry::Entry};

use crate::dao::storage::StorageResult;

use super::{KeyValueStore, UpdateFn};

/// Process-local store; contents vanish on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: String) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn update(&self, key: &str, apply: &mut UpdateFn<'_>) -> StorageResult<()> {
        // the entry guard holds the shard lock until the new value is in place
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                let next = apply(Some(occupied.get().clone()))?;
                occupied.insert(next);
            }
            Entry::Vacant(vacant) => {
                let next = apply(None)?;
                vacant.insert(next);
            }
        }
        Ok(())
    }
}
