/// JSON-file backend.
pub mod file;
/// In-memory backend.
pub mod memory;

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::dao::storage::{StorageError, StorageResult};

pub use self::file::FileStore;
pub use self::memory::MemoryStore;

/// Closure handed to [`KeyValueStore::update`]: receives the current value and
/// returns the one to store in its place.
pub type UpdateFn<'a> = dyn FnMut(Option<String>) -> StorageResult<String> + 'a;

/// Minimal string key-value contract backing flags and brand history.
pub trait KeyValueStore: Send + Sync {
    /// Current value under `key`, `None` when nothing was stored yet.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: String) -> StorageResult<()>;

    /// Read-modify-write `key` as one step: no other writer can interleave
    /// between the read and the write. `apply` runs exactly once; when it fails
    /// the stored value is left untouched.
    fn update(&self, key: &str, apply: &mut UpdateFn<'_>) -> StorageResult<()>;

    /// Backend-specific liveness check.
    fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }
}

/// Read and decode a JSON value stored under `key`.
pub fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> StorageResult<Option<T>> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::invalid_value(key, source)),
        None => Ok(None),
    }
}

/// Atomically decode, modify and re-encode the JSON value under `key`.
///
/// A missing value starts from `T::default()`, and so does an undecodable one
/// (with a warning), so a corrupt entry heals on the next write. Returns the
/// value as stored.
pub fn update_json<T, F>(store: &dyn KeyValueStore, key: &str, mut modify: F) -> StorageResult<T>
where
    T: Serialize + DeserializeOwned + Default,
    F: FnMut(&mut T),
{
    let mut stored = None;
    store.update(key, &mut |current: Option<String>| {
        let mut value = match current.as_deref().map(serde_json::from_str::<T>) {
            Some(Ok(value)) => value,
            Some(Err(err)) => {
                warn!(key, error = %err, "Replacing undecodable stored value");
                T::default()
            }
            None => T::default(),
        };
        modify(&mut value);
        let raw = serde_json::to_string(&value).map_err(|source| StorageError::invalid_value(key, source))?;
        stored = Some(value);
        Ok(raw)
    })?;
    // `update` only succeeds after running the closure
    Ok(stored.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn get_json_decodes_and_flags_corruption() {
        let store = MemoryStore::new();
        let mut flags = BTreeMap::new();
        flags.insert("brand-voice".to_string(), true);

        store.set("flags", serde_json::to_string(&flags).unwrap()).unwrap();
        let loaded: Option<BTreeMap<String, bool>> = get_json(&store, "flags").unwrap();
        assert_eq!(loaded, Some(flags));

        let missing: Option<Vec<u8>> = get_json(&store, "missing").unwrap();
        assert!(missing.is_none());

        store.set("flags", "{not json".into()).unwrap();
        let err = get_json::<BTreeMap<String, bool>>(&store, "flags").unwrap_err();
        assert!(matches!(err, StorageError::InvalidValue { ref key, .. } if key == "flags"));
    }

    #[test]
    fn update_json_starts_from_default_and_heals_corruption() {
        let store = MemoryStore::new();
        let first: Vec<u32> = update_json(&store, "ids", |ids: &mut Vec<u32>| ids.push(1)).unwrap();
        assert_eq!(first, vec![1]);
        let second: Vec<u32> = update_json(&store, "ids", |ids: &mut Vec<u32>| ids.push(2)).unwrap();
        assert_eq!(second, vec![1, 2]);

        store.set("ids", "[1,".into()).unwrap();
        let healed: Vec<u32> = update_json(&store, "ids", |ids: &mut Vec<u32>| ids.push(3)).unwrap();
        assert_eq!(healed, vec![3]);
        assert_eq!(store.get("ids").unwrap().as_deref(), Some("[3]"));
    }

    #[test]
    fn failed_update_leaves_the_value_alone() {
        let store = MemoryStore::new();
        store.set("k", "kept".into()).unwrap();
        let err = store
            .update("k", &mut |_: Option<String>| {
                Err(StorageError::invalid_value(
                    "k",
                    serde_json::from_str::<u8>("x").unwrap_err(),
                ))
            })
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidValue { .. }));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("kept"));

        assert!(store.update("fresh", &mut |_: Option<String>| Err(StorageError::Poisoned)).is_err());
        assert_eq!(store.get("fresh").unwrap(), None);
    }
}
