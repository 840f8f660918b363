use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
    sync::RwLock,
};

use tracing::{debug, info};

use crate::dao::storage::{StorageError, StorageResult};

use super::{KeyValueStore, UpdateFn};

/// JSON-file backed store. The whole map is rewritten on every write, and the
/// in-memory copy only changes once the file on disk has been replaced.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|err| {
                StorageError::unavailable(format!("store file {} is not a JSON object", path.display()), err)
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "Store file missing, starting empty");
                BTreeMap::new()
            }
            Err(err) => {
                return Err(StorageError::unavailable(
                    format!("failed to read store file {}", path.display()),
                    err,
                ));
            }
        };
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// File the store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|err| StorageError::unavailable("failed to encode store".into(), err))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| {
                StorageError::unavailable(format!("failed to create {}", parent.display()), err)
            })?;
        }
        // write beside the target then rename so readers never see half a file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)
            .and_then(|()| fs::rename(&tmp, &self.path))
            .map_err(|err| {
                StorageError::unavailable(format!("failed to write {}", self.path.display()), err)
            })?;
        debug!(path = %self.path.display(), keys = entries.len(), "Store persisted");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> StorageResult<()> {
        self.update(key, &mut |_: Option<String>| Ok(value.clone()))
    }

    fn update(&self, key: &str, apply: &mut UpdateFn<'_>) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        let next = apply(entries.get(key).cloned())?;
        let mut staged = entries.clone();
        staged.insert(key.to_string(), next);
        self.persist(&staged)?;
        *entries = staged;
        Ok(())
    }

    fn health_check(&self) -> StorageResult<()> {
        self.entries
            .read()
            .map(|_| ())
            .map_err(|_| StorageError::Poisoned)
    }
}
