use std::sync::Arc;

use crate::{
    config::{AppConfig, StoreKind},
    dao::{
        kv_store::{FileStore, KeyValueStore, MemoryStore},
        storage::StorageResult,
    },
    services::logo_service::LogoGenerator,
};

/// Handle passed to every handler and service.
pub type SharedState = Arc<AppState>;

/// Central application state: configuration, the key-value store and the logo generator.
pub struct AppState {
    config: AppConfig,
    store: Arc<dyn KeyValueStore>,
    logos: LogoGenerator,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig, store: Arc<dyn KeyValueStore>, logos: LogoGenerator) -> SharedState {
        Arc::new(Self {
            config,
            store,
            logos,
        })
    }

    /// Loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Store holding flags and brand history.
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Provider chain for logo images.
    pub fn logos(&self) -> &LogoGenerator {
        &self.logos
    }
}

/// Open the backend selected by the configuration.
pub fn open_store(config: &AppConfig) -> StorageResult<Arc<dyn KeyValueStore>> {
    Ok(match config.store.kind {
        StoreKind::Memory => Arc::new(MemoryStore::new()),
        StoreKind::File => Arc::new(FileStore::open(&config.store.path)?),
    })
}
