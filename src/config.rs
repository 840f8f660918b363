//! Application-level configuration loading: image providers, storage and share links.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::providers::{OpenAiConfig, PollinationsConfig};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "LOGOTRUFFLE_CONFIG_PATH";
/// Environment variable holding the OpenAI API key.
pub const OPENAI_KEY_ENV: &str = "OPENAI_API_KEY";

/// Which key-value backend holds flags and brand history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Process-local map; contents are lost on restart.
    #[default]
    Memory,
    /// JSON file at [`StoreConfig::path`].
    File,
}

/// Storage backend selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backend to open at startup.
    pub kind: StoreKind,
    /// File used by [`StoreKind::File`]; ignored otherwise.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::Memory,
            path: PathBuf::from("data/store.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Primary image provider, used only when an API key is present.
    pub openai: OpenAiConfig,
    /// Keyless provider tried after OpenAI.
    pub fallback: PollinationsConfig,
    /// Where flags and brand history live.
    pub store: StoreConfig,
    /// Front-end URL that share links point at.
    pub share_base_url: String,
    /// Read from [`OPENAI_KEY_ENV`], never from the file.
    #[serde(skip)]
    pub openai_api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai: OpenAiConfig::default(),
            fallback: PollinationsConfig::default(),
            store: StoreConfig::default(),
            share_base_url: "http://localhost:3000/".into(),
            openai_api_key: None,
        }
    }
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let mut config = Self::load_file();
        config.openai_api_key = env::var(OPENAI_KEY_ENV)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        if config.openai_api_key.is_none() {
            info!(var = OPENAI_KEY_ENV, "no OpenAI key set; primary image provider disabled");
        }
        config
    }

    fn load_file() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    info!(
                        path = %path.display(),
                        store = ?config.store.kind,
                        "loaded configuration"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a JSON document; absent sections keep their defaults.
    pub fn parse(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
