use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::{
    dao::kv_store::{KeyValueStore, get_json, update_json},
    dto::flags::FlagDto,
    error::ServiceError,
    state::SharedState,
};

/// Store key holding the JSON flag map.
pub const FLAGS_KEY: &str = "logotruffle_flags";

/// Optional features that can be switched on at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureFlag {
    /// `shareable-link`: share URLs on generated brands.
    ShareableLink,
    /// `export-kit`: advisory, front ends only.
    ExportKit,
    /// `brand-voice`: tone and sample copy.
    BrandVoice,
    /// `prompt-editor`: advisory, front ends only.
    PromptEditor,
    /// `a11y-checker`: WCAG contrast report.
    A11yChecker,
}

impl FeatureFlag {
    /// Every flag, in listing order.
    pub const ALL: [Self; 5] = [
        Self::ShareableLink,
        Self::ExportKit,
        Self::BrandVoice,
        Self::PromptEditor,
        Self::A11yChecker,
    ];

    /// Kebab-case name used in the store and in URLs.
    pub const fn key(self) -> &'static str {
        match self {
            Self::ShareableLink => "shareable-link",
            Self::ExportKit => "export-kit",
            Self::BrandVoice => "brand-voice",
            Self::PromptEditor => "prompt-editor",
            Self::A11yChecker => "a11y-checker",
        }
    }

    /// Human-readable summary for listings.
    pub const fn description(self) -> &'static str {
        match self {
            Self::ShareableLink => "Attach a link that reopens the brand with the same inputs",
            Self::ExportKit => "Let front ends offer a downloadable brand kit",
            Self::BrandVoice => "Add tone guidance and sample copy to generated brands",
            Self::PromptEditor => "Let users edit the logo prompt before generating images",
            Self::A11yChecker => "Add WCAG contrast checks for the palette",
        }
    }

    /// Inverse of [`FeatureFlag::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.key() == key)
    }
}

/// Snapshot of stored flag states; unknown keys are kept but ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagStates(BTreeMap<String, bool>);

impl FlagStates {
    /// Stored state of `flag`; absent flags are off.
    pub fn is_enabled(&self, flag: FeatureFlag) -> bool {
        self.0.get(flag.key()).copied().unwrap_or(false)
    }
}

/// Read the flag map. Missing or corrupt data reads as every flag off.
pub fn load_flags(store: &dyn KeyValueStore) -> FlagStates {
    match get_json::<BTreeMap<String, bool>>(store, FLAGS_KEY) {
        Ok(map) => FlagStates(map.unwrap_or_default()),
        Err(err) => {
            warn!(error = %err, "unreadable flag state; treating every flag as off");
            FlagStates::default()
        }
    }
}

/// Rewrite the whole map with `flag` set to `enabled`.
///
/// The read and the rewrite happen as one store update, so concurrent toggles
/// of different flags all survive. Corrupt state is replaced by a fresh map.
pub fn store_flag(
    store: &dyn KeyValueStore,
    flag: FeatureFlag,
    enabled: bool,
) -> Result<FlagStates, ServiceError> {
    let map = update_json(store, FLAGS_KEY, |map: &mut BTreeMap<String, bool>| {
        map.insert(flag.key().to_string(), enabled);
    })?;
    Ok(FlagStates(map))
}

fn describe(flag: FeatureFlag, states: &FlagStates) -> FlagDto {
    FlagDto {
        name: flag.key().to_string(),
        description: flag.description().to_string(),
        enabled: states.is_enabled(flag),
    }
}

/// Every flag definition with its current state.
pub async fn list_flags(state: &SharedState) -> Vec<FlagDto> {
    let states = load_flags(state.store());
    FeatureFlag::ALL
        .into_iter()
        .map(|flag| describe(flag, &states))
        .collect()
}

/// Toggle a flag by name.
pub async fn set_flag(
    state: &SharedState,
    name: &str,
    enabled: bool,
) -> Result<FlagDto, ServiceError> {
    let flag = FeatureFlag::from_key(name)
        .ok_or_else(|| ServiceError::NotFound(format!("unknown flag `{name}`")))?;
    let states = store_flag(state.store(), flag, enabled)?;
    info!(flag = flag.key(), enabled, "feature flag updated");
    Ok(describe(flag, &states))
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;
    use crate::dao::kv_store::MemoryStore;

    #[test]
    fn missing_or_corrupt_state_reads_as_off() {
        let store = MemoryStore::new();
        let states = load_flags(&store);
        assert!(FeatureFlag::ALL.iter().all(|flag| !states.is_enabled(*flag)));

        store.set(FLAGS_KEY, "not json".into()).unwrap();
        assert_eq!(load_flags(&store), FlagStates::default());
    }

    #[test]
    fn setting_a_flag_keeps_the_others() {
        let store = MemoryStore::new();
        store_flag(&store, FeatureFlag::BrandVoice, true).unwrap();
        store_flag(&store, FeatureFlag::A11yChecker, true).unwrap();
        let states = store_flag(&store, FeatureFlag::BrandVoice, false).unwrap();

        assert!(!states.is_enabled(FeatureFlag::BrandVoice));
        assert!(states.is_enabled(FeatureFlag::A11yChecker));
        assert_eq!(load_flags(&store), states);
        assert_eq!(
            store.get(FLAGS_KEY).unwrap().as_deref(),
            Some(r#"{"a11y-checker":true,"brand-voice":false}"#)
        );
    }

    #[test]
    fn corrupt_state_is_replaced_on_write() {
        let store = MemoryStore::new();
        store.set(FLAGS_KEY, "not json".into()).unwrap();
        let states = store_flag(&store, FeatureFlag::ExportKit, true).unwrap();
        assert!(states.is_enabled(FeatureFlag::ExportKit));
        assert_eq!(
            store.get(FLAGS_KEY).unwrap().as_deref(),
            Some(r#"{"export-kit":true}"#)
        );
    }

    #[test]
    fn concurrent_toggles_of_different_flags_all_stick() {
        let store = Arc::new(MemoryStore::new());
        let workers: Vec<_> = FeatureFlag::ALL
            .into_iter()
            .map(|flag| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for round in 0..100 {
                        store_flag(store.as_ref(), flag, round % 2 == 0).unwrap();
                    }
                    store_flag(store.as_ref(), flag, true).unwrap();
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }
        let states = load_flags(store.as_ref());
        assert!(FeatureFlag::ALL.iter().all(|flag| states.is_enabled(*flag)));
    }

    #[test]
    fn keys_round_trip() {
        for flag in FeatureFlag::ALL {
            assert_eq!(FeatureFlag::from_key(flag.key()), Some(flag));
        }
        assert_eq!(FeatureFlag::from_key("dark-mode"), None);
    }
}
