use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    brand::{
        self, Brand, BrandInput,
        contrast::contrast_report,
        share,
        voice::{BrandVoice, write_voice},
    },
    dao::{
        kv_store::{KeyValueStore, get_json, update_json},
        models::{BrandEntity, SavedBrandEntity},
    },
    dto::{
        brand::{BrandDto, BrandInputDto, BrandResponse, ContrastDto, SavedBrandDto},
        now_rfc3339,
    },
    engine::UniformSource,
    error::ServiceError,
    services::flag_service::{FeatureFlag, load_flags},
    state::SharedState,
};

/// Store key holding the JSON history array.
pub const HISTORY_KEY: &str = "logotruffle_brands";

/// Most recent brands kept in history; older entries are dropped on append.
pub const HISTORY_LIMIT: usize = 200;

/// Assemble with a thread-local RNG; voice copy draws after the brand itself.
fn assemble_brand(input: &BrandInput, with_voice: bool) -> (Brand, Option<BrandVoice>) {
    let mut rng = UniformSource::thread();
    let brand = brand::assemble(input, &mut rng);
    let voice = with_voice.then(|| write_voice(&brand.name, brand.vibe, &mut rng));
    (brand, voice)
}

/// Saved brands, oldest first. Unreadable history reads as empty.
pub fn load_history(store: &dyn KeyValueStore) -> Vec<SavedBrandEntity> {
    match get_json::<Vec<SavedBrandEntity>>(store, HISTORY_KEY) {
        Ok(entries) => entries.unwrap_or_default(),
        Err(err) => {
            warn!(error = %err, "unreadable brand history; starting over");
            Vec::new()
        }
    }
}

/// Append `entry` in a single store update and return the retained count.
/// Unreadable history is replaced rather than extended.
pub fn append_history(
    store: &dyn KeyValueStore,
    entry: SavedBrandEntity,
) -> Result<usize, ServiceError> {
    let entries = update_json(store, HISTORY_KEY, |entries: &mut Vec<SavedBrandEntity>| {
        entries.push(entry.clone());
        let overflow = entries.len().saturating_sub(HISTORY_LIMIT);
        entries.drain(..overflow);
    })?;
    Ok(entries.len())
}

/// Generate a brand package, record it in history and attach flag-gated extras.
pub async fn generate_brand(
    state: &SharedState,
    input: BrandInput,
) -> Result<BrandResponse, ServiceError> {
    let flags = load_flags(state.store());
    let (brand, voice) = assemble_brand(&input, flags.is_enabled(FeatureFlag::BrandVoice));

    let contrast = flags.is_enabled(FeatureFlag::A11yChecker).then(|| {
        contrast_report(&brand.palette)
            .into_iter()
            .map(ContrastDto::from)
            .collect()
    });
    let share_url = if flags.is_enabled(FeatureFlag::ShareableLink) {
        Some(share::share_link(&state.config().share_base_url, &input)?)
    } else {
        None
    };

    let entry = SavedBrandEntity {
        id: Uuid::new_v4(),
        created_at: now_rfc3339(),
        inputs: input,
        brand: BrandEntity::from(&brand),
    };
    let retained = append_history(state.store(), entry.clone())?;
    info!(
        id = %entry.id,
        name = %entry.brand.name,
        vibe = %brand.vibe,
        history = retained,
        "brand generated"
    );

    Ok(BrandResponse {
        id: entry.id,
        created_at: entry.created_at,
        brand: BrandDto::from(&entry.brand),
        voice: voice.map(Into::into),
        contrast,
        share_url,
    })
}

/// Brand history as DTOs, oldest first.
pub async fn list_brands(state: &SharedState) -> Vec<SavedBrandDto> {
    load_history(state.store())
        .into_iter()
        .map(SavedBrandDto::from)
        .collect()
}

/// Decode a share token back into brand inputs.
pub async fn decode_share(
    state: &SharedState,
    payload: &str,
) -> Result<BrandInputDto, ServiceError> {
    if !load_flags(state.store()).is_enabled(FeatureFlag::ShareableLink) {
        return Err(ServiceError::Disabled(format!(
            "feature flag `{}` is off",
            FeatureFlag::ShareableLink.key()
        )));
    }
    let input = share::decode_share(payload)?;
    Ok(input.into())
}
