//! DTOs for brand generation, history and share links.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    brand::{BrandInput, LogoStyle, contrast::ContrastCheck, voice::BrandVoice},
    dao::models::{BrandEntity, SavedBrandEntity},
    dto::{
        palette::{ColorDto, sliders_from_slice},
        validation::{neutral_sliders, validate_sliders},
    },
};

/// Everything the brand wizard collects.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct BrandInputDto {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[validate(length(min = 1, max = 60))]
    pub industry: String,
    #[serde(default)]
    #[validate(length(max = 3))]
    pub values: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 3))]
    pub audiences: Vec<String>,
    #[serde(default = "neutral_sliders")]
    #[validate(custom(function = "validate_sliders"))]
    pub sliders: Vec<f64>,
    /// wordmark, lettermark, pictorial, abstract, mascot, emblem or combination.
    #[serde(default)]
    #[schema(value_type = String, example = "combination")]
    pub logo_style: LogoStyle,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
}

impl From<BrandInputDto> for BrandInput {
    fn from(dto: BrandInputDto) -> Self {
        Self {
            sliders: sliders_from_slice(&dto.sliders),
            name: dto.name,
            industry: dto.industry,
            values: dto.values,
            audiences: dto.audiences,
            logo_style: dto.logo_style,
            description: dto.description,
        }
    }
}

impl From<BrandInput> for BrandInputDto {
    fn from(input: BrandInput) -> Self {
        Self {
            sliders: input.sliders.values().to_vec(),
            name: input.name,
            industry: input.industry,
            values: input.values,
            audiences: input.audiences,
            logo_style: input.logo_style,
            description: input.description,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FontsDto {
    pub heading: String,
    pub body: String,
}

/// A generated brand package.
#[derive(Debug, Serialize, ToSchema)]
pub struct BrandDto {
    pub name: String,
    pub tagline: String,
    pub colors: Vec<ColorDto>,
    pub fonts: FontsDto,
    pub personality: Vec<String>,
    /// Human-readable vibe label, e.g. "Techy & Modern".
    pub vibe: String,
    pub logo_text: String,
    pub logo_icon: String,
    #[schema(value_type = String, example = "combination")]
    pub logo_style: LogoStyle,
    pub logo_prompt: String,
}

impl From<&BrandEntity> for BrandDto {
    fn from(brand: &BrandEntity) -> Self {
        Self {
            name: brand.name.clone(),
            tagline: brand.tagline.clone(),
            colors: brand.colors.iter().map(ColorDto::from).collect(),
            fonts: FontsDto {
                heading: brand.heading_font.clone(),
                body: brand.body_font.clone(),
            },
            personality: brand.personality.clone(),
            vibe: brand.vibe.label().to_string(),
            logo_text: brand.logo_text.clone(),
            logo_icon: brand.logo_icon.clone(),
            logo_style: brand.logo_style,
            logo_prompt: brand.logo_prompt.clone(),
        }
    }
}

/// Sample copy in the brand's voice.
#[derive(Debug, Serialize, ToSchema)]
pub struct VoiceDto {
    pub tone: String,
    pub headline: String,
    pub call_to_action: String,
    pub social_post: String,
}

impl From<BrandVoice> for VoiceDto {
    fn from(voice: BrandVoice) -> Self {
        Self {
            tone: voice.tone.to_string(),
            headline: voice.headline,
            call_to_action: voice.call_to_action,
            social_post: voice.social_post,
        }
    }
}

/// WCAG verdict for one foreground/background pair.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContrastDto {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub aa: bool,
    pub aa_large: bool,
    pub aaa: bool,
}

impl From<ContrastCheck> for ContrastDto {
    fn from(check: ContrastCheck) -> Self {
        Self {
            foreground: check.foreground.to_string(),
            background: check.background.to_string(),
            ratio: check.ratio,
            aa: check.aa,
            aa_large: check.aa_large,
            aaa: check.aaa,
        }
    }
}

/// Result of `/brands/generate`. Optional sections follow the feature flags.
#[derive(Debug, Serialize, ToSchema)]
pub struct BrandResponse {
    pub id: Uuid,
    pub created_at: String,
    pub brand: BrandDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<VoiceDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<Vec<ContrastDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
}

/// One history entry.
#[derive(Debug, Serialize, ToSchema)]
pub struct SavedBrandDto {
    pub id: Uuid,
    pub created_at: String,
    pub inputs: BrandInputDto,
    pub brand: BrandDto,
}

impl From<SavedBrandEntity> for SavedBrandDto {
    fn from(entry: SavedBrandEntity) -> Self {
        Self {
            brand: BrandDto::from(&entry.brand),
            id: entry.id,
            created_at: entry.created_at,
            inputs: entry.inputs.into(),
        }
    }
}

/// Query string of `/brands/share`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShareQuery {
    /// JSON-encoded brand inputs as produced by a share link.
    pub brand: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PersonalitySliders;

    #[test]
    fn request_maps_onto_engine_inputs() {
        let dto: BrandInputDto = serde_json::from_str(
            r#"{"name":"Acme","industry":"Finance","sliders":[10,20,30,40,50,60],"logo_style":"emblem"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
        let input = BrandInput::from(dto);
        assert_eq!(
            input.sliders,
            PersonalitySliders::new([10.0, 20.0, 30.0, 40.0, 50.0, 60.0])
        );
        assert_eq!(input.logo_style, LogoStyle::Emblem);
        assert!(input.description.is_empty());
    }

    #[test]
    fn oversized_fields_are_rejected() {
        let dto = BrandInputDto {
            name: "x".repeat(61),
            industry: "Finance".into(),
            values: vec![],
            audiences: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            sliders: neutral_sliders(),
            logo_style: LogoStyle::default(),
            description: "y".repeat(501),
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("audiences"));
        assert!(fields.contains_key("description"));
        assert!(!fields.contains_key("industry"));
    }
}
