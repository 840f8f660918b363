use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::models::ColorEntity,
    dto::validation::{neutral_sliders, validate_sliders},
    engine::{Color, ColorRole, PersonalitySliders},
};

/// One palette entry as exposed over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ColorDto {
    pub name: String,
    /// Uppercase `#RRGGBB`.
    pub hex: String,
    /// One of Primary, Secondary, Accent, Background, Text.
    #[schema(value_type = String, example = "Primary")]
    pub role: ColorRole,
}

impl From<&Color> for ColorDto {
    fn from(color: &Color) -> Self {
        Self {
            name: color.name.clone(),
            hex: color.hex.clone(),
            role: color.role,
        }
    }
}

impl From<&ColorEntity> for ColorDto {
    fn from(color: &ColorEntity) -> Self {
        Self {
            name: color.name.clone(),
            hex: color.hex.clone(),
            role: color.role,
        }
    }
}

/// Engine inputs for a bare palette.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct PaletteRequest {
    #[validate(length(min = 1, max = 60))]
    pub industry: String,
    /// Up to three brand values; order matters.
    #[serde(default)]
    #[validate(length(max = 3))]
    pub values: Vec<String>,
    /// Six positions in `[0, 100]`; defaults to all 50.
    #[serde(default = "neutral_sliders")]
    #[validate(custom(function = "validate_sliders"))]
    pub sliders: Vec<f64>,
}

impl PaletteRequest {
    pub fn personality(&self) -> PersonalitySliders {
        sliders_from_slice(&self.sliders)
    }
}

/// Convert a validated slider list; anything malformed reads as neutral.
pub(crate) fn sliders_from_slice(values: &[f64]) -> PersonalitySliders {
    <[f64; 6]>::try_from(values)
        .map(PersonalitySliders::new)
        .unwrap_or_default()
}

/// Five colors in role order.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteResponse {
    pub colors: Vec<ColorDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_use_defaults() {
        let request: PaletteRequest = serde_json::from_str(r#"{"industry":"Travel"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert!(request.values.is_empty());
        assert_eq!(request.personality(), PersonalitySliders::NEUTRAL);
    }

    #[test]
    fn limits_are_enforced() {
        let request: PaletteRequest = serde_json::from_str(
            r#"{"industry":"","values":["a","b","c","d"],"sliders":[1,2,3]}"#,
        )
        .unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("industry"));
        assert!(fields.contains_key("values"));
        assert!(fields.contains_key("sliders"));
    }
}
