use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::brand::{Brand, BrandInput, LogoStyle, Vibe};
use crate::engine::ColorRole;

/// Palette entry as persisted in brand history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorEntity {
    /// Descriptive color name (e.g. "Cerulean").
    pub name: String,
    /// Uppercase `#RRGGBB` value.
    pub hex: String,
    /// Slot the color fills in the palette.
    pub role: ColorRole,
}

/// Snapshot of a generated brand package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandEntity {
    /// Brand name as entered.
    pub name: String,
    /// Industry tagline picked at generation time.
    pub tagline: String,
    /// Five colors in role order.
    pub colors: Vec<ColorEntity>,
    /// Google Fonts family for headings.
    pub heading_font: String,
    /// Google Fonts family for body copy.
    pub body_font: String,
    /// Four personality traits.
    pub personality: Vec<String>,
    /// Visual direction the brand was classified into.
    pub vibe: Vibe,
    /// Text rendered in the logo.
    pub logo_text: String,
    /// Emoji glyph shown next to the logo text.
    pub logo_icon: String,
    /// Requested logo style.
    pub logo_style: LogoStyle,
    /// Prompt handed to image providers.
    pub logo_prompt: String,
}

impl From<&Brand> for BrandEntity {
    fn from(brand: &Brand) -> Self {
        Self {
            name: brand.name.clone(),
            tagline: brand.tagline.to_string(),
            colors: brand
                .palette
                .colors()
                .iter()
                .map(|color| ColorEntity {
                    name: color.name.clone(),
                    hex: color.hex.clone(),
                    role: color.role,
                })
                .collect(),
            heading_font: brand.fonts.heading.to_string(),
            body_font: brand.fonts.body.to_string(),
            personality: brand.personality.iter().map(|t| t.to_string()).collect(),
            vibe: brand.vibe,
            logo_text: brand.logo_text.clone(),
            logo_icon: brand.logo_icon.to_string(),
            logo_style: brand.logo_style,
            logo_prompt: brand.logo_prompt.clone(),
        }
    }
}

/// One entry of the brand history list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedBrandEntity {
    /// Stable identifier for the entry.
    pub id: Uuid,
    /// RFC 3339 timestamp of the generation.
    pub created_at: String,
    /// Inputs the brand was generated from.
    pub inputs: BrandInput,
    /// The generated package.
    pub brand: BrandEntity,
}
