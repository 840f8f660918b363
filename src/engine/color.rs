//! HSL colors, hex output and the palette container.

use std::fmt;

use palette::{FromColor, Srgb, encoding};
use serde::{Deserialize, Serialize};

use super::{anchors::normalize_hue, naming::name_color};

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation, 0 to 100.
    pub s: f64,
    /// Lightness, 0 to 100.
    pub l: f64,
}

impl Hsl {
    /// Triple as given, without normalization.
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Wrap the hue into `[0, 360)` and clamp the percentages.
    pub fn normalized(self) -> Self {
        Self {
            h: normalize_hue(self.h),
            s: self.s.clamp(0.0, 100.0),
            l: self.l.clamp(0.0, 100.0),
        }
    }

    /// Standard HSL to sRGB conversion, channels rounded to the nearest integer.
    pub fn to_rgb8(self) -> [u8; 3] {
        let Self { h, s, l } = self.normalized();
        // f64 throughout; f32 lands a step off on half-integer channel values
        let hsl = palette::Hsl::<encoding::Srgb, f64>::new(h, s / 100.0, l / 100.0);
        let rgb = Srgb::<f64>::from_color(hsl);
        [channel(rgb.red), channel(rgb.green), channel(rgb.blue)]
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

#[inline]
fn channel(value: f64) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let byte = (value * 255.0).round().clamp(0.0, 255.0) as u8;
    byte
}

/// Semantic slot a color fills inside a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorRole {
    /// Main brand color.
    Primary,
    /// Analogous companion to the primary.
    Secondary,
    /// Triadic or complementary highlight.
    Accent,
    /// Near-white page background.
    Background,
    /// Dark body text.
    Text,
}

impl ColorRole {
    /// Every role in palette order.
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Background,
        Self::Text,
    ];

    /// Role name as shown to users.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Accent => "Accent",
            Self::Background => "Background",
            Self::Text => "Text",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished palette entry. Name and hex both derive from `hsl`, which has
/// already been through ban enforcement.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    /// Descriptive name from the hue bands or the pastel and deep lists.
    pub name: String,
    /// Uppercase `#RRGGBB`.
    pub hex: String,
    /// Slot this color fills.
    pub role: ColorRole,
    hsl: Hsl,
}

impl Color {
    pub(crate) fn from_corrected(role: ColorRole, hsl: Hsl) -> Self {
        Self {
            name: name_color(hsl.h, hsl.s, hsl.l).to_string(),
            hex: hsl.to_hex(),
            role,
            hsl,
        }
    }

    /// The corrected triple behind this color.
    pub const fn hsl(&self) -> Hsl {
        self.hsl
    }
}

/// Five colors in [`ColorRole::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: [Color; 5],
}

impl Palette {
    pub(crate) const fn new(colors: [Color; 5]) -> Self {
        Self { colors }
    }

    /// All five colors.
    pub const fn colors(&self) -> &[Color; 5] {
        &self.colors
    }

    /// Color filling `role`.
    pub fn role(&self, role: ColorRole) -> &Color {
        &self.colors[role as usize]
    }

    /// Shorthand for the [`ColorRole::Primary`] entry.
    pub fn primary(&self) -> &Color {
        self.role(ColorRole::Primary)
    }

    /// Accent entry.
    pub fn accent(&self) -> &Color {
        self.role(ColorRole::Accent)
    }

    /// Background entry.
    pub fn background(&self) -> &Color {
        self.role(ColorRole::Background)
    }

    /// Text entry.
    pub fn text(&self) -> &Color {
        self.role(ColorRole::Text)
    }
}

impl IntoIterator for Palette {
    type Item = Color;
    type IntoIter = std::array::IntoIter<Color, 5>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}
