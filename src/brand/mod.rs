//! Brand assembly: wraps the palette engine with fonts, traits, tagline,
//! logo glyph and the logo prompt.

pub mod contrast;
pub mod copy;
pub mod prompt;
pub mod share;
pub mod vibe;
pub mod voice;

use serde::{Deserialize, Serialize};

use crate::engine::{Palette, PersonalitySliders, RandomSource, generate_palette};

pub use self::prompt::LogoStyle;
pub use self::vibe::{FontPair, Vibe};

/// Everything the wizard collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandInput {
    /// Brand name.
    pub name: String,
    /// Industry; unknown ones get default hues and copy.
    pub industry: String,
    /// Core values; only the first three steer the palette.
    #[serde(default)]
    pub values: Vec<String>,
    /// Target audiences, mentioned in the logo prompt.
    #[serde(default)]
    pub audiences: Vec<String>,
    /// Personality slider positions.
    #[serde(default)]
    pub sliders: PersonalitySliders,
    /// Requested logo composition.
    #[serde(default)]
    pub logo_style: LogoStyle,
    /// Optional free text appended to the logo prompt.
    #[serde(default)]
    pub description: String,
}

/// A generated brand package. Built fresh on every generation.
#[derive(Debug, Clone)]
pub struct Brand {
    /// Name from the inputs.
    pub name: String,
    /// Industry tagline.
    pub tagline: &'static str,
    /// Five-color palette.
    pub palette: Palette,
    /// Heading and body fonts for the vibe.
    pub fonts: FontPair,
    /// Personality traits for the vibe.
    pub personality: [&'static str; 4],
    /// Classified visual direction.
    pub vibe: Vibe,
    /// Trimmed name in uppercase.
    pub logo_text: String,
    /// Glyph paired with the logo text.
    pub logo_icon: &'static str,
    /// Requested logo composition.
    pub logo_style: LogoStyle,
    /// Prompt for image providers.
    pub logo_prompt: String,
}

/// Build a brand from `input`. The palette draws first, then font pair,
/// traits, tagline and icon.
pub fn assemble(input: &BrandInput, rng: &mut impl RandomSource) -> Brand {
    let palette = generate_palette(&input.industry, &input.values, &input.sliders, rng);
    let vibe = vibe::classify(&input.industry, &input.sliders);

    let fonts = pick_or_first(rng, vibe.font_pairs());
    let personality = pick_or_first(rng, vibe.trait_sets());
    let tagline = pick_or_first(rng, copy::taglines_for(&input.industry));
    let logo_icon = pick_or_first(rng, &copy::LOGO_ICONS);

    let logo_prompt = prompt::build_logo_prompt(&prompt::PromptParts {
        name: &input.name,
        industry: &input.industry,
        style: input.logo_style,
        traits: &personality,
        audiences: &input.audiences,
        description: &input.description,
        palette: &palette,
    });

    Brand {
        name: input.name.trim().to_string(),
        tagline,
        palette,
        fonts,
        personality,
        vibe,
        logo_text: input.name.trim().to_uppercase(),
        logo_icon,
        logo_style: input.logo_style,
        logo_prompt,
    }
}

fn pick_or_first<T: Copy, const N: usize>(rng: &mut impl RandomSource, items: &[T; N]) -> T {
    *rng.pick(items).unwrap_or(&items[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ColorRole, FixedSequence, UniformSource};

    fn input() -> BrandInput {
        BrandInput {
            name: "  Nimbus Labs ".into(),
            industry: "SaaS".into(),
            values: vec!["Innovation".into(), "Simplicity".into()],
            audiences: vec!["Startups".into()],
            sliders: PersonalitySliders::NEUTRAL,
            logo_style: LogoStyle::Abstract,
            description: String::new(),
        }
    }

    #[test]
    fn assembled_brand_is_complete() {
        let brand = assemble(&input(), &mut UniformSource::seeded(3));
        assert_eq!(brand.name, "Nimbus Labs");
        assert_eq!(brand.logo_text, "NIMBUS LABS");
        assert_eq!(brand.vibe, Vibe::TechyModern);
        assert!(Vibe::TechyModern.font_pairs().contains(&brand.fonts));
        assert!(Vibe::TechyModern.trait_sets().contains(&brand.personality));
        assert!(copy::taglines_for("SaaS").contains(&brand.tagline));
        assert!(copy::LOGO_ICONS.contains(&brand.logo_icon));
        assert_eq!(brand.palette.colors().len(), ColorRole::ALL.len());
        assert!(brand.logo_prompt.contains("an abstract geometric mark"));
        assert!(brand.logo_prompt.contains(brand.palette.primary().hex.as_str()));
    }

    #[test]
    fn fixed_draws_select_pool_entries() {
        // seven palette draws, then font, traits, tagline, icon
        let mut draws = vec![0.5; 7];
        draws.extend([0.99, 0.0, 0.5, 0.0]);
        let brand = assemble(&input(), &mut FixedSequence::new(draws));
        assert_eq!(brand.fonts.heading, "Space Grotesk");
        assert_eq!(brand.personality[0], "Innovative");
        assert_eq!(brand.tagline, "Work smarter.");
        assert_eq!(brand.logo_icon, "◆");
    }

    #[test]
    fn inputs_default_missing_fields() {
        let input: BrandInput =
            serde_json::from_str(r#"{"name":"Acme","industry":"Other"}"#).unwrap();
        assert!(input.values.is_empty());
        assert_eq!(input.sliders, PersonalitySliders::NEUTRAL);
        assert_eq!(input.logo_style, LogoStyle::Combination);
    }
}
