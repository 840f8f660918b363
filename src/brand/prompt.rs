//! Logo styles and the image-generation prompt built from a brand.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::engine::Palette;

/// Logo composition requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoStyle {
    /// Full name set in type.
    Wordmark,
    /// Initials only.
    Lettermark,
    /// Literal symbol.
    Pictorial,
    /// Geometric mark.
    Abstract,
    /// Illustrated character.
    Mascot,
    /// Name inside a badge or crest.
    Emblem,
    /// Symbol beside the name.
    #[default]
    Combination,
}

impl LogoStyle {
    /// Display name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wordmark => "Wordmark",
            Self::Lettermark => "Lettermark",
            Self::Pictorial => "Pictorial",
            Self::Abstract => "Abstract",
            Self::Mascot => "Mascot",
            Self::Emblem => "Emblem",
            Self::Combination => "Combination",
        }
    }

    const fn direction(self) -> &'static str {
        match self {
            Self::Wordmark => "a typographic wordmark spelling the full brand name",
            Self::Lettermark => "a monogram lettermark built from the brand initials",
            Self::Pictorial => "a simple pictorial symbol that hints at what the brand does",
            Self::Abstract => "an abstract geometric mark",
            Self::Mascot => "a friendly illustrated mascot character",
            Self::Emblem => "an emblem with the name enclosed in a badge or crest",
            Self::Combination => "a symbol paired with the brand name set beside it",
        }
    }
}

/// Everything the prompt mentions, borrowed from the brand being built.
pub struct PromptParts<'a> {
    /// Brand name.
    pub name: &'a str,
    /// Industry as entered.
    pub industry: &'a str,
    /// Requested composition.
    pub style: LogoStyle,
    /// Personality traits; the first two are mentioned.
    pub traits: &'a [&'a str],
    /// Target audiences, possibly empty.
    pub audiences: &'a [String],
    /// Free-text description, possibly empty.
    pub description: &'a str,
    /// Palette whose primary and accent are named in the prompt.
    pub palette: &'a Palette,
}

fn article(word: &str) -> &'static str {
    match word.chars().next() {
        Some(first) if "AEIOUaeiou".contains(first) => "an",
        _ => "a",
    }
}

/// Compose the logo prompt. Deterministic for identical parts.
pub fn build_logo_prompt(parts: &PromptParts<'_>) -> String {
    let industry = parts.industry.trim();
    let mut prompt = format!(
        "Design {} for \"{}\", {} {industry} brand",
        parts.style.direction(),
        parts.name.trim(),
        article(industry),
    );

    if !parts.audiences.is_empty() {
        let _ = write!(prompt, " aimed at {}", parts.audiences.join(", ").to_lowercase());
    }
    prompt.push('.');

    if !parts.traits.is_empty() {
        let _ = write!(
            prompt,
            " Brand personality: {}.",
            parts.traits.join(", ").to_lowercase()
        );
    }

    let primary = parts.palette.primary();
    let accent = parts.palette.accent();
    let _ = write!(
        prompt,
        " Use {} ({}) as the main color with {} ({}) accents on a plain white background.",
        primary.name, primary.hex, accent.name, accent.hex
    );

    let description = parts.description.trim();
    if !description.is_empty() {
        let _ = write!(prompt, " Context: {}", description.trim_end_matches('.'));
        prompt.push('.');
    }

    prompt.push_str(" Flat vector style, crisp edges, centered, no mockups, no gradients.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{FixedSequence, PersonalitySliders, generate_palette};

    fn palette() -> Palette {
        generate_palette(
            "Technology",
            &["Trust"],
            &PersonalitySliders::NEUTRAL,
            &mut FixedSequence::centered(),
        )
    }

    #[test]
    fn prompt_mentions_every_part() {
        let palette = palette();
        let audiences = vec!["Developers".to_string(), "Startups".to_string()];
        let prompt = build_logo_prompt(&PromptParts {
            name: " Nimbus ",
            industry: "Technology",
            style: LogoStyle::Lettermark,
            traits: &["Smart", "Agile"],
            audiences: &audiences,
            description: "Cloud backups for small teams.",
            palette: &palette,
        });

        assert!(prompt.starts_with("Design a monogram lettermark"));
        assert!(prompt.contains("\"Nimbus\", a Technology brand aimed at developers, startups."));
        assert!(prompt.contains("Brand personality: smart, agile."));
        assert!(prompt.contains("Navy (#"));
        assert!(prompt.contains("Context: Cloud backups for small teams."));
        assert!(!prompt.contains(".."));
    }

    #[test]
    fn optional_parts_are_skipped() {
        let palette = palette();
        let prompt = build_logo_prompt(&PromptParts {
            name: "Nimbus",
            industry: "Other",
            style: LogoStyle::default(),
            traits: &[],
            audiences: &[],
            description: "   ",
            palette: &palette,
        });

        assert!(prompt.contains("an Other brand."));
        assert!(!prompt.contains("personality"));
        assert!(!prompt.contains("Context"));
    }

    #[test]
    fn styles_use_snake_case_on_the_wire() {
        let style: LogoStyle = serde_json::from_str("\"pictorial\"").unwrap();
        assert_eq!(style, LogoStyle::Pictorial);
        assert_eq!(LogoStyle::default().label(), "Combination");
    }
}
