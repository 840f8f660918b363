//! Coarse brand "vibe" derived from sliders and industry, and the font and
//! trait pools keyed by it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::{Axis, PersonalitySliders};

/// Visual direction that selects fonts, traits and voice.
///
/// Derived from the sliders first and the industry second; see [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vibe {
    /// Fallback when no rule matches.
    MinimalClean,
    /// Loud without being casual.
    BoldEnergetic,
    /// Formal and elite.
    LuxuriousPremium,
    /// Playful and young.
    PlayfulFun,
    /// Health, non-profit and food brands.
    EarthyOrganic,
    /// Technology and SaaS brands.
    TechyModern,
    /// Serious and authoritative.
    ClassicTimeless,
    /// Loud and casual.
    EdgyDisruptive,
}

impl Vibe {
    /// Display name such as "Minimal & Clean".
    pub const fn label(self) -> &'static str {
        match self {
            Self::MinimalClean => "Minimal & Clean",
            Self::BoldEnergetic => "Bold & Energetic",
            Self::LuxuriousPremium => "Luxurious & Premium",
            Self::PlayfulFun => "Playful & Fun",
            Self::EarthyOrganic => "Earthy & Organic",
            Self::TechyModern => "Techy & Modern",
            Self::ClassicTimeless => "Classic & Timeless",
            Self::EdgyDisruptive => "Edgy & Disruptive",
        }
    }

    /// Heading/body pairings that suit this vibe.
    pub const fn font_pairs(self) -> &'static [FontPair; 2] {
        match self {
            Self::MinimalClean => &[
                FontPair { heading: "Inter", body: "Inter" },
                FontPair { heading: "Helvetica Neue", body: "Georgia" },
            ],
            Self::BoldEnergetic => &[
                FontPair { heading: "Impact", body: "Arial" },
                FontPair { heading: "Bebas Neue", body: "Open Sans" },
            ],
            Self::LuxuriousPremium => &[
                FontPair { heading: "Playfair Display", body: "Lato" },
                FontPair { heading: "Didot", body: "Garamond" },
            ],
            Self::PlayfulFun => &[
                FontPair { heading: "Fredoka One", body: "Nunito" },
                FontPair { heading: "Baloo 2", body: "Quicksand" },
            ],
            Self::EarthyOrganic => &[
                FontPair { heading: "Merriweather", body: "Source Sans Pro" },
                FontPair { heading: "Libre Baskerville", body: "Cabin" },
            ],
            Self::TechyModern => &[
                FontPair { heading: "JetBrains Mono", body: "Inter" },
                FontPair { heading: "Space Grotesk", body: "IBM Plex Sans" },
            ],
            Self::ClassicTimeless => &[
                FontPair { heading: "Garamond", body: "Caslon" },
                FontPair { heading: "Baskerville", body: "Palatino" },
            ],
            Self::EdgyDisruptive => &[
                FontPair { heading: "Anton", body: "Roboto Mono" },
                FontPair { heading: "Oswald", body: "Source Code Pro" },
            ],
        }
    }

    /// Two alternative sets of four personality words.
    pub const fn trait_sets(self) -> &'static [[&'static str; 4]; 2] {
        match self {
            Self::MinimalClean => &[
                ["Refined", "Intentional", "Calm", "Precise"],
                ["Elegant", "Focused", "Quiet", "Thoughtful"],
            ],
            Self::BoldEnergetic => &[
                ["Fearless", "Loud", "Dynamic", "Unstoppable"],
                ["Fierce", "Vibrant", "Electric", "Relentless"],
            ],
            Self::LuxuriousPremium => &[
                ["Sophisticated", "Exclusive", "Curated", "Opulent"],
                ["Refined", "Prestigious", "Timeless", "Elegant"],
            ],
            Self::PlayfulFun => &[
                ["Joyful", "Witty", "Friendly", "Spontaneous"],
                ["Cheerful", "Quirky", "Warm", "Adventurous"],
            ],
            Self::EarthyOrganic => &[
                ["Grounded", "Authentic", "Nurturing", "Sustainable"],
                ["Wholesome", "Natural", "Honest", "Rooted"],
            ],
            Self::TechyModern => &[
                ["Innovative", "Sharp", "Forward", "Disruptive"],
                ["Smart", "Agile", "Precise", "Cutting-edge"],
            ],
            Self::ClassicTimeless => &[
                ["Trustworthy", "Dignified", "Enduring", "Authoritative"],
                ["Noble", "Established", "Reliable", "Respected"],
            ],
            Self::EdgyDisruptive => &[
                ["Rebellious", "Raw", "Provocative", "Unapologetic"],
                ["Defiant", "Gritty", "Unconventional", "Bold"],
            ],
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Google Fonts families for a brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPair {
    /// Family for headings.
    pub heading: &'static str,
    /// Family for body copy.
    pub body: &'static str,
}

struct VibeRule {
    vibe: Vibe,
    applies: fn(&str, &PersonalitySliders) -> bool,
}

fn formal_elite(_: &str, s: &PersonalitySliders) -> bool {
    s.unit(Axis::CasualFormal) > 0.6 && s.unit(Axis::MassElite) > 0.6
}

fn playful_young(_: &str, s: &PersonalitySliders) -> bool {
    s.unit(Axis::PlayfulSerious) < 0.4 && s.unit(Axis::YoungMature) < 0.4
}

fn loud_casual(_: &str, s: &PersonalitySliders) -> bool {
    s.unit(Axis::LoudQuiet) < 0.35 && s.unit(Axis::CasualFormal) < 0.4
}

fn loud(_: &str, s: &PersonalitySliders) -> bool {
    s.unit(Axis::LoudQuiet) < 0.35
}

fn serious_authority(_: &str, s: &PersonalitySliders) -> bool {
    s.unit(Axis::PlayfulSerious) > 0.6 && s.unit(Axis::FriendAuthority) > 0.6
}

fn tech_industry(industry: &str, _: &PersonalitySliders) -> bool {
    matches!(industry, "Technology" | "SaaS")
}

fn organic_industry(industry: &str, _: &PersonalitySliders) -> bool {
    matches!(industry, "Health & Wellness" | "Non-Profit" | "Food & Beverage")
}

/// Checked top to bottom; first match wins.
const VIBE_RULES: [VibeRule; 7] = [
    VibeRule { vibe: Vibe::LuxuriousPremium, applies: formal_elite },
    VibeRule { vibe: Vibe::PlayfulFun, applies: playful_young },
    VibeRule { vibe: Vibe::EdgyDisruptive, applies: loud_casual },
    VibeRule { vibe: Vibe::BoldEnergetic, applies: loud },
    VibeRule { vibe: Vibe::ClassicTimeless, applies: serious_authority },
    VibeRule { vibe: Vibe::TechyModern, applies: tech_industry },
    VibeRule { vibe: Vibe::EarthyOrganic, applies: organic_industry },
];

/// Pick the vibe from the first classification rule that applies.
pub fn classify(industry: &str, sliders: &PersonalitySliders) -> Vibe {
    VIBE_RULES
        .iter()
        .find(|rule| (rule.applies)(industry, sliders))
        .map_or(Vibe::MinimalClean, |rule| rule.vibe)
}
