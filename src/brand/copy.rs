//! Static copy pools: industry taglines and logo glyphs.

const INDUSTRY_TAGLINES: [(&str, [&str; 3]); 10] = [
    ("Technology", ["Built for tomorrow.", "Code meets craft.", "Engineering the future."]),
    ("Food & Beverage", ["Taste the difference.", "Crafted with care.", "From our kitchen to yours."]),
    ("Health & Wellness", ["Your best self, daily.", "Wellness redefined.", "Thrive naturally."]),
    ("Fashion", ["Wear your story.", "Style without compromise.", "Designed to move."]),
    ("Finance", ["Your money, your terms.", "Wealth made simple.", "Smart money moves."]),
    ("Education", ["Learn without limits.", "Knowledge, amplified.", "Unlock your potential."]),
    ("Real Estate", ["Find your place.", "Spaces that inspire.", "Home starts here."]),
    ("Creative Agency", ["Ideas that move.", "Create fearlessly.", "Vision to reality."]),
    ("SaaS", ["Simplify everything.", "Work smarter.", "Scale with confidence."]),
    ("Local Business", ["Community first.", "Your neighbor, your partner.", "Local roots, real results."]),
];

const FALLBACK_TAGLINES: [&str; 3] = ["Make your mark.", "Something different.", "Built to last."];

/// Glyphs a logo can be paired with.
pub const LOGO_ICONS: [&str; 15] = [
    "◆", "✦", "⬡", "◎", "△", "⬢", "◈", "▲", "●", "✧", "⟁", "⊕", "⊗", "⬣", "◉",
];

/// Tagline pool for `industry`, falling back to a generic set.
pub fn taglines_for(industry: &str) -> &'static [&'static str; 3] {
    INDUSTRY_TAGLINES
        .iter()
        .find(|(name, _)| *name == industry)
        .map_or(&FALLBACK_TAGLINES, |(_, lines)| lines)
}
