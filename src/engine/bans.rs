//! Designer override rules that steer colors out of unattractive regions.
//!
//! The rules run once, in declaration order, and each one sees the output of
//! the rules before it. They are never iterated to a fixpoint.

use super::color::Hsl;

/// Yellow-green above this saturation reads as acid.
const YELLOW_GREEN_MAX_SAT: f64 = 50.0;
const YELLOW_GREEN_CLAMPED_SAT: f64 = 48.0;
/// Neon look: very saturated and light at the same time.
const NEON_MIN_SAT: f64 = 85.0;
const NEON_MIN_LIGHT: f64 = 60.0;
const NEON_CLAMPED_LIGHT: f64 = 58.0;
const MUDDY_BOOSTED_SAT: f64 = 55.0;

/// Apply all override rules to a single triple.
pub fn enforce_bans(color: Hsl) -> Hsl {
    let Hsl { mut h, mut s, mut l } = color;

    // 1. yellow-green
    if (65.0..=85.0).contains(&h) && s > YELLOW_GREEN_MAX_SAT {
        s = YELLOW_GREEN_CLAMPED_SAT;
    }

    // 2. pure yellow, pushed toward gold or amber
    if (50.0..=60.0).contains(&h) {
        h = if h >= 55.0 { 45.0 } else { 35.0 };
    }

    // 3. neon
    if s > NEON_MIN_SAT && l > NEON_MIN_LIGHT {
        l = NEON_CLAMPED_LIGHT;
    }

    // 4. muddy brown
    if (20.0..=40.0).contains(&h) && (20.0..=40.0).contains(&s) && (30.0..=45.0).contains(&l) {
        s = MUDDY_BOOSTED_SAT;
    }

    Hsl { h, s, l }
}
