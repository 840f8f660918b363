//! Rule-based palette synthesis from industry, core values and sliders.

use tracing::debug;

use super::{
    anchors::{normalize_hue, snap_to_anchor},
    bans::enforce_bans,
    color::{Color, ColorRole, Hsl, Palette},
    random::RandomSource,
    sliders::{Axis, PersonalitySliders},
};

/// Base hue for industries missing from [`INDUSTRY_HUES`].
pub const DEFAULT_INDUSTRY_HUE: f64 = 200.0;
/// Only this many core values feed the hue shift.
pub const MAX_VALUES: usize = 3;

const BASE_JITTER: f64 = 6.0;
/// Share of the averaged value shift applied to the base hue.
const VALUE_SHIFT_WEIGHT: f64 = 0.4;
const PERSONALITY_NUDGE_LIMIT: f64 = 15.0;

/// Base hue in degrees per industry. Lookups are exact and case-sensitive.
pub const INDUSTRY_HUES: [(&str, f64); 14] = [
    ("Technology", 210.0),
    ("Food & Beverage", 20.0),
    ("Health & Wellness", 150.0),
    ("Fashion", 330.0),
    ("Finance", 220.0),
    ("Education", 200.0),
    ("Real Estate", 30.0),
    ("Travel", 190.0),
    ("Entertainment", 280.0),
    ("Non-Profit", 140.0),
    ("E-Commerce", 15.0),
    ("Creative Agency", 300.0),
    ("SaaS", 240.0),
    ("Local Business", 35.0),
];

/// Hue shift in degrees contributed by each core value.
pub const VALUE_HUE_SHIFTS: [(&str, f64); 12] = [
    ("Trust", 10.0),
    ("Innovation", 25.0),
    ("Sustainability", -40.0),
    ("Creativity", 45.0),
    ("Quality", -5.0),
    ("Community", -15.0),
    ("Passion", -30.0),
    ("Simplicity", 5.0),
    ("Excellence", 15.0),
    ("Integrity", 8.0),
    ("Adventure", -20.0),
    ("Empowerment", 30.0),
];

/// Base hue for `industry`, or [`DEFAULT_INDUSTRY_HUE`] when it is unknown.
pub fn industry_base_hue(industry: &str) -> f64 {
    INDUSTRY_HUES
        .iter()
        .find(|(name, _)| *name == industry)
        .map_or(DEFAULT_INDUSTRY_HUE, |(_, hue)| *hue)
}

/// Shift for `value`; unknown values shift nothing.
pub fn value_hue_shift(value: &str) -> f64 {
    VALUE_HUE_SHIFTS
        .iter()
        .find(|(name, _)| *name == value)
        .map_or(0.0, |(_, shift)| *shift)
}

#[inline]
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    (to - from).mul_add(t, from)
}

/// Post-anchor hue offset from the playful/serious and young/mature axes,
/// both given on `[0, 1]`.
fn personality_nudge(playful_serious: f64, young_mature: f64) -> f64 {
    ((playful_serious - 0.5) * 10.0 + (young_mature - 0.5) * -8.0)
        .clamp(-PERSONALITY_NUDGE_LIMIT, PERSONALITY_NUDGE_LIMIT)
}

/// Hue before anchoring: industry base, jitter, value shift and slider nudges.
fn raw_hue<S: AsRef<str>>(
    industry: &str,
    values: &[S],
    sliders: &PersonalitySliders,
    rng: &mut impl RandomSource,
) -> f64 {
    let mut hue = industry_base_hue(industry) + rng.jitter(BASE_JITTER);

    let considered = &values[..values.len().min(MAX_VALUES)];
    if !considered.is_empty() {
        let total: f64 = considered.iter().map(|v| value_hue_shift(v.as_ref())).sum();
        #[allow(clippy::cast_precision_loss)]
        let average = total / considered.len() as f64;
        hue += average * VALUE_SHIFT_WEIGHT;
    }

    hue += (sliders.unit(Axis::CasualFormal) - 0.5) * -15.0;
    hue += (sliders.unit(Axis::FriendAuthority) - 0.5) * 10.0;
    hue
}

/// Generate a five-color palette.
///
/// Every call draws fresh jitter from `rng`, so identical inputs give
/// related but not identical palettes. Unknown industries fall back to
/// [`DEFAULT_INDUSTRY_HUE`] and unknown values shift nothing.
pub fn generate_palette<S: AsRef<str>>(
    industry: &str,
    values: &[S],
    sliders: &PersonalitySliders,
    rng: &mut impl RandomSource,
) -> Palette {
    let friend_auth = sliders.unit(Axis::FriendAuthority);
    let young_mature = sliders.unit(Axis::YoungMature);
    let playful_serious = sliders.unit(Axis::PlayfulSerious);
    let mass_elite = sliders.unit(Axis::MassElite);
    let casual_formal = sliders.unit(Axis::CasualFormal);
    let loud_quiet = sliders.unit(Axis::LoudQuiet);

    let hue = raw_hue(industry, values, sliders, rng);
    let anchor = snap_to_anchor(hue);
    let nudge = personality_nudge(playful_serious, young_mature);
    let primary_h = anchor + nudge;
    debug!(industry, raw = hue, anchor, primary = primary_h, friend_auth, "palette hue resolved");

    let primary_s = (lerp(75.0, 55.0, young_mature)
        + (0.5 - playful_serious) * 10.0
        + (0.5 - loud_quiet) * 10.0
        + rng.jitter(4.0))
    .clamp(52.0, 78.0);
    let primary_l = (lerp(55.0, 40.0, mass_elite) + rng.jitter(3.0)).clamp(38.0, 57.0);
    let primary = Hsl::new(primary_h, primary_s, primary_l);

    let analogous = lerp(25.0, 35.0, playful_serious);
    let secondary_h = if casual_formal > 0.5 {
        primary_h - analogous
    } else {
        primary_h + analogous
    };
    let secondary = Hsl::new(
        secondary_h,
        (primary_s - lerp(15.0, 25.0, young_mature) + rng.jitter(3.0)).clamp(32.0, 58.0),
        (lerp(60.0, 45.0, mass_elite) + rng.jitter(3.0)).clamp(43.0, 62.0),
    );

    // triadic when playful, complementary when serious
    let accent = Hsl::new(
        primary_h + lerp(120.0, 180.0, playful_serious),
        (primary_s + 15.0 + rng.jitter(4.0)).clamp(67.0, 93.0),
        (lerp(55.0, 45.0, loud_quiet) + rng.jitter(3.0)).clamp(43.0, 57.0),
    );

    let background = Hsl::new(
        primary_h,
        lerp(15.0, 5.0, casual_formal).clamp(5.0, 15.0),
        lerp(98.0, 95.0, mass_elite).clamp(95.0, 98.0),
    );

    let text = Hsl::new(
        primary_h + 180.0,
        lerp(25.0, 10.0, loud_quiet).clamp(10.0, 25.0),
        lerp(18.0, 8.0, mass_elite).clamp(8.0, 18.0),
    );

    let finish = |role, hsl: Hsl| {
        let corrected = enforce_bans(Hsl {
            h: normalize_hue(hsl.h),
            ..hsl
        });
        Color::from_corrected(role, corrected)
    };

    Palette::new([
        finish(ColorRole::Primary, primary),
        finish(ColorRole::Secondary, secondary),
        finish(ColorRole::Accent, accent),
        finish(ColorRole::Background, background),
        finish(ColorRole::Text, text),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{
        anchors::circular_distance,
        random::{FixedSequence, UniformSource},
    };

    const NONE: [&str; 0] = [];

    fn slider_grid() -> Vec<PersonalitySliders> {
        let stops = [0.0, 35.0, 50.0, 100.0];
        let mut out = Vec::new();
        for a in stops {
            for b in stops {
                for c in stops {
                    out.push(PersonalitySliders::new([a, b, c, 100.0 - a, b, 100.0 - c]));
                    out.push(PersonalitySliders::new([c, a, b, a, 100.0 - b, c]));
                }
            }
        }
        out
    }

    #[test]
    fn lookups_fall_back_to_defaults() {
        assert_eq!(industry_base_hue("Technology"), 210.0);
        assert_eq!(industry_base_hue("Other"), DEFAULT_INDUSTRY_HUE);
        assert_eq!(industry_base_hue("technology"), DEFAULT_INDUSTRY_HUE);
        assert_eq!(value_hue_shift("Trust"), 10.0);
        assert_eq!(value_hue_shift("Whimsy"), 0.0);
    }

    #[test]
    fn palette_has_five_roles_in_order() {
        let mut rng = UniformSource::seeded(1);
        let palette = generate_palette("Finance", &["Trust"], &PersonalitySliders::NEUTRAL, &mut rng);
        let roles: Vec<_> = palette.colors().iter().map(|c| c.role).collect();
        assert_eq!(roles, ColorRole::ALL.to_vec());
    }

    #[test]
    fn background_and_text_lightness_hold_for_any_input() {
        let mut rng = UniformSource::seeded(99);
        let industries = ["Technology", "Fashion", "Local Business", "Underwater Basket Weaving"];
        for sliders in slider_grid() {
            for industry in industries {
                let palette = generate_palette(industry, &["Passion", "Quality"], &sliders, &mut rng);
                let background = palette.background().hsl();
                let text = palette.text().hsl();
                assert!((95.0..=98.0).contains(&background.l), "{background:?}");
                assert!((8.0..=18.0).contains(&text.l), "{text:?}");
                for color in palette.colors() {
                    let hsl = color.hsl();
                    assert!((0.0..360.0).contains(&hsl.h));
                    assert_eq!(color.hex, hsl.to_hex());
                }
            }
        }
    }

    #[test]
    fn banned_regions_never_survive() {
        let mut rng = UniformSource::seeded(5);
        for sliders in slider_grid() {
            for (industry, _) in INDUSTRY_HUES {
                let palette = generate_palette(industry, &NONE, &sliders, &mut rng);
                for color in palette.colors() {
                    let Hsl { h, s, l } = color.hsl();
                    assert!(!(50.0..=60.0).contains(&h), "{industry}: {:?}", color);
                    assert!(!(s > 85.0 && l > 60.0));
                    if (65.0..=85.0).contains(&h) {
                        assert!(s <= 50.0);
                    }
                }
            }
        }
    }

    #[test]
    fn neutral_technology_trust_lands_on_210_or_220() {
        let mut rng = UniformSource::seeded(42);
        for _ in 0..200 {
            let palette =
                generate_palette("Technology", &["Trust"], &PersonalitySliders::NEUTRAL, &mut rng);
            let primary = palette.primary().hsl();
            assert!(primary.h == 210.0 || primary.h == 220.0, "{primary:?}");
            assert!((95.0..=98.0).contains(&palette.background().hsl().l));
            assert!((8.0..=18.0).contains(&palette.text().hsl().l));
        }
    }

    #[test]
    fn centered_jitter_reproduces_the_formula() {
        let mut rng = FixedSequence::centered();
        let palette =
            generate_palette("Technology", &["Trust"], &PersonalitySliders::NEUTRAL, &mut rng);
        let [primary, secondary, accent, background, text] =
            palette.colors().clone().map(|c| c.hsl());

        // 210 + 4 snaps to 210
        assert_eq!(primary, Hsl::new(210.0, 65.0, 47.5));
        assert_eq!(secondary, Hsl::new(240.0, 45.0, 52.5));
        assert_eq!(accent, Hsl::new(0.0, 80.0, 50.0));
        assert_eq!(background, Hsl::new(210.0, 10.0, 96.5));
        assert_eq!(text, Hsl::new(30.0, 17.5, 13.0));
        assert_eq!(palette.primary().name, "Navy");
        assert_eq!(palette.accent().name, "Crimson");
    }

    #[test]
    fn jitter_extremes_shift_the_base_hue() {
        let mut low = FixedSequence::new([0.0]);
        let mut high = FixedSequence::new([0.999_999_999]);
        let low = generate_palette("Travel", &NONE, &PersonalitySliders::NEUTRAL, &mut low);
        let high = generate_palette("Travel", &NONE, &PersonalitySliders::NEUTRAL, &mut high);
        // 190 - 6 = 184 -> 180, 190 + 6 = 196 -> 195
        assert_eq!(low.primary().hsl().h, 180.0);
        assert_eq!(high.primary().hsl().h, 195.0);
    }

    #[test]
    fn sliders_steer_secondary_and_accent_offsets() {
        let formal_serious = PersonalitySliders::new([50.0, 50.0, 100.0, 50.0, 100.0, 50.0]);
        let mut rng = FixedSequence::centered();
        let palette = generate_palette("Other", &NONE, &formal_serious, &mut rng);
        let primary = palette.primary().hsl().h;
        let secondary = palette.role(ColorRole::Secondary).hsl().h;
        let accent = palette.accent().hsl().h;
        assert!((circular_distance(primary - 35.0, secondary)).abs() < 1e-9);
        assert!((circular_distance(primary + 180.0, accent)).abs() < 1e-9);
    }

    fn centered_primary(industry: &str, values: &[&str], sliders: [f64; 6]) -> Hsl {
        let sliders = PersonalitySliders::new(sliders);
        generate_palette(industry, values, &sliders, &mut FixedSequence::centered())
            .primary()
            .hsl()
    }

    #[test]
    fn slider_extremes_move_the_primary() {
        // 200 + 7.5 - 5 = 202.5 snaps to 200, then -5 + 4
        assert_eq!(centered_primary("Other", &[], [0.0; 6]), Hsl::new(199.0, 78.0, 55.0));
        // 210 - 7.5 + 5 = 207.5 snaps to 210, then +5 - 4; saturation 55 - 5 - 5 clamps up
        assert_eq!(centered_primary("Technology", &[], [100.0; 6]), Hsl::new(211.0, 52.0, 40.0));
    }

    #[test]
    fn playful_and_loud_terms_steer_saturation() {
        // young and playful: 75 + 5, quiet: -5
        assert_eq!(
            centered_primary("Technology", &[], [50.0, 0.0, 0.0, 50.0, 50.0, 100.0]),
            Hsl::new(209.0, 75.0, 47.5)
        );
        // mature and serious: 55 - 5, loud: +5
        assert_eq!(
            centered_primary("Technology", &[], [50.0, 100.0, 100.0, 50.0, 50.0, 0.0]),
            Hsl::new(211.0, 55.0, 47.5)
        );
    }

    #[test]
    fn casual_and_friendly_axes_shift_the_raw_hue() {
        // formal only: 200 - 7.5 = 192.5 snaps to 195
        assert_eq!(centered_primary("Other", &[], [50.0, 50.0, 50.0, 50.0, 100.0, 50.0]).h, 195.0);
        // authority only: 200 + 5 = 205 ties 200 and 210, first anchor wins
        assert_eq!(centered_primary("Other", &[], [100.0, 50.0, 50.0, 50.0, 50.0, 50.0]).h, 200.0);
        // friendly only: 200 - 5 = 195
        assert_eq!(centered_primary("Other", &[], [0.0, 50.0, 50.0, 50.0, 50.0, 50.0]).h, 195.0);
    }

    #[test]
    fn value_shifts_are_averaged() {
        // (10 - 40) / 2 * 0.4 = -6: 194 snaps to 195
        let neutral = [50.0; 6];
        assert_eq!(centered_primary("Other", &["Trust", "Sustainability"], neutral).h, 195.0);
        // (25 + 45 - 30) / 3 * 0.4 = 5.33: 205.33 snaps to 210; the fourth value is ignored
        assert_eq!(
            centered_primary("Other", &["Innovation", "Creativity", "Passion", "Sustainability"], neutral).h,
            210.0
        );
    }

    #[test]
    fn personality_nudge_is_bounded() {
        assert_eq!(personality_nudge(0.5, 0.5), 0.0);
        assert_eq!(personality_nudge(1.0, 0.0), 9.0);
        assert_eq!(personality_nudge(0.0, 1.0), -9.0);
        assert_eq!(personality_nudge(3.0, 0.5), PERSONALITY_NUDGE_LIMIT);
        assert_eq!(personality_nudge(-3.0, 0.5), -PERSONALITY_NUDGE_LIMIT);
    }

    #[test]
    fn only_three_values_are_considered() {
        let sliders = PersonalitySliders::NEUTRAL;
        let three = ["Trust", "Trust", "Trust"];
        let four = ["Trust", "Trust", "Trust", "Creativity"];
        let a = generate_palette("Other", &three, &sliders, &mut FixedSequence::centered());
        let b = generate_palette("Other", &four, &sliders, &mut FixedSequence::centered());
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_generation_is_thematically_stable() {
        let sliders = PersonalitySliders::new([20.0, 70.0, 40.0, 80.0, 60.0, 30.0]);
        let mut rng = UniformSource::seeded(2024);
        let first = generate_palette("Fashion", &["Creativity"], &sliders, &mut rng);
        for _ in 0..100 {
            let next = generate_palette("Fashion", &["Creativity"], &sliders, &mut rng);
            let delta = circular_distance(first.primary().hsl().h, next.primary().hsl().h);
            // base jitter spans 12 degrees and may cross into a neighbouring anchor
            assert!(delta <= 25.0, "primary drifted {delta}");
        }
    }
}
