//! Descriptive color names from hue bands and saturation/lightness buckets.

use super::anchors::normalize_hue;

/// Above this lightness every hue reads as a pastel.
const PASTEL_MIN_LIGHT: f64 = 90.0;
/// Below this lightness every hue reads as a deep shade.
const DEEP_MAX_LIGHT: f64 = 20.0;
const HIGH_SAT: f64 = 60.0;
const BRIGHT_LIGHT: f64 = 52.0;

/// One name per 45° bucket.
const PASTEL_NAMES: [&str; 8] = [
    "Blush",
    "Cream",
    "Honeydew",
    "Mint",
    "Ice",
    "Powder Blue",
    "Lavender",
    "Petal",
];

const DEEP_NAMES: [&str; 8] = [
    "Oxblood",
    "Espresso",
    "Olive Black",
    "Forest Night",
    "Deep Teal",
    "Midnight",
    "Deep Plum",
    "Black Cherry",
];

/// A contiguous hue band `[start, end)` with its 2×2 name grid:
/// high-sat bright, high-sat dark, low-sat bright, low-sat dark.
struct HueBand {
    start: f64,
    end: f64,
    names: [&'static str; 4],
}

const fn band(start: f64, end: f64, names: [&'static str; 4]) -> HueBand {
    HueBand { start, end, names }
}

/// Red is listed twice because it straddles 0°.
const HUE_BANDS: [HueBand; 14] = [
    band(0.0, 15.0, ["Scarlet", "Crimson", "Dusty Red", "Maroon"]),
    band(15.0, 30.0, ["Vermilion", "Rust", "Terracotta", "Brick"]),
    band(30.0, 45.0, ["Tangerine", "Burnt Orange", "Apricot", "Bronze"]),
    band(45.0, 55.0, ["Marigold", "Amber", "Sand", "Ochre"]),
    band(55.0, 70.0, ["Sunflower", "Mustard", "Wheat", "Olive"]),
    band(70.0, 100.0, ["Lime", "Moss", "Pistachio", "Fern"]),
    band(100.0, 150.0, ["Emerald", "Forest", "Sage", "Hunter"]),
    band(150.0, 180.0, ["Jade", "Pine", "Seafoam", "Spruce"]),
    band(180.0, 195.0, ["Turquoise", "Teal", "Aqua Gray", "Deep Slate"]),
    band(195.0, 210.0, ["Cerulean", "Ocean", "Steel Blue", "Slate"]),
    band(210.0, 250.0, ["Royal Blue", "Navy", "Periwinkle", "Denim"]),
    band(250.0, 290.0, ["Amethyst", "Indigo", "Wisteria", "Eggplant"]),
    band(290.0, 345.0, ["Fuchsia", "Berry", "Mauve", "Mulberry"]),
    band(345.0, 360.0, ["Scarlet", "Crimson", "Dusty Red", "Maroon"]),
];

fn bucket_of_45(hue: f64) -> usize {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (hue / 45.0).floor() as usize;
    index.min(7)
}

/// Human-readable name for an HSL triple. Pure and total.
pub fn name_color(h: f64, s: f64, l: f64) -> &'static str {
    let h = normalize_hue(h);

    if l > PASTEL_MIN_LIGHT {
        return PASTEL_NAMES[bucket_of_45(h)];
    }
    if l < DEEP_MAX_LIGHT {
        return DEEP_NAMES[bucket_of_45(h)];
    }

    let names = HUE_BANDS
        .iter()
        .find(|band| h >= band.start && h < band.end)
        .map_or(HUE_BANDS[0].names, |band| band.names);

    let column = match (s > HIGH_SAT, l > BRIGHT_LIGHT) {
        (true, true) => 0,
        (true, false) => 1,
        (false, true) => 2,
        (false, false) => 3,
    };
    names[column]
}
