//! Curated anchor hues that raw palette hues are snapped onto.

/// Designer-approved hues in degrees, ascending.
///
/// The 45°..95° hole keeps primaries out of pure yellow and yellow-green.
pub const ANCHOR_HUES: [f64; 35] = [
    0.0, 8.0, 15.0, 22.0, 30.0, 38.0, 45.0, 95.0, 105.0, 115.0, 125.0, 140.0, 150.0, 160.0, 170.0,
    180.0, 188.0, 195.0, 200.0, 210.0, 220.0, 230.0, 240.0, 250.0, 260.0, 270.0, 280.0, 290.0,
    300.0, 310.0, 320.0, 330.0, 340.0, 348.0, 355.0,
];

/// Wrap any hue, negative ones included, into `[0, 360)`.
pub fn normalize_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Shorter way round the color wheel between two hues.
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let diff = (normalize_hue(a) - normalize_hue(b)).abs();
    diff.min(360.0 - diff)
}

/// Snap `hue` to the nearest anchor. Ties go to the anchor listed first.
pub fn snap_to_anchor(hue: f64) -> f64 {
    let hue = normalize_hue(hue);
    let mut best = ANCHOR_HUES[0];
    let mut best_distance = circular_distance(hue, best);
    for &anchor in &ANCHOR_HUES[1..] {
        let distance = circular_distance(hue, anchor);
        if distance < best_distance {
            best = anchor;
            best_distance = distance;
        }
    }
    best
}
