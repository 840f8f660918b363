//! WCAG 2.1 contrast checks between palette roles.

use crate::engine::{Color, ColorRole, Palette};

/// Minimum ratio for body text at level AA.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for large text at level AA.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for body text at level AAA.
pub const AAA_NORMAL: f64 = 7.0;

/// Foreground/background role pairs a brand site actually renders.
const CHECKED_PAIRS: [(ColorRole, ColorRole); 4] = [
    (ColorRole::Text, ColorRole::Background),
    (ColorRole::Primary, ColorRole::Background),
    (ColorRole::Accent, ColorRole::Background),
    (ColorRole::Background, ColorRole::Primary),
];

/// Verdicts for one foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCheck {
    /// Role drawn on top.
    pub foreground: ColorRole,
    /// Role underneath.
    pub background: ColorRole,
    /// Rounded to two decimals.
    pub ratio: f64,
    /// Meets [`AA_NORMAL`].
    pub aa: bool,
    /// Meets [`AA_LARGE`].
    pub aa_large: bool,
    /// Meets [`AAA_NORMAL`].
    pub aaa: bool,
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]`.
pub fn relative_luminance(color: &Color) -> f64 {
    let [r, g, b] = color.hsl().to_rgb8();
    0.2126f64.mul_add(
        linearize(r),
        0.7152f64.mul_add(linearize(g), 0.0722 * linearize(b)),
    )
}

/// Contrast ratio in `[1, 21]`, independent of argument order.
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Check the pairs a brand site renders, in a fixed order.
pub fn contrast_report(palette: &Palette) -> Vec<ContrastCheck> {
    CHECKED_PAIRS
        .iter()
        .map(|&(foreground, background)| {
            let ratio = contrast_ratio(palette.role(foreground), palette.role(background));
            ContrastCheck {
                foreground,
                background,
                ratio: (ratio * 100.0).round() / 100.0,
                aa: ratio >= AA_NORMAL,
                aa_large: ratio >= AA_LARGE,
                aaa: ratio >= AAA_NORMAL,
            }
        })
        .collect()
}
