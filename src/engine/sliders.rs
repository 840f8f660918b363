//! The six bipolar personality axes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Slider axes in their fixed index order. The first pole sits at 0, the
/// second at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Friend (0) to Authority (100).
    FriendAuthority,
    /// Young (0) to Mature (100).
    YoungMature,
    /// Playful (0) to Serious (100).
    PlayfulSerious,
    /// Mass (0) to Elite (100).
    MassElite,
    /// Casual (0) to Formal (100).
    CasualFormal,
    /// Loud (0) to Quiet (100).
    LoudQuiet,
}

impl Axis {
    /// Every axis in index order.
    pub const ALL: [Self; 6] = [
        Self::FriendAuthority,
        Self::YoungMature,
        Self::PlayfulSerious,
        Self::MassElite,
        Self::CasualFormal,
        Self::LoudQuiet,
    ];

    /// Labels for the low and high ends.
    pub const fn poles(self) -> (&'static str, &'static str) {
        match self {
            Self::FriendAuthority => ("Friend", "Authority"),
            Self::YoungMature => ("Young", "Mature"),
            Self::PlayfulSerious => ("Playful", "Serious"),
            Self::MassElite => ("Mass", "Elite"),
            Self::CasualFormal => ("Casual", "Formal"),
            Self::LoudQuiet => ("Loud", "Quiet"),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (low, high) = self.poles();
        write!(f, "{low}/{high}")
    }
}

/// Slider positions in `[0, 100]`, one per [`Axis`]. Serialized as a plain
/// six-element array; deserializing clamps like [`PersonalitySliders::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 6]", into = "[f64; 6]")]
pub struct PersonalitySliders([f64; 6]);

impl PersonalitySliders {
    /// Middle of every axis.
    pub const NEUTRAL: Self = Self([50.0; 6]);

    /// Out-of-range values are clamped; NaN falls back to the midpoint.
    pub fn new(values: [f64; 6]) -> Self {
        Self(values.map(|value| {
            if value.is_nan() {
                50.0
            } else {
                value.clamp(0.0, 100.0)
            }
        }))
    }

    /// Raw position in `[0, 100]`.
    pub const fn value(&self, axis: Axis) -> f64 {
        self.0[axis as usize]
    }

    /// Position mapped onto `[0, 1]`.
    pub fn unit(&self, axis: Axis) -> f64 {
        self.value(axis) / 100.0
    }

    /// All six positions in [`Axis::ALL`] order.
    pub const fn values(&self) -> [f64; 6] {
        self.0
    }
}

impl Default for PersonalitySliders {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<[f64; 6]> for PersonalitySliders {
    fn from(values: [f64; 6]) -> Self {
        Self::new(values)
    }
}

impl From<PersonalitySliders> for [f64; 6] {
    fn from(sliders: PersonalitySliders) -> Self {
        sliders.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_clamped() {
        let sliders = PersonalitySliders::new([-10.0, 150.0, f64::NAN, 0.0, 100.0, 42.0]);
        assert_eq!(sliders.values(), [0.0, 100.0, 50.0, 0.0, 100.0, 42.0]);
        assert_eq!(sliders.unit(Axis::LoudQuiet), 0.42);
    }

    #[test]
    fn axes_follow_index_order() {
        let sliders = PersonalitySliders::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        for (index, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(sliders.value(*axis), (index + 1) as f64);
        }
        assert_eq!(Axis::MassElite.to_string(), "Mass/Elite");
    }

    #[test]
    fn deserializing_clamps() {
        let sliders: PersonalitySliders =
            serde_json::from_str("[-5, 50, 50, 50, 50, 500]").unwrap();
        assert_eq!(sliders.values(), [0.0, 50.0, 50.0, 50.0, 50.0, 100.0]);
        assert_eq!(serde_json::to_string(&sliders).unwrap(), "[0.0,50.0,50.0,50.0,50.0,100.0]");
    }
}
