//! Procedural palette engine: hue anchoring, designer bans, color naming and
//! the synthesizer that ties them together.
//!
//! Everything here is synchronous and free of I/O. Randomness is injected
//! through [`RandomSource`].

pub mod anchors;
pub mod bans;
pub mod color;
pub mod naming;
pub mod random;
pub mod sliders;
pub mod synth;

pub use self::anchors::snap_to_anchor;
pub use self::bans::enforce_bans;
pub use self::color::{Color, ColorRole, Hsl, Palette};
pub use self::naming::name_color;
pub use self::random::{FixedSequence, RandomSource, UniformSource};
pub use self::sliders::{Axis, PersonalitySliders};
pub use self::synth::generate_palette;
