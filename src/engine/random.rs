//! Injectable randomness for jitter and pool selection.

use rand::{Rng, SeedableRng, rngs::StdRng, rngs::ThreadRng};

/// Source of uniform draws in `[0, 1)`.
///
/// The engine never reaches for a global RNG; callers hand one in so tests can
/// replay an exact sequence.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform value in `[-amount, amount]`.
    fn jitter(&mut self, amount: f64) -> f64 {
        self.next_unit().mul_add(2.0, -1.0) * amount
    }

    /// Pick one element uniformly, `None` for an empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (self.next_unit() * items.len() as f64).floor() as usize;
        items.get(index.min(items.len() - 1))
    }
}

/// Production source backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct UniformSource<R = ThreadRng>(R);

impl UniformSource<ThreadRng> {
    /// Thread-local generator; not `Send`, so keep it out of `.await` points.
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl UniformSource<StdRng> {
    /// Reproducible generator for previews and tests.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for UniformSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSequence {
    /// Build a sequence; values are clamped into `[0, 1)`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|value| value.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// A source whose jitter is always zero.
    pub fn centered() -> Self {
        Self::new([0.5])
    }
}

impl RandomSource for FixedSequence {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_sequence_has_zero_jitter() {
        let mut rng = FixedSequence::centered();
        assert_eq!(rng.jitter(6.0), 0.0);
        assert_eq!(rng.jitter(3.0), 0.0);
    }

    #[test]
    fn jitter_spans_the_full_range() {
        let mut rng = FixedSequence::new([0.0, 0.999_999]);
        assert_eq!(rng.jitter(4.0), -4.0);
        assert!((rng.jitter(4.0) - 4.0).abs() < 1e-4);
    }

    #[test]
    fn pick_maps_draws_to_indices() {
        let items = ["a", "b", "c"];
        let mut rng = FixedSequence::new([0.0, 0.4, 0.99]);
        assert_eq!(rng.pick(&items), Some(&"a"));
        assert_eq!(rng.pick(&items), Some(&"b"));
        assert_eq!(rng.pick(&items), Some(&"c"));
        assert_eq!(rng.pick::<&str>(&[]), None);
    }

    #[test]
    fn uniform_source_stays_in_unit_interval() {
        let mut rng = UniformSource::seeded(7);
        for _ in 0..1000 {
            let value = rng.next_unit();
            assert!((0.0..1.0).contains(&value));
            assert!(rng.jitter(6.0).abs() <= 6.0);
        }
    }
}
