// Random source abstraction
//
// Every random value on the dashboard (particle seeding, stat values,
// chart series, table rows) is drawn through `RandomSource`, so tests can
// swap the thread RNG for a seeded `StdRng` or a fixed sequence.

use rand::Rng;

/// A source of uniformly distributed values in `[0, 1)`
pub trait RandomSource {
    /// Next value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform value in `[min, max)`
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        self.next_unit() * (max - min) + min
    }

    /// Integer in `[min, max)`, rounded down
    fn next_floor(&mut self, min: u64, max: u64) -> u64 {
        self.next_range(min as f64, max as f64).floor() as u64
    }
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of values, cycling when exhausted
///
/// Values outside `[0, 1)` are clamped so callers never see an
/// out-of-range draw.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "sequence must not be empty");
        Self { values, cursor: 0 }
    }

    /// A source that always yields the same value
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

#[cfg(test)]
impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
