//! Randomness capability injected into every generator.
//!
//! Generators never reach for a global RNG. They take a [`RandomSource`], which
//! any [`rand::Rng`] satisfies, so a seeded `StdRng` reproduces the same
//! identifiers for the same seed.

use std::ops::RangeInclusive;

use rand::Rng;

/// Uniform integer and uniform choice draws.
pub trait RandomSource {
    /// Uniform integer in the closed range.
    fn uniform_int(&mut self, range: RangeInclusive<u8>) -> u8;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn uniform_index(&mut self, len: usize) -> usize;

    /// Uniform decimal digit `0..=9`.
    fn digit(&mut self) -> u8 {
        self.uniform_int(0..=9)
    }

    /// Uniform decimal digit `1..=9`.
    fn non_zero_digit(&mut self) -> u8 {
        self.uniform_int(1..=9)
    }

    /// Uniform choice from a non-empty slice.
    fn sample_one<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.uniform_index(items.len())]
    }

    /// Fill `out` with uniform digits.
    fn fill_digits(&mut self, out: &mut [u8]) {
        for slot in out {
            *slot = self.digit();
        }
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_int(&mut self, range: RangeInclusive<u8>) -> u8 {
        self.random_range(range)
    }

    fn uniform_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Replays a fixed list of raw draws, cycling when exhausted.
///
/// Each raw value is folded into the requested range (`start + raw % width`), so any
/// script is valid for any call order. Used to pin exact outputs in tests.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<usize>,
    position: usize,
}

impl SequenceSource {
    /// Create a source from raw draws. An empty list behaves like `[0]`.
    #[must_use]
    pub fn new(mut values: Vec<usize>) -> Self {
        if values.is_empty() {
            values.push(0);
        }
        Self {
            values,
            position: 0,
        }
    }

    /// Number of draws taken so far.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.position
    }

    fn next_raw(&mut self) -> usize {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

impl RandomSource for SequenceSource {
    fn uniform_int(&mut self, range: RangeInclusive<u8>) -> u8 {
        let (start, end) = range.into_inner();
        let width = usize::from(end.saturating_sub(start)) + 1;
        // raw % width < width <= 256 and start + that never exceeds end
        #[allow(clippy::cast_possible_truncation)]
        let offset = (self.next_raw() % width) as u8;
        start + offset
    }

    fn uniform_index(&mut self, len: usize) -> usize {
        self.next_raw() % len
    }
}
