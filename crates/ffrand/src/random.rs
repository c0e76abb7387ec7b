// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar draws: raw words, bias-free bounded integers, and unit floats.

use tracing::trace;

use crate::error::RandomError;
use crate::source::EntropySource;

/// `2^-24`: scale from a 24-bit integer to `[0, 1)`.
const FLOAT32_SCALE: f32 = 1.0 / 16_777_216.0;

/// Random helpers layered over an injected [`EntropySource`].
///
/// Holds no generator state of its own: every draw consumes one or more
/// words from the source, in a fixed order, so a deterministic source yields
/// deterministic results.
#[derive(Debug, Clone)]
pub struct Random<S> {
    source: S,
}

impl<S: EntropySource> Random<S> {
    /// Wraps an entropy source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Mutable access to the wrapped source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Raw 32-bit word from the source.
    pub fn uint32(&mut self) -> u32 {
        self.source.next_u32()
    }

    /// Raw word reinterpreted as signed. May be negative.
    pub fn int32(&mut self) -> i32 {
        self.uint32() as i32
    }

    /// Alias of [`Random::int32`]; screen coordinates are `i32`.
    pub fn int(&mut self) -> i32 {
        self.int32()
    }

    /// Two words combined, high word first.
    pub fn uint64(&mut self) -> u64 {
        let hi = u64::from(self.uint32());
        let lo = u64::from(self.uint32());
        (hi << 32) | lo
    }

    /// [`Random::uint64`] reinterpreted as signed.
    pub fn int64(&mut self) -> i64 {
        self.uint64() as i64
    }

    /// Fair coin flip from the top bit of one word.
    pub fn bool(&mut self) -> bool {
        self.uint32() >> 31 == 1
    }

    /// Uniform integer in `[0, n)` without modulo bias.
    ///
    /// Powers of two are masked directly. Other bounds use rejection
    /// sampling: draws at or above the largest multiple of `n` that fits in
    /// 32 bits are discarded, so every residue is equally likely.
    /// `n == 0` returns `0` without drawing.
    pub fn uint32n(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        if n.is_power_of_two() {
            return self.uint32() & (n - 1);
        }
        let bound = u32::MAX - u32::MAX % n;
        loop {
            let candidate = self.uint32();
            if candidate < bound {
                break candidate % n;
            }
            trace!(candidate, n, "rejected biased draw");
        }
    }

    /// Uniform integer in `[0, n)`.
    ///
    /// Caller must ensure `n > 0`; otherwise returns `0` without drawing.
    pub fn intn(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.uint32n(n as u32) as i32
    }

    /// Uniform integer in `[min, max)`.
    ///
    /// Caller must ensure `max > min`; otherwise returns `min` without
    /// drawing. See [`Random::checked_int_range`] for a fallible variant.
    /// The full span of `i32` is supported.
    pub fn int_range(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = max.abs_diff(min);
        min.wrapping_add(self.uint32n(span) as i32)
    }

    /// Uniform integer in `[min, max)`, rejecting empty ranges.
    ///
    /// # Errors
    ///
    /// [`RandomError::EmptyRange`] when `max <= min`; no entropy is consumed.
    pub fn checked_int_range(&mut self, min: i32, max: i32) -> Result<i32, RandomError> {
        if max <= min {
            return Err(RandomError::EmptyRange { min, max });
        }
        Ok(self.int_range(min, max))
    }

    /// Uniform float in `[0, 1)`.
    ///
    /// Takes the top 24 bits of one word and scales by `2^-24`. Every result
    /// is exactly representable, the spacing is uniform, and `1.0` is
    /// unreachable (dividing all 32 bits by `2^32` would round up to `1.0`).
    pub fn float32(&mut self) -> f32 {
        (self.uint32() >> 8) as f32 * FLOAT32_SCALE
    }

    /// Uniform float in `[0, n)`.
    pub fn float32n(&mut self, n: f32) -> f32 {
        self.float32() * n
    }

    /// Uniform float in `[min, max)`.
    pub fn float32_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.float32() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::from_fn;

    fn scripted(words: Vec<u32>) -> Random<impl EntropySource> {
        let mut iter = words.into_iter();
        Random::new(from_fn(move || iter.next().unwrap_or(0)))
    }

    #[test]
    fn float32_extremes() {
        let mut rng = scripted(vec![0, u32::MAX, 0x8000_0000]);
        assert_eq!(rng.float32(), 0.0);
        assert_eq!(rng.float32(), 1.0 - FLOAT32_SCALE);
        assert_eq!(rng.float32(), 0.5);
    }

    #[test]
    fn uint64_is_high_word_first() {
        let mut rng = scripted(vec![0x0123_4567, 0x89ab_cdef]);
        assert_eq!(rng.uint64(), 0x0123_4567_89ab_cdef);
    }

    #[test]
    fn int32_reinterprets_bits() {
        let mut rng = scripted(vec![u32::MAX, 0x8000_0000]);
        assert_eq!(rng.int32(), -1);
        assert_eq!(rng.int(), i32::MIN);
    }
}
