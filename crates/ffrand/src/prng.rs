// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::debug;

use crate::source::EntropySource;

/// SplitMix64 increment (the 64-bit golden ratio).
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seedable `xoroshiro128+`, the reproducible stand-in for a host entropy
/// function.
///
/// Sequences depend only on the seed, never on the platform. Fine for
/// gameplay and tests; unsuitable wherever an adversary could predict draws.
#[derive(Debug, Clone, Copy)]
pub struct Xoroshiro {
    state: [u64; 2],
}

impl Xoroshiro {
    /// Seeds both state words directly.
    ///
    /// `(0, 0)` would emit zeros forever, so it is swapped for a fixed
    /// non-zero state.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        let state = if (seed0 | seed1) == 0 {
            [GOLDEN_GAMMA, 0]
        } else {
            [seed0, seed1]
        };
        debug!(seed0, seed1, "seeded xoroshiro128+");
        Self { state }
    }

    /// Seeds from one word, spreading it over both state words with SplitMix64.
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut mix = seed;
        let seed0 = splitmix64(&mut mix);
        let seed1 = splitmix64(&mut mix);
        Self::from_seed(seed0, seed1)
    }

    /// Advances the state and returns the full 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        let [s0, s1] = self.state;
        let out = s0.wrapping_add(s1);
        let t = s0 ^ s1;
        self.state = [s0.rotate_left(55) ^ t ^ (t << 14), t.rotate_left(36)];
        out
    }
}

impl EntropySource for Xoroshiro {
    /// High half of the 64-bit output; the low bits of `xoroshiro128+` are weaker.
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(GOLDEN_GAMMA);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_seeds_identical_sequences() {
        let mut a = Xoroshiro::from_seed(42, 99);
        let mut b = Xoroshiro::from_seed(42, 99);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn zero_seed_is_replaced() {
        let mut prng = Xoroshiro::from_seed(0, 0);
        assert_ne!(prng.next_u64(), 0);
    }

    #[test]
    fn matches_reference_sequence() {
        let mut prng = Xoroshiro::from_seed(1, 2);
        assert_eq!(prng.next_u64(), 3);
        assert_eq!(prng.next_u64(), 36_029_003_177_443_331);
        assert_eq!(prng.next_u64(), 78_883_775_479_546_723);
    }

    #[test]
    fn first_output_is_sum_of_state() {
        let mut prng = Xoroshiro::from_seed(1, 2);
        assert_eq!(prng.next_u64(), 3);
        let mut prng = Xoroshiro::from_seed(u64::MAX, 2);
        assert_eq!(prng.next_u64(), 1);
    }

    #[test]
    fn next_u32_takes_high_half() {
        let mut a = Xoroshiro::from_seed(0xDEAD_BEEF, 0xFACE_FEED);
        let mut b = a;
        assert_eq!(u64::from(a.next_u32()), b.next_u64() >> 32);
    }

    #[test]
    fn single_seed_expansion_differs_per_seed() {
        let mut a = Xoroshiro::from_seed_u64(1);
        let mut b = Xoroshiro::from_seed_u64(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }
}
