//! Uniform sampling from a cryptographically secure random source.
//!
//! # Unbiased bounded draws
//!
//! Reducing a raw RNG draw modulo a bound that does not evenly divide
//! the generator's range skews small values (modulo bias). The sampler
//! instead uses rejection sampling over a 64-bit draw, the
//! `arc4random_uniform` technique: draws below `2^64 mod bound` are
//! discarded, leaving a range that is an exact multiple of the bound.
//! The expected number of retries is below one for every bound this
//! crate uses.

use rand_core::{CryptoRng, OsRng, RngCore};

use crate::passphrase::WordDictionary;
use crate::pool::CharacterPool;

/// Uniform sampler over pools, dictionaries, and integer ranges.
///
/// Backed by the operating system CSPRNG by default. The generator is
/// generic over [`CryptoRng`] so statistical tests can substitute a
/// seeded ChaCha20 instance; non-cryptographic generators are rejected
/// at the type level.
#[derive(Debug)]
pub struct Sampler<R = OsRng> {
    rng: R,
}

impl Sampler<OsRng> {
    /// Creates a sampler backed by the OS entropy source.
    ///
    /// `OsRng` is a zero-sized handle to the platform RNG, so
    /// constructing a sampler per call is free and keeps generation
    /// stateless across threads.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for Sampler<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> Sampler<R> {
    /// Creates a sampler from an explicit cryptographic RNG.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Returns an unbiased integer in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero. Callers sample from pools and
    /// dictionaries whose non-emptiness is an invariant.
    pub fn sample_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "sample bound must be non-zero");
        let bound = bound as u64;

        // 2^64 mod bound, computed without 128-bit arithmetic:
        // wrapping_neg gives 2^64 - bound, congruent to 2^64.
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let draw = self.rng.next_u64();
            if draw >= threshold {
                return (draw % bound) as usize;
            }
        }
    }

    /// Returns one character chosen uniformly from the pool.
    pub fn sample(&mut self, pool: &CharacterPool) -> char {
        pool.char_at(self.sample_index(pool.len()))
    }

    /// Returns one word chosen uniformly from the dictionary.
    pub fn sample_word<'a>(&mut self, dictionary: &'a WordDictionary) -> &'a str {
        dictionary.word_at(self.sample_index(dictionary.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    fn seeded(seed: u8) -> Sampler<ChaCha20Rng> {
        Sampler::from_rng(ChaCha20Rng::from_seed([seed; 32]))
    }

    #[test]
    fn test_index_within_bound() {
        let mut sampler = seeded(1);
        for bound in [1usize, 2, 7, 10, 88, 7776] {
            for _ in 0..1000 {
                assert!(sampler.sample_index(bound) < bound);
            }
        }
    }

    #[test]
    fn test_bound_one_always_zero() {
        let mut sampler = seeded(2);
        for _ in 0..100 {
            assert_eq!(sampler.sample_index(1), 0);
        }
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_bound_panics() {
        seeded(3).sample_index(0);
    }

    #[test]
    fn test_chi_squared_uniformity() {
        // Goodness-of-fit over a bound that does not divide 2^64.
        // Deterministic seed; df = 15, critical value at alpha=0.001
        // is 37.70.
        const DRAWS: usize = 100_000;
        const BOUND: usize = 16;

        let mut sampler = seeded(4);
        let mut counts = [0usize; BOUND];
        for _ in 0..DRAWS {
            counts[sampler.sample_index(BOUND)] += 1;
        }

        let expected = DRAWS as f64 / BOUND as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();

        assert!(chi2 < 37.70, "chi-squared {chi2:.2} rejects uniformity");
    }

    #[test]
    fn test_awkward_bound_covers_range() {
        // bound 3 leaves the largest rejection region relative to its
        // size; all residues must still appear.
        let mut sampler = seeded(5);
        let mut counts = [0usize; 3];
        for _ in 0..30_000 {
            counts[sampler.sample_index(3)] += 1;
        }
        for &c in &counts {
            // Expected 10_000 each; allow wide slack.
            assert!(c > 9_000 && c < 11_000, "count {c} far from uniform");
        }
    }

    #[test]
    fn test_sample_draws_from_pool() {
        let pool =
            CharacterPool::build(&crate::config::GeneratorConfig::default()).unwrap();
        let mut sampler = seeded(6);
        for _ in 0..1000 {
            assert!(pool.contains(sampler.sample(&pool)));
        }
    }
}
