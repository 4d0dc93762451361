//! Pronounceable syllable passwords.
//!
//! Syllables are realized from a consonant/vowel pattern such as
//! `cvcv`, giving passwords that can be read aloud at a known entropy
//! cost: log2(21) bits per consonant, log2(5) bits per vowel.

use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::config::ConfigurationError;
use crate::sampler::Sampler;

/// English vowels.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// English consonants.
pub const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'y', 'z',
];

/// Options for pronounceable password generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PronounceableOptions {
    /// Number of syllables.
    pub syllable_count: usize,
    /// Consonant/vowel pattern per syllable (`c` and `v`, case-insensitive).
    pub pattern: String,
    /// Separator between syllables.
    pub separator: String,
    /// Capitalize the first letter of each syllable.
    pub capitalize: bool,
}

impl Default for PronounceableOptions {
    fn default() -> Self {
        Self {
            syllable_count: 3,
            pattern: "cvcv".into(),
            separator: "-".into(),
            capitalize: false,
        }
    }
}

/// Estimated bits of entropy contributed by one syllable of the
/// given pattern. Characters other than `c`/`v` contribute nothing;
/// generation rejects them before sampling.
pub fn pattern_bits(pattern: &str) -> f64 {
    pattern
        .chars()
        .map(|c| match c.to_ascii_lowercase() {
            'c' => (CONSONANTS.len() as f64).log2(),
            'v' => (VOWELS.len() as f64).log2(),
            _ => 0.0,
        })
        .sum()
}

/// Generates a pronounceable password.
///
/// Each syllable is an independent realization of the pattern; every
/// consonant and vowel position is a uniform draw over its alphabet.
pub fn generate_pronounceable<R: RngCore + CryptoRng>(
    sampler: &mut Sampler<R>,
    options: &PronounceableOptions,
) -> Result<String, ConfigurationError> {
    if options.syllable_count < 1 {
        return Err(ConfigurationError::InvalidSyllableCount);
    }
    if options.pattern.is_empty() {
        return Err(ConfigurationError::EmptyPattern);
    }
    for c in options.pattern.chars() {
        if !matches!(c.to_ascii_lowercase(), 'c' | 'v') {
            return Err(ConfigurationError::InvalidPattern(c));
        }
    }

    let mut syllables = Vec::with_capacity(options.syllable_count);
    for _ in 0..options.syllable_count {
        let mut syllable = String::with_capacity(options.pattern.len());
        for (i, c) in options.pattern.chars().enumerate() {
            let letter = match c.to_ascii_lowercase() {
                'c' => CONSONANTS[sampler.sample_index(CONSONANTS.len())],
                _ => VOWELS[sampler.sample_index(VOWELS.len())],
            };
            if options.capitalize && i == 0 {
                syllable.push(letter.to_ascii_uppercase());
            } else {
                syllable.push(letter);
            }
        }
        syllables.push(syllable);
    }

    Ok(syllables.join(&options.separator))
}
