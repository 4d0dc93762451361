//! Word-based memorable passwords.
//!
//! Composes passphrases from the bundled 7776-word dictionary. Words
//! are drawn independently and uniformly **with replacement** so that
//! each word contributes exactly log2(7776) bits; sampling without
//! replacement would complicate the entropy arithmetic for no real
//! gain at this dictionary size.

mod dictionary;
mod pronounceable;

pub use dictionary::{dictionary, ResourceError, WordDictionary};
pub use pronounceable::{
    generate_pronounceable, pattern_bits, PronounceableOptions, CONSONANTS, VOWELS,
};

use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::config::ConfigurationError;
use crate::sampler::Sampler;

/// Options for memorable password generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorableOptions {
    /// Number of words (3-6 recommended).
    pub word_count: usize,
    /// Separator between segments.
    pub separator: String,
    /// Capitalize the first letter of each word.
    pub capitalize_words: bool,
    /// Append a uniform two-digit number (00-99) to each word.
    pub add_numbers: bool,
}

impl Default for MemorableOptions {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".into(),
            capitalize_words: true,
            add_numbers: true,
        }
    }
}

/// Passphrase generation failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PassphraseError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// Generates a memorable word-based password.
///
/// Each segment is one uniformly drawn word, optionally capitalized
/// and optionally suffixed with a zero-padded two-digit number, so a
/// segment always has the shape `word`, `Word`, `word##`, or `Word##`.
pub fn generate_memorable<R: RngCore + CryptoRng>(
    sampler: &mut Sampler<R>,
    options: &MemorableOptions,
) -> Result<String, PassphraseError> {
    if options.word_count < 1 {
        return Err(ConfigurationError::InvalidWordCount.into());
    }
    let dictionary = dictionary()?;

    let mut segments = Vec::with_capacity(options.word_count);
    for _ in 0..options.word_count {
        let word = sampler.sample_word(dictionary);
        let mut segment = if options.capitalize_words {
            capitalize(word)
        } else {
            word.to_owned()
        };
        if options.add_numbers {
            let number = sampler.sample_index(100);
            segment.push_str(&format!("{number:02}"));
        }
        segments.push(segment);
    }

    Ok(segments.join(&options.separator))
}

/// Uppercases the first letter of a dictionary word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    fn seeded() -> Sampler<ChaCha20Rng> {
        Sampler::from_rng(ChaCha20Rng::from_seed([7; 32]))
    }

    fn segments(password: &str, separator: char) -> Vec<&str> {
        password.split(separator).collect()
    }

    #[test]
    fn test_default_shape() {
        let password = generate_memorable(&mut seeded(), &MemorableOptions::default()).unwrap();
        let segments = segments(&password, '-');
        assert_eq!(segments.len(), 4);

        let dictionary = dictionary().unwrap();
        for segment in segments {
            // Capitalized word followed by exactly two digits
            let digits = &segment[segment.len() - 2..];
            assert!(digits.bytes().all(|b| b.is_ascii_digit()), "{segment}");

            let word = &segment[..segment.len() - 2];
            assert!(word.chars().next().unwrap().is_ascii_uppercase());
            assert!(dictionary.contains(&word.to_ascii_lowercase()), "{word}");
        }
    }

    #[test]
    fn test_plain_words() {
        let options = MemorableOptions {
            word_count: 6,
            separator: " ".into(),
            capitalize_words: false,
            add_numbers: false,
        };
        let password = generate_memorable(&mut seeded(), &options).unwrap();
        let dictionary = dictionary().unwrap();
        let words = segments(&password, ' ');
        assert_eq!(words.len(), 6);
        for word in words {
            assert!(dictionary.contains(word), "{word}");
        }
    }

    #[test]
    fn test_single_word() {
        let options = MemorableOptions {
            word_count: 1,
            capitalize_words: false,
            add_numbers: false,
            ..Default::default()
        };
        let password = generate_memorable(&mut seeded(), &options).unwrap();
        assert!(dictionary().unwrap().contains(&password));
    }

    #[test]
    fn test_zero_words_rejected() {
        let options = MemorableOptions {
            word_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            generate_memorable(&mut seeded(), &options),
            Err(PassphraseError::Configuration(
                ConfigurationError::InvalidWordCount
            ))
        ));
    }

    #[test]
    fn test_repeats_permitted() {
        // With replacement, drawing many more words than a tiny slice
        // of the dictionary would allow without replacement must still
        // succeed.
        let options = MemorableOptions {
            word_count: 50,
            capitalize_words: false,
            add_numbers: false,
            ..Default::default()
        };
        let password = generate_memorable(&mut seeded(), &options).unwrap();
        assert_eq!(segments(&password, '-').len(), 50);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("apple"), "Apple");
        assert_eq!(capitalize(""), "");
    }
}
