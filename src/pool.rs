//! Character pool assembly.
//!
//! The pool is the deduplicated union of the selected standard
//! character classes plus any custom characters, in first-seen order,
//! with excluded characters removed. It is built once per
//! configuration and never mutated afterwards.

use std::collections::HashSet;

use crate::config::{ConfigurationError, GeneratorConfig};

/// Lowercase roman letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase roman letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Numeric digits.
pub const DIGITS: &str = "0123456789";

/// Standard special characters.
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A deduplicated, ordered set of candidate characters.
///
/// Invariant: non-empty and free of duplicate code points.
#[derive(Debug, Clone)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// Assembles the pool for the given configuration.
    ///
    /// Classes are appended in a fixed order (lowercase, uppercase,
    /// digits, special, custom) so the pool layout is deterministic
    /// for a given configuration. Fails with
    /// [`ConfigurationError::EmptyPool`] if nothing remains after
    /// exclusions are applied.
    pub fn build(config: &GeneratorConfig) -> Result<Self, ConfigurationError> {
        let excluded: HashSet<char> = config
            .exclude_chars
            .as_deref()
            .map(|s| s.chars().collect())
            .unwrap_or_default();

        let mut seen = HashSet::new();
        let mut chars = Vec::new();
        let mut push_class = |class: &str| {
            for c in class.chars() {
                if !excluded.contains(&c) && seen.insert(c) {
                    chars.push(c);
                }
            }
        };

        if config.include_lowercase {
            push_class(LOWERCASE);
        }
        if config.include_uppercase {
            push_class(UPPERCASE);
        }
        if config.include_digits {
            push_class(DIGITS);
        }
        if config.include_special {
            push_class(SPECIAL);
        }
        if let Some(custom) = config.custom_chars.as_deref() {
            push_class(custom);
        }

        if chars.is_empty() {
            return Err(ConfigurationError::EmptyPool);
        }

        Ok(Self { chars })
    }

    /// Number of characters in the pool.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// A built pool is never empty, but the standard pairing with
    /// `len` is provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the character at the given index.
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index]
    }

    /// Returns true if the pool contains the character.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// The pool contents as a slice.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}
