//! Bundled word dictionary.
//!
//! The word list is embedded at compile time and parsed exactly once
//! behind a process-wide `LazyLock`; every engine instance shares the
//! same read-only dictionary. A malformed list surfaces as a
//! [`ResourceError`] from memorable-password paths only; random
//! character generation never touches the dictionary.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Raw embedded word list, one entry per line.
static WORDLIST: &str = include_str!("wordlist.txt");

static DICTIONARY: LazyLock<Result<WordDictionary, ResourceError>> =
    LazyLock::new(|| WordDictionary::parse(WORDLIST));

/// Word dictionary failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResourceError {
    #[error("bundled word list is empty")]
    EmptyWordList,
    #[error("word list entry {0:?} is not a lowercase word")]
    MalformedEntry(String),
    #[error("word list entry {0:?} appears more than once")]
    DuplicateEntry(String),
}

/// A fixed, ordered sequence of lowercase words.
///
/// Invariant: non-empty, every entry lowercase ASCII, no duplicates.
#[derive(Debug)]
pub struct WordDictionary {
    words: Vec<&'static str>,
}

impl WordDictionary {
    /// Parses a word list, one word per line.
    ///
    /// Diceware-style lines (`NNNNN<tab>word`) are accepted by taking
    /// the last whitespace-separated token; blank lines are skipped.
    fn parse(raw: &'static str) -> Result<Self, ResourceError> {
        let mut seen = HashSet::new();
        let mut words = Vec::new();

        for line in raw.lines() {
            let Some(word) = line.split_whitespace().last() else {
                continue;
            };
            if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(ResourceError::MalformedEntry(word.to_owned()));
            }
            if !seen.insert(word) {
                return Err(ResourceError::DuplicateEntry(word.to_owned()));
            }
            words.push(word);
        }

        if words.is_empty() {
            return Err(ResourceError::EmptyWordList);
        }

        Ok(Self { words })
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// A parsed dictionary is never empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word at the given index.
    pub fn word_at(&self, index: usize) -> &'static str {
        self.words[index]
    }

    /// Returns true if the dictionary contains the word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| *w == word)
    }
}

/// Returns the shared process-wide dictionary.
///
/// The first call parses the embedded list; subsequent calls are
/// lookups. Parse failures are sticky and reported on every call.
pub fn dictionary() -> Result<&'static WordDictionary, ResourceError> {
    DICTIONARY.as_ref().map_err(Clone::clone)
}
