//! Generator configuration.
//!
//! Configuration is validated once at engine construction and is
//! immutable afterwards. A partially-valid engine is never observable:
//! construction either yields a usable engine or a typed error.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::passphrase::MemorableOptions;

/// Default password length.
pub const DEFAULT_LENGTH: usize = 16;

/// Minimum password length (OWASP guidance).
pub const MIN_LENGTH: usize = 8;

/// Maximum password length.
pub const MAX_LENGTH: usize = 256;

/// Minimum acceptable entropy in bits (NIST SP 800-63B aligned floor).
pub const ENTROPY_FLOOR_BITS: f64 = 64.0;

/// Configuration for random password generation.
///
/// Character classes are opt-out; by default all four standard classes
/// are enabled. `custom_chars` extends the pool, `exclude_chars`
/// removes characters from it after assembly (useful for dropping
/// ambiguous glyphs such as `l1I0O`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Password length in characters.
    pub length: usize,
    /// Include uppercase roman letters (A-Z).
    pub include_uppercase: bool,
    /// Include lowercase roman letters (a-z).
    pub include_lowercase: bool,
    /// Include numeric digits (0-9).
    pub include_digits: bool,
    /// Include the standard special-character set.
    pub include_special: bool,
    /// Additional characters to include in the pool.
    pub custom_chars: Option<String>,
    /// Characters to remove from the assembled pool.
    pub exclude_chars: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_special: true,
            custom_chars: None,
            exclude_chars: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with the given length and all standard
    /// character classes enabled.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }
}

/// Structurally invalid configuration or call arguments.
///
/// These are deterministic caller errors; nothing here is retried.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigurationError {
    #[error("character pool is empty; enable a character class or provide custom characters")]
    EmptyPool,
    #[error("length {length} exceeds the maximum of {max}")]
    LengthAboveMaximum { length: usize, max: usize },
    #[error("batch count must be at least 1")]
    InvalidBatchCount,
    #[error("word count must be at least 1")]
    InvalidWordCount,
    #[error("syllable count must be at least 1")]
    InvalidSyllableCount,
    #[error("syllable pattern must not be empty")]
    EmptyPattern,
    #[error("pattern character {0:?} is not supported; use 'c' and 'v'")]
    InvalidPattern(char),
}

/// Configuration that parses but fails the security floor.
///
/// Surfaced at construction time only; a weak configuration never
/// produces an engine.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WeakConfigurationError {
    #[error("length {length} is below the minimum of {min}")]
    LengthBelowMinimum { length: usize, min: usize },
    #[error("configuration yields {bits:.1} bits of entropy; at least {floor:.0} bits required")]
    EntropyBelowFloor { bits: f64, floor: f64 },
}

/// Configuration file load errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigFileError {
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub memorable: MemorableOptions,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigFileError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigFileError::ParseError(e.to_string()))?;
        Ok(config)
    }
}
