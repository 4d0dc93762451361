//! The password engine.
//!
//! Construction validates the configuration against the security
//! floor and derives the character pool; both are immutable afterwards
//! and every generation method takes `&self`, so one engine can serve
//! any number of threads. Generated passwords are never logged.

use serde::Serialize;

use crate::config::{
    ConfigurationError, GeneratorConfig, WeakConfigurationError, ENTROPY_FLOOR_BITS, MAX_LENGTH,
    MIN_LENGTH,
};
use crate::entropy::{self, EntropyReport};
use crate::passphrase::{self, MemorableOptions, PassphraseError, PronounceableOptions, ResourceError};
use crate::pool::CharacterPool;
use crate::sampler::Sampler;

/// Errors surfaced by [`PasswordEngine`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    /// Structurally invalid input; never retried.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// Configuration below the security floor; construction-time only.
    #[error(transparent)]
    WeakConfiguration(#[from] WeakConfigurationError),
    /// Word dictionary missing or malformed; memorable paths only.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

impl From<PassphraseError> for EngineError {
    fn from(err: PassphraseError) -> Self {
        match err {
            PassphraseError::Configuration(e) => Self::Configuration(e),
            PassphraseError::Resource(e) => Self::Resource(e),
        }
    }
}

/// Read-only snapshot of an engine's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSnapshot {
    /// Password length in characters.
    pub length: usize,
    /// Uppercase letters enabled.
    pub include_uppercase: bool,
    /// Lowercase letters enabled.
    pub include_lowercase: bool,
    /// Digits enabled.
    pub include_digits: bool,
    /// Special characters enabled.
    pub include_special: bool,
    /// Additional pool characters.
    pub custom_chars: Option<String>,
    /// Characters removed from the pool.
    pub exclude_chars: Option<String>,
    /// Size of the derived character pool.
    pub pool_size: usize,
}

/// Cryptographically secure password generator.
///
/// Built once from a [`GeneratorConfig`]; a configuration that fails
/// validation never yields an engine, so every reachable engine
/// satisfies the entropy and length floors.
#[derive(Debug)]
pub struct PasswordEngine {
    config: GeneratorConfig,
    pool: CharacterPool,
}

impl PasswordEngine {
    /// Validates the configuration and builds an engine.
    ///
    /// Checks, in order: pool non-empty, length within `8..=256`, and
    /// estimated entropy at or above the 64-bit floor.
    pub fn new(config: GeneratorConfig) -> Result<Self, EngineError> {
        let pool = CharacterPool::build(&config)?;

        if config.length > MAX_LENGTH {
            return Err(ConfigurationError::LengthAboveMaximum {
                length: config.length,
                max: MAX_LENGTH,
            }
            .into());
        }
        if config.length < MIN_LENGTH {
            return Err(WeakConfigurationError::LengthBelowMinimum {
                length: config.length,
                min: MIN_LENGTH,
            }
            .into());
        }

        let bits = entropy::estimate(pool.len(), config.length);
        if bits < ENTROPY_FLOOR_BITS {
            return Err(WeakConfigurationError::EntropyBelowFloor {
                bits,
                floor: ENTROPY_FLOOR_BITS,
            }
            .into());
        }

        tracing::debug!(
            pool_size = pool.len(),
            length = config.length,
            entropy_bits = bits,
            "password engine validated"
        );

        Ok(Self { config, pool })
    }

    /// Generates one password.
    ///
    /// Exactly `length` characters, each an independent uniform draw
    /// from the pool. There are no forced-category placement rules:
    /// the output distribution is exactly the one the entropy
    /// estimate assumes.
    pub fn generate(&self) -> String {
        let mut sampler = Sampler::new();
        (0..self.config.length)
            .map(|_| sampler.sample(&self.pool))
            .collect()
    }

    /// Generates `count` independent passwords.
    ///
    /// Outputs are independent draws; distinctness is overwhelmingly
    /// likely for any useful pool and length but is not guaranteed.
    pub fn generate_batch(&self, count: usize) -> Result<Vec<String>, EngineError> {
        if count < 1 {
            return Err(ConfigurationError::InvalidBatchCount.into());
        }
        tracing::debug!(count, "generating password batch");
        Ok((0..count).map(|_| self.generate()).collect())
    }

    /// Generates a memorable word-based password.
    pub fn generate_memorable(&self, options: &MemorableOptions) -> Result<String, EngineError> {
        let mut sampler = Sampler::new();
        passphrase::generate_memorable(&mut sampler, options).map_err(EngineError::from)
    }

    /// Generates a pronounceable syllable password.
    pub fn generate_pronounceable(
        &self,
        options: &PronounceableOptions,
    ) -> Result<String, EngineError> {
        let mut sampler = Sampler::new();
        passphrase::generate_pronounceable(&mut sampler, options).map_err(EngineError::from)
    }

    /// Returns a snapshot of the configuration plus derived pool size.
    ///
    /// Pure read: repeated calls return identical values and never
    /// affect future output.
    pub fn configuration(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            length: self.config.length,
            include_uppercase: self.config.include_uppercase,
            include_lowercase: self.config.include_lowercase,
            include_digits: self.config.include_digits,
            include_special: self.config.include_special,
            custom_chars: self.config.custom_chars.clone(),
            exclude_chars: self.config.exclude_chars.clone(),
            pool_size: self.pool.len(),
        }
    }

    /// Entropy estimate for this engine's pool and length.
    pub fn entropy_report(&self) -> EntropyReport {
        EntropyReport::from_bits(entropy::estimate(self.pool.len(), self.config.length))
    }

    /// The derived character pool.
    pub fn pool(&self) -> &CharacterPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::Strength;
    use std::collections::HashSet;

    #[test]
    fn test_generate_length_and_membership() {
        let engine = PasswordEngine::new(GeneratorConfig::default()).unwrap();
        for _ in 0..20 {
            let password = engine.generate();
            assert_eq!(password.chars().count(), 16);
            assert!(password.chars().all(|c| engine.pool().contains(c)));
        }
    }

    #[test]
    fn test_digits_only_short_is_weak() {
        // 8 * log2(10) = 26.6 bits, well under the floor
        let config = GeneratorConfig {
            length: 8,
            include_uppercase: false,
            include_lowercase: false,
            include_digits: true,
            include_special: false,
            ..Default::default()
        };
        assert!(matches!(
            PasswordEngine::new(config),
            Err(EngineError::WeakConfiguration(
                WeakConfigurationError::EntropyBelowFloor { .. }
            ))
        ));
    }

    #[test]
    fn test_short_length_is_weak() {
        let config = GeneratorConfig::with_length(7);
        assert!(matches!(
            PasswordEngine::new(config),
            Err(EngineError::WeakConfiguration(
                WeakConfigurationError::LengthBelowMinimum { length: 7, min: 8 }
            ))
        ));
    }

    #[test]
    fn test_excessive_length_rejected() {
        let config = GeneratorConfig::with_length(300);
        assert!(matches!(
            PasswordEngine::new(config),
            Err(EngineError::Configuration(
                ConfigurationError::LengthAboveMaximum { .. }
            ))
        ));
    }

    #[test]
    fn test_empty_pool_rejected_before_weak_checks() {
        let config = GeneratorConfig {
            length: 4, // also too short, but the pool failure wins
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_special: false,
            ..Default::default()
        };
        assert!(matches!(
            PasswordEngine::new(config),
            Err(EngineError::Configuration(ConfigurationError::EmptyPool))
        ));
    }

    #[test]
    fn test_batch_count_and_distinctness() {
        let engine = PasswordEngine::new(GeneratorConfig::default()).unwrap();
        let batch = engine.generate_batch(5).unwrap();
        assert_eq!(batch.len(), 5);
        for password in &batch {
            assert_eq!(password.chars().count(), 16);
            assert!(password.chars().all(|c| engine.pool().contains(c)));
        }

        // Independence, not a guarantee: collisions over an 88-char
        // pool at length 16 are vanishingly unlikely.
        let distinct: HashSet<&String> = batch.iter().collect();
        assert_eq!(distinct.len(), 5);
    }

    #[test]
    fn test_zero_batch_rejected() {
        let engine = PasswordEngine::new(GeneratorConfig::default()).unwrap();
        assert!(matches!(
            engine.generate_batch(0),
            Err(EngineError::Configuration(
                ConfigurationError::InvalidBatchCount
            ))
        ));
    }

    #[test]
    fn test_memorable_through_engine() {
        let engine = PasswordEngine::new(GeneratorConfig::default()).unwrap();
        let password = engine
            .generate_memorable(&MemorableOptions::default())
            .unwrap();
        assert_eq!(password.split('-').count(), 4);
    }

    #[test]
    fn test_configuration_snapshot_idempotent() {
        let config = GeneratorConfig {
            custom_chars: Some("€".into()),
            ..Default::default()
        };
        let engine = PasswordEngine::new(config).unwrap();

        let first = engine.configuration();
        let second = engine.configuration();
        assert_eq!(first, second);
        assert_eq!(first.pool_size, 89);
        assert_eq!(first.length, 16);
    }

    #[test]
    fn test_entropy_report_default_config() {
        let engine = PasswordEngine::new(GeneratorConfig::default()).unwrap();
        let report = engine.entropy_report();
        // 16 * log2(88) = 103.3 bits
        assert!((report.bits - 103.3).abs() < 0.1, "got {}", report.bits);
        assert_eq!(report.classification, Strength::Maximum);
    }

    #[test]
    fn test_excluded_chars_never_generated() {
        let config = GeneratorConfig {
            exclude_chars: Some("l1I0O".into()),
            ..Default::default()
        };
        let engine = PasswordEngine::new(config).unwrap();
        for _ in 0..50 {
            let password = engine.generate();
            assert!(!password.chars().any(|c| "l1I0O".contains(c)));
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_length_and_membership(
                length in 8usize..=64,
                upper: bool,
                digits: bool,
                special: bool,
            ) {
                let config = GeneratorConfig {
                    length,
                    include_uppercase: upper,
                    include_lowercase: true,
                    include_digits: digits,
                    include_special: special,
                    ..Default::default()
                };
                match PasswordEngine::new(config) {
                    Ok(engine) => {
                        let password = engine.generate();
                        prop_assert_eq!(password.chars().count(), length);
                        prop_assert!(password.chars().all(|c| engine.pool().contains(c)));
                    }
                    // Short lowercase-only configs fall under the floor
                    Err(EngineError::WeakConfiguration(_)) => {}
                    Err(e) => prop_assert!(false, "unexpected error: {e}"),
                }
            }
        }
    }
}
