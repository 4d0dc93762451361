//! Pass-Gen: cryptographically secure password generation.
//!
//! Generates character passwords, memorable word-based passphrases,
//! and pronounceable syllable passwords, with entropy estimation
//! validated against NIST SP 800-63B thresholds.
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig → pool builder → validator → PasswordEngine
//!                                                  ↓
//!                       sampler (OS CSPRNG) → generate / batch
//!                                                  ↓
//!               word dictionary (shared, read-only) → memorable
//! ```
//!
//! # Design Principles
//!
//! - **Fail-fast**: a configuration under the 64-bit entropy floor or
//!   the 8-character minimum never yields an engine
//! - **Unbiased sampling**: bounded draws use rejection sampling, so
//!   every pool character is exactly equally likely
//! - **Honest entropy**: no forced-category placement rules that would
//!   skew the distribution the estimate assumes
//!
//! # Example
//!
//! ```
//! use pass_gen::{GeneratorConfig, MemorableOptions, PasswordEngine};
//!
//! let engine = PasswordEngine::new(GeneratorConfig::default()).unwrap();
//!
//! let password = engine.generate();
//! assert_eq!(password.chars().count(), 16);
//!
//! let report = engine.entropy_report();
//! assert!(report.bits > 100.0);
//!
//! let passphrase = engine.generate_memorable(&MemorableOptions::default()).unwrap();
//! assert_eq!(passphrase.split('-').count(), 4);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod entropy;
pub mod passphrase;
pub mod pool;
pub mod sampler;

// Re-export commonly used types at crate root
pub use config::{
    ConfigFileError, ConfigurationError, FileConfig, GeneratorConfig, WeakConfigurationError,
};
pub use engine::{ConfigSnapshot, EngineError, PasswordEngine};
pub use entropy::{EntropyReport, Strength};
pub use passphrase::{MemorableOptions, PronounceableOptions, ResourceError, WordDictionary};
pub use pool::CharacterPool;
pub use sampler::Sampler;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
