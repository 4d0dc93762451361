//! Entropy estimation and strength classification.
//!
//! Estimates assume uniform, independent selection per position, which
//! is exactly what the sampler provides; no placement rules exist that
//! would invalidate the arithmetic. Classification thresholds follow
//! NIST SP 800-63B guidance and are fixed constants, not configuration.

use crate::config::ENTROPY_FLOOR_BITS;
use crate::passphrase::{self, ResourceError};

/// Lower bound of the Recommended band.
pub const RECOMMENDED_BITS: f64 = ENTROPY_FLOOR_BITS;

/// Lower bound of the High band.
pub const HIGH_BITS: f64 = 80.0;

/// Lower bound of the Maximum band.
pub const MAXIMUM_BITS: f64 = 100.0;

/// Estimated bits of entropy for a character password.
///
/// `length` independent uniform draws from a pool of `pool_size`
/// distinct characters carry `length * log2(pool_size)` bits.
pub fn estimate(pool_size: usize, length: usize) -> f64 {
    length as f64 * (pool_size as f64).log2()
}

/// Estimated bits of entropy for a passphrase.
///
/// Words are drawn with replacement, so each of the `word_count` draws
/// contributes `log2(dictionary size)` bits (~12.925 for 7776 words).
/// Fails if the bundled dictionary is unavailable.
pub fn estimate_passphrase(word_count: usize) -> Result<f64, ResourceError> {
    let dictionary = passphrase::dictionary()?;
    Ok(estimate(dictionary.len(), word_count))
}

/// Strength bands for an entropy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    /// Below the 64-bit floor; rejected at engine construction.
    Minimum,
    /// 64 to 79 bits.
    Recommended,
    /// 80 to 99 bits.
    High,
    /// 100 bits or more.
    Maximum,
}

impl Strength {
    /// Classifies an entropy estimate.
    pub fn classify(bits: f64) -> Self {
        if bits < RECOMMENDED_BITS {
            Self::Minimum
        } else if bits < HIGH_BITS {
            Self::Recommended
        } else if bits < MAXIMUM_BITS {
            Self::High
        } else {
            Self::Maximum
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Minimum => "minimum",
            Self::Recommended => "recommended",
            Self::High => "high",
            Self::Maximum => "maximum",
        };
        f.write_str(label)
    }
}

/// An entropy estimate with its strength band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyReport {
    /// Estimated bits of entropy.
    pub bits: f64,
    /// Strength band for the estimate.
    pub classification: Strength,
}

impl EntropyReport {
    /// Builds a report from an estimate.
    pub fn from_bits(bits: f64) -> Self {
        Self {
            bits,
            classification: Strength::classify(bits),
        }
    }
}
