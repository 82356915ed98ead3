//! Error types for `drsa-core`.
//!
//! Every variant is terminal: derivation is deterministic, so retrying with
//! the same inputs reproduces the same failure. Callers recover only by
//! changing an input.

use thiserror::Error;

/// Errors produced by the derivation pipeline.
#[derive(Debug, Error)]
pub enum DrsaError {
    /// Invalid derivation inputs (empty password or confusion string, zero
    /// iterations) or a PBKDF2 failure.
    #[error("key derivation failed: {0}")]
    Derivation(String),

    /// Byte stream generation rejected its configuration or hit its search cap.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Requested key width cannot be split into two equal byte halves or
    /// is outside the supported range.
    #[error("invalid key width: {0}")]
    InvalidKeyWidth(String),

    /// `gcd(e, φ(n)) != 1`, so the private exponent does not exist.
    #[error("public exponent has no modular inverse modulo phi(n)")]
    NoModularInverse,

    /// The prime increment loop reached its configured cap.
    #[error("prime search exhausted after {increments} increments")]
    PrimeSearchExhausted {
        /// Number of increment passes performed before giving up.
        increments: u64,
    },

    /// Secure memory allocation failure.
    #[error("secure memory error: {0}")]
    SecureMemory(String),
}

/// Errors specific to the deterministic byte stream generator.
///
/// Configuration errors are detected before any hashing takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The confusion pattern is longer than the output buffer and can never match.
    #[error("confusion pattern ({pattern_len} bytes) longer than stream ({size} bytes)")]
    PatternTooLong {
        /// Length of the confusion pattern.
        pattern_len: usize,
        /// Requested stream length.
        size: usize,
    },

    /// The stream cannot hold the trailing seed used for reseeding.
    #[error("stream size {size} is below the {min} byte minimum", min = crate::seed::SEED_LEN)]
    BufferTooSmall {
        /// Requested stream length.
        size: usize,
    },

    /// The pattern search loop reached its configured attempt cap.
    #[error("pattern not found in round {round} after {attempts} attempts")]
    SearchExhausted {
        /// Zero-based round index.
        round: u32,
        /// Number of candidate buffers produced in that round.
        attempts: u64,
    },
}
