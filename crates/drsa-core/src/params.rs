//! Parameter sets for stream generation and key derivation.
//!
//! - [`SearchLimit`] — optional cap on the unbounded search loops
//! - [`GeneratorParams`] — output size plus pattern search cap
//! - [`KeyGenParams`] — key width, width policy, stream length and caps
//!
//! Defaults preserve the unbounded behaviour: no search cap is applied
//! unless the caller asks for one.

use serde::{Deserialize, Serialize};

use crate::error::DrsaError;
use crate::seed::SEED_LEN;

/// Default RSA modulus width in bits.
pub const DEFAULT_KEY_BITS: usize = 2048;

/// Smallest supported modulus width. Each prime half must fill at least one
/// generator seed's worth of stream.
pub const MIN_KEY_BITS: usize = 256;

/// Largest supported modulus width.
pub const MAX_KEY_BITS: usize = 16_384;

/// Default raw stream length emitted by `randgen`.
pub const DEFAULT_STREAM_LEN: usize = 4096;

// ---------------------------------------------------------------------------
// SearchLimit
// ---------------------------------------------------------------------------

/// Upper bound on attempts for a rejection-sampling loop.
///
/// `max_attempts: None` means unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimit {
    /// Maximum number of attempts, or `None` for no cap.
    pub max_attempts: Option<u64>,
}

impl SearchLimit {
    /// No cap.
    pub const UNBOUNDED: Self = Self { max_attempts: None };

    /// Cap the loop at `attempts` iterations.
    #[must_use]
    pub const fn at_most(attempts: u64) -> Self {
        Self {
            max_attempts: Some(attempts),
        }
    }

    /// Returns `true` if another attempt is allowed after `performed` attempts.
    #[must_use]
    pub const fn allows(self, performed: u64) -> bool {
        match self.max_attempts {
            None => true,
            Some(max) => performed < max,
        }
    }
}

// ---------------------------------------------------------------------------
// GeneratorParams
// ---------------------------------------------------------------------------

/// Parameters for one byte stream generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorParams {
    /// Output length in bytes. Must be at least [`SEED_LEN`].
    pub size: usize,
    /// Cap on candidate buffers per round.
    #[serde(default)]
    pub search_limit: SearchLimit,
}

impl GeneratorParams {
    /// Unbounded parameters for a stream of `size` bytes.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            search_limit: SearchLimit::UNBOUNDED,
        }
    }

    /// Same parameters with a pattern search cap.
    #[must_use]
    pub const fn with_search_limit(mut self, limit: SearchLimit) -> Self {
        self.search_limit = limit;
        self
    }
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self::new(DEFAULT_STREAM_LEN)
    }
}

// ---------------------------------------------------------------------------
// KeyGenParams
// ---------------------------------------------------------------------------

/// How prime candidates are shaped before the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidthPolicy {
    /// Set the two most-significant bits of each half so that `n` spans
    /// exactly `key_bits`.
    #[default]
    Exact,
    /// Use the halves untouched. The modulus width is only probabilistic.
    Raw,
}

/// Parameters for deriving an RSA key pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyGenParams {
    /// Modulus width in bits. Multiple of 16 in `MIN_KEY_BITS..=MAX_KEY_BITS`.
    pub key_bits: usize,
    /// Candidate shaping before the prime search.
    #[serde(default)]
    pub width_policy: WidthPolicy,
    /// Generator buffer length. `None` generates exactly `key_bits / 8`
    /// bytes; a larger value keeps only the leading `key_bits / 8` bytes.
    #[serde(default)]
    pub stream_len: Option<usize>,
    /// Cap on candidate buffers per round in the pattern search.
    #[serde(default)]
    pub pattern_limit: SearchLimit,
    /// Cap on prime increment passes.
    #[serde(default)]
    pub prime_limit: SearchLimit,
}

impl KeyGenParams {
    /// Default parameters for a `key_bits` modulus.
    #[must_use]
    pub const fn new(key_bits: usize) -> Self {
        Self {
            key_bits,
            width_policy: WidthPolicy::Exact,
            stream_len: None,
            pattern_limit: SearchLimit::UNBOUNDED,
            prime_limit: SearchLimit::UNBOUNDED,
        }
    }

    /// Same parameters with a different width policy.
    #[must_use]
    pub const fn with_width_policy(mut self, policy: WidthPolicy) -> Self {
        self.width_policy = policy;
        self
    }

    /// Same parameters with an explicit generator buffer length.
    #[must_use]
    pub const fn with_stream_len(mut self, len: usize) -> Self {
        self.stream_len = Some(len);
        self
    }

    /// Width of the modulus in bytes.
    #[must_use]
    pub const fn key_bytes(&self) -> usize {
        self.key_bits / 8
    }

    /// Generator buffer length actually used.
    #[must_use]
    pub fn effective_stream_len(&self) -> usize {
        self.stream_len.unwrap_or_else(|| self.key_bytes())
    }

    /// Check the key width and stream length.
    ///
    /// # Errors
    ///
    /// Returns `DrsaError::InvalidKeyWidth` if `key_bits` is not a multiple
    /// of 16, is outside `MIN_KEY_BITS..=MAX_KEY_BITS`, or if `stream_len`
    /// is shorter than the key width.
    pub fn validate(&self) -> Result<(), DrsaError> {
        if self.key_bits % 16 != 0 {
            return Err(DrsaError::InvalidKeyWidth(format!(
                "{} bits does not split into two whole-byte halves",
                self.key_bits
            )));
        }
        if !(MIN_KEY_BITS..=MAX_KEY_BITS).contains(&self.key_bits) {
            return Err(DrsaError::InvalidKeyWidth(format!(
                "{} bits outside supported range {MIN_KEY_BITS}..={MAX_KEY_BITS}",
                self.key_bits
            )));
        }
        let stream_len = self.effective_stream_len();
        if stream_len < self.key_bytes() {
            return Err(DrsaError::InvalidKeyWidth(format!(
                "stream of {stream_len} bytes cannot cover a {}-byte key",
                self.key_bytes()
            )));
        }
        debug_assert!(self.key_bytes() >= SEED_LEN);
        Ok(())
    }
}

impl Default for KeyGenParams {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_BITS)
    }
}
