//! Bootstrap seed and confusion pattern derivation.
//!
//! One PBKDF2-HMAC-SHA256 call over `(password, salt = confusion string)`
//! yields `32 + len(confusion)` bytes: the first 32 become the hash chain
//! [`Seed`], the remainder the [`ConfusionPattern`].

use std::num::NonZeroU32;

use zeroize::Zeroizing;

use crate::error::DrsaError;
use crate::memory::{SecretBuffer, SecretBytes};
use crate::primitives;

/// Hash chain seed length in bytes.
pub const SEED_LEN: usize = 32;

/// The 32-byte hash chain state.
///
/// Moved through the generator by value: every step consumes a seed and
/// returns the next one. Zeroized on drop.
#[derive(Debug)]
pub struct Seed(SecretBytes<SEED_LEN>);

impl Seed {
    /// Wrap raw seed bytes.
    #[must_use]
    pub fn new(bytes: [u8; SEED_LEN]) -> Self {
        Self(SecretBytes::new(bytes))
    }

    /// Seed from the trailing [`SEED_LEN`] bytes of `stream`, or `None` if
    /// the stream is shorter than that.
    #[must_use]
    pub fn from_tail(stream: &[u8]) -> Option<Self> {
        let start = stream.len().checked_sub(SEED_LEN)?;
        let mut bytes = [0u8; SEED_LEN];
        bytes.copy_from_slice(stream.get(start..)?);
        Some(Self::new(bytes))
    }

    /// Expose the seed bytes.
    #[must_use]
    pub const fn expose(&self) -> &[u8; SEED_LEN] {
        self.0.expose()
    }
}

/// The byte sequence every accepted stream must contain.
///
/// Same length as the confusion string it was derived from.
#[derive(Debug)]
pub struct ConfusionPattern(SecretBuffer);

impl ConfusionPattern {
    /// Wrap raw pattern bytes.
    ///
    /// # Errors
    ///
    /// Returns `DrsaError::SecureMemory` if the buffer cannot be allocated.
    pub fn new(bytes: &[u8]) -> Result<Self, DrsaError> {
        Ok(Self(SecretBuffer::new(bytes)?))
    }

    /// Expose the pattern bytes.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.0.expose()
    }

    /// Pattern length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the pattern is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Convert a caller-supplied iteration count.
///
/// # Errors
///
/// Returns `DrsaError::Derivation` if `iterations` is 0.
pub fn iterations(iterations: u32) -> Result<NonZeroU32, DrsaError> {
    NonZeroU32::new(iterations)
        .ok_or_else(|| DrsaError::Derivation("iteration count must be at least 1".into()))
}

/// Derive the bootstrap seed and the confusion pattern.
///
/// Deterministic: identical inputs always give identical outputs. The
/// intermediate PBKDF2 output is zeroized before returning.
///
/// # Errors
///
/// Returns `DrsaError::Derivation` if the password or confusion string is
/// empty, or if PBKDF2 rejects the output length.
pub fn derive_seed(
    password: &[u8],
    confusion: &[u8],
    iterations: NonZeroU32,
) -> Result<(Seed, ConfusionPattern), DrsaError> {
    if password.is_empty() {
        return Err(DrsaError::Derivation("password must not be empty".into()));
    }
    if confusion.is_empty() {
        return Err(DrsaError::Derivation(
            "confusion string must not be empty".into(),
        ));
    }

    let material_len = SEED_LEN
        .checked_add(confusion.len())
        .ok_or_else(|| DrsaError::Derivation("confusion string too long".into()))?;
    let mut material = Zeroizing::new(vec![0u8; material_len]);
    primitives::pbkdf2_sha256(password, confusion, iterations, &mut material)?;

    let (seed_bytes, pattern_bytes) = material.split_at(SEED_LEN);
    let seed = Seed::from_tail(seed_bytes)
        .ok_or_else(|| DrsaError::Derivation("derived material too short".into()))?;
    let pattern = ConfusionPattern::new(pattern_bytes)?;

    tracing::debug!(
        iterations = iterations.get(),
        pattern_len = pattern.len(),
        "derived bootstrap seed"
    );
    Ok((seed, pattern))
}
