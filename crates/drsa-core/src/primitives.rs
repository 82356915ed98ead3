//! Thin adapters over the `ring` hash and PBKDF2 primitives.

use std::num::NonZeroU32;

use ring::{digest, pbkdf2};

use crate::error::DrsaError;

/// SHA-256 digest length in bytes.
pub const HASH_LEN: usize = digest::SHA256_OUTPUT_LEN;

/// SHA-256 of `data`.
#[must_use]
pub fn sha256(data: &[u8]) -> [u8; HASH_LEN] {
    let digest = digest::digest(&digest::SHA256, data);
    let mut out = [0u8; HASH_LEN];
    out.copy_from_slice(digest.as_ref());
    out
}

/// PBKDF2-HMAC-SHA256 of `password` and `salt`, filling `out` entirely.
///
/// # Errors
///
/// Returns `DrsaError::Derivation` if `out` is empty or longer than
/// PBKDF2 can produce (`(2^32 - 1) * 32` bytes).
pub fn pbkdf2_sha256(
    password: &[u8],
    salt: &[u8],
    iterations: NonZeroU32,
    out: &mut [u8],
) -> Result<(), DrsaError> {
    let max_len = (u32::MAX as usize).saturating_mul(HASH_LEN);
    if out.is_empty() || out.len() > max_len {
        return Err(DrsaError::Derivation(format!(
            "PBKDF2 output length {} rejected",
            out.len()
        )));
    }
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA256,
        iterations,
        salt,
        password,
        out,
    );
    Ok(())
}
