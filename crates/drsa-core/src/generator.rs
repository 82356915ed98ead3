//! Confusion-seeded deterministic byte stream generator.
//!
//! Each round expands the seed into a candidate buffer along a SHA-256 hash
//! chain and accepts the buffer only once it contains the confusion
//! pattern. A rejected buffer is discarded and the chain keeps going from
//! where it stopped. On acceptance the next round is seeded from the
//! trailing [`SEED_LEN`] bytes of the accepted buffer.
//!
//! The number of candidates per round is geometric with mean roughly
//! `2^(8 * pattern_len) / size`. Nothing bounds it unless a
//! [`SearchLimit`] is supplied.

use std::num::NonZeroU32;

use zeroize::{Zeroize, Zeroizing};

use crate::error::{DrsaError, GenerationError};
use crate::memory::SecretBuffer;
use crate::params::{GeneratorParams, SearchLimit};
use crate::primitives::{self, HASH_LEN};
use crate::seed::{self, ConfusionPattern, Seed, SEED_LEN};

/// Fill `buf` from the hash chain starting at `seed` and return the chain
/// state after the last hash.
///
/// Every 32-byte chunk is `SHA256(previous seed)`; the final chunk is
/// truncated to fit `buf` but still advances the chain.
#[must_use]
pub fn expand(seed: Seed, buf: &mut [u8]) -> Seed {
    let mut seed = seed;
    for chunk in buf.chunks_mut(HASH_LEN) {
        let mut digest = primitives::sha256(seed.expose());
        let take = chunk.len();
        chunk.copy_from_slice(&digest[..take]);
        seed = Seed::new(digest);
        digest.zeroize();
    }
    seed
}

/// Returns `true` if `pattern` occurs as a contiguous run inside `haystack`.
///
/// The empty pattern is contained in every buffer.
#[must_use]
pub fn contains_pattern(haystack: &[u8], pattern: &[u8]) -> bool {
    if pattern.is_empty() {
        return true;
    }
    haystack.windows(pattern.len()).any(|window| window == pattern)
}

/// Check the generator invariants before any hashing.
///
/// # Errors
///
/// Returns `GenerationError::BufferTooSmall` if `size < SEED_LEN` and
/// `GenerationError::PatternTooLong` if the pattern cannot fit in `size`.
pub const fn check_layout(size: usize, pattern_len: usize) -> Result<(), GenerationError> {
    if size < SEED_LEN {
        return Err(GenerationError::BufferTooSmall { size });
    }
    if pattern_len > size {
        return Err(GenerationError::PatternTooLong { pattern_len, size });
    }
    Ok(())
}

/// Run one search-and-reseed round.
///
/// Returns the accepted buffer and the seed for the next round.
///
/// # Errors
///
/// Returns `GenerationError::SearchExhausted` when `limit` is reached and
/// the layout errors of [`check_layout`].
pub fn run_round(
    seed: Seed,
    pattern: &[u8],
    size: usize,
    limit: SearchLimit,
    round: u32,
) -> Result<(Zeroizing<Vec<u8>>, Seed), GenerationError> {
    check_layout(size, pattern.len())?;

    let mut candidate = Zeroizing::new(vec![0u8; size]);
    let mut chain = seed;
    let mut attempts: u64 = 0;
    loop {
        if !limit.allows(attempts) {
            return Err(GenerationError::SearchExhausted { round, attempts });
        }
        chain = expand(chain, &mut candidate);
        attempts = attempts.saturating_add(1);
        if contains_pattern(&candidate, pattern) {
            break;
        }
    }

    tracing::trace!(round, attempts, "round accepted");
    let next = Seed::from_tail(&candidate).ok_or(GenerationError::BufferTooSmall { size })?;
    Ok((candidate, next))
}

/// Run `rounds` chained rounds from an already derived seed and pattern.
///
/// # Errors
///
/// Returns the layout errors of [`check_layout`] before hashing anything,
/// `GenerationError::SearchExhausted` if a cap is reached, and
/// `DrsaError::SecureMemory` if the output buffer cannot be allocated.
pub fn generate_from_seed(
    params: &GeneratorParams,
    pattern: &ConfusionPattern,
    rounds: NonZeroU32,
    seed: Seed,
) -> Result<SecretBuffer, DrsaError> {
    check_layout(params.size, pattern.len())?;

    let mut seed = seed;
    let mut accepted = Zeroizing::new(Vec::new());
    for round in 0..rounds.get() {
        let (buffer, next) =
            run_round(seed, pattern.expose(), params.size, params.search_limit, round)?;
        accepted = buffer;
        seed = next;
    }

    tracing::debug!(size = params.size, rounds = rounds.get(), "stream generated");
    SecretBuffer::from_zeroizing(accepted)
}

/// Derive a `size`-byte stream from a password, a confusion string and an
/// iteration count.
///
/// `iterations` is both the PBKDF2 iteration count and the number of rounds.
///
/// # Errors
///
/// See [`generate_with`].
pub fn generate(
    size: usize,
    password: &[u8],
    confusion: &[u8],
    iterations: u32,
) -> Result<SecretBuffer, DrsaError> {
    generate_with(&GeneratorParams::new(size), password, confusion, iterations)
}

/// [`generate`] with explicit parameters.
///
/// # Errors
///
/// - `DrsaError::Derivation` for empty inputs or zero iterations
/// - `DrsaError::Generation` for a too-small buffer, a pattern longer than
///   the buffer, or an exhausted search cap
pub fn generate_with(
    params: &GeneratorParams,
    password: &[u8],
    confusion: &[u8],
    iterations: u32,
) -> Result<SecretBuffer, DrsaError> {
    let rounds = seed::iterations(iterations)?;
    check_layout(params.size, confusion.len())?;
    let (seed, pattern) = seed::derive_seed(password, confusion, rounds)?;
    generate_from_seed(params, &pattern, rounds, seed)
}
