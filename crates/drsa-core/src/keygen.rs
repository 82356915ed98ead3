//! End-to-end key pair derivation.
//!
//! seed derivation → byte stream → prime halves → prime search → parameters
//!
//! Every stage consumes its predecessor's output; no state is shared
//! between calls, so independent derivations can run on separate threads.

use crate::assembler;
use crate::bigint::{BigUintArithmetic, PrimeArithmetic};
use crate::error::DrsaError;
use crate::generator;
use crate::params::{GeneratorParams, KeyGenParams};
use crate::prime;
use crate::rsa::{self, RsaKeyPair, RsaParameters};

/// Derive an RSA key pair of `key_bits` with default parameters.
///
/// # Errors
///
/// See [`generate_key_pair_with`].
pub fn generate_key_pair(
    password: &[u8],
    confusion: &[u8],
    iterations: u32,
    key_bits: usize,
) -> Result<RsaKeyPair, DrsaError> {
    generate_key_pair_with(&KeyGenParams::new(key_bits), password, confusion, iterations)
}

/// Derive an RSA key pair.
///
/// # Errors
///
/// - `DrsaError::InvalidKeyWidth` for unsupported key widths or stream lengths
/// - `DrsaError::Derivation` for empty inputs or zero iterations
/// - `DrsaError::Generation` for generator layout errors or an exhausted cap
/// - `DrsaError::PrimeSearchExhausted` if the prime cap is reached
/// - `DrsaError::NoModularInverse` if `e` is not invertible modulo `φ(n)`
pub fn generate_key_pair_with(
    params: &KeyGenParams,
    password: &[u8],
    confusion: &[u8],
    iterations: u32,
) -> Result<RsaKeyPair, DrsaError> {
    params.validate()?;
    let stream_params = GeneratorParams::new(params.effective_stream_len())
        .with_search_limit(params.pattern_limit);
    let stream = generator::generate_with(&stream_params, password, confusion, iterations)?;
    key_pair_from_stream(params, stream.expose())
}

/// Build a key pair from an existing stream, using its first
/// `key_bits / 8` bytes.
///
/// # Errors
///
/// `DrsaError::InvalidKeyWidth` if `stream` is shorter than the key, plus
/// the prime search and parameter errors of [`generate_key_pair_with`].
pub fn key_pair_from_stream(params: &KeyGenParams, stream: &[u8]) -> Result<RsaKeyPair, DrsaError> {
    key_pair_from_stream_with(&BigUintArithmetic, params, stream)
}

/// [`key_pair_from_stream`] over any arithmetic backend.
///
/// # Errors
///
/// Same as [`key_pair_from_stream`].
pub fn key_pair_from_stream_with<A: PrimeArithmetic>(
    arith: &A,
    params: &KeyGenParams,
    stream: &[u8],
) -> Result<RsaParameters<A::Int>, DrsaError> {
    params.validate()?;
    let key_bytes = params.key_bytes();
    let material = stream.get(..key_bytes).ok_or_else(|| {
        DrsaError::InvalidKeyWidth(format!(
            "stream of {} bytes cannot cover a {key_bytes}-byte key",
            stream.len()
        ))
    })?;

    let halves = assembler::prepare_halves(material, params.width_policy)?;
    let (p, q) = prime::find_prime_pair(arith, halves.p(), halves.q(), params.prime_limit)?;
    drop(halves);
    rsa::compute_parameters(arith, p, q)
}
