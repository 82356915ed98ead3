//! `drsa-core` — deterministic, password-controlled RSA key derivation.
//!
//! A password, a confusion string and an iteration count always reproduce
//! the same byte stream and the same key pair. Pure computation: no I/O,
//! no async, no global state.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod memory;
pub mod params;

pub mod primitives;
pub mod seed;

pub mod generator;

pub mod assembler;
pub mod bigint;
pub mod prime;
pub mod rsa;

pub mod keygen;

pub use assembler::{prepare_halves, split_for_primes, PrimeHalves};
pub use bigint::{BigUintArithmetic, PrimeArithmetic, MILLER_RABIN_ROUNDS};
pub use error::{DrsaError, GenerationError};
pub use generator::{generate, generate_from_seed, generate_with};
pub use keygen::{
    generate_key_pair, generate_key_pair_with, key_pair_from_stream, key_pair_from_stream_with,
};
pub use memory::{disable_core_dumps, SecretBuffer, SecretBytes};
pub use params::{
    GeneratorParams, KeyGenParams, SearchLimit, WidthPolicy, DEFAULT_KEY_BITS,
    DEFAULT_STREAM_LEN, MAX_KEY_BITS, MIN_KEY_BITS,
};
pub use prime::find_prime_pair;
pub use rsa::{compute_parameters, RsaKeyPair, RsaParameters, PUBLIC_EXPONENT};
pub use seed::{derive_seed, ConfusionPattern, Seed, SEED_LEN};

/// Re-exported so callers can name [`RsaKeyPair`] components.
pub use num_bigint::BigUint;
