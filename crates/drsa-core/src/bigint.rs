//! Arbitrary-precision arithmetic and primality, as an injected capability.
//!
//! Prime search and parameter computation are written against
//! [`PrimeArithmetic`] so they can be exercised with small, hand-checkable
//! integers. [`BigUintArithmetic`] is the production backend.

// Arbitrary-precision operations cannot overflow.
#![allow(clippy::arithmetic_side_effects)]

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

/// Number of Miller-Rabin rounds run on candidates that survive trial division.
pub const MILLER_RABIN_ROUNDS: usize = 64;

/// The first 64 primes: trial divisors and Miller-Rabin witnesses.
const SMALL_PRIMES: [u32; MILLER_RABIN_ROUNDS] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293,
    307, 311,
];

/// Integer operations needed by prime search and RSA parameter computation.
pub trait PrimeArithmetic {
    /// Non-negative integer type.
    type Int: Clone + PartialEq;

    /// Big-endian unsigned decoding.
    fn from_be_bytes(&self, bytes: &[u8]) -> Self::Int;

    /// Minimal big-endian unsigned encoding (zero encodes as `[0]`).
    fn to_be_bytes(&self, value: &Self::Int) -> Vec<u8>;

    /// Lift a machine integer.
    fn from_u64(&self, value: u64) -> Self::Int;

    /// `value += 1`.
    fn increment(&self, value: &mut Self::Int);

    /// `value - 1`, saturating at zero.
    fn decrement(&self, value: &Self::Int) -> Self::Int;

    /// `a * b`.
    fn mul(&self, a: &Self::Int, b: &Self::Int) -> Self::Int;

    /// `base^exponent mod modulus`.
    fn mod_pow(&self, base: &Self::Int, exponent: &Self::Int, modulus: &Self::Int) -> Self::Int;

    /// `a^-1 mod modulus`, or `None` if `gcd(a, modulus) != 1`.
    fn mod_inverse(&self, a: &Self::Int, modulus: &Self::Int) -> Option<Self::Int>;

    /// Probabilistic primality test. Treated as authoritative.
    fn is_probably_prime(&self, value: &Self::Int) -> bool;

    /// Bit length (zero has length 0).
    fn bits(&self, value: &Self::Int) -> u64;
}

/// [`PrimeArithmetic`] over [`num_bigint::BigUint`].
///
/// Primality is trial division by the first 64 primes followed by
/// [`MILLER_RABIN_ROUNDS`] Miller-Rabin rounds with those same primes as
/// fixed witnesses, so the verdict is reproducible across runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct BigUintArithmetic;

impl BigUintArithmetic {
    fn miller_rabin(n: &BigUint) -> bool {
        let n_minus_one = n - 1u32;
        let Some(s) = n_minus_one.trailing_zeros() else {
            return false;
        };
        let d = &n_minus_one >> s;
        let two = BigUint::from(2u32);

        'witness: for &a in &SMALL_PRIMES {
            let mut x = BigUint::from(a).modpow(&d, n);
            if x.is_one() || x == n_minus_one {
                continue 'witness;
            }
            for _ in 1..s {
                x = x.modpow(&two, n);
                if x == n_minus_one {
                    continue 'witness;
                }
                if x.is_one() {
                    return false;
                }
            }
            return false;
        }
        true
    }
}

impl PrimeArithmetic for BigUintArithmetic {
    type Int = BigUint;

    fn from_be_bytes(&self, bytes: &[u8]) -> BigUint {
        BigUint::from_bytes_be(bytes)
    }

    fn to_be_bytes(&self, value: &BigUint) -> Vec<u8> {
        value.to_bytes_be()
    }

    fn from_u64(&self, value: u64) -> BigUint {
        BigUint::from(value)
    }

    fn increment(&self, value: &mut BigUint) {
        *value += 1u32;
    }

    fn decrement(&self, value: &BigUint) -> BigUint {
        if value.is_zero() {
            BigUint::zero()
        } else {
            value - 1u32
        }
    }

    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a * b
    }

    fn mod_pow(&self, base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
        base.modpow(exponent, modulus)
    }

    fn mod_inverse(&self, a: &BigUint, modulus: &BigUint) -> Option<BigUint> {
        if modulus.is_zero() || !a.gcd(modulus).is_one() {
            return None;
        }
        a.modinv(modulus)
    }

    fn is_probably_prime(&self, value: &BigUint) -> bool {
        if value < &BigUint::from(2u32) {
            return false;
        }
        if let Some(small) = value.to_u32() {
            if SMALL_PRIMES.contains(&small) {
                return true;
            }
        }
        if SMALL_PRIMES.iter().any(|&p| (value % p).is_zero()) {
            return false;
        }
        Self::miller_rabin(value)
    }

    fn bits(&self, value: &BigUint) -> u64 {
        value.bits()
    }
}
