//! RSA parameter computation and the resulting key pair record.

use std::fmt;

use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::bigint::PrimeArithmetic;
use crate::error::DrsaError;

/// Fixed public exponent, `2^16 + 1`.
pub const PUBLIC_EXPONENT: u64 = 65_537;

/// Modulus and exponents of a derived key pair.
///
/// The primes are not retained. Only `n`, `e` and `d` survive parameter
/// computation.
pub struct RsaParameters<I> {
    n: I,
    e: I,
    d: I,
}

/// Key pair record produced by the production backend.
pub type RsaKeyPair = RsaParameters<BigUint>;

impl<I> RsaParameters<I> {
    /// Modulus `n = p * q`.
    pub const fn n(&self) -> &I {
        &self.n
    }

    /// Public exponent.
    pub const fn e(&self) -> &I {
        &self.e
    }

    /// Private exponent `d = e^-1 mod φ(n)`.
    pub const fn d(&self) -> &I {
        &self.d
    }
}

impl<I: fmt::Debug> fmt::Debug for RsaParameters<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaParameters")
            .field("n", &self.n)
            .field("e", &self.e)
            .field("d", &"***")
            .finish()
    }
}

/// Compute `n`, `e` and `d` from two primes, consuming them.
///
/// # Errors
///
/// Returns `DrsaError::NoModularInverse` if `gcd(e, (p-1)(q-1)) != 1`.
pub fn compute_parameters<A: PrimeArithmetic>(
    arith: &A,
    p: A::Int,
    q: A::Int,
) -> Result<RsaParameters<A::Int>, DrsaError> {
    let n = arith.mul(&p, &q);
    let e = arith.from_u64(PUBLIC_EXPONENT);
    let phi = arith.mul(&arith.decrement(&p), &arith.decrement(&q));
    drop((p, q));

    let d = arith
        .mod_inverse(&e, &phi)
        .ok_or(DrsaError::NoModularInverse)?;

    tracing::debug!(modulus_bits = arith.bits(&n), "rsa parameters computed");
    Ok(RsaParameters { n, e, d })
}

impl RsaParameters<BigUint> {
    /// Bit length of the modulus.
    #[must_use]
    pub fn bits(&self) -> u64 {
        self.n.bits()
    }

    /// Big-endian unsigned encoding of `n`.
    #[must_use]
    pub fn n_bytes(&self) -> Vec<u8> {
        self.n.to_bytes_be()
    }

    /// Big-endian unsigned encoding of `e`.
    #[must_use]
    pub fn e_bytes(&self) -> Vec<u8> {
        self.e.to_bytes_be()
    }

    /// Big-endian unsigned encoding of `d`, zeroized on drop.
    #[must_use]
    pub fn d_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.d.to_bytes_be())
    }

    /// Textbook `m^e mod n`. `None` if `m >= n`.
    #[must_use]
    pub fn encrypt_raw(&self, message: &BigUint) -> Option<BigUint> {
        (message < &self.n).then(|| message.modpow(&self.e, &self.n))
    }

    /// Textbook `c^d mod n`. `None` if `c >= n`.
    #[must_use]
    pub fn decrypt_raw(&self, ciphertext: &BigUint) -> Option<BigUint> {
        (ciphertext < &self.n).then(|| ciphertext.modpow(&self.d, &self.n))
    }
}
