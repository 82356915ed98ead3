//! Key material assembly: slicing a stream into the two prime halves.

use zeroize::Zeroizing;

use crate::error::DrsaError;
use crate::memory::SecretBuffer;
use crate::params::WidthPolicy;

/// The two byte blocks that seed `p` and `q`.
#[derive(Debug)]
pub struct PrimeHalves {
    p: SecretBuffer,
    q: SecretBuffer,
}

impl PrimeHalves {
    /// Bytes destined for `p`.
    #[must_use]
    pub fn p(&self) -> &[u8] {
        self.p.expose()
    }

    /// Bytes destined for `q`.
    #[must_use]
    pub fn q(&self) -> &[u8] {
        self.q.expose()
    }

    /// Length of each half in bytes.
    #[must_use]
    pub fn half_len(&self) -> usize {
        self.p.len()
    }
}

/// Split `bytes` into `bytes[..half]` and `bytes[half..]`.
///
/// Pure slicing: the halves concatenate back to the input.
///
/// # Errors
///
/// Returns `DrsaError::InvalidKeyWidth` if `bytes` is empty or of odd length.
pub fn split_for_primes(bytes: &[u8]) -> Result<PrimeHalves, DrsaError> {
    if bytes.is_empty() || bytes.len() % 2 != 0 {
        return Err(DrsaError::InvalidKeyWidth(format!(
            "{} bytes cannot be split into two equal halves",
            bytes.len()
        )));
    }
    let (p, q) = bytes.split_at(bytes.len() / 2);
    Ok(PrimeHalves {
        p: SecretBuffer::new(p)?,
        q: SecretBuffer::new(q)?,
    })
}

/// Split `bytes` and shape both halves according to `policy`.
///
/// Under [`WidthPolicy::Exact`] the two top bits of each half are set, so
/// the product of any two candidates at or above those values spans exactly
/// `8 * bytes.len()` bits.
///
/// # Errors
///
/// Same as [`split_for_primes`].
pub fn prepare_halves(bytes: &[u8], policy: WidthPolicy) -> Result<PrimeHalves, DrsaError> {
    match policy {
        WidthPolicy::Raw => split_for_primes(bytes),
        WidthPolicy::Exact => {
            let mut shaped = Zeroizing::new(bytes.to_vec());
            let half = shaped.len() / 2;
            if let Some(first) = shaped.first_mut() {
                *first |= 0b1100_0000;
            }
            if let Some(first) = shaped.get_mut(half) {
                *first |= 0b1100_0000;
            }
            split_for_primes(&shaped)
        }
    }
}
