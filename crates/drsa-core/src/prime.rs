//! Incremental search for two distinct primes.

use crate::bigint::PrimeArithmetic;
use crate::error::DrsaError;
use crate::params::SearchLimit;

/// Walk `p` and `q` upward from their big-endian byte halves until both are
/// prime and distinct.
///
/// Every pass tests both candidates. A candidate that is not prime moves up
/// by one; when both are prime but equal, `q` moves up. The result is
/// therefore the first prime at or above each start, with `q` pushed past
/// `p` on a collision.
///
/// # Errors
///
/// Returns `DrsaError::PrimeSearchExhausted` when `limit` caps the number of
/// increment passes.
pub fn find_prime_pair<A: PrimeArithmetic>(
    arith: &A,
    p_bytes: &[u8],
    q_bytes: &[u8],
    limit: SearchLimit,
) -> Result<(A::Int, A::Int), DrsaError> {
    let mut p = arith.from_be_bytes(p_bytes);
    let mut q = arith.from_be_bytes(q_bytes);
    let mut increments: u64 = 0;

    loop {
        let p_prime = arith.is_probably_prime(&p);
        let q_prime = arith.is_probably_prime(&q);
        let collide = p == q;
        if p_prime && q_prime && !collide {
            break;
        }
        if !limit.allows(increments) {
            return Err(DrsaError::PrimeSearchExhausted { increments });
        }
        if !p_prime {
            arith.increment(&mut p);
        }
        if !q_prime || collide {
            arith.increment(&mut q);
        }
        increments = increments.saturating_add(1);
    }

    tracing::debug!(
        increments,
        p_bits = arith.bits(&p),
        q_bits = arith.bits(&q),
        "prime pair found"
    );
    Ok((p, q))
}
