//! Verify that secret containers wipe their bytes on drop.
//!
//! Reading freed memory is undefined behaviour; these are best-effort smoke
//! tests meant for the debug profile. They look for a sentinel pattern
//! rather than all-zeros because the allocator may reuse freed blocks.

use drsa_core::assembler::{split_for_primes, PrimeHalves};
use drsa_core::memory::SecretBytes;
use drsa_core::seed::{ConfusionPattern, Seed};

const SENTINEL: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

#[test]
fn pattern_is_wiped_on_drop() {
    let confusion: Vec<u8> = SENTINEL.iter().copied().cycle().take(4096).collect();

    let (ptr, len) = {
        let pattern = ConfusionPattern::new(&confusion).unwrap();
        let bytes = pattern.expose();
        assert_eq!(&bytes[..4], &SENTINEL);
        (bytes.as_ptr(), bytes.len())
    };

    // SAFETY: reads the block the pattern just released; see module docs.
    let leaked = unsafe { std::slice::from_raw_parts(ptr, len) }
        .windows(SENTINEL.len())
        .any(|w| w == SENTINEL);
    assert!(!leaked, "pattern bytes survived drop");
}

#[test]
fn prime_halves_are_wiped_on_drop() {
    let stream: Vec<u8> = SENTINEL.iter().copied().cycle().take(512).collect();

    let (ptr, len) = {
        let halves = split_for_primes(&stream).unwrap();
        (halves.q().as_ptr(), halves.half_len())
    };

    // SAFETY: as above.
    let leaked = unsafe { std::slice::from_raw_parts(ptr, len) }
        .windows(SENTINEL.len())
        .any(|w| w == SENTINEL);
    assert!(!leaked, "prime half survived drop");
}

#[test]
fn secret_bytes_zeroed_in_place() {
    let mut seed = SecretBytes::<32>::new([0xAB; 32]);
    let ptr = seed.expose().as_ptr();
    zeroize::Zeroize::zeroize(&mut seed);
    // SAFETY: `seed` is still alive; the pointer targets its inline array.
    let wiped = unsafe { std::slice::from_raw_parts(ptr, 32).iter().all(|&b| b == 0) };
    assert!(wiped, "SecretBytes<32> not zeroed by Zeroize");
}

#[test]
fn secret_carriers_need_drop() {
    assert!(std::mem::needs_drop::<Seed>());
    assert!(std::mem::needs_drop::<ConfusionPattern>());
    assert!(std::mem::needs_drop::<PrimeHalves>());
    assert!(std::mem::needs_drop::<SecretBytes<32>>());
}
