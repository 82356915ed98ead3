//! PBKDF2-derived bootstrap seed and confusion pattern.

use std::num::NonZeroU32;

use drsa_core::seed::derive_seed;

use super::hex;

#[test]
fn test_ab_single_iteration() {
    let (seed, pattern) = derive_seed(b"test", b"ab", NonZeroU32::MIN).expect("derive");
    assert_eq!(
        hex(seed.expose()),
        "f67ab26b323f73a706933a407dbd1d86a1b1e601ccab7b6db1c33dbf22ff4ec8"
    );
    assert_eq!(hex(pattern.expose()), "b7a7");
}
