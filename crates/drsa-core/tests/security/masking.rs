//! Formatting never leaks secret bytes.

use std::num::NonZeroU32;

use drsa_core::seed::derive_seed;
use drsa_core::{generate, generate_key_pair, split_for_primes};

#[test]
fn seed_and_pattern_are_masked() {
    let (seed, pattern) = derive_seed(b"test", b"ab", NonZeroU32::MIN).expect("derive");
    let seed_debug = format!("{seed:?}");
    assert!(seed_debug.contains("SecretBytes<32>(***)"));
    assert!(!seed_debug.contains("f6"));
    assert!(!seed_debug.contains("246"));

    let pattern_debug = format!("{pattern:?}");
    assert!(pattern_debug.contains("SecretBuffer(***)"));
    assert!(!pattern_debug.contains("b7"));
    assert!(!pattern_debug.contains("183"));
}

#[test]
fn stream_output_is_masked() {
    let out = generate(32, b"test", b"ab", 1).expect("generate");
    assert_eq!(format!("{out:?}"), "SecretBuffer(***)");
    assert_eq!(format!("{out}"), "SecretBuffer(***)");
}

#[test]
fn prime_halves_are_masked() {
    let halves = split_for_primes(&[0x42; 64]).expect("even length");
    let debug = format!("{halves:?}");
    assert!(!debug.contains("66"));
    assert!(!debug.contains("42"));
}

#[test]
fn private_exponent_is_masked() {
    let key = generate_key_pair(b"test", b"ab", 1, 256).expect("derive");
    let debug = format!("{key:?}");
    assert!(debug.contains("\"***\""));
    assert!(!debug.contains(&key.d().to_string()));
    assert!(debug.contains(&key.n().to_string()));
}
