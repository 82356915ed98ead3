//! Golden key pairs.
//!
//! The raw-width vectors use the prime halves untouched, exactly as the
//! stream produced them.

use drsa_core::{generate_key_pair_with, KeyGenParams, WidthPolicy};

use super::hex;

#[test]
fn raw_width_256_bits() {
    let params = KeyGenParams::new(256).with_width_policy(WidthPolicy::Raw);
    let key = generate_key_pair_with(&params, b"test", b"ab", 1).expect("derive");
    assert_eq!(
        hex(&key.n_bytes()),
        "5de07ffba71df6eefbcf221ba69ce43573e6a6f8e5cb12d46c707bdd725922cd"
    );
    assert_eq!(
        hex(&key.d_bytes()),
        "4ade5fd3a89d4a31a09bba5d090cf926f35208f11f7c186d08e881a4a4151c35"
    );
    assert_eq!(hex(&key.e_bytes()), "010001");
    // Raw halves do not guarantee the full width.
    assert_eq!(key.bits(), 255);
}

#[test]
fn exact_width_256_bits() {
    let key = generate_key_pair_with(&KeyGenParams::new(256), b"test", b"ab", 1).expect("derive");
    assert_eq!(
        hex(&key.n_bytes()),
        "c4315e106124637cf909e7e6a3fc4ac6fc4fe6e03b48ab5d817b389279150257"
    );
    assert_eq!(key.bits(), 256);
}

#[test]
fn raw_width_512_bits_two_iterations() {
    let params = KeyGenParams::new(512).with_width_policy(WidthPolicy::Raw);
    let key = generate_key_pair_with(&params, b"password", b"x", 2).expect("derive");
    assert_eq!(
        hex(&key.n_bytes()),
        "864aaa310477b62b3fbeba1ed3b544916cebabfed1b881baf81a4ddb31180657\
         050dc8db02a953a86ff30abd19cf3029d24fba237d5c7e188482614b130fe9ab"
    );
    assert_eq!(
        hex(&key.d_bytes()),
        "099242c5119b72a96c76ac8f4be98c848cedd3296b4b2a3be838ffb992ab32b0\
         5ffd6ec5305f050c4c29a4fe7e666c181c996e15795ad48fbf21eec49b8ca6d1"
    );
}

#[test]
fn exact_width_512_bits_two_iterations() {
    let key =
        generate_key_pair_with(&KeyGenParams::new(512), b"password", b"x", 2).expect("derive");
    assert_eq!(
        hex(&key.n_bytes()),
        "c03c68cb946d55018cbbf617c908771188e705b7717f6ea807cd3bf8669f13cb\
         2982388e05e7b0b060d04cf06fcf682113c3b0718f3274039c97f82a58dbafb7"
    );
    assert_eq!(key.bits(), 512);
}
