//! Keys built from an externally produced stream.

use drsa_core::{
    generate, generate_key_pair_with, key_pair_from_stream, DrsaError, KeyGenParams,
    DEFAULT_STREAM_LEN,
};

#[test]
fn long_stream_feeds_leading_key_bytes() {
    let params = KeyGenParams::new(512).with_stream_len(DEFAULT_STREAM_LEN);
    let derived = generate_key_pair_with(&params, b"pw", b"s", 1).expect("derive");

    let stream = generate(DEFAULT_STREAM_LEN, b"pw", b"s", 1).expect("generate");
    let piped = key_pair_from_stream(&params, stream.expose()).expect("from stream");

    assert_eq!(derived.n(), piped.n());
    assert_eq!(derived.d(), piped.d());
}

#[test]
fn stream_length_changes_the_key() {
    let short = generate_key_pair_with(&KeyGenParams::new(512), b"pw", b"s", 1).expect("derive");
    let long = generate_key_pair_with(
        &KeyGenParams::new(512).with_stream_len(1024),
        b"pw",
        b"s",
        1,
    )
    .expect("derive");
    assert_ne!(short.n(), long.n());
}

#[test]
fn truncated_stream_is_rejected() {
    let err = key_pair_from_stream(&KeyGenParams::new(2048), &[0u8; 100]).expect_err("short");
    assert!(matches!(err, DrsaError::InvalidKeyWidth(_)));
}
