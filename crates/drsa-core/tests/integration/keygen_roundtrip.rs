//! Round-trip law and structural checks on derived key pairs.

use drsa_core::{
    compute_parameters, find_prime_pair, generate, generate_key_pair, prepare_halves, BigUint,
    BigUintArithmetic, KeyGenParams, PrimeArithmetic, SearchLimit, WidthPolicy,
};

#[test]
fn encrypt_decrypt_law_holds() {
    let key = generate_key_pair(b"correct horse", b"zq", 1, 512).expect("derive");
    for m in [
        BigUint::from(0u32),
        BigUint::from(2u32),
        BigUint::from(0xC0FF_EEu32),
        BigUint::from_bytes_be(b"attack at dawn"),
    ] {
        let c = key.encrypt_raw(&m).expect("m < n");
        assert_eq!(key.decrypt_raw(&c), Some(m));
    }
}

#[test]
fn e_times_d_is_one_modulo_phi() {
    let a = BigUintArithmetic;
    let params = KeyGenParams::new(512);
    let stream = generate(64, b"pw", b"k", 1).expect("generate");
    let halves = prepare_halves(stream.expose(), params.width_policy).expect("split");
    let (p, q) = find_prime_pair(&a, halves.p(), halves.q(), SearchLimit::UNBOUNDED)
        .expect("primes");

    assert_ne!(p, q);
    assert!(a.is_probably_prime(&p));
    assert!(a.is_probably_prime(&q));

    let phi = (&p - 1u32) * (&q - 1u32);
    let n = &p * &q;
    let key = compute_parameters(&a, p, q).expect("invertible");
    assert_eq!(key.n(), &n);
    assert_eq!((key.e() * key.d()) % &phi, BigUint::from(1u32));
}

#[test]
fn prime_halves_span_half_the_key() {
    let params = KeyGenParams::new(2048);
    let stream = generate(params.key_bytes(), b"test", b"a", 1).expect("generate");
    let halves = prepare_halves(stream.expose(), WidthPolicy::Raw).expect("split");
    assert_eq!(halves.p().len(), 128);
    assert_eq!(halves.q().len(), 128);
}

#[test]
fn scenario_2048_bit_key() {
    let key = generate_key_pair(b"test", b"a", 1, 2048).expect("derive");
    let bits = key.bits();
    assert!((2047..=2048).contains(&bits), "modulus has {bits} bits");
    assert_eq!(key.n_bytes().len(), 256);

    let m = BigUint::from_bytes_be(b"deterministic rsa");
    let c = key.encrypt_raw(&m).expect("m < n");
    assert_eq!(key.decrypt_raw(&c), Some(m));
}
