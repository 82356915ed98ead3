//! SHA-256 chain expansion vectors.

use drsa_core::generator::expand;
use drsa_core::primitives::sha256;
use drsa_core::seed::{Seed, SEED_LEN};

use super::hex;

/// SHA256(0^32) and SHA256(SHA256(0^32)).
const ZERO_SEED_CHAIN: &str = "66687aadf862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925\
                               2b32db6c2c0a6235fb1397e8225ea85e0f0e6e8c7b126d0016ccbde0e667151e";

#[test]
fn zero_seed_chained_twice() {
    let mut buf = [0u8; 64];
    let next = expand(Seed::new([0u8; SEED_LEN]), &mut buf);
    assert_eq!(hex(&buf), ZERO_SEED_CHAIN);
    assert_eq!(hex(next.expose()), &ZERO_SEED_CHAIN[64..]);
}

#[test]
fn each_chunk_hashes_the_previous_chunk() {
    let mut buf = [0u8; 96];
    let _ = expand(Seed::new([0x11u8; SEED_LEN]), &mut buf);
    assert_eq!(&buf[..32], &sha256(&[0x11u8; SEED_LEN]));
    assert_eq!(&buf[32..64], &sha256(&buf[..32]));
    assert_eq!(&buf[64..], &sha256(&buf[32..64]));
}

#[test]
fn partial_chunk_is_a_prefix_of_the_full_chain() {
    let mut full = [0u8; 64];
    let _ = expand(Seed::new([0u8; SEED_LEN]), &mut full);
    let mut partial = [0u8; 45];
    let _ = expand(Seed::new([0u8; SEED_LEN]), &mut partial);
    assert_eq!(&partial[..], &full[..45]);
}
