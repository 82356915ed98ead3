//! `drsa-keystore` — persistence for derived key pairs.
//!
//! Encodes the modulus and exponents of a [`drsa_core::RsaKeyPair`] as PEM
//! text and writes the private and public halves to disk.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod pem;
pub mod store;

pub use error::KeystoreError;
pub use pem::{
    decode_pem, encode_pem, encode_private_pem, encode_public_pem, split_payload, PemLabel,
    LINE_WIDTH,
};
pub use store::{
    read_pem_file, store_key_pair, StoredKeyPaths, PRIVATE_KEY_FILE, PUBLIC_KEY_FILE,
};
