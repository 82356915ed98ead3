mod hash_chain;
mod key_pairs;
mod seed_derivation;
mod stream;

/// Lower-case hex encoding for readable assertions.
pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
