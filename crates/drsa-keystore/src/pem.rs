//! Textual key encoding.
//!
//! Each key file is a `-----BEGIN <label>-----` line, the base64 of the
//! concatenated big-endian components wrapped at 64 columns, and a matching
//! `-----END <label>-----` line:
//!
//! | label         | payload    |
//! |---------------|------------|
//! | `PRIVATE KEY` | `n ‖ d`    |
//! | `PUBLIC KEY`  | `n ‖ e`    |
//!
//! The payload carries no length prefixes. Under the exact-width policy
//! `n` always occupies `key_bits / 8` bytes, which is what
//! [`split_payload`] relies on.

use drsa_core::RsaKeyPair;
use zeroize::Zeroizing;

use crate::error::KeystoreError;

/// Base64 line width.
pub const LINE_WIDTH: usize = 64;

/// Which half of the key pair a PEM block carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PemLabel {
    /// `n ‖ d`.
    PrivateKey,
    /// `n ‖ e`.
    PublicKey,
}

impl PemLabel {
    /// Marker text between the dashes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PrivateKey => "PRIVATE KEY",
            Self::PublicKey => "PUBLIC KEY",
        }
    }
}

/// Wrap `payload` in a PEM block.
#[must_use]
pub fn encode_pem(label: PemLabel, payload: &[u8]) -> String {
    let body = Zeroizing::new(data_encoding::BASE64.encode(payload));
    let capacity = body.len().saturating_add(body.len() / LINE_WIDTH).saturating_add(64);
    let mut out = String::with_capacity(capacity);
    out.push_str("-----BEGIN ");
    out.push_str(label.as_str());
    out.push_str("-----\n");
    for line in body.as_bytes().chunks(LINE_WIDTH) {
        // Base64 output is ASCII, so every chunk is valid UTF-8.
        out.push_str(std::str::from_utf8(line).unwrap_or_default());
        out.push('\n');
    }
    out.push_str("-----END ");
    out.push_str(label.as_str());
    out.push_str("-----\n");
    out
}

/// Extract and decode the payload of a PEM block.
///
/// # Errors
///
/// Returns `KeystoreError::Format` if the markers are missing or do not
/// match `label`, or if the body is not valid base64.
pub fn decode_pem(label: PemLabel, text: &str) -> Result<Zeroizing<Vec<u8>>, KeystoreError> {
    let begin = format!("-----BEGIN {}-----", label.as_str());
    let end = format!("-----END {}-----", label.as_str());

    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    if lines.next() != Some(begin.as_str()) {
        return Err(KeystoreError::Format(format!("expected `{begin}`")));
    }

    let mut body = Zeroizing::new(String::new());
    let mut closed = false;
    for line in lines.by_ref() {
        if line == end {
            closed = true;
            break;
        }
        if line.starts_with("-----") {
            return Err(KeystoreError::Format(format!("unexpected marker `{line}`")));
        }
        body.push_str(line);
    }
    if !closed {
        return Err(KeystoreError::Format(format!("missing `{end}`")));
    }
    if lines.next().is_some() {
        return Err(KeystoreError::Format("trailing data after end marker".into()));
    }

    data_encoding::BASE64
        .decode(body.as_bytes())
        .map(Zeroizing::new)
        .map_err(|e| KeystoreError::Format(format!("invalid base64: {e}")))
}

/// PEM text for the private half, `n ‖ d`.
#[must_use]
pub fn encode_private_pem(key: &RsaKeyPair) -> Zeroizing<String> {
    let mut payload = Zeroizing::new(key.n_bytes());
    payload.extend_from_slice(&key.d_bytes());
    Zeroizing::new(encode_pem(PemLabel::PrivateKey, &payload))
}

/// PEM text for the public half, `n ‖ e`.
#[must_use]
pub fn encode_public_pem(key: &RsaKeyPair) -> String {
    let mut payload = key.n_bytes();
    payload.extend_from_slice(&key.e_bytes());
    encode_pem(PemLabel::PublicKey, &payload)
}

/// Split a decoded payload into the modulus and the exponent that follows
/// it, given the modulus width in bytes.
///
/// The payload has no length prefix, so `modulus_len` must be the byte
/// length `n` was written with. That is `key_bits / 8` only for keys made
/// under [`WidthPolicy::Exact`](drsa_core::WidthPolicy::Exact); a raw-width
/// modulus can be shorter, and its boundary cannot be recovered from the
/// file alone.
///
/// # Errors
///
/// Returns `KeystoreError::Format` if the payload is not longer than
/// `modulus_len`.
pub fn split_payload(payload: &[u8], modulus_len: usize) -> Result<(&[u8], &[u8]), KeystoreError> {
    if payload.len() <= modulus_len {
        return Err(KeystoreError::Format(format!(
            "payload of {} bytes has no exponent after a {modulus_len}-byte modulus",
            payload.len()
        )));
    }
    Ok(payload.split_at(modulus_len))
}
