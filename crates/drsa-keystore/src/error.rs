//! Keystore error types for `drsa-keystore`.

use drsa_core::DrsaError;
use thiserror::Error;

/// Errors produced by key persistence.
#[derive(Debug, Error)]
pub enum KeystoreError {
    /// Key derivation failed (delegated from drsa-core).
    #[error(transparent)]
    Crypto(#[from] DrsaError),

    /// Malformed PEM text: wrong markers or invalid base64.
    #[error("invalid PEM: {0}")]
    Format(String),

    /// A key file already exists and overwriting was not requested.
    #[error("key file already exists: {0}")]
    AlreadyExists(String),

    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
