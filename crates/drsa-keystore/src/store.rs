//! Key files on disk.
//!
//! A key pair is stored as two PEM files in one directory. Both are written
//! through a temporary sibling and renamed into place, so a crash never
//! leaves a truncated key behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use drsa_core::RsaKeyPair;
use zeroize::Zeroizing;

use crate::error::KeystoreError;
use crate::pem::{self, PemLabel};

/// File name of the private half.
pub const PRIVATE_KEY_FILE: &str = "private_key.pem";

/// File name of the public half.
pub const PUBLIC_KEY_FILE: &str = "public_key.pem";

/// Where [`store_key_pair`] put the two halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredKeyPaths {
    /// `{dir}/private_key.pem`, owner-only on Unix.
    pub private_key: PathBuf,
    /// `{dir}/public_key.pem`.
    pub public_key: PathBuf,
}

impl StoredKeyPaths {
    /// Paths the two halves occupy inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            private_key: dir.join(PRIVATE_KEY_FILE),
            public_key: dir.join(PUBLIC_KEY_FILE),
        }
    }
}

/// Write both halves of `key` into `dir`, creating it if needed.
///
/// # Errors
///
/// - `KeystoreError::AlreadyExists` if either file exists and `overwrite`
///   is false; nothing is written in that case
/// - `KeystoreError::Io` if the directory or a file cannot be written
pub fn store_key_pair(
    key: &RsaKeyPair,
    dir: &Path,
    overwrite: bool,
) -> Result<StoredKeyPaths, KeystoreError> {
    let paths = StoredKeyPaths::in_dir(dir);
    if !overwrite {
        for path in [&paths.private_key, &paths.public_key] {
            if path.exists() {
                return Err(KeystoreError::AlreadyExists(path.display().to_string()));
            }
        }
    }

    fs::create_dir_all(dir)?;
    let private_pem = pem::encode_private_pem(key);
    write_atomic(&paths.private_key, private_pem.as_bytes(), true)?;
    write_atomic(&paths.public_key, pem::encode_public_pem(key).as_bytes(), false)?;

    tracing::debug!(
        dir = %dir.display(),
        modulus_bits = key.bits(),
        "key pair stored"
    );
    Ok(paths)
}

/// Read a PEM file and return its decoded payload.
///
/// # Errors
///
/// `KeystoreError::Io` if the file cannot be read, `KeystoreError::Format`
/// if it is not a PEM block carrying `label`.
pub fn read_pem_file(path: &Path, label: PemLabel) -> Result<Zeroizing<Vec<u8>>, KeystoreError> {
    let text = Zeroizing::new(fs::read_to_string(path)?);
    pem::decode_pem(label, &text)
}

fn write_atomic(path: &Path, contents: &[u8], owner_only: bool) -> Result<(), KeystoreError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(if owner_only { 0o600 } else { 0o644 });
    }
    #[cfg(not(unix))]
    let _ = owner_only;

    let mut file = options.open(&tmp)?;
    file.write_all(contents)?;
    file.sync_all()?;
    drop(file);

    // A stale temp file keeps its old mode; pin it down before the rename.
    #[cfg(unix)]
    {
        if owner_only {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
        }
    }

    fs::rename(&tmp, path)?;
    Ok(())
}
