//! Containers for seeds, patterns, streams and prime halves.
//!
//! [`SecretBuffer`] is heap-backed: its pages are `mlock`ed when the
//! process quota allows, and it is wiped on drop. [`SecretBytes`] is an
//! inline array that moves with its owner (a [`Seed`](crate::seed::Seed)
//! is threaded by value through every generator round), so it is only
//! wiped, never locked.
//!
//! Neither type prints its contents.

use std::fmt;

use secrecy::{ExposeSecret, SecretSlice};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::DrsaError;

/// Heap secret of any length.
pub struct SecretBuffer {
    // Field order matters: the lock is released before the bytes are wiped
    // and freed.
    lock: PageLock,
    inner: SecretSlice<u8>,
}

impl SecretBuffer {
    /// Copy `data` into a fresh allocation.
    ///
    /// # Errors
    ///
    /// Returns `DrsaError::SecureMemory` if the allocation cannot be made.
    pub fn new(data: &[u8]) -> Result<Self, DrsaError> {
        let mut owned = Vec::new();
        owned
            .try_reserve_exact(data.len())
            .map_err(|e| {
                DrsaError::SecureMemory(format!("cannot allocate {} bytes: {e}", data.len()))
            })?;
        owned.extend_from_slice(data);
        Ok(Self::adopt(owned))
    }

    /// Take over a wiped-on-drop vector without copying it.
    ///
    /// Falls back to a copy when the vector has spare capacity, since
    /// shrinking it would leave an unwiped block behind.
    ///
    /// # Errors
    ///
    /// Returns `DrsaError::SecureMemory` if a fallback copy cannot be
    /// allocated.
    pub fn from_zeroizing(mut data: Zeroizing<Vec<u8>>) -> Result<Self, DrsaError> {
        if data.capacity() != data.len() {
            return Self::new(&data);
        }
        Ok(Self::adopt(std::mem::take(&mut *data)))
    }

    fn adopt(owned: Vec<u8>) -> Self {
        let inner: SecretSlice<u8> = owned.into();
        let bytes = inner.expose_secret();
        let lock = PageLock::acquire(bytes.as_ptr(), bytes.len());
        Self { lock, inner }
    }

    /// Borrow the bytes.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.inner.expose_secret()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.expose().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the pages holding the bytes are locked in RAM.
    #[must_use]
    pub const fn is_mlocked(&self) -> bool {
        self.lock.held
    }
}

impl fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretBuffer(***)")
    }
}

impl fmt::Display for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Inline secret of `N` bytes, wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize>([u8; N]);

impl<const N: usize> SecretBytes<N> {
    #[must_use]
    pub const fn new(data: [u8; N]) -> Self {
        Self(data)
    }

    /// Borrow the bytes.
    #[must_use]
    pub const fn expose(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for SecretBytes<N> {
    fn from(data: [u8; N]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{N}>(***)")
    }
}

impl<const N: usize> fmt::Display for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// `mlock` held over a heap range for as long as the guard lives.
struct PageLock {
    ptr: *const u8,
    len: usize,
    held: bool,
}

// SAFETY: the pointer is never dereferenced, only passed back to munlock.
unsafe impl Send for PageLock {}
unsafe impl Sync for PageLock {}

impl PageLock {
    fn acquire(ptr: *const u8, len: usize) -> Self {
        let held = len > 0 && sys::mlock(ptr, len);
        if len > 0 && !held {
            static WARN_ONCE: std::sync::Once = std::sync::Once::new();
            WARN_ONCE.call_once(|| {
                tracing::warn!(
                    bytes = len,
                    "mlock refused, derived key material may reach swap \
                     (raise RLIMIT_MEMLOCK to prevent this)"
                );
            });
        }
        Self { ptr, len, held }
    }
}

impl Drop for PageLock {
    fn drop(&mut self) {
        if self.held {
            sys::munlock(self.ptr, self.len);
        }
    }
}

/// Set `RLIMIT_CORE` to zero so a crash cannot write seeds or exponents to
/// disk. A no-op on non-Unix targets.
///
/// # Errors
///
/// Returns `DrsaError::SecureMemory` if `setrlimit` fails.
pub fn disable_core_dumps() -> Result<(), DrsaError> {
    sys::disable_core_dumps()
}

#[cfg(unix)]
mod sys {
    use crate::error::DrsaError;

    pub(super) fn mlock(ptr: *const u8, len: usize) -> bool {
        // SAFETY: mlock validates the range itself and fails with ENOMEM
        // or EPERM instead of faulting.
        unsafe { libc::mlock(ptr.cast(), len) == 0 }
    }

    pub(super) fn munlock(ptr: *const u8, len: usize) {
        // SAFETY: same range that was passed to mlock. A failure only
        // leaves the pages resident.
        unsafe {
            libc::munlock(ptr.cast(), len);
        }
    }

    pub(super) fn disable_core_dumps() -> Result<(), DrsaError> {
        let zero = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        // SAFETY: plain POSIX call on a stack value.
        if unsafe { libc::setrlimit(libc::RLIMIT_CORE, &raw const zero) } != 0 {
            return Err(DrsaError::SecureMemory(format!(
                "setrlimit(RLIMIT_CORE) failed: {}",
                std::io::Error::last_os_error()
            )));
        }
        Ok(())
    }
}

#[cfg(not(unix))]
mod sys {
    use crate::error::DrsaError;

    pub(super) const fn mlock(_ptr: *const u8, _len: usize) -> bool {
        false
    }

    pub(super) const fn munlock(_ptr: *const u8, _len: usize) {}

    pub(super) const fn disable_core_dumps() -> Result<(), DrsaError> {
        Ok(())
    }
}
