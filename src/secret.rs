//! Caller-supplied encryption secrets
//!
//! sealcodec performs no key derivation or key management. Callers bring a
//! full-strength 32-byte key; generating, storing, and rotating it is their
//! responsibility.

use std::fmt;

use rand_core::{OsRng, RngCore};
use zeroize::ZeroizeOnDrop;

use crate::envelope::KEY_LEN;
use crate::error::{CodecError, ErrorCategory, ErrorKind, Result};

/// A 32-byte symmetric key for the envelope cipher.
///
/// The key material is kept out of `Debug` output and zeroized on drop.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Secret([u8; KEY_LEN]);

impl Secret {
    /// Wraps an existing 32-byte key.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Wraps a key held in a slice, validating its length.
    ///
    /// Rejects any slice that is not exactly [`KEY_LEN`] bytes with
    /// [`ErrorKind::InvalidKeyLength`], before any cryptographic operation
    /// is attempted.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != KEY_LEN {
            return Err(CodecError::with_kind(
                ErrorCategory::User,
                ErrorKind::InvalidKeyLength,
                format!("key must be {} bytes, got {}", KEY_LEN, slice.len()),
            ));
        }

        let mut bytes = [0u8; KEY_LEN];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Generates a fresh random key from the operating system's CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// The raw key bytes. Handle with care; this exposes the key material.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([redacted])")
    }
}
