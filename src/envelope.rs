//! Sealing and opening of self-contained encrypted envelopes
//!
//! This module implements authenticated encryption using:
//! - XChaCha20-Poly1305 (extended-nonce AEAD) with a caller-supplied 32-byte key
//! - a fresh random 24-byte nonce drawn from the OS CSPRNG for every seal
//!
//! The binary envelope format is:
//! - nonce: 24 bytes
//! - sealed data: variable length (ciphertext plus 16-byte Poly1305 tag)
//!
//! There is no version byte or length prefix, and no associated data is
//! authenticated. The layout is positional and must stay stable on the
//! wire: envelopes produced by any conforming implementation open here,
//! and vice versa.

use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};
use rand_core::{OsRng, RngCore};

use crate::error::{CodecError, ErrorCategory, ErrorKind, Result};
use crate::secret::Secret;

/// Length of the encryption key in bytes
pub const KEY_LEN: usize = 32;

/// Length of the nonce in bytes
pub const NONCE_LEN: usize = 24;

/// Length of the Poly1305 authentication tag in bytes
pub const TAG_LEN: usize = 16;

/// Smallest well-formed envelope: a nonce plus the tag over empty plaintext
pub const MIN_ENVELOPE_LEN: usize = NONCE_LEN + TAG_LEN;

/// Seal plaintext under a secret with a fresh random nonce
///
/// Returns the binary envelope: nonce(24) + ciphertext + tag(16). Each call
/// draws a new nonce, so sealing the same plaintext twice produces two
/// different envelopes that both open to the original bytes.
pub fn seal(plaintext: &[u8], secret: &Secret) -> Result<Vec<u8>> {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    seal_with_nonce(plaintext, secret, &nonce)
}

/// Seal plaintext under a secret using the provided nonce
///
/// This function is ONLY for testing purposes to generate deterministic output.
/// NEVER use this in production - always use `seal()` which generates a random
/// nonce. Reusing a nonce under the same key destroys the confidentiality of
/// every message sealed with it.
pub fn seal_with_nonce(
    plaintext: &[u8],
    secret: &Secret,
    nonce: &[u8; NONCE_LEN],
) -> Result<Vec<u8>> {
    let cipher = XChaCha20Poly1305::new(secret.as_bytes().into());

    let sealed = cipher
        .encrypt(XNonce::from_slice(nonce), plaintext)
        .map_err(|_| {
            CodecError::with_kind(
                ErrorCategory::Internal,
                ErrorKind::CipherFailure,
                "aead encryption failed",
            )
        })?;

    // The primitive must emit ciphertext plus tag, exactly. Anything else
    // means a broken cipher, not a caller mistake.
    if sealed.len() != plaintext.len() + TAG_LEN {
        return Err(CodecError::with_kind(
            ErrorCategory::Internal,
            ErrorKind::InternalInvariant,
            format!(
                "cipher produced {} sealed bytes where {} were expected",
                sealed.len(),
                plaintext.len() + TAG_LEN
            ),
        ));
    }

    let mut envelope = Vec::with_capacity(NONCE_LEN + sealed.len());
    envelope.extend_from_slice(nonce);
    envelope.extend_from_slice(&sealed);

    Ok(envelope)
}

/// Open an envelope under a secret, returning the original plaintext
///
/// Inputs shorter than [`MIN_ENVELOPE_LEN`] are rejected with
/// [`ErrorKind::TruncatedEnvelope`] before any decryption is attempted.
/// A failed tag check reports [`ErrorKind::AuthenticationFailed`] whether
/// the cause is a wrong key or tampered data; no partial plaintext is
/// ever returned.
pub fn open(envelope: &[u8], secret: &Secret) -> Result<Vec<u8>> {
    if envelope.len() < MIN_ENVELOPE_LEN {
        return Err(CodecError::with_kind(
            ErrorCategory::User,
            ErrorKind::TruncatedEnvelope,
            format!(
                "envelope is {} bytes; the smallest possible envelope is {}",
                envelope.len(),
                MIN_ENVELOPE_LEN
            ),
        ));
    }

    let (nonce, sealed) = envelope.split_at(NONCE_LEN);

    let cipher = XChaCha20Poly1305::new(secret.as_bytes().into());
    let plaintext = cipher
        .decrypt(XNonce::from_slice(nonce), sealed)
        .map_err(|_| {
            CodecError::with_kind(
                ErrorCategory::User,
                ErrorKind::AuthenticationFailed,
                "corrupt envelope, tampered-with data, or wrong key",
            )
        })?;

    if plaintext.len() != sealed.len() - TAG_LEN {
        return Err(CodecError::with_kind(
            ErrorCategory::Internal,
            ErrorKind::InternalInvariant,
            format!(
                "cipher produced {} plaintext bytes where {} were expected",
                plaintext.len(),
                sealed.len() - TAG_LEN
            ),
        ));
    }

    Ok(plaintext)
}
