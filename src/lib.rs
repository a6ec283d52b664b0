//! sealcodec - composable authenticated encryption for encode/decode pipelines
//!
//! An [`EncryptingCodec`] wraps an optional content codec with
//! XChaCha20-Poly1305, so a pipeline stage can encrypt at rest or on the
//! wire without its neighbors knowing that encryption happens at all.
//! `encode` serializes a message through the content codec and seals the
//! bytes into a self-contained envelope; `decode` mirrors it exactly.
//!
//! The binary envelope format is:
//! - nonce: 24 bytes, fresh from the OS CSPRNG on every seal
//! - sealed data: variable length (ciphertext plus 16-byte Poly1305 tag)
//!
//! Callers that only need the envelope primitive can use [`seal`] and
//! [`open`] directly:
//!
//! ```
//! use sealcodec::{Secret, open, seal};
//!
//! let secret = Secret::generate();
//! let envelope = seal(b"hello", &secret)?;
//! assert_eq!(open(&envelope, &secret)?, b"hello");
//! # Ok::<(), sealcodec::CodecError>(())
//! ```
//!
//! All operations are synchronous and take shared references; codecs are
//! safe to share across threads.

#![forbid(unsafe_code)]

pub mod armor;
pub mod codec;
pub mod content;
pub mod envelope;
pub mod error;
pub mod secret;

pub use codec::EncryptingCodec;
pub use content::{Decode, Encode, JsonCodec, RawCodec, Utf8Codec};
pub use envelope::{KEY_LEN, MIN_ENVELOPE_LEN, NONCE_LEN, TAG_LEN, open, seal};
pub use error::{CodecError, ErrorCategory, ErrorKind, Result};
pub use secret::Secret;
