//! The encrypting codec wrapper
//!
//! [`EncryptingCodec`] composes an optional content codec with the envelope
//! cipher. Encoding runs the content transform first and seals the result;
//! decoding opens the envelope first and then runs the content transform.
//! The cipher always operates on the serialized byte form, and the content
//! codec never sees ciphertext.

use crate::content::{Decode, Encode, RawCodec};
use crate::envelope;
use crate::error::Result;
use crate::secret::Secret;

/// Authenticated encryption wrapped around an optional content codec.
///
/// The wrapper is immutable after construction and holds no per-call
/// state; `encode` and `decode` may be called freely from multiple
/// threads. Each call allocates its own buffers.
///
/// ```
/// use sealcodec::{EncryptingCodec, Secret};
///
/// let codec = EncryptingCodec::new(Secret::generate());
///
/// let envelope = codec.encode(b"attack at dawn")?;
/// assert_eq!(codec.decode(&envelope)?, b"attack at dawn");
/// # Ok::<(), sealcodec::CodecError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EncryptingCodec<C = RawCodec> {
    secret: Option<Secret>,
    codec: C,
}

impl EncryptingCodec<RawCodec> {
    /// Creates an encrypting codec for raw byte messages.
    pub fn new(secret: Secret) -> Self {
        Self::with_codec(secret, RawCodec)
    }

    /// Creates a pass-through codec for raw byte messages.
    ///
    /// See [`passthrough_with_codec`](Self::passthrough_with_codec) for the
    /// caveats that apply to pass-through operation.
    pub fn passthrough() -> Self {
        Self::passthrough_with_codec(RawCodec)
    }
}

impl<C> EncryptingCodec<C> {
    /// Creates an encrypting codec that runs `codec` before sealing and
    /// after opening.
    pub fn with_codec(secret: Secret, codec: C) -> Self {
        Self {
            secret: Some(secret),
            codec,
        }
    }

    /// Creates a codec that applies only the content transform, with NO
    /// encryption.
    ///
    /// This is a deliberate escape hatch for tests and environments where
    /// encryption is switched off: output is neither confidential nor
    /// integrity-protected, and no envelope is produced. The downgrade is
    /// only reachable through this constructor, so call sites name it
    /// explicitly.
    pub fn passthrough_with_codec(codec: C) -> Self {
        Self {
            secret: None,
            codec,
        }
    }

    /// Whether encoded output is sealed (false in pass-through mode).
    pub fn is_encrypting(&self) -> bool {
        self.secret.is_some()
    }
}

impl<C: Encode> EncryptingCodec<C> {
    /// Encodes a message through the content codec and seals the bytes
    /// into an envelope
    ///
    /// The content codec always runs on the pre-encryption representation.
    /// In pass-through mode the encoded bytes are returned as-is.
    pub fn encode(&self, message: &C::Message) -> Result<Vec<u8>> {
        let plaintext = self
            .codec
            .encode(message)
            .map_err(|e| e.with_context("content encoding failed"))?;

        match &self.secret {
            Some(secret) => envelope::seal(&plaintext, secret),
            None => Ok(plaintext),
        }
    }
}

impl<C: Decode> EncryptingCodec<C> {
    /// Opens an envelope and decodes the recovered plaintext back into a
    /// message
    ///
    /// The exact mirror of [`encode`](Self::encode): the envelope is opened
    /// first, then the content codec runs on the recovered plaintext. For
    /// every supported message, `decode(encode(m))` returns `m`, with or
    /// without a content codec, sealed or pass-through.
    pub fn decode(&self, bytes: &[u8]) -> Result<C::Message> {
        let plaintext = match &self.secret {
            Some(secret) => Some(envelope::open(bytes, secret)?),
            None => None,
        };

        self.codec
            .decode(plaintext.as_deref().unwrap_or(bytes))
            .map_err(|e| e.with_context("content decoding failed"))
    }
}
