//! Content codecs composed around the envelope cipher
//!
//! A content codec is the optional transform that turns a caller's message
//! into bytes before sealing and rebuilds the message after opening. The
//! two directions are independent capabilities: a codec may implement only
//! [`Encode`] or only [`Decode`], and the wrapper exposes each direction
//! only when the underlying codec provides it.

use std::fmt;
use std::marker::PhantomData;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{CodecError, ErrorCategory, ErrorKind, Result};

/// Encoding capability: turn a message into the bytes the cipher will seal.
pub trait Encode {
    /// The message type this codec accepts.
    type Message: ?Sized;

    /// Encodes a message into its plaintext byte representation.
    fn encode(&self, message: &Self::Message) -> Result<Vec<u8>>;
}

/// Decoding capability: rebuild a message from opened plaintext bytes.
pub trait Decode {
    /// The message type this codec produces.
    type Message;

    /// Decodes a message from its plaintext byte representation.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Message>;
}

/// Identity codec for callers whose messages already are bytes.
///
/// Encoding copies the input and decoding returns the bytes unchanged, so
/// composing this codec with the cipher is equivalent to using [`seal`]
/// and [`open`] directly.
///
/// [`seal`]: crate::envelope::seal
/// [`open`]: crate::envelope::open
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCodec;

impl Encode for RawCodec {
    type Message = [u8];

    fn encode(&self, message: &[u8]) -> Result<Vec<u8>> {
        Ok(message.to_vec())
    }
}

impl Decode for RawCodec {
    type Message = Vec<u8>;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(bytes.to_vec())
    }
}

/// Text codec: messages are strings, carried as their UTF-8 bytes.
///
/// Decoding validates that the opened plaintext is well-formed UTF-8 and
/// fails with [`ErrorKind::ContentDecode`] when it is not.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Codec;

impl Encode for Utf8Codec {
    type Message = str;

    fn encode(&self, message: &str) -> Result<Vec<u8>> {
        Ok(message.as_bytes().to_vec())
    }
}

impl Decode for Utf8Codec {
    type Message = String;

    fn decode(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec()).map_err(|e| {
            CodecError::with_kind_and_source(
                ErrorCategory::User,
                ErrorKind::ContentDecode,
                "decrypted content is not valid UTF-8",
                e,
            )
        })
    }
}

/// JSON codec: messages are any serde-serializable type.
///
/// Encoding emits compact JSON; decoding fails with
/// [`ErrorKind::ContentDecode`] when the opened plaintext is not JSON of
/// the expected shape.
pub struct JsonCodec<T>(PhantomData<fn() -> T>);

impl<T> JsonCodec<T> {
    /// Creates a JSON codec for messages of type `T`.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Derived Clone/Debug would demand T: Clone / T: Debug, which the
// phantom parameter never needs.
impl<T> Clone for JsonCodec<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for JsonCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsonCodec")
    }
}

impl<T: Serialize> Encode for JsonCodec<T> {
    type Message = T;

    fn encode(&self, message: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(message).map_err(|e| {
            CodecError::with_kind_and_source(
                ErrorCategory::User,
                ErrorKind::ContentEncode,
                "message could not be serialized as JSON",
                e,
            )
        })
    }
}

impl<T: DeserializeOwned> Decode for JsonCodec<T> {
    type Message = T;

    fn decode(&self, bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes).map_err(|e| {
            CodecError::with_kind_and_source(
                ErrorCategory::User,
                ErrorKind::ContentDecode,
                "decrypted content is not JSON of the expected shape",
                e,
            )
        })
    }
}
