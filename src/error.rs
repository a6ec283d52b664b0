use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Any failure that cannot be confidently attributed to the caller's
    /// input, including misbehavior of the underlying cipher primitive.
    ///
    /// Use of Internal is never a guarantee the error is not, for example,
    /// due to caller error - merely that the code cannot confidently
    /// determine that it is.
    Internal,

    /// The caller provided invalid input or requested an operation that is
    /// unsupported or impossible to complete.
    User,
}

/// Fine-grained condition flags for consumers that want to branch on error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The supplied key material is not exactly the length the cipher requires.
    InvalidKeyLength,
    /// The envelope ended before a complete nonce and authentication tag could be read.
    TruncatedEnvelope,
    /// Authentication failed due to an incorrect key or tampering or corruption.
    AuthenticationFailed,
    /// The AEAD primitive refused to seal or open data.
    CipherFailure,
    /// The AEAD primitive produced output of an impossible length.
    InternalInvariant,
    /// The content codec could not encode a message into bytes.
    ContentEncode,
    /// The content codec could not decode a message from decrypted bytes.
    ContentDecode,
    /// The armored representation is malformed (prefix, encoding, or unsupported version).
    ArmorInvalid,
    /// Base64 decoding of the armored payload failed.
    ArmorDecode,
    /// Input claimed to be sealcodec armor but used a future/unsupported version.
    ArmorFromFuture,
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct CodecError {
    /// Broad error category, always provided.
    pub category: ErrorCategory,
    /// Optional specific condition tag for consumers that need to
    /// branch their behavior. Any code consuming errors MUST handle
    /// the absence of a defined kind.
    pub kind: Option<ErrorKind>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    msg: String,
}

impl CodecError {
    /// Creates a new error with a required category and display message.
    pub fn new(category: ErrorCategory, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind: None,
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that also tags the failure with a kind.
    pub fn with_kind(category: ErrorCategory, kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that carries both a kind tag and the originating source error.
    pub fn with_kind_and_source(
        category: ErrorCategory,
        kind: ErrorKind,
        msg: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: Some(Box::new(source)),
            msg: msg.into(),
        }
    }

    /// The user-facing message carried by the error.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the preserved source error if present.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Wraps the current error with a higher-level message while preserving
    /// the original as source. Category and kind carry over unchanged.
    pub fn with_context(self, msg: impl Into<String>) -> Self {
        let category = self.category;
        let kind = self.kind;
        Self {
            category,
            kind,
            source: Some(Box::new(self)),
            msg: msg.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CodecError>;
