//! Error type definitions for cryptographic operations

use thiserror::Error;

/// Primary error type for every primkit primitive.
///
/// `DecryptionFailed`, `InvalidSignature` and `InvalidMac` deliberately carry
/// no detail: they are returned for attacker-controlled input and must not tell
/// a caller which check rejected it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Hash, curve or encoding outside the approved set
    #[error("{context}: unsupported algorithm {name}")]
    UnsupportedAlgorithm {
        context: &'static str,
        name: String,
    },

    /// Key material of a length the primitive cannot accept
    #[error("{context}: invalid key size {actual}")]
    InvalidKeySize {
        context: &'static str,
        actual: usize,
    },

    /// Requested more output than the primitive can produce
    #[error("{context}: invalid output length {requested} (maximum {max})")]
    InvalidOutputLength {
        context: &'static str,
        requested: usize,
        max: usize,
    },

    /// Malformed, off-curve or identity point
    #[error("{context}: invalid point encoding")]
    InvalidPointEncoding {
        context: &'static str,
    },

    /// Ciphertext shorter than its fixed-size header
    #[error("ciphertext too short: need at least {min} bytes, got {actual}")]
    CiphertextTooShort {
        min: usize,
        actual: usize,
    },

    /// Decryption failed
    #[error("decryption failed")]
    DecryptionFailed,

    /// Signature rejected
    #[error("invalid signature")]
    InvalidSignature,

    /// MAC tag rejected
    #[error("invalid MAC")]
    InvalidMac,

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `UnsupportedAlgorithm` error
    pub fn unsupported(context: &'static str, name: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm {
            context,
            name: name.into(),
        }
    }

    /// True for the detail-free errors produced on attacker-controlled input
    pub fn is_opaque(&self) -> bool {
        matches!(
            self,
            Self::DecryptionFailed | Self::InvalidSignature | Self::InvalidMac
        )
    }
}
