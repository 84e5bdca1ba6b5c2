//! Error type definitions for P-384 operations

use thiserror::Error as ThisError;

/// Why an encoded point could not be turned back into a curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum DecodeError {
    /// The buffer is not one of the accepted encoded sizes
    #[error("encoded point has invalid length {actual}")]
    InvalidLength {
        /// Length of the rejected buffer
        actual: usize,
    },

    /// The leading tag byte is not a recognized SEC1 tag
    #[error("encoded point has invalid tag 0x{0:02x}")]
    InvalidTag(u8),

    /// The coordinates do not describe a point on P-384
    #[error("encoded point is not on the curve")]
    NotOnCurve,
}

/// Primary error type for P-384 operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A key was rejected (bad encoding, out-of-range scalar, mismatched pair)
    #[error("invalid key: {context}")]
    InvalidKey {
        /// Where the key was rejected
        context: &'static str,
        /// Decoding failure behind the rejection, if any
        #[source]
        source: Option<DecodeError>,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Where the length was checked
        context: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Where the parameter was checked
        context: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// The randomness source failed; no computation proceeds without it
    #[error("random generation error: {context}: {message}")]
    RandomGeneration {
        /// Which operation was drawing randomness
        context: &'static str,
        /// Message reported by the source
        message: String,
    },

    /// Key agreement produced the point at infinity
    #[error("key agreement failed: {context}")]
    AgreementFailed {
        /// Which operation failed
        context: &'static str,
    },

    /// A point encoding was rejected
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Result type for P-384 operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { source, .. } => Self::InvalidKey { context, source },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::RandomGeneration { message, .. } => Self::RandomGeneration { context, message },
            Self::AgreementFailed { .. } => Self::AgreementFailed { context },
            Self::Decode(e) => Self::InvalidKey {
                context,
                source: Some(e),
            },
        }
    }
}
