//! Error handling for the P-384 primitives

use std::borrow::Cow;

use ecc384_api::{DecodeError, Error as CoreError, Result as CoreResult};
use thiserror::Error as ThisError;

/// The error type for the P-384 primitives
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A point encoding was rejected
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The randomness source failed
    #[error("Random generation failed in {context}: {message}")]
    RandomGeneration {
        /// Operation that was drawing randomness
        context: &'static str,
        /// Message reported by the source
        message: String,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for the P-384 primitives
pub type Result<T> = core::result::Result<T, Error>;

// Conversion to the public API error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Decode(e) => CoreError::Decode(e),
            Error::RandomGeneration { context, message } => {
                CoreError::RandomGeneration { context, message }
            }
        }
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Error::RandomGeneration {
            context: "randomness source",
            message: e.to_string(),
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export core error handling traits for convenience
pub use ecc384_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
