//! Error handling for the ecc384 public API

pub mod traits;
pub mod types;

pub use traits::ResultExt;
pub use types::{DecodeError, Error, Result};

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::RandomGeneration {
            context: "randomness source",
            message: e.to_string(),
        }
    }
}
