//! Public API traits and types for the ecc384 library
//!
//! This crate provides the public API surface for the ecc384 workspace:
//! the error type, the fixed-size value types that cross the API boundary,
//! and the traits the signature and key-agreement schemes implement.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{DecodeError, Error, Result, ResultExt};
pub use traits::{KeyAgreement, SignatureScheme};
pub use types::*;
