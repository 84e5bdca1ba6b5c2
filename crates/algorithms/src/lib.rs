//! Constant-time arithmetic on the NIST P-384 curve
//!
//! This crate is the arithmetic engine behind the `ecc384` signing and key
//! agreement crates: field elements modulo p, scalars modulo the group
//! order n, complete projective point formulas, SEC1 point encoding and
//! key generation by rejection sampling.
//!
//! Secret-dependent values never select a branch or a memory address.
//! Table reads touch every entry and reductions always run to completion.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Elliptic curve primitives
pub mod ec;
pub use ec::{p384, P384Point, P384Scalar};

// Re-export security types from ecc384-common
pub use ecc384_common::security::{SecretBuffer, ZeroizeGuard};
