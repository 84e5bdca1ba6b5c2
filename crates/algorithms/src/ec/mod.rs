//! Elliptic Curve Primitives
//!
//! Constant-time operations on NIST P-384, the foundation for the ECDSA
//! and ECDH crates.

pub mod p384;

pub use p384::{Point as P384Point, Scalar as P384Scalar};
