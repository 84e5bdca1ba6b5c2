//! Common implementations and shared functionality for the ecc384 crates
//!
//! Holds the zeroizing containers that private keys, nonces and shared
//! secrets live in while they move between crates.

pub mod security;

pub use security::{SecretBuffer, ZeroizeGuard};
