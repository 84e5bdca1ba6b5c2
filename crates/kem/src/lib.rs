//! Key Agreement
//!
//! Raw ECDH over NIST P-384. The shared secret is the x-coordinate of the
//! agreed point and should go through a KDF before use as a key.

pub mod ecdh;

pub use ecdh::EcdhP384;
