//! Constants for elliptic curve algorithms over NIST P-384

pub mod ecdh;
pub mod ecdsa;
