//! ECDH key agreement for NIST P-384

pub mod p384;

pub use p384::EcdhP384;
