//! Digital Signature Schemes
//!
//! ECDSA over NIST P-384, signing a 48-byte digest the caller has already
//! computed. The nonce strategy is chosen per signer through
//! [`SigningConfig`].

pub mod traditional;

pub use traditional::ecdsa::{EcdsaP384, NonceMode, SigningConfig};
