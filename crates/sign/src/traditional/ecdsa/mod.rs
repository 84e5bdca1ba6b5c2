//! ECDSA signature schemes

mod config;
mod p384;

pub use config::{NonceMode, SigningConfig};
pub use p384::EcdsaP384;
