//! Traits implemented by the P-384 schemes

pub mod kem;
pub mod signature;

pub use kem::KeyAgreement;
pub use signature::SignatureScheme;
