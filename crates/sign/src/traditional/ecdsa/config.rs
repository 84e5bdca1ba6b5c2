//! Signer configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the per-signature nonce k is produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NonceMode {
    /// Fresh uniform k from the randomness source for every signature
    #[default]
    Random,
    /// RFC 6979 HMAC-SHA-384 derivation from the key and digest; the
    /// randomness source is not consulted
    Deterministic,
    /// RFC 6979 with 48 bytes of fresh randomness mixed into the seed
    Hedged,
}

/// Configuration for an ECDSA-P384 signer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SigningConfig {
    /// Nonce generation strategy
    pub nonce: NonceMode,
}

impl SigningConfig {
    /// A configuration using the given nonce strategy
    pub const fn with_nonce(nonce: NonceMode) -> Self {
        Self { nonce }
    }

    /// Does signing with this configuration draw from the randomness source?
    pub fn uses_rng(&self) -> bool {
        !matches!(self.nonce, NonceMode::Deterministic)
    }
}
