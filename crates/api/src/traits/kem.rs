//! Key agreement trait

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for non-interactive Diffie-Hellman style key agreement
///
/// Implementations must validate the peer public key before any secret
/// computation and must refuse to return a degenerate shared secret.
pub trait KeyAgreement {
    /// Public key type
    type PublicKey: Clone;

    /// Secret key type
    type SecretKey: Zeroize + Clone;

    /// Shared secret type. Should be fed to a KDF immediately.
    type SharedSecret: Zeroize;

    /// Key pair type
    type KeyPair;

    /// Returns the algorithm name
    fn name() -> &'static str;

    /// Generate a new keypair
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Combine our secret key with the peer's public key
    fn agree(
        their_public: &Self::PublicKey,
        our_secret: &Self::SecretKey,
    ) -> Result<Self::SharedSecret>;
}
