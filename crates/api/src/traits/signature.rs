//! Digital signature traits
//!
//! Signatures here are computed over a digest the caller has already
//! produced; the schemes never hash messages themselves.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for signature schemes over a prehashed message
///
/// Secret keys are opaque zeroizable types. Verification returns a plain
/// `bool` and never an error, so a caller cannot learn why a signature
/// was rejected.
pub trait SignatureScheme {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable
    type SecretKey: Zeroize + Clone;

    /// Digest type accepted by sign and verify
    type Digest;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a digest with the given secret key
    ///
    /// `rng` is used for whatever randomness the scheme's configuration
    /// calls for; fully deterministic configurations may ignore it.
    fn sign_prehash<R: CryptoRng + RngCore>(
        &self,
        digest: &Self::Digest,
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature over a digest
    fn verify_prehash(
        digest: &Self::Digest,
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> bool;
}
