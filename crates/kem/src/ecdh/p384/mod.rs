//! ECDH with NIST P-384
//!
//! The peer's compressed public key is decoded and validated before any
//! secret computation. P-384 has cofactor 1, so a successfully decoded
//! point (on the curve, never the identity) is in the prime-order group.

use ecc384_algorithms::ec::p384 as ec;
use ecc384_api::{
    Error, KeyAgreement, KeyPair, PrivateKey, PublicKey, Result, ResultExt, SharedSecret,
};
use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};
use zeroize::Zeroize;

const CONTEXT: &str = "ECDH-P384";

/// ECDH key agreement over P-384
pub struct EcdhP384;

impl KeyAgreement for EcdhP384 {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type SharedSecret = SharedSecret;
    type KeyPair = KeyPair;

    fn name() -> &'static str {
        CONTEXT
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        ec::generate_key_pair(rng)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.private.clone()
    }

    /// Compute the x-coordinate of `our_secret · their_public`
    ///
    /// A malformed or off-curve peer key is `InvalidKey` carrying the
    /// decode failure; an identity product is `AgreementFailed`.
    fn agree(their_public: &Self::PublicKey, our_secret: &Self::SecretKey) -> Result<SharedSecret> {
        let their_point =
            ec::decode_public_key(their_public).with_context("ECDH-P384 peer public key")?;
        let d = ec::private_key_scalar(our_secret)?;

        let product = ec::scalar_mult(&d, &their_point);
        if product.is_identity() {
            warn!("ECDH-P384 agreement produced the identity");
            return Err(Error::AgreementFailed { context: CONTEXT });
        }

        let mut x = product.x_coordinate_bytes();
        let secret = SharedSecret::from_bytes(x);
        x.zeroize();

        debug!("ECDH-P384 shared secret derived");
        Ok(secret)
    }
}
