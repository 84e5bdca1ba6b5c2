//! ECDSA implementation for NIST P-384 curve
//!
//! This implementation follows FIPS 186-4, Section 6 over a caller-supplied
//! 48-byte digest. Signatures are the fixed 96-byte `r ∥ s` form.

mod nonce;

use crate::traditional::ecdsa::SigningConfig;
use ecc384_algorithms::ec::p384::{self as ec, Scalar};
use ecc384_algorithms::error::to_core_result;
use ecc384_api::{Digest, KeyPair, PrivateKey, PublicKey, Result, Signature, SignatureScheme};
use nonce::NonceSource;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::{debug, trace};

/// ECDSA signature scheme using NIST P-384 curve (secp384r1)
///
/// Signing behaviour is set by the [`SigningConfig`]; verification does
/// not depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EcdsaP384 {
    config: SigningConfig,
}

impl EcdsaP384 {
    /// A signer using the given configuration
    pub const fn new(config: SigningConfig) -> Self {
        Self { config }
    }

    /// The signer's configuration
    pub fn config(&self) -> &SigningConfig {
        &self.config
    }

    /// Sign a digest
    ///
    /// Algorithm:
    /// 1. e = digest mod n
    /// 2. k from the configured nonce source
    /// 3. (x₁, y₁) = k·G; r = x₁ mod n; if r = 0, next k
    /// 4. s = k⁻¹(e + r·d) mod n; if s = 0, next k
    /// 5. Return (r, s)
    pub fn sign_digest<R: CryptoRng + RngCore>(
        &self,
        digest: &Digest,
        private_key: &PrivateKey,
        rng: &mut R,
    ) -> Result<Signature> {
        let d = ec::private_key_scalar(private_key)?;
        let e = Scalar::reduce(digest.as_bytes());
        let mut nonces = NonceSource::new(self.config.nonce, &d, &e, rng)?;

        loop {
            let k = nonces.next(rng)?;

            let kg = ec::scalar_mult_base_g(&k);
            let r = Scalar::reduce(&kg.x_coordinate_bytes());
            if bool::from(r.is_zero()) {
                trace!("ECDSA-P384 nonce gave r = 0, retrying");
                continue;
            }

            let k_inv = to_core_result(k.inv_mod_n(), "ECDSA-P384 sign")?;
            let s = k_inv.mul_mod_n(&e.add_mod_n(&r.mul_mod_n(&d)));
            if bool::from(s.is_zero()) {
                trace!("ECDSA-P384 nonce gave s = 0, retrying");
                continue;
            }

            debug!(nonce = ?self.config.nonce, "ECDSA-P384 signature produced");
            return Ok(Signature::from_components(&r.serialize(), &s.serialize()));
        }
    }

    /// Verify a signature over a digest
    ///
    /// Algorithm:
    /// 1. Decode Q; reject if malformed or off the curve
    /// 2. Reject unless r and s are in [1, n-1]
    /// 3. w = s⁻¹, u₁ = e·w, u₂ = r·w (mod n)
    /// 4. (x₁, y₁) = u₁·G + u₂·Q; reject if the identity
    /// 5. Accept iff x₁ mod n == r
    ///
    /// Every rejection is the same `false`.
    pub fn verify_digest(digest: &Digest, signature: &Signature, public_key: &PublicKey) -> bool {
        let accepted = Self::check(digest, signature, public_key);
        debug!(accepted, "ECDSA-P384 verification");
        accepted
    }

    fn check(digest: &Digest, signature: &Signature, public_key: &PublicKey) -> bool {
        let Ok(q) = ec::decode_public_key(public_key) else {
            return false;
        };
        let (Ok(r), Ok(s)) = (
            Scalar::new(signature.r_bytes()),
            Scalar::new(signature.s_bytes()),
        ) else {
            return false;
        };
        let Ok(w) = s.inv_mod_n() else {
            return false;
        };

        let e = Scalar::reduce(digest.as_bytes());
        let u1 = e.mul_mod_n(&w);
        let u2 = r.mul_mod_n(&w);

        let point = ec::scalar_mult_base_g(&u1).add(&ec::scalar_mult(&u2, &q));
        if point.is_identity() {
            return false;
        }

        let v = Scalar::reduce(&point.x_coordinate_bytes());
        v.ct_eq(&r).into()
    }
}

impl SignatureScheme for EcdsaP384 {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type Digest = Digest;
    type SignatureData = Signature;
    type KeyPair = KeyPair;

    fn name() -> &'static str {
        "ECDSA-P384"
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

    fn sign_prehash<R: CryptoRng + RngCore>(
        &self,
        digest: &Self::Digest,
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::SignatureData> {
        self.sign_digest(digest, secret_key, rng)
    }

    fn verify_prehash(
        digest: &Self::Digest,
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> bool {
        Self::verify_digest(digest, signature, public_key)
    }
}

#[cfg(test)]
mod tests;
