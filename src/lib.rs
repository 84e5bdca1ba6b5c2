//! # ecc384
//!
//! Constant-time NIST P-384 key generation, ECDSA over a 48-byte digest and
//! raw ECDH, exposed through fixed-size value types.
//!
//! ## Usage
//!
//! ```
//! use ecc384::{ecdh, ecdsa_sign, ecdsa_verify, generate_key, Digest};
//!
//! let alice = generate_key()?;
//! let bob = generate_key()?;
//!
//! // The caller hashes; the library signs the 48-byte digest as given.
//! let digest = Digest::from_bytes([0x42; 48]);
//! let signature = ecdsa_sign(&alice.private, &digest)?;
//! assert!(ecdsa_verify(&alice.public, &digest, &signature));
//!
//! let ab = ecdh(&bob.public, &alice.private)?;
//! let ba = ecdh(&alice.public, &bob.private)?;
//! assert_eq!(ab.as_bytes(), ba.as_bytes());
//! # Ok::<(), ecc384::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`SigningConfig`]
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecc384-api`]: error type, value types and scheme traits
//! - [`ecc384-algorithms`]: field, scalar and point arithmetic
//! - [`ecc384-sign`]: ECDSA
//! - [`ecc384-kem`]: ECDH
//!
//! The shared secret returned by [`ecdh`] is a raw x-coordinate. Feed it to
//! a KDF before using it as a key.

// Core re-exports
pub use ecc384_api as api;
pub use ecc384_common as common;
pub use ecc384_internal as internal;
pub use ecc384_params as params;

pub use ecc384_algorithms as algorithms;
pub use ecc384_kem as kem;
pub use ecc384_sign as sign;

pub use ecc384_algorithms::ec::p384::{keypair_from_bytes, keypair_from_private, validate_public_key};
pub use ecc384_api::{
    DecodeError, Digest, Error, KeyAgreement, KeyPair, PrivateKey, PublicKey, Result,
    SharedSecret, Signature, SignatureScheme, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE,
    SHARED_SECRET_SIZE, SIGNATURE_HASH_SIZE, SIGNATURE_SIZE,
};
pub use ecc384_kem::EcdhP384;
pub use ecc384_sign::{EcdsaP384, NonceMode, SigningConfig};

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Generate a key pair from the operating system's randomness source
pub fn generate_key() -> Result<KeyPair> {
    generate_key_with_rng(&mut OsRng)
}

/// Generate a key pair from the given randomness source
pub fn generate_key_with_rng<R: CryptoRng + RngCore>(rng: &mut R) -> Result<KeyPair> {
    EcdsaP384::keypair(rng)
}

/// Sign a digest with the default configuration (random nonce from the OS)
pub fn ecdsa_sign(private_key: &PrivateKey, digest: &Digest) -> Result<Signature> {
    ecdsa_sign_with(private_key, digest, SigningConfig::default(), &mut OsRng)
}

/// Sign a digest with an explicit nonce configuration and randomness source
pub fn ecdsa_sign_with<R: CryptoRng + RngCore>(
    private_key: &PrivateKey,
    digest: &Digest,
    config: SigningConfig,
    rng: &mut R,
) -> Result<Signature> {
    EcdsaP384::new(config).sign_prehash(digest, private_key, rng)
}

/// Verify a signature; any failure is `false`
pub fn ecdsa_verify(public_key: &PublicKey, digest: &Digest, signature: &Signature) -> bool {
    EcdsaP384::verify_prehash(digest, signature, public_key)
}

/// Derive the ECDH shared secret with a peer
pub fn ecdh(their_public: &PublicKey, our_private: &PrivateKey) -> Result<SharedSecret> {
    EcdhP384::agree(their_public, our_private)
}
