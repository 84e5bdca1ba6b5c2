//! NIST P-384 Elliptic Curve Primitives
//!
//! This module implements the NIST P-384 elliptic curve operations in constant time.
//! The curve equation is y² = x³ - 3x + b over the prime field F_p where:
//! - p = 2^384 - 2^128 - 2^96 + 2^32 - 1 (NIST P-384 prime)
//! - The curve order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF581A0DB248B0A77AECEC196ACCC52973
//!
//! The implementation uses:
//! - Solinas reduction for field arithmetic, folding by 2^384 - n for scalars
//! - Homogeneous projective coordinates with complete addition formulas
//! - Fixed-window scalar multiplication with constant-time table lookups
//! - A precomputed generator table for fixed-base multiplication

mod constants;
mod encoding;
mod field;
mod point;
mod scalar;
mod table;

pub use constants::{
    P384_FIELD_ELEMENT_SIZE, P384_POINT_COMPRESSED_SIZE, P384_POINT_UNCOMPRESSED_SIZE,
    P384_SCALAR_SIZE,
};
pub use encoding::{PointFormat, TAG_COMPRESSED_EVEN, TAG_COMPRESSED_ODD, TAG_UNCOMPRESSED};
pub use field::FieldElement;
pub use point::Point;
pub use scalar::Scalar;

use crate::error::{Result, ResultExt};
use ecc384_api::{
    DecodeError, Error as CoreError, KeyPair, PrivateKey, PublicKey, Result as CoreResult,
};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::{debug, trace};
use zeroize::Zeroize;

/// Get the standard base point G of the P-384 curve
pub fn base_point_g() -> Point {
    Point::generator()
}

/// Scalar multiplication with the base point: scalar * G
///
/// Reads the precomputed generator table; used for public keys, ECDSA
/// nonces and the u1·G half of verification.
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    Point::mul_base(scalar)
}

/// General scalar multiplication: compute scalar * point
///
/// Used in ECDH key agreement and signature verification. The identity
/// maps to the identity.
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    point.mul(scalar)
}

/// Draw a uniformly random scalar in [1, n-1]
///
/// Rejection sampling over 48-byte candidates; the acceptance rate is
/// above 1 − 2⁻¹⁸⁸, so retries are rare. A failing randomness source is
/// reported, never retried with weaker input.
pub fn random_scalar<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Scalar> {
    let mut candidate = [0u8; P384_SCALAR_SIZE];
    let mut attempts = 0u32;

    loop {
        if let Err(e) = rng.try_fill_bytes(&mut candidate) {
            candidate.zeroize();
            return Err(e.into());
        }
        attempts += 1;

        match Scalar::new(candidate) {
            Ok(scalar) => {
                candidate.zeroize();
                return Ok(scalar);
            }
            Err(_) => trace!(attempts, "rejected out-of-range P-384 scalar candidate"),
        }
    }
}

/// Generate a private scalar and its public point
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let private_key = random_scalar(rng)?;
    let public_key = scalar_mult_base_g(&private_key);
    Ok((private_key, public_key))
}

/// Interpret a private key as a scalar in [1, n-1]
pub fn private_key_scalar(private_key: &PrivateKey) -> CoreResult<Scalar> {
    Scalar::new(*private_key.as_bytes()).map_err(|_| CoreError::InvalidKey {
        context: "P-384 private key out of range",
        source: None,
    })
}

/// Encode a point as a compressed public key
pub fn encode_public_key(point: &Point) -> CoreResult<PublicKey> {
    point
        .serialize_compressed()
        .map(PublicKey::from_bytes)
        .with_context("P-384 public key encoding")
}

/// Decode and validate a compressed public key
///
/// A successful decode is on the curve and, since a compressed encoding
/// always carries an x-coordinate, never the identity. The cofactor is 1,
/// so the point is in the prime-order subgroup.
pub fn decode_public_key(public_key: &PublicKey) -> core::result::Result<Point, DecodeError> {
    Point::deserialize_compressed(public_key.as_bytes())
}

/// Check that a public key decodes to a valid curve point
pub fn validate_public_key(public_key: &PublicKey) -> CoreResult<()> {
    decode_public_key(public_key)
        .map(|_| ())
        .with_context("P-384 public key")
}

/// Generate a key pair in the public value types
pub fn generate_key_pair<R: CryptoRng + RngCore>(rng: &mut R) -> CoreResult<KeyPair> {
    let (scalar, point) = crate::error::to_core_result(
        generate_keypair(rng),
        "P-384 key generation",
    )?;
    let public = encode_public_key(&point)?;
    let private = PrivateKey::from_bytes(scalar.serialize());
    debug!("generated P-384 key pair");
    Ok(KeyPair::new_unchecked(public, private))
}

/// Rebuild a key pair from its private half
pub fn keypair_from_private(private: PrivateKey) -> CoreResult<KeyPair> {
    let scalar = private_key_scalar(&private)?;
    let public = encode_public_key(&scalar_mult_base_g(&scalar))?;
    Ok(KeyPair::new_unchecked(public, private))
}

/// Assemble a key pair from both halves, checking that they belong together
pub fn keypair_from_bytes(public: PublicKey, private: PrivateKey) -> CoreResult<KeyPair> {
    let derived = keypair_from_private(private)?;
    if !bool::from(derived.public.ct_eq(&public)) {
        return Err(CoreError::InvalidKey {
            context: "P-384 public key does not match private key",
            source: None,
        });
    }
    Ok(derived)
}
