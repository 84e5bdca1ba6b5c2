//! Fixed-size value types that cross the public API
//!
//! Every buffer the four operations accept or return has its own type so
//! that a digest can never be passed where a private key is expected and
//! lengths are checked once, at construction.

use core::fmt;

use crate::{Error, Result};
use ecc384_common::SecretBuffer;
use ecc384_params::traditional::{ecdh, ecdsa};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Compressed SEC1 public key length
pub const PUBLIC_KEY_SIZE: usize = ecdh::ECDH_P384_PUBLIC_KEY_SIZE;
/// Private scalar length
pub const PRIVATE_KEY_SIZE: usize = ecdh::ECDH_P384_PRIVATE_KEY_SIZE;
/// Digest length accepted by sign and verify
pub const SIGNATURE_HASH_SIZE: usize = ecdsa::ECDSA_P384_HASH_SIZE;
/// Raw `r || s` signature length
pub const SIGNATURE_SIZE: usize = ecdsa::ECDSA_P384_SIGNATURE_SIZE;
/// ECDH shared secret length
pub const SHARED_SECRET_SIZE: usize = ecdh::ECDH_P384_SHARED_SECRET_SIZE;

fn copy_exact<const N: usize>(context: &'static str, slice: &[u8]) -> Result<[u8; N]> {
    <[u8; N]>::try_from(slice).map_err(|_| Error::InvalidLength {
        context,
        expected: N,
        actual: slice.len(),
    })
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for b in bytes {
        write!(f, "{:02x}", b)?;
    }
    Ok(())
}

/// Compressed P-384 public key: tag byte followed by the big-endian x-coordinate
///
/// Holding a `PublicKey` only guarantees the length. Whether the bytes
/// decode to a curve point is checked by the operations that consume it.
#[derive(Clone, Copy)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Wrap an encoded key
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copy an encoded key out of a slice of exactly 49 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        copy_exact("PublicKey::from_slice", bytes).map(Self)
    }

    /// Borrow the encoded key
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Copy out the encoded key
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ConstantTimeEq for PublicKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey(")?;
        write_hex(f, &self.0)?;
        write!(f, ")")
    }
}

/// Big-endian private scalar
///
/// Zeroized on drop. The range `[1, n-1]` is enforced by the operations
/// that interpret the bytes as a scalar.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(SecretBuffer<PRIVATE_KEY_SIZE>);

impl PrivateKey {
    /// Take ownership of a 48-byte private key
    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_SIZE]) -> Self {
        Self(SecretBuffer::new(bytes))
    }

    /// Copy a private key out of a slice of exactly 48 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        SecretBuffer::from_slice(bytes)
            .map(Self)
            .ok_or(Error::InvalidLength {
                context: "PrivateKey::from_slice",
                expected: PRIVATE_KEY_SIZE,
                actual: bytes.len(),
            })
    }

    /// Borrow the secret bytes
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        self.0.as_array()
    }
}

impl ConstantTimeEq for PrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// 48-byte message digest computed by the caller
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Digest([u8; SIGNATURE_HASH_SIZE]);

impl Digest {
    /// Wrap a digest
    pub fn from_bytes(bytes: [u8; SIGNATURE_HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copy a digest out of a slice of exactly 48 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        copy_exact("Digest::from_slice", bytes).map(Self)
    }

    /// Borrow the digest
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_HASH_SIZE] {
        &self.0
    }
}

impl From<[u8; SIGNATURE_HASH_SIZE]> for Digest {
    fn from(bytes: [u8; SIGNATURE_HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest(")?;
        write_hex(f, &self.0)?;
        write!(f, ")")
    }
}

/// Raw ECDSA signature: big-endian `r` followed by big-endian `s`
#[derive(Clone, Copy)]
pub struct Signature([u8; SIGNATURE_SIZE]);

impl Signature {
    /// Wrap a raw signature
    pub fn from_bytes(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copy a signature out of a slice of exactly 96 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        copy_exact("Signature::from_slice", bytes).map(Self)
    }

    /// Assemble a signature from its two components
    pub fn from_components(r: &[u8; 48], s: &[u8; 48]) -> Self {
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes[..48].copy_from_slice(r);
        bytes[48..].copy_from_slice(s);
        Self(bytes)
    }

    /// The `r` component
    pub fn r_bytes(&self) -> [u8; 48] {
        let mut r = [0u8; 48];
        r.copy_from_slice(&self.0[..48]);
        r
    }

    /// The `s` component
    pub fn s_bytes(&self) -> [u8; 48] {
        let mut s = [0u8; 48];
        s.copy_from_slice(&self.0[48..]);
        s
    }

    /// Borrow the raw signature
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }

    /// Copy out the raw signature
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for Signature {}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(")?;
        write_hex(f, &self.0)?;
        write!(f, ")")
    }
}

/// Raw ECDH output: the big-endian x-coordinate of the shared point
///
/// This is not a uniformly random key. Run it through a KDF before use.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(SecretBuffer<SHARED_SECRET_SIZE>);

impl SharedSecret {
    /// Take ownership of a 48-byte shared secret
    pub fn from_bytes(bytes: [u8; SHARED_SECRET_SIZE]) -> Self {
        Self(SecretBuffer::new(bytes))
    }

    /// Borrow the secret bytes
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        self.0.as_array()
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret([REDACTED])")
    }
}

/// A private key together with its compressed public key
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// Compressed public key
    pub public: PublicKey,
    /// Private scalar
    pub private: PrivateKey,
}

impl KeyPair {
    /// Pair up two keys without checking that they belong together
    ///
    /// Use `keypair_from_bytes` in `ecc384-algorithms` when the halves come
    /// from outside.
    pub fn new_unchecked(public: PublicKey, private: PrivateKey) -> Self {
        Self { public, private }
    }

    /// The public half
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// The private half
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }
}
