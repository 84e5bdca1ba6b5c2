//! P-384 scalar arithmetic operations

use crate::ec::p384::constants::{
    N_COMPLEMENT_LIMBS, N_LIMBS, N_MINUS_2, NLIMBS, P384_SCALAR_SIZE,
};
use crate::ec::p384::field::{adc, mul_wide, reduce_once, sbb, select};
use crate::error::{validate, Error, Result};
use ecc384_common::security::{SecretBuffer, ZeroizeGuard};
use ecc384_internal::endian::{be_bytes_to_limbs, limbs_to_be_bytes};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// P-384 scalar value for use in elliptic curve operations
///
/// Represents integers modulo the curve order n. Used for private keys,
/// nonces and the ECDSA signature components. Stored big-endian and
/// zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<P384_SCALAR_SIZE>);

impl Scalar {
    /// Create a scalar from raw bytes, requiring 1 ≤ value < n
    ///
    /// Out-of-range input is rejected rather than reduced so that
    /// rejection sampling over random bytes stays uniform.
    pub fn new(data: [u8; P384_SCALAR_SIZE]) -> Result<Self> {
        let scalar = Scalar(SecretBuffer::new(data));
        let (mut diff, borrow) = sbb(&scalar.limbs(), &N_LIMBS);
        diff.zeroize();
        let in_range = Choice::from(borrow as u8) & !scalar.is_zero();
        if !bool::from(in_range) {
            return Err(Error::param("P-384 Scalar", "Scalar out of range [1, n-1]"));
        }
        Ok(scalar)
    }

    /// Reduce 48 big-endian bytes modulo n; zero is allowed
    ///
    /// Any 384-bit value is below 2n, so one conditional subtraction is
    /// enough. Used for digests and for x-coordinates in ECDSA.
    pub fn reduce(data: &[u8; P384_SCALAR_SIZE]) -> Self {
        let limbs: Zeroizing<[u32; NLIMBS]> = Zeroizing::new(be_bytes_to_limbs(data));
        Self::from_limbs(reduce_once(&limbs, 0, &N_LIMBS))
    }

    /// Internal constructor for canonical limbs; zero is allowed
    ///
    /// Takes the limbs by value and wipes them along with the byte copy.
    fn from_limbs(mut limbs: [u32; NLIMBS]) -> Self {
        let mut bytes = [0u8; P384_SCALAR_SIZE];
        limbs_to_be_bytes(&limbs, &mut bytes);
        let scalar = Scalar(SecretBuffer::new(bytes));
        bytes.zeroize();
        limbs.zeroize();
        scalar
    }

    /// The scalar as little-endian limbs, wiped when dropped
    fn limbs(&self) -> Zeroizing<[u32; NLIMBS]> {
        Zeroizing::new(be_bytes_to_limbs(self.0.as_ref()))
    }

    /// The additive identity
    pub fn zero() -> Self {
        Scalar(SecretBuffer::zeroed())
    }

    /// The multiplicative identity
    pub fn one() -> Self {
        let mut bytes = [0u8; P384_SCALAR_SIZE];
        bytes[P384_SCALAR_SIZE - 1] = 1;
        Scalar(SecretBuffer::new(bytes))
    }

    /// Access the underlying SecretBuffer containing the scalar value
    pub fn as_secret_buffer(&self) -> &SecretBuffer<P384_SCALAR_SIZE> {
        &self.0
    }

    /// Serialize the scalar to a big-endian byte array
    pub fn serialize(&self) -> [u8; P384_SCALAR_SIZE] {
        let mut result = [0u8; P384_SCALAR_SIZE];
        result.copy_from_slice(self.0.as_ref());
        result
    }

    /// Deserialize a scalar from bytes with validation
    ///
    /// Parses bytes as a big-endian scalar value and ensures it's
    /// in the range [1, n-1].
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("P-384 Scalar", bytes.len(), P384_SCALAR_SIZE)?;

        let mut scalar_bytes = [0u8; P384_SCALAR_SIZE];
        scalar_bytes.copy_from_slice(bytes);
        let result = Self::new(scalar_bytes);
        scalar_bytes.zeroize();
        result
    }

    /// Check if the scalar represents zero
    pub fn is_zero(&self) -> Choice {
        ecc384_internal::constant_time::ct_is_zero(self.0.as_ref())
    }

    /// The 4-bit window at position `index` (0 = least significant)
    ///
    /// `index` is public; the returned value is secret and must only be
    /// consumed through constant-time selection.
    #[inline(always)]
    pub(crate) fn nibble(&self, index: usize) -> u8 {
        let byte = self.0.as_ref()[P384_SCALAR_SIZE - 1 - index / 2];
        (byte >> ((index & 1) * 4)) & 0x0F
    }

    /// Add two scalars modulo the curve order n
    pub fn add_mod_n(&self, other: &Self) -> Self {
        let (mut sum, carry) = adc(&self.limbs(), &other.limbs());
        let sum = ZeroizeGuard::new(&mut sum);
        Self::from_limbs(reduce_once(&sum, carry, &N_LIMBS))
    }

    /// Subtract two scalars modulo the curve order n
    pub fn sub_mod_n(&self, other: &Self) -> Self {
        let (mut diff, borrow) = sbb(&self.limbs(), &other.limbs());
        let (mut diff_plus_n, _) = adc(&diff, &N_LIMBS);
        let out = select(&diff, &diff_plus_n, Choice::from(borrow as u8));
        diff.zeroize();
        diff_plus_n.zeroize();
        Self::from_limbs(out)
    }

    /// Negate modulo n, with −0 = 0
    pub fn negate(&self) -> Self {
        Self::zero().sub_mod_n(self)
    }

    /// Multiply two scalars modulo the curve order n
    pub fn mul_mod_n(&self, other: &Self) -> Self {
        let mut wide = mul_wide(&self.limbs(), &other.limbs());
        Self::from_limbs(Self::reduce_wide(&mut wide))
    }

    /// Compute multiplicative inverse modulo n using Fermat's little theorem
    pub fn inv_mod_n(&self) -> Result<Self> {
        validate::parameter(
            !bool::from(self.is_zero()),
            "P-384 Scalar",
            "Cannot invert zero scalar",
        )?;

        // a^(n-2); the exponent is public
        let mut result = Self::one();
        for &word in N_MINUS_2.iter().rev() {
            for bit in (0..32).rev() {
                result = result.mul_mod_n(&result);
                if (word >> bit) & 1 == 1 {
                    result = result.mul_mod_n(self);
                }
            }
        }
        Ok(result)
    }

    /// Reduce a 24-limb product modulo n
    ///
    /// With c = 2³⁸⁴ − n (190 bits), hi·2³⁸⁴ + lo ≡ hi·c + lo. Three folds
    /// always clear the upper twelve limbs; the remainder is below 2n.
    /// The product and every intermediate fold are wiped before returning.
    pub(crate) fn reduce_wide(w: &mut [u32; 2 * NLIMBS]) -> [u32; NLIMBS] {
        let mut acc = Zeroizing::new([0u128; 2 * NLIMBS]);
        for _ in 0..3 {
            acc.zeroize();
            for i in 0..NLIMBS {
                acc[i] = w[i] as u128;
            }
            for i in 0..NLIMBS {
                let hi = w[i + NLIMBS] as u128;
                for (j, &c) in N_COMPLEMENT_LIMBS.iter().enumerate() {
                    acc[i + j] += hi * (c as u128);
                }
            }

            let mut carry = 0u128;
            for i in 0..2 * NLIMBS {
                let t = acc[i] + carry;
                w[i] = t as u32;
                carry = t >> 32;
            }
            debug_assert_eq!(carry, 0);
        }
        debug_assert!(w[NLIMBS..].iter().all(|&l| l == 0));

        let mut lo_buf = [0u32; NLIMBS];
        let mut lo = ZeroizeGuard::new(&mut lo_buf);
        lo.copy_from_slice(&w[..NLIMBS]);
        w.zeroize();
        reduce_once(&lo, 0, &N_LIMBS)
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}
