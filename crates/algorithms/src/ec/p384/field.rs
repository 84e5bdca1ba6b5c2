//! P-384 field arithmetic implementation

use crate::ec::p384::constants::{
    B_LIMBS, NLIMBS, P384_FIELD_ELEMENT_SIZE, P_LIMBS, P_MINUS_2, P_PLUS_1_DIV_4,
};
use crate::error::{Error, Result};
use ecc384_internal::endian::{be_bytes_to_limbs, limbs_to_be_bytes};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// P-384 field element representing values in 𝔽ₚ, where
/// p = 2³⁸⁴ − 2¹²⁸ − 2⁹⁶ + 2³² − 1.
/// Internally stored as 12 little-endian 32-bit limbs, always fully
/// reduced into [0, p).
#[derive(Clone, Copy, Debug, Default, Zeroize)]
pub struct FieldElement(pub(crate) [u32; NLIMBS]);

/* ===================================================================== */
/*  Limb helpers shared with the scalar field                            */
/* ===================================================================== */

/// 12-limb addition with carry
#[inline(always)]
pub(crate) fn adc(a: &[u32; NLIMBS], b: &[u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
    let mut r = [0u32; NLIMBS];
    let mut carry = 0u64;
    for i in 0..NLIMBS {
        let tmp = (a[i] as u64) + (b[i] as u64) + carry;
        r[i] = tmp as u32;
        carry = tmp >> 32;
    }
    (r, carry as u32)
}

/// 12-limb subtraction with borrow; the borrow is 1 iff a < b
#[inline(always)]
pub(crate) fn sbb(a: &[u32; NLIMBS], b: &[u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
    let mut r = [0u32; NLIMBS];
    let mut borrow = 0u64;
    for i in 0..NLIMBS {
        let tmp = (a[i] as u64).wrapping_sub((b[i] as u64) + borrow);
        r[i] = tmp as u32;
        // a wrapped subtraction sets the top bit
        borrow = tmp >> 63;
    }
    (r, borrow as u32)
}

/// Constant-time select: `a` if `flag` is 0, `b` if 1
#[inline(always)]
pub(crate) fn select(a: &[u32; NLIMBS], b: &[u32; NLIMBS], flag: Choice) -> [u32; NLIMBS] {
    let mut out = [0u32; NLIMBS];
    for i in 0..NLIMBS {
        out[i] = u32::conditional_select(&a[i], &b[i], flag);
    }
    out
}

/// Schoolbook 12×12 → 24-limb product
#[inline(always)]
pub(crate) fn mul_wide(a: &[u32; NLIMBS], b: &[u32; NLIMBS]) -> [u32; 2 * NLIMBS] {
    let mut wide = [0u32; 2 * NLIMBS];
    for i in 0..NLIMBS {
        let mut carry = 0u64;
        for j in 0..NLIMBS {
            // (2³²−1)² + 2·(2³²−1) still fits in a u64
            let t = (a[i] as u64) * (b[j] as u64) + (wide[i + j] as u64) + carry;
            wide[i + j] = t as u32;
            carry = t >> 32;
        }
        wide[i + NLIMBS] = carry as u32;
    }
    wide
}

/// Subtract `modulus` once if `limbs` (with `carry` as bit 384) is ≥ it
#[inline(always)]
pub(crate) fn reduce_once(
    limbs: &[u32; NLIMBS],
    carry: u32,
    modulus: &[u32; NLIMBS],
) -> [u32; NLIMBS] {
    let (reduced, borrow) = sbb(limbs, modulus);
    // keep the subtraction when it did not underflow, or when the
    // addition already overflowed 2³⁸⁴
    let need_reduce = Choice::from(((carry | (borrow ^ 1)) & 1) as u8);
    select(limbs, &reduced, need_reduce)
}

impl FieldElement {
    /// The additive identity: 0
    #[inline]
    pub const fn zero() -> Self {
        FieldElement([0u32; NLIMBS])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub const fn one() -> Self {
        FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
    }

    /// Build a field element from a small literal (`0 ≤ n < 2³²`)
    #[inline]
    pub fn from_u32(n: u32) -> Self {
        let mut limbs = [0u32; NLIMBS];
        limbs[0] = n;
        FieldElement(limbs)
    }

    /// The curve coefficient b
    #[inline]
    pub(crate) const fn curve_b() -> Self {
        FieldElement(B_LIMBS)
    }

    /// Create a field element from big-endian bytes.
    /// Values ≥ p are rejected rather than reduced.
    pub fn from_bytes(bytes: &[u8; P384_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let limbs: [u32; NLIMBS] = be_bytes_to_limbs(bytes);
        let (_, borrow) = sbb(&limbs, &P_LIMBS);
        if borrow == 0 {
            return Err(Error::param("FieldElement P-384", "Value ≥ modulus"));
        }
        Ok(FieldElement(limbs))
    }

    /// Convert this field element into big-endian bytes.
    pub fn to_bytes(&self) -> [u8; P384_FIELD_ELEMENT_SIZE] {
        let mut out = [0u8; P384_FIELD_ELEMENT_SIZE];
        limbs_to_be_bytes(&self.0, &mut out);
        out
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        let mut acc = 0u32;
        for &limb in self.0.iter() {
            acc |= limb;
        }
        acc.ct_eq(&0)
    }

    /// Returns 1 if the element is odd (least-significant bit set)
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.0[0] & 1) as u8)
    }

    /// Constant-time addition: (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        let (sum, carry) = adc(&self.0, &other.0);
        FieldElement(reduce_once(&sum, carry, &P_LIMBS))
    }

    /// Constant-time subtraction: (self - other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = sbb(&self.0, &other.0);
        let (diff_plus_p, _) = adc(&diff, &P_LIMBS);
        FieldElement(select(&diff, &diff_plus_p, Choice::from(borrow as u8)))
    }

    /// Doubling: 2·self mod p
    #[inline(always)]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Negation: (p − self) mod p, with −0 = 0
    pub fn negate(&self) -> Self {
        FieldElement::zero().sub(self)
    }

    /// Field multiplication: (self * other) mod p
    pub fn mul(&self, other: &Self) -> Self {
        let wide = mul_wide(&self.0, &other.0);
        Self::reduce_wide(&wide)
    }

    /// Field squaring: (self²) mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Raise to a fixed public exponent (square-and-multiply)
    ///
    /// The exponent is a curve constant, never secret, so the loop shape
    /// only depends on public data.
    fn pow_public(&self, exp: &[u32; NLIMBS]) -> Self {
        let mut result = FieldElement::one();
        for &word in exp.iter().rev() {
            for bit in (0..32).rev() {
                result = result.square();
                if (word >> bit) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }

    /// Compute multiplicative inverse via Fermat: a^(p-2) mod p
    pub fn invert(&self) -> Result<Self> {
        if bool::from(self.is_zero()) {
            return Err(Error::param("FieldElement P-384", "Inverse of zero"));
        }
        Ok(self.pow_public(&P_MINUS_2))
    }

    /// Inversion that maps zero to zero instead of failing
    ///
    /// Used when normalising projective points, where Z = 0 marks the
    /// identity and is handled by the caller with a constant-time select.
    pub(crate) fn invert_or_zero(&self) -> Self {
        self.pow_public(&P_MINUS_2)
    }

    /// Compute square root using the fact that p ≡ 3 (mod 4):
    /// sqrt(x) = x^((p+1)/4). Returns `None` when `self` is a non-residue.
    pub fn sqrt(&self) -> Option<Self> {
        let root = self.pow_public(&P_PLUS_1_DIV_4);
        if bool::from(root.square().ct_eq(self)) {
            Some(root)
        } else {
            None
        }
    }

    /// Right-hand side of the curve equation: x³ − 3x + b
    pub(crate) fn curve_rhs(x: &Self) -> Self {
        let x3 = x.square().mul(x);
        let three_x = x.double().add(x);
        x3.sub(&three_x).add(&Self::curve_b())
    }

    /// Reduce a 24-word product modulo p (Solinas reduction)
    ///
    /// Writing the product as words c₀…c₂₃, the high words fold back into
    /// the low twelve as fixed signed sums (FIPS 186-4 D.2.4). Signed
    /// 64-bit accumulators absorb the negative terms; the carry out of
    /// limb 11 is folded twice with 2³⁸⁴ ≡ 2¹²⁸ + 2⁹⁶ − 2³² + 1, after
    /// which it is zero and a single conditional subtraction finishes.
    fn reduce_wide(wide: &[u32; 2 * NLIMBS]) -> Self {
        let mut c = [0i64; 2 * NLIMBS];
        for (dst, &src) in c.iter_mut().zip(wide.iter()) {
            *dst = src as i64;
        }

        let mut acc = [0i64; NLIMBS];

        // T + S2
        for i in 0..NLIMBS {
            acc[i] = c[i] + c[i + 12];
        }
        // 2·S1
        acc[4] += 2 * c[21];
        acc[5] += 2 * c[22];
        acc[6] += 2 * c[23];
        // S3
        acc[0] += c[21];
        acc[1] += c[22];
        acc[2] += c[23];
        for i in 3..NLIMBS {
            acc[i] += c[i + 9];
        }
        // S4
        acc[1] += c[23];
        acc[3] += c[20];
        for i in 4..NLIMBS {
            acc[i] += c[i + 8];
        }
        // S5
        acc[4] += c[20];
        acc[5] += c[21];
        acc[6] += c[22];
        acc[7] += c[23];
        // S6
        acc[0] += c[20];
        acc[3] += c[21];
        acc[4] += c[22];
        acc[5] += c[23];
        // − D1
        acc[0] -= c[23];
        for i in 1..NLIMBS {
            acc[i] -= c[i + 11];
        }
        // − D2
        acc[1] -= c[20];
        acc[2] -= c[21];
        acc[3] -= c[22];
        acc[4] -= c[23];
        // − D3
        acc[3] -= c[23];
        acc[4] -= c[23];

        let mut carry = Self::propagate(&mut acc);
        for _ in 0..2 {
            acc[0] += carry;
            acc[1] -= carry;
            acc[3] += carry;
            acc[4] += carry;
            carry = Self::propagate(&mut acc);
        }
        debug_assert_eq!(carry, 0);

        let mut out = [0u32; NLIMBS];
        for (dst, &src) in out.iter_mut().zip(acc.iter()) {
            *dst = src as u32;
        }
        c.zeroize();
        FieldElement(reduce_once(&out, 0, &P_LIMBS))
    }

    /// Normalise signed accumulators to 32-bit limbs, returning the
    /// signed carry out of the top limb
    #[inline(always)]
    fn propagate(acc: &mut [i64; NLIMBS]) -> i64 {
        let mut carry = 0i64;
        for limb in acc.iter_mut() {
            let t = *limb + carry;
            *limb = t & 0xFFFF_FFFF;
            // arithmetic shift keeps negative carries negative
            carry = t >> 32;
        }
        carry
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement(select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}
