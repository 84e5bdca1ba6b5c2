//! P-384 elliptic curve point operations

use crate::ec::p384::{
    constants::{GX_LIMBS, GY_LIMBS, P384_FIELD_ELEMENT_SIZE},
    field::FieldElement,
    scalar::Scalar,
    table,
};
use crate::error::{Error, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Number of 4-bit windows in a 384-bit scalar
pub(crate) const WINDOWS: usize = 96;

/// Entries per window table (0·P through 15·P)
pub(crate) const WINDOW_SIZE: usize = 16;

/// Affine coordinates (x, y) or identity
///
/// Every non-identity `Point` satisfies the curve equation; constructors
/// that accept outside coordinates check it. The identity is stored with
/// x = y = 0.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Homogeneous projective coordinates (X:Y:Z) with x = X/Z, y = Y/Z
///
/// Combined with the complete formulas of Renes, Costello and Batina
/// (2016, algorithms 4 and 6 for a = −3), so the identity (0:1:0) and
/// P + P need no special cases.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl ConstantTimeEq for Point {
    fn ct_eq(&self, other: &Self) -> Choice {
        let both_identity = self.is_identity & other.is_identity;
        let neither_identity = !self.is_identity & !other.is_identity;
        both_identity | (neither_identity & self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Point {}

impl ConditionallySelectable for Point {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Point {
            is_identity: Choice::conditional_select(&a.is_identity, &b.is_identity, choice),
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl Point {
    /// Create a new affine point from big-endian coordinates
    ///
    /// Fails if either coordinate is ≥ p or the pair is not on the curve.
    pub fn new_uncompressed(
        x_bytes: &[u8; P384_FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; P384_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x = FieldElement::from_bytes(x_bytes)?;
        let y = FieldElement::from_bytes(y_bytes)?;
        Self::from_coordinates(x, y)
            .ok_or_else(|| Error::param("P-384 Point", "Point not on curve"))
    }

    /// Wrap validated field coordinates, `None` if off the curve
    pub(crate) fn from_coordinates(x: FieldElement, y: FieldElement) -> Option<Self> {
        if !bool::from(Self::is_on_curve(&x, &y)) {
            return None;
        }
        Some(Point {
            is_identity: Choice::from(0),
            x,
            y,
        })
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// The standard generator G
    pub fn generator() -> Self {
        Point {
            is_identity: Choice::from(0),
            x: FieldElement(GX_LIMBS),
            y: FieldElement(GY_LIMBS),
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Extract x-coordinate as big-endian bytes
    pub fn x_coordinate_bytes(&self) -> [u8; P384_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Extract y-coordinate as big-endian bytes
    pub fn y_coordinate_bytes(&self) -> [u8; P384_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// Check that (x, y) satisfies y² = x³ − 3x + b
    pub(crate) fn is_on_curve(x: &FieldElement, y: &FieldElement) -> Choice {
        y.square().ct_eq(&FieldElement::curve_rhs(x))
    }

    /// Add two points (group law)
    pub fn add(&self, other: &Self) -> Self {
        self.to_projective().add(&other.to_projective()).to_affine()
    }

    /// Double this point: 2P
    pub fn double(&self) -> Self {
        self.to_projective().double().to_affine()
    }

    /// Negate this point: −P = (x, −y)
    pub fn negate(&self) -> Self {
        Point {
            is_identity: self.is_identity,
            x: self.x,
            y: self.y.negate(),
        }
    }

    /// Scalar multiplication: scalar · P
    ///
    /// Fixed 4-bit window: a table of 0·P … 15·P, then 96 rounds of four
    /// doublings and one addition of a table entry chosen by constant-time
    /// selection. Runs the same sequence of field operations for every
    /// scalar and every base point.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        let base = self.to_projective();

        let mut window = [ProjectivePoint::identity(); WINDOW_SIZE];
        for j in 1..WINDOW_SIZE {
            window[j] = window[j - 1].add(&base);
        }

        let mut acc = ProjectivePoint::identity();
        for i in (0..WINDOWS).rev() {
            acc = acc.double().double().double().double();
            acc = acc.add(&ProjectivePoint::lookup(&window, scalar.nibble(i)));
        }
        acc.to_affine()
    }

    /// Fixed-base scalar multiplication: scalar · G
    ///
    /// Uses the precomputed table of j·16ⁱ·G, so no doublings are needed.
    pub fn mul_base(scalar: &Scalar) -> Self {
        let table = table::generator_table();
        let mut acc = ProjectivePoint::identity();
        for (i, row) in table.iter().enumerate() {
            acc = acc.add(&ProjectivePoint::lookup(row, scalar.nibble(i)));
        }
        acc.to_affine()
    }

    /// Convert affine to projective for intermediate computations
    pub(crate) fn to_projective(&self) -> ProjectivePoint {
        let finite = ProjectivePoint {
            x: self.x,
            y: self.y,
            z: FieldElement::one(),
        };
        ProjectivePoint::conditional_select(&finite, &ProjectivePoint::identity(), self.is_identity)
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ProjectivePoint {
    /// Identity in projective form: (0 : 1 : 0)
    pub(crate) const fn identity() -> Self {
        ProjectivePoint {
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    /// Read `table[index]` touching every entry
    #[inline]
    pub(crate) fn lookup(table: &[ProjectivePoint; WINDOW_SIZE], index: u8) -> Self {
        let mut out = ProjectivePoint::identity();
        for (j, entry) in table.iter().enumerate() {
            out.conditional_assign(entry, (j as u8).ct_eq(&index));
        }
        out
    }

    /// Complete point addition (RCB16 algorithm 4)
    pub(crate) fn add(&self, other: &Self) -> Self {
        let b = FieldElement::curve_b();
        let (x1, y1, z1) = (&self.x, &self.y, &self.z);
        let (x2, y2, z2) = (&other.x, &other.y, &other.z);

        let t0 = x1.mul(x2);
        let t1 = y1.mul(y2);
        let t2 = z1.mul(z2);

        let t3 = x1.add(y1);
        let t4 = x2.add(y2);
        let t3 = t3.mul(&t4);
        let t4 = t0.add(&t1);
        let t3 = t3.sub(&t4);

        let t4 = y1.add(z1);
        let x3 = y2.add(z2);
        let t4 = t4.mul(&x3);
        let x3 = t1.add(&t2);
        let t4 = t4.sub(&x3);

        let x3 = x1.add(z1);
        let y3 = x2.add(z2);
        let x3 = x3.mul(&y3);
        let y3 = t0.add(&t2);
        let y3 = x3.sub(&y3);

        let z3 = b.mul(&t2);
        let x3 = y3.sub(&z3);
        let z3 = x3.double();
        let x3 = x3.add(&z3);
        let z3 = t1.sub(&x3);
        let x3 = t1.add(&x3);

        let y3 = b.mul(&y3);
        let t1 = t2.double();
        let t2 = t1.add(&t2);
        let y3 = y3.sub(&t2);
        let y3 = y3.sub(&t0);
        let t1 = y3.double();
        let y3 = t1.add(&y3);

        let t1 = t0.double();
        let t0 = t1.add(&t0);
        let t0 = t0.sub(&t2);

        let t1 = t4.mul(&y3);
        let t2 = t0.mul(&y3);
        let y3 = x3.mul(&z3);
        let y3 = y3.add(&t2);

        let x3 = t3.mul(&x3);
        let x3 = x3.sub(&t1);
        let z3 = t4.mul(&z3);
        let t1 = t3.mul(&t0);
        let z3 = z3.add(&t1);

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Complete point doubling (RCB16 algorithm 6)
    pub(crate) fn double(&self) -> Self {
        let b = FieldElement::curve_b();
        let (x, y, z) = (&self.x, &self.y, &self.z);

        let t0 = x.square();
        let t1 = y.square();
        let t2 = z.square();
        let t3 = x.mul(y);
        let t3 = t3.double();
        let z3 = x.mul(z);
        let z3 = z3.double();

        let y3 = b.mul(&t2);
        let y3 = y3.sub(&z3);
        let x3 = y3.double();
        let y3 = x3.add(&y3);
        let x3 = t1.sub(&y3);
        let y3 = t1.add(&y3);

        let y3 = x3.mul(&y3);
        let x3 = x3.mul(&t3);

        let t3 = t2.double();
        let t2 = t2.add(&t3);
        let z3 = b.mul(&z3);
        let z3 = z3.sub(&t2);
        let z3 = z3.sub(&t0);
        let t3 = z3.double();
        let z3 = z3.add(&t3);

        let t3 = t0.double();
        let t0 = t3.add(&t0);
        let t0 = t0.sub(&t2);
        let t0 = t0.mul(&z3);
        let y3 = y3.add(&t0);

        let t0 = y.mul(z);
        let t0 = t0.double();
        let z3 = t0.mul(&z3);
        let x3 = x3.sub(&z3);

        let z3 = t0.mul(&t1);
        let z3 = z3.double();
        let z3 = z3.double();

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Convert back to affine coordinates
    ///
    /// Z = 0 inverts to zero, which lands on the affine identity encoding
    /// (0, 0) without a branch.
    pub(crate) fn to_affine(&self) -> Point {
        let z_inv = self.z.invert_or_zero();
        Point {
            is_identity: self.z.is_zero(),
            x: self.x.mul(&z_inv),
            y: self.y.mul(&z_inv),
        }
    }
}
