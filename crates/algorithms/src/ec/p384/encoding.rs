//! SEC1 point encoding and decoding for P-384
//!
//! Compressed form is `0x02 | parity(y)` followed by the big-endian x;
//! uncompressed form is `0x04 ∥ x ∥ y`. The identity has no encoding.

use crate::ec::p384::{
    constants::{
        P384_FIELD_ELEMENT_SIZE, P384_POINT_COMPRESSED_SIZE, P384_POINT_UNCOMPRESSED_SIZE,
    },
    field::FieldElement,
    point::Point,
};
use crate::error::{Error, Result};
use ecc384_api::DecodeError;
use subtle::{Choice, ConditionallySelectable};

/// Tag for a compressed point with even y
pub const TAG_COMPRESSED_EVEN: u8 = 0x02;
/// Tag for a compressed point with odd y
pub const TAG_COMPRESSED_ODD: u8 = 0x03;
/// Tag for an uncompressed point
pub const TAG_UNCOMPRESSED: u8 = 0x04;

/// Format of a serialized elliptic-curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// Uncompressed: 0x04 ∥ x ∥ y
    Uncompressed,
    /// Compressed: 0x02/0x03 ∥ x
    Compressed,
}

type DecodeResult<T> = core::result::Result<T, DecodeError>;

fn field_from_slice(bytes: &[u8]) -> DecodeResult<FieldElement> {
    let mut buf = [0u8; P384_FIELD_ELEMENT_SIZE];
    buf.copy_from_slice(bytes);
    // a coordinate ≥ p cannot belong to any curve point
    FieldElement::from_bytes(&buf).map_err(|_| DecodeError::NotOnCurve)
}

impl Point {
    /// Detect serialized point format from the length and tag byte
    pub fn detect_format(bytes: &[u8]) -> DecodeResult<PointFormat> {
        let format = match bytes.len() {
            P384_POINT_COMPRESSED_SIZE => PointFormat::Compressed,
            P384_POINT_UNCOMPRESSED_SIZE => PointFormat::Uncompressed,
            actual => return Err(DecodeError::InvalidLength { actual }),
        };
        match (format, bytes[0]) {
            (PointFormat::Compressed, TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD)
            | (PointFormat::Uncompressed, TAG_UNCOMPRESSED) => Ok(format),
            (_, tag) => Err(DecodeError::InvalidTag(tag)),
        }
    }

    /// Serialize this point in compressed form: 0x02/0x03 ∥ x
    pub fn serialize_compressed(&self) -> Result<[u8; P384_POINT_COMPRESSED_SIZE]> {
        if self.is_identity() {
            return Err(Error::param("P-384 Point", "Identity has no encoding"));
        }
        let mut out = [0u8; P384_POINT_COMPRESSED_SIZE];
        out[0] = TAG_COMPRESSED_EVEN | self.y.is_odd().unwrap_u8();
        out[1..].copy_from_slice(&self.x.to_bytes());
        Ok(out)
    }

    /// Deserialize from compressed bytes (0x02/0x03 ∥ x)
    ///
    /// Recovers y from x³ − 3x + b and picks the root whose parity
    /// matches the tag.
    pub fn deserialize_compressed(bytes: &[u8]) -> DecodeResult<Self> {
        if bytes.len() != P384_POINT_COMPRESSED_SIZE {
            return Err(DecodeError::InvalidLength {
                actual: bytes.len(),
            });
        }
        let tag = bytes[0];
        if tag != TAG_COMPRESSED_EVEN && tag != TAG_COMPRESSED_ODD {
            return Err(DecodeError::InvalidTag(tag));
        }

        let x = field_from_slice(&bytes[1..])?;
        let y = FieldElement::curve_rhs(&x)
            .sqrt()
            .ok_or(DecodeError::NotOnCurve)?;

        let want_odd = Choice::from(tag & 1);
        let flip = y.is_odd() ^ want_odd;
        let y = FieldElement::conditional_select(&y, &y.negate(), flip);

        Ok(Point {
            is_identity: Choice::from(0),
            x,
            y,
        })
    }

    /// Serialize this point as uncompressed: 0x04 ∥ x ∥ y
    pub fn serialize_uncompressed(&self) -> Result<[u8; P384_POINT_UNCOMPRESSED_SIZE]> {
        if self.is_identity() {
            return Err(Error::param("P-384 Point", "Identity has no encoding"));
        }
        let mut out = [0u8; P384_POINT_UNCOMPRESSED_SIZE];
        out[0] = TAG_UNCOMPRESSED;
        out[1..1 + P384_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x.to_bytes());
        out[1 + P384_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y.to_bytes());
        Ok(out)
    }

    /// Deserialize from uncompressed bytes (0x04 ∥ x ∥ y)
    pub fn deserialize_uncompressed(bytes: &[u8]) -> DecodeResult<Self> {
        if bytes.len() != P384_POINT_UNCOMPRESSED_SIZE {
            return Err(DecodeError::InvalidLength {
                actual: bytes.len(),
            });
        }
        if bytes[0] != TAG_UNCOMPRESSED {
            return Err(DecodeError::InvalidTag(bytes[0]));
        }
        let x = field_from_slice(&bytes[1..1 + P384_FIELD_ELEMENT_SIZE])?;
        let y = field_from_slice(&bytes[1 + P384_FIELD_ELEMENT_SIZE..])?;
        Point::from_coordinates(x, y).ok_or(DecodeError::NotOnCurve)
    }

    /// Deserialize either SEC1 form, chosen by length and tag
    pub fn deserialize(bytes: &[u8]) -> DecodeResult<Self> {
        match Self::detect_format(bytes)? {
            PointFormat::Compressed => Self::deserialize_compressed(bytes),
            PointFormat::Uncompressed => Self::deserialize_uncompressed(bytes),
        }
    }
}
