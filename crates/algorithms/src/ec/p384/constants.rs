//! Shared constants for P-384 operations
//!
//! Limb arrays are little-endian 32-bit words (index 0 is least
//! significant). The byte-oriented domain parameters live in
//! `ecc384_params`; the limb forms here are checked against them in tests.

use ecc384_params::traditional::ecdh::{
    ECDH_P384_PUBLIC_KEY_SIZE, ECDH_P384_PUBLIC_KEY_UNCOMPRESSED_SIZE,
};

/// Size of a P-384 scalar in bytes (48 bytes = 384 bits)
pub const P384_SCALAR_SIZE: usize = 48;

/// Size of a P-384 field element in bytes (48 bytes = 384 bits)
pub const P384_FIELD_ELEMENT_SIZE: usize = 48;

/// Size of an uncompressed P-384 point in bytes: format byte (0x04) + x-coordinate + y-coordinate
pub const P384_POINT_UNCOMPRESSED_SIZE: usize = ECDH_P384_PUBLIC_KEY_UNCOMPRESSED_SIZE;

/// Size of a compressed P-384 point in bytes: format byte (0x02/0x03) + x-coordinate
pub const P384_POINT_COMPRESSED_SIZE: usize = ECDH_P384_PUBLIC_KEY_SIZE;

/// Number of 32-bit limbs in a field element or scalar
pub(crate) const NLIMBS: usize = 12;

/// p = 2^384 - 2^128 - 2^96 + 2^32 - 1
pub(crate) const P_LIMBS: [u32; NLIMBS] = [
    0xFFFFFFFF, 0x00000000, 0x00000000, 0xFFFFFFFF, 0xFFFFFFFE, 0xFFFFFFFF,
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];

/// Curve order n
pub(crate) const N_LIMBS: [u32; NLIMBS] = [
    0xCCC52973, 0xECEC196A, 0x48B0A77A, 0x581A0DB2, 0xF4372DDF, 0xC7634D81,
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];

/// 2^384 - n, a 190-bit value used to fold wide products mod n
pub(crate) const N_COMPLEMENT_LIMBS: [u32; 6] = [
    0x333AD68D, 0x1313E695, 0xB74F5885, 0xA7E5F24D, 0x0BC8D220, 0x389CB27E,
];

/// Curve coefficient b
pub(crate) const B_LIMBS: [u32; NLIMBS] = [
    0xD3EC2AEF, 0x2A85C8ED, 0x8A2ED19D, 0xC656398D, 0x5013875A, 0x0314088F,
    0xFE814112, 0x181D9C6E, 0xE3F82D19, 0x988E056B, 0xE23EE7E4, 0xB3312FA7,
];

/// Generator x-coordinate
pub(crate) const GX_LIMBS: [u32; NLIMBS] = [
    0x72760AB7, 0x3A545E38, 0xBF55296C, 0x5502F25D, 0x82542A38, 0x59F741E0,
    0x8BA79B98, 0x6E1D3B62, 0xF320AD74, 0x8EB1C71E, 0xBE8B0537, 0xAA87CA22,
];

/// Generator y-coordinate
pub(crate) const GY_LIMBS: [u32; NLIMBS] = [
    0x90EA0E5F, 0x7A431D7C, 0x1D7E819D, 0x0A60B1CE, 0xB5F0B8C0, 0xE9DA3113,
    0x289A147C, 0xF8F41DBD, 0x9292DC29, 0x5D9E98BF, 0x96262C6F, 0x3617DE4A,
];

/// p - 2, the Fermat inversion exponent in the base field
pub(crate) const P_MINUS_2: [u32; NLIMBS] = [
    0xFFFFFFFD, 0x00000000, 0x00000000, 0xFFFFFFFF, 0xFFFFFFFE, 0xFFFFFFFF,
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];

/// (p + 1) / 4, the square-root exponent (p ≡ 3 mod 4)
pub(crate) const P_PLUS_1_DIV_4: [u32; NLIMBS] = [
    0x40000000, 0x00000000, 0xC0000000, 0xBFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0x3FFFFFFF,
];

/// n - 2, the Fermat inversion exponent for scalars
pub(crate) const N_MINUS_2: [u32; NLIMBS] = [
    0xCCC52971, 0xECEC196A, 0x48B0A77A, 0x581A0DB2, 0xF4372DDF, 0xC7634D81,
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];
