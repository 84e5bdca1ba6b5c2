//! Endianness utility functions
//!
//! Field elements and scalars travel as big-endian byte strings but are
//! computed on as little-endian arrays of 32-bit limbs (limb 0 holds the
//! least significant word).

/// Split a big-endian byte string into little-endian u32 limbs
///
/// `bytes.len()` must be exactly `4 * N`.
#[inline]
pub fn be_bytes_to_limbs<const N: usize>(bytes: &[u8]) -> [u32; N] {
    assert_eq!(bytes.len(), 4 * N, "limb conversion length mismatch");

    let mut limbs = [0u32; N];
    for (i, limb) in limbs.iter_mut().enumerate() {
        // limb 0 is the last four bytes
        let start = (N - 1 - i) * 4;
        *limb = u32::from_be_bytes([
            bytes[start],
            bytes[start + 1],
            bytes[start + 2],
            bytes[start + 3],
        ]);
    }
    limbs
}

/// Write little-endian u32 limbs out as a big-endian byte string
///
/// Inverse of [`be_bytes_to_limbs`]; `out.len()` must be exactly `4 * N`.
#[inline]
pub fn limbs_to_be_bytes<const N: usize>(limbs: &[u32; N], out: &mut [u8]) {
    assert_eq!(out.len(), 4 * N, "limb conversion length mismatch");

    for (i, limb) in limbs.iter().enumerate() {
        let start = (N - 1 - i) * 4;
        out[start..start + 4].copy_from_slice(&limb.to_be_bytes());
    }
}
