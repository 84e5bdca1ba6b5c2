//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Returns `Choice(1)` when every byte of `bytes` is zero
///
/// The length is public; the contents are folded without branching.
pub fn ct_is_zero(bytes: &[u8]) -> Choice {
    let mut acc = 0u8;
    for &b in bytes {
        acc |= b;
    }
    acc.ct_eq(&0)
}
