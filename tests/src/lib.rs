//! Test support for the ecc384 workspace
//!
//! Known-answer vectors and small helpers shared by the integration and
//! property tests under `tests/`.

pub mod vectors;

use ecc384::Digest;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest as _, Sha384};

/// A reproducible CSPRNG stream for tests
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// SHA-384 of `message` as a signing digest
pub fn sha384_digest(message: &[u8]) -> Digest {
    let mut out = [0u8; 48];
    out.copy_from_slice(&Sha384::digest(message));
    Digest::from_bytes(out)
}

/// Decode a hex string of exactly `N` bytes
///
/// Panics on malformed input; vectors are compile-time constants.
pub fn hex_array<const N: usize>(s: &str) -> [u8; N] {
    let bytes = hex::decode(s).expect("vector is valid hex");
    bytes.try_into().expect("vector has the expected length")
}
