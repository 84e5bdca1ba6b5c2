//! Per-signature nonce generation
//!
//! Random nonces reuse the key generator's rejection sampler. Deterministic
//! and hedged nonces follow RFC 6979 §3.2 with HMAC-SHA-384; for P-384 the
//! hash and group order are both 384 bits, so `bits2int` is a plain
//! big-endian read and each candidate is exactly one HMAC output.

use crate::traditional::ecdsa::NonceMode;
use ecc384_algorithms::ec::p384::{self as ec, Scalar, P384_SCALAR_SIZE};
use ecc384_api::{Error, Result, ResultExt};
use hmac::{Hmac, Mac};
use rand::{CryptoRng, RngCore};
use sha2::Sha384;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

type HmacSha384 = Hmac<Sha384>;

const CONTEXT: &str = "ECDSA-P384 nonce";

/// HMAC-DRBG state (K, V) seeded from the private key and digest
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct Rfc6979 {
    k: [u8; P384_SCALAR_SIZE],
    v: [u8; P384_SCALAR_SIZE],
    started: bool,
}

impl Rfc6979 {
    /// Steps b through f, with optional extra input appended to the seed
    pub(crate) fn new(d: &Scalar, e: &Scalar, extra: &[u8]) -> Result<Self> {
        let mut drbg = Rfc6979 {
            k: [0x00; P384_SCALAR_SIZE],
            v: [0x01; P384_SCALAR_SIZE],
            started: false,
        };
        // wiped on every exit
        let x = Zeroizing::new(d.serialize());
        // e is already reduced mod n, which is bits2octets(h1)
        let h = e.serialize();

        drbg.k = drbg.hmac(&[&drbg.v[..], &[0x00u8][..], &x[..], &h[..], extra])?;
        drbg.v = drbg.hmac(&[&drbg.v[..]])?;
        drbg.k = drbg.hmac(&[&drbg.v[..], &[0x01u8][..], &x[..], &h[..], extra])?;
        drbg.v = drbg.hmac(&[&drbg.v[..]])?;

        Ok(drbg)
    }

    /// Step h: the next candidate in [1, n-1]
    ///
    /// Every call after the first starts with the K/V update of step h.3,
    /// so a caller rejecting a nonce (r = 0 or s = 0) gets the next one
    /// in the RFC sequence.
    pub(crate) fn next_scalar(&mut self) -> Result<Scalar> {
        loop {
            if self.started {
                self.k = self.hmac(&[&self.v[..], &[0x00u8][..]])?;
                self.v = self.hmac(&[&self.v[..]])?;
            }
            self.started = true;

            self.v = self.hmac(&[&self.v[..]])?;
            if let Ok(k) = Scalar::new(self.v) {
                return Ok(k);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn is_wiped(&self) -> bool {
        self.k.iter().chain(self.v.iter()).all(|&b| b == 0)
    }

    fn hmac(&self, parts: &[&[u8]]) -> Result<[u8; P384_SCALAR_SIZE]> {
        let mut mac = HmacSha384::new_from_slice(&self.k).map_err(|e| Error::InvalidParameter {
            context: CONTEXT,
            message: e.to_string(),
        })?;
        for part in parts {
            mac.update(part);
        }
        let mut out = [0u8; P384_SCALAR_SIZE];
        out.copy_from_slice(&mac.finalize().into_bytes());
        Ok(out)
    }
}

/// Source of nonces for one signing operation
pub(crate) enum NonceSource {
    Random,
    Rfc6979(Rfc6979),
}

impl NonceSource {
    /// Set up the nonce source for signing digest `e` under key `d`
    pub(crate) fn new<R: CryptoRng + RngCore>(
        mode: NonceMode,
        d: &Scalar,
        e: &Scalar,
        rng: &mut R,
    ) -> Result<Self> {
        match mode {
            NonceMode::Random => Ok(NonceSource::Random),
            NonceMode::Deterministic => Rfc6979::new(d, e, &[]).map(NonceSource::Rfc6979),
            NonceMode::Hedged => {
                let mut extra = [0u8; P384_SCALAR_SIZE];
                rng.try_fill_bytes(&mut extra).with_context(CONTEXT)?;
                let drbg = Rfc6979::new(d, e, &extra);
                extra.zeroize();
                drbg.map(NonceSource::Rfc6979)
            }
        }
    }

    /// The next nonce candidate
    pub(crate) fn next<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<Scalar> {
        match self {
            NonceSource::Random => ecc384_algorithms::error::to_core_result(
                ec::random_scalar(rng),
                CONTEXT,
            ),
            NonceSource::Rfc6979(drbg) => drbg.next_scalar(),
        }
    }
}
