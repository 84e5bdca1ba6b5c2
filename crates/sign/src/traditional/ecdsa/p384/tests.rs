use super::nonce::Rfc6979;
use super::*;
use crate::traditional::ecdsa::NonceMode;
use ecc384_api::Error;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest as _, Sha384};

const RFC6979_KEY: &str =
    "6B9D3DAD2E1B8C1C05B19875B6659F4DE23C3B667BF297BA9AA47740787137D896D5724E4C70A825F872C9EA60D2EDF5";

fn bytes48(s: &str) -> [u8; 48] {
    hex::decode(s).unwrap().try_into().unwrap()
}

fn sha384(msg: &[u8]) -> Digest {
    let mut out = [0u8; 48];
    out.copy_from_slice(&Sha384::digest(msg));
    Digest::from_bytes(out)
}

fn rfc6979_keypair() -> KeyPair {
    ec::keypair_from_private(PrivateKey::from_bytes(bytes48(RFC6979_KEY))).unwrap()
}

fn deterministic() -> EcdsaP384 {
    EcdsaP384::new(SigningConfig::with_nonce(NonceMode::Deterministic))
}

/// A randomness source that always fails
struct BrokenRng;

impl RngCore for BrokenRng {
    fn next_u32(&mut self) -> u32 {
        0
    }
    fn next_u64(&mut self) -> u64 {
        0
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        Err(rand::Error::new("entropy source unavailable"))
    }
}

impl CryptoRng for BrokenRng {}

// ----------------------------------------------------------------------------
// RFC 6979 §A.2.6, P-384 with SHA-384
// ----------------------------------------------------------------------------

#[test]
fn rfc6979_nonce_for_sample() {
    let d = Scalar::new(bytes48(RFC6979_KEY)).unwrap();
    let e = Scalar::reduce(sha384(b"sample").as_bytes());
    let k = Rfc6979::new(&d, &e, &[]).unwrap().next_scalar().unwrap();
    assert_eq!(
        hex::encode_upper(k.serialize()),
        "94ED910D1A099DAD3254E9242AE85ABDE4BA15168EAF0CA87A555FD56D10FBCA2907E3E83BA95368623B8C4686915CF9"
    );
}

#[test]
fn rfc6979_signature_vectors() {
    let kp = rfc6979_keypair();
    let vectors = [
        (
            &b"sample"[..],
            "94EDBB92A5ECB8AAD4736E56C691916B3F88140666CE9FA73D64C4EA95AD133C81A648152E44ACF96E36DD1E80FABE46",
            "99EF4AEB15F178CEA1FE40DB2603138F130E740A19624526203B6351D0A3A94FA329C145786E679E7B82C71A38628AC8",
        ),
        (
            &b"test"[..],
            "8203B63D3C853E8D77227FB377BCF7B7B772E97892A80F36AB775D509D7A5FEB0542A7F0812998DA8F1DD3CA3CF023DB",
            "DDD0760448D42D8A43AF45AF836FCE4DE8BE06B485E9B61B827C2F13173923E06A739F040649A667BF3B828246BAA5A5",
        ),
    ];

    for (msg, r, s) in vectors {
        let digest = sha384(msg);
        let sig = deterministic()
            .sign_digest(&digest, &kp.private, &mut BrokenRng)
            .unwrap();
        assert_eq!(hex::encode_upper(sig.r_bytes()), r);
        assert_eq!(hex::encode_upper(sig.s_bytes()), s);
        assert!(EcdsaP384::verify_digest(&digest, &sig, &kp.public));
    }
}

#[test]
fn rfc6979_nonce_sequence_advances() {
    let d = Scalar::new(bytes48(RFC6979_KEY)).unwrap();
    let e = Scalar::reduce(sha384(b"sample").as_bytes());
    let mut drbg = Rfc6979::new(&d, &e, &[]).unwrap();
    let first = drbg.next_scalar().unwrap();
    let second = drbg.next_scalar().unwrap();
    assert_ne!(first, second);

    let hedged = Rfc6979::new(&d, &e, &[0xA5; 48]).unwrap().next_scalar().unwrap();
    assert_ne!(first, hedged);
}

#[test]
fn rfc6979_state_is_wiped_on_zeroize() {
    use zeroize::Zeroize;

    let d = Scalar::new(bytes48(RFC6979_KEY)).unwrap();
    let e = Scalar::reduce(sha384(b"sample").as_bytes());
    let mut drbg = Rfc6979::new(&d, &e, &[0x5A; 48]).unwrap();
    assert!(!drbg.is_wiped());

    drbg.zeroize();
    assert!(drbg.is_wiped());
}

// ----------------------------------------------------------------------------
// Sign / verify
// ----------------------------------------------------------------------------

#[test]
fn sign_verify_all_nonce_modes() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let kp = ec::generate_key_pair(&mut rng).unwrap();
    let digest = sha384(b"all nonce modes");

    for mode in [NonceMode::Random, NonceMode::Deterministic, NonceMode::Hedged] {
        let signer = EcdsaP384::new(SigningConfig::with_nonce(mode));
        let sig = signer.sign_digest(&digest, &kp.private, &mut rng).unwrap();
        assert!(EcdsaP384::verify_digest(&digest, &sig, &kp.public), "{mode:?}");
    }
}

#[test]
fn deterministic_signatures_are_reproducible() {
    let kp = rfc6979_keypair();
    let digest = sha384(b"repeat");
    let a = deterministic()
        .sign_digest(&digest, &kp.private, &mut ChaCha20Rng::seed_from_u64(1))
        .unwrap();
    let b = deterministic()
        .sign_digest(&digest, &kp.private, &mut ChaCha20Rng::seed_from_u64(2))
        .unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn random_and_hedged_signatures_vary() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let kp = rfc6979_keypair();
    let digest = sha384(b"vary");

    for mode in [NonceMode::Random, NonceMode::Hedged] {
        let signer = EcdsaP384::new(SigningConfig::with_nonce(mode));
        let a = signer.sign_digest(&digest, &kp.private, &mut rng).unwrap();
        let b = signer.sign_digest(&digest, &kp.private, &mut rng).unwrap();
        assert_ne!(a.r_bytes(), b.r_bytes());
        assert!(EcdsaP384::verify_digest(&digest, &a, &kp.public));
        assert!(EcdsaP384::verify_digest(&digest, &b, &kp.public));
    }
}

#[test]
fn verify_rejects_tampering() {
    let kp = rfc6979_keypair();
    let digest = sha384(b"sample");
    let sig = deterministic()
        .sign_digest(&digest, &kp.private, &mut BrokenRng)
        .unwrap();

    for byte in [0usize, 20, 47, 48, 70, 95] {
        for bit in [0u8, 3, 7] {
            let mut bytes = sig.to_bytes();
            bytes[byte] ^= 1 << bit;
            let tampered = Signature::from_bytes(bytes);
            assert!(!EcdsaP384::verify_digest(&digest, &tampered, &kp.public));
        }
    }

    assert!(!EcdsaP384::verify_digest(&sha384(b"other"), &sig, &kp.public));
}

#[test]
fn verify_rejects_wrong_key() {
    let kp = rfc6979_keypair();
    let other = ec::generate_key_pair(&mut ChaCha20Rng::seed_from_u64(5)).unwrap();
    let digest = sha384(b"sample");
    let sig = deterministic()
        .sign_digest(&digest, &kp.private, &mut BrokenRng)
        .unwrap();
    assert!(!EcdsaP384::verify_digest(&digest, &sig, &other.public));
}

#[test]
fn verify_rejects_out_of_range_components() {
    let kp = rfc6979_keypair();
    let digest = sha384(b"sample");
    let sig = deterministic()
        .sign_digest(&digest, &kp.private, &mut BrokenRng)
        .unwrap();
    let n = bytes48(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF581A0DB248B0A77AECEC196ACCC52973",
    );

    let zero = [0u8; 48];
    for (r, s) in [
        (zero, sig.s_bytes()),
        (sig.r_bytes(), zero),
        (n, sig.s_bytes()),
        (sig.r_bytes(), n),
        ([0xFF; 48], [0xFF; 48]),
    ] {
        let bad = Signature::from_components(&r, &s);
        assert!(!EcdsaP384::verify_digest(&digest, &bad, &kp.public));
    }
}

#[test]
fn verify_rejects_malformed_public_key() {
    let kp = rfc6979_keypair();
    let digest = sha384(b"sample");
    let sig = deterministic()
        .sign_digest(&digest, &kp.private, &mut BrokenRng)
        .unwrap();

    let mut bad_tag = kp.public.to_bytes();
    bad_tag[0] = 0x05;
    assert!(!EcdsaP384::verify_digest(&digest, &sig, &PublicKey::from_bytes(bad_tag)));

    let mut off_curve = [0u8; 49];
    off_curve[0] = 0x02;
    off_curve[48] = 1;
    assert!(!EcdsaP384::verify_digest(&digest, &sig, &PublicKey::from_bytes(off_curve)));
}

#[test]
fn negated_s_also_verifies() {
    let kp = rfc6979_keypair();
    let digest = sha384(b"sample");
    let sig = deterministic()
        .sign_digest(&digest, &kp.private, &mut BrokenRng)
        .unwrap();
    let s = Scalar::new(sig.s_bytes()).unwrap();
    let flipped = Signature::from_components(&sig.r_bytes(), &s.negate().serialize());
    assert!(EcdsaP384::verify_digest(&digest, &flipped, &kp.public));
}

#[test]
fn zero_digest_and_unit_key() {
    let mut one = [0u8; 48];
    one[47] = 1;
    let kp = ec::keypair_from_private(PrivateKey::from_bytes(one)).unwrap();
    let digest = Digest::from_bytes([0u8; 48]);

    for mode in [NonceMode::Random, NonceMode::Deterministic] {
        let signer = EcdsaP384::new(SigningConfig::with_nonce(mode));
        let sig = signer
            .sign_digest(&digest, &kp.private, &mut ChaCha20Rng::seed_from_u64(11))
            .unwrap();
        assert!(EcdsaP384::verify_digest(&digest, &sig, &kp.public));
    }
}

// ----------------------------------------------------------------------------
// Errors
// ----------------------------------------------------------------------------

#[test]
fn rng_failure_is_surfaced() {
    let kp = rfc6979_keypair();
    let digest = sha384(b"sample");

    for mode in [NonceMode::Random, NonceMode::Hedged] {
        let signer = EcdsaP384::new(SigningConfig::with_nonce(mode));
        assert!(matches!(
            signer.sign_digest(&digest, &kp.private, &mut BrokenRng),
            Err(Error::RandomGeneration { .. })
        ));
    }
}

#[test]
fn invalid_private_key_is_rejected() {
    let digest = sha384(b"sample");
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    for bad in [[0u8; 48], [0xFF; 48]] {
        assert!(matches!(
            EcdsaP384::default().sign_digest(&digest, &PrivateKey::from_bytes(bad), &mut rng),
            Err(Error::InvalidKey { .. })
        ));
    }
}

// ----------------------------------------------------------------------------
// Trait surface and configuration
// ----------------------------------------------------------------------------

#[test]
fn signature_scheme_trait() {
    let mut rng = ChaCha20Rng::seed_from_u64(21);
    let kp = EcdsaP384::keypair(&mut rng).unwrap();
    let pk = EcdsaP384::public_key(&kp);
    let sk = EcdsaP384::secret_key(&kp);
    let digest = sha384(b"trait");

    let sig = EcdsaP384::default().sign_prehash(&digest, &sk, &mut rng).unwrap();
    assert!(EcdsaP384::verify_prehash(&digest, &sig, &pk));
    assert_eq!(EcdsaP384::name(), "ECDSA-P384");
}

#[test]
fn config_defaults() {
    let config = SigningConfig::default();
    assert_eq!(config.nonce, NonceMode::Random);
    assert!(config.uses_rng());
    assert!(!SigningConfig::with_nonce(NonceMode::Deterministic).uses_rng());
    assert!(SigningConfig::with_nonce(NonceMode::Hedged).uses_rng());
    assert_eq!(EcdsaP384::default().config(), &config);
}

#[cfg(feature = "serde")]
#[test]
fn config_serde() {
    let config = SigningConfig::with_nonce(NonceMode::Hedged);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"nonce":"hedged"}"#);
    assert_eq!(serde_json::from_str::<SigningConfig>(&json).unwrap(), config);
    assert_eq!(serde_json::from_str::<SigningConfig>("{}").unwrap(), SigningConfig::default());
}
