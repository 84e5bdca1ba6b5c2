//! End-to-end tests through the `ecc384` facade

use ecc384::{
    ecdh, ecdsa_sign, ecdsa_sign_with, ecdsa_verify, generate_key, generate_key_with_rng,
    keypair_from_bytes, keypair_from_private, validate_public_key, DecodeError, Digest, Error,
    NonceMode, PrivateKey, PublicKey, Signature, SigningConfig, PUBLIC_KEY_SIZE, SIGNATURE_SIZE,
};
use ecc384_tests::vectors::*;
use ecc384_tests::{hex_array, seeded_rng, sha384_digest};
use rand::{CryptoRng, RngCore};

struct ExhaustedRng;

impl RngCore for ExhaustedRng {
    fn next_u32(&mut self) -> u32 {
        0
    }
    fn next_u64(&mut self) -> u64 {
        0
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new("randomness source exhausted"))
    }
}

impl CryptoRng for ExhaustedRng {}

fn rfc6979_private() -> PrivateKey {
    PrivateKey::from_bytes(hex_array(RFC6979_PRIVATE_KEY))
}

#[test]
fn os_rng_end_to_end() {
    let alice = generate_key().unwrap();
    let bob = generate_key().unwrap();
    assert_ne!(alice.public, bob.public);

    let digest = sha384_digest(b"end to end");
    let sig = ecdsa_sign(&alice.private, &digest).unwrap();
    assert!(ecdsa_verify(&alice.public, &digest, &sig));
    assert!(!ecdsa_verify(&bob.public, &digest, &sig));

    let ab = ecdh(&bob.public, &alice.private).unwrap();
    let ba = ecdh(&alice.public, &bob.private).unwrap();
    assert_eq!(ab.as_bytes(), ba.as_bytes());
}

#[test]
fn buffer_sizes() {
    let kp = generate_key_with_rng(&mut seeded_rng(1)).unwrap();
    assert_eq!(kp.public.as_bytes().len(), PUBLIC_KEY_SIZE);
    assert_eq!(kp.private.as_bytes().len(), 48);
    assert!(matches!(kp.public.as_bytes()[0], 0x02 | 0x03));

    let sig = ecdsa_sign(&kp.private, &Digest::from_bytes([7; 48])).unwrap();
    assert_eq!(sig.as_bytes().len(), SIGNATURE_SIZE);
}

#[test]
fn rfc6979_key_pair() {
    let kp = keypair_from_private(rfc6979_private()).unwrap();
    let bytes = kp.public.as_bytes();
    assert_eq!(hex::encode_upper(&bytes[1..]), RFC6979_PUBLIC_X);

    // Uy ends in 0x20, so the compressed tag is even
    assert_eq!(bytes[0], 0x02);
    let y: [u8; 48] = hex_array(RFC6979_PUBLIC_Y);
    assert_eq!(y[47] & 1, 0);
}

#[test]
fn rfc6979_deterministic_signatures() {
    let kp = keypair_from_private(rfc6979_private()).unwrap();
    let config = SigningConfig::with_nonce(NonceMode::Deterministic);

    for vector in RFC6979_SHA384.iter() {
        let digest = sha384_digest(vector.message);
        let sig = ecdsa_sign_with(&kp.private, &digest, config, &mut ExhaustedRng).unwrap();
        assert_eq!(hex::encode_upper(sig.r_bytes()), vector.r);
        assert_eq!(hex::encode_upper(sig.s_bytes()), vector.s);
        assert!(ecdsa_verify(&kp.public, &digest, &sig));
    }
}

#[test]
fn keygen_is_reproducible_with_seeded_rng() {
    let a = generate_key_with_rng(&mut seeded_rng(99)).unwrap();
    let b = generate_key_with_rng(&mut seeded_rng(99)).unwrap();
    assert_eq!(a.public, b.public);
    assert_eq!(a.private.as_bytes(), b.private.as_bytes());
}

#[test]
fn randomness_failure_is_fatal() {
    assert!(matches!(
        generate_key_with_rng(&mut ExhaustedRng),
        Err(Error::RandomGeneration { .. })
    ));

    let kp = generate_key_with_rng(&mut seeded_rng(2)).unwrap();
    let digest = sha384_digest(b"no entropy");
    assert!(matches!(
        ecdsa_sign_with(&kp.private, &digest, SigningConfig::default(), &mut ExhaustedRng),
        Err(Error::RandomGeneration { .. })
    ));
}

#[test]
fn key_pair_reassembly() {
    let kp = generate_key_with_rng(&mut seeded_rng(3)).unwrap();
    let other = generate_key_with_rng(&mut seeded_rng(4)).unwrap();

    let rebuilt = keypair_from_bytes(kp.public, kp.private.clone()).unwrap();
    assert_eq!(rebuilt.public, kp.public);

    assert!(matches!(
        keypair_from_bytes(other.public, kp.private.clone()),
        Err(Error::InvalidKey { .. })
    ));
}

#[test]
fn public_key_validation() {
    let kp = generate_key_with_rng(&mut seeded_rng(5)).unwrap();
    assert!(validate_public_key(&kp.public).is_ok());

    let g = PublicKey::from_bytes(hex_array(GENERATOR_COMPRESSED));
    assert!(validate_public_key(&g).is_ok());

    let mut no_root = [0u8; 49];
    no_root[0] = 0x03;
    no_root[48] = 1;
    assert!(matches!(
        validate_public_key(&PublicKey::from_bytes(no_root)),
        Err(Error::InvalidKey {
            source: Some(DecodeError::NotOnCurve),
            ..
        })
    ));
}

#[test]
fn slice_constructors_check_length() {
    assert!(matches!(
        PublicKey::from_slice(&[0x02; 48]),
        Err(Error::InvalidLength { expected: 49, actual: 48, .. })
    ));
    assert!(PrivateKey::from_slice(&[1; 49]).is_err());
    assert!(Signature::from_slice(&[1; 95]).is_err());
    assert!(Digest::from_slice(&[1; 32]).is_err());
    assert!(Digest::from_slice(&[1; 48]).is_ok());
}

#[test]
fn ecdh_rejects_invalid_peer_and_known_answer() {
    let ours = rfc6979_private();

    let g = PublicKey::from_bytes(hex_array(GENERATOR_COMPRESSED));
    let secret = ecdh(&g, &ours).unwrap();
    assert_eq!(hex::encode_upper(secret.as_bytes()), RFC6979_PUBLIC_X);

    let mut two = [0u8; 48];
    two[47] = 2;
    let secret = ecdh(&g, &PrivateKey::from_bytes(two)).unwrap();
    assert_eq!(hex::encode_upper(secret.as_bytes()), TWO_G_X);

    let mut bad = [0u8; 49];
    bad[0] = 0x02;
    bad[48] = 4;
    assert!(ecdh(&PublicKey::from_bytes(bad), &ours).is_err());
}

#[test]
fn boundary_zero_digest_and_small_key() {
    let mut one = [0u8; 48];
    one[47] = 1;
    let kp = keypair_from_private(PrivateKey::from_bytes(one)).unwrap();
    assert_eq!(
        kp.public.as_bytes(),
        &hex_array::<49>(GENERATOR_COMPRESSED)
    );

    let digest = Digest::from_bytes([0u8; 48]);
    let sig = ecdsa_sign(&kp.private, &digest).unwrap();
    assert!(ecdsa_verify(&kp.public, &digest, &sig));
}
