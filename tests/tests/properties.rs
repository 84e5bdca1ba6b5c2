//! Property-based tests for P-384 key generation, ECDSA and ECDH

use ecc384::{
    ecdh, ecdsa_sign_with, ecdsa_verify, generate_key_with_rng, keypair_from_private, Digest,
    NonceMode, PrivateKey, PublicKey, Signature, SigningConfig,
};
use ecc384_algorithms::ec::p384::{self, Point, Scalar};
use ecc384_tests::seeded_rng;
use proptest::prelude::*;

fn nonce_mode() -> impl Strategy<Value = NonceMode> {
    prop_oneof![
        Just(NonceMode::Random),
        Just(NonceMode::Deterministic),
        Just(NonceMode::Hedged),
    ]
}

fn bytes48() -> impl Strategy<Value = [u8; 48]> {
    prop::collection::vec(any::<u8>(), 48).prop_map(|v| {
        let mut out = [0u8; 48];
        out.copy_from_slice(&v);
        out
    })
}

/// Any in-range private scalar; almost every 48-byte string qualifies
fn private_key() -> impl Strategy<Value = PrivateKey> {
    bytes48()
        .prop_filter("scalar in [1, n-1]", |b| Scalar::new(*b).is_ok())
        .prop_map(PrivateKey::from_bytes)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn compressed_roundtrip(seed in any::<u64>()) {
        let (_, point) = p384::generate_keypair(&mut seeded_rng(seed)).unwrap();
        let encoded = point.serialize_compressed().unwrap();
        prop_assert_eq!(Point::deserialize_compressed(&encoded).unwrap(), point);

        let encoded = point.serialize_uncompressed().unwrap();
        prop_assert_eq!(Point::deserialize_uncompressed(&encoded).unwrap(), point);
    }

    #[test]
    fn sign_then_verify(
        seed in any::<u64>(),
        digest in bytes48(),
        mode in nonce_mode(),
    ) {
        let mut rng = seeded_rng(seed);
        let kp = generate_key_with_rng(&mut rng).unwrap();
        let digest = Digest::from_bytes(digest);
        let config = SigningConfig::with_nonce(mode);

        let sig = ecdsa_sign_with(&kp.private, &digest, config, &mut rng).unwrap();
        prop_assert!(ecdsa_verify(&kp.public, &digest, &sig));

        // A second signature over the same input verifies too, whatever its bytes
        let again = ecdsa_sign_with(&kp.private, &digest, config, &mut rng).unwrap();
        prop_assert!(ecdsa_verify(&kp.public, &digest, &again));
    }

    #[test]
    fn single_bit_flip_is_rejected(
        seed in any::<u64>(),
        digest in bytes48(),
        bit in 0usize..768,
    ) {
        let mut rng = seeded_rng(seed);
        let kp = generate_key_with_rng(&mut rng).unwrap();
        let digest = Digest::from_bytes(digest);
        let sig = ecdsa_sign_with(&kp.private, &digest, SigningConfig::default(), &mut rng).unwrap();

        let mut bytes = sig.to_bytes();
        bytes[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(!ecdsa_verify(&kp.public, &digest, &Signature::from_bytes(bytes)));
    }

    #[test]
    fn wrong_key_is_rejected(seed in any::<u64>(), digest in bytes48()) {
        let mut rng = seeded_rng(seed);
        let kp = generate_key_with_rng(&mut rng).unwrap();
        let other = generate_key_with_rng(&mut rng).unwrap();
        let digest = Digest::from_bytes(digest);

        let sig = ecdsa_sign_with(&kp.private, &digest, SigningConfig::default(), &mut rng).unwrap();
        prop_assert!(!ecdsa_verify(&other.public, &digest, &sig));
    }

    #[test]
    fn ecdh_is_symmetric(a in private_key(), b in private_key()) {
        let alice = keypair_from_private(a).unwrap();
        let bob = keypair_from_private(b).unwrap();

        let ab = ecdh(&bob.public, &alice.private).unwrap();
        let ba = ecdh(&alice.public, &bob.private).unwrap();
        prop_assert_eq!(ab.as_bytes(), ba.as_bytes());
    }

    #[test]
    fn garbage_public_keys_never_agree_silently(
        x in bytes48(),
        odd in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut encoded = [0u8; 49];
        encoded[0] = if odd { 0x03 } else { 0x02 };
        encoded[1..].copy_from_slice(&x);
        let peer = PublicKey::from_bytes(encoded);
        let ours = generate_key_with_rng(&mut seeded_rng(seed)).unwrap();

        // Either the point decodes (and agreement succeeds) or ECDH errors
        match Point::deserialize_compressed(&encoded) {
            Ok(_) => prop_assert!(ecdh(&peer, &ours.private).is_ok()),
            Err(_) => prop_assert!(ecdh(&peer, &ours.private).is_err()),
        }
    }
}
