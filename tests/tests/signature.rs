//! ECDSA verification of signatures produced by another implementation

use p256::ecdsa::signature::hazmat::PrehashSigner;
use primkit_algorithms::{compute_hash, EcPublicKey};
use primkit_api::{EllipticCurve, Error, HashType, SignatureEncoding, Verifier};
use primkit_sign::{encode_der, EcdsaVerifier};
use primkit_tests::{init_tracing, seeded_rng};

fn signed(message: &[u8]) -> (EcPublicKey, p256::ecdsa::Signature) {
    let key = p256::ecdsa::SigningKey::random(&mut seeded_rng(10));
    let signature = key
        .sign_prehash(&compute_hash(HashType::Sha256, message))
        .unwrap();
    (EcPublicKey::P256(p256::PublicKey::from(key.verifying_key())), signature)
}

#[test]
fn der_and_p1363_agree() {
    init_tracing();
    let message = b"signed by p256";
    let (public, signature) = signed(message);
    let (r, s) = signature.split_bytes();
    let (x, y) = public.coordinates();

    let der: Box<dyn Verifier> = Box::new(
        EcdsaVerifier::new(
            HashType::Sha256,
            EllipticCurve::NistP256,
            SignatureEncoding::Der,
            &x,
            &y,
        )
        .unwrap(),
    );
    let p1363: Box<dyn Verifier> = Box::new(
        EcdsaVerifier::from_public_key(HashType::Sha256, SignatureEncoding::IeeeP1363, public)
            .unwrap(),
    );

    let der_bytes = encode_der(&r, &s);
    let raw = signature.to_bytes();
    assert!(der.verify(&der_bytes, message).is_ok());
    assert!(p1363.verify(&raw, message).is_ok());

    // each encoding is rejected by the other verifier
    assert_eq!(der.verify(&raw, message), Err(Error::InvalidSignature));
    assert_eq!(p1363.verify(&der_bytes, message), Err(Error::InvalidSignature));
}

#[test]
fn every_rejection_is_the_same_error() {
    init_tracing();
    let message = b"signed by p256";
    let (public, signature) = signed(message);
    let verifier =
        EcdsaVerifier::from_public_key(HashType::Sha256, SignatureEncoding::Der, public).unwrap();
    let (r, s) = signature.split_bytes();
    let good = encode_der(&r, &s);

    let mut flipped = good.clone();
    let last = flipped.len() - 1;
    flipped[last] ^= 0x01;
    let mut trailing = good.clone();
    trailing.push(0);

    for (sig, msg) in [
        (&flipped[..], &message[..]),
        (&trailing[..], &message[..]),
        (&good[..2], &message[..]),
        (&good[..], &b"other message"[..]),
    ] {
        let err = verifier.verify(sig, msg).unwrap_err();
        assert_eq!(err, Error::InvalidSignature);
        assert_eq!(err.to_string(), "invalid signature");
    }
}
