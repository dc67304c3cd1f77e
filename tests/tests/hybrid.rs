//! ECIES-AEAD-HKDF through the capability traits

use primkit_algorithms::EcPrivateKey;
use primkit_api::{Error, HybridDecrypt, HybridEncrypt, PointFormat};
use primkit_pke::{EciesAeadHkdfHybridDecrypt, EciesAeadHkdfHybridEncrypt, EciesAeadHkdfParams};
use primkit_tests::fixtures::{load_hybrid_suite, HYBRID_SUITE};
use primkit_tests::{hybrid_pair, init_tracing, seeded_rng};

#[test]
fn suite_known_answers_decrypt() {
    init_tracing();
    let suite = load_hybrid_suite(HYBRID_SUITE).unwrap();
    let mut checked = 0;
    for case in &suite.cases {
        let Some((key, ciphertext)) = case.known_answer() else {
            continue;
        };
        let private = EcPrivateKey::from_bytes(case.params.curve, &key).unwrap();
        let recipient = EciesAeadHkdfHybridDecrypt::from_params(private, &case.params).unwrap();
        let plaintext = recipient
            .decrypt(&ciphertext, case.context_info.as_bytes())
            .unwrap_or_else(|e| panic!("{}: {}", case.name, e));
        assert_eq!(plaintext, case.plaintext.as_bytes(), "{}", case.name);
        checked += 1;
    }
    assert_eq!(checked, 2);
}

#[test]
fn suite_cases_round_trip() {
    init_tracing();
    let suite = load_hybrid_suite(HYBRID_SUITE).unwrap();
    let mut rng = seeded_rng(1);
    for case in &suite.cases {
        let (sender, recipient) = hybrid_pair(&case.params, &mut rng).unwrap();
        let context = case.context_info.as_bytes();
        let ciphertext = sender.encrypt(case.plaintext.as_bytes(), context).unwrap();
        assert!(ciphertext.len() > case.params.header_size(), "{}", case.name);
        assert_eq!(
            recipient.decrypt(&ciphertext, context).unwrap(),
            case.plaintext.as_bytes(),
            "{}",
            case.name
        );
    }
}

#[test]
fn ciphertexts_are_randomized() {
    let params = EciesAeadHkdfParams::p384_hkdf_sha384_aes256_gcm();
    let (sender, recipient) = hybrid_pair(&params, &mut seeded_rng(2)).unwrap();
    let a = sender.encrypt(b"same message", b"ctx").unwrap();
    let b = sender.encrypt(b"same message", b"ctx").unwrap();
    assert_ne!(a, b);
    assert_ne!(a[..params.header_size()], b[..params.header_size()]);
    assert_eq!(recipient.decrypt(&a, b"ctx").unwrap(), recipient.decrypt(&b, b"ctx").unwrap());
}

#[test]
fn format_must_match_between_peers() {
    let mut rng = seeded_rng(3);
    let params = EciesAeadHkdfParams::p256_hkdf_sha256_aes128_gcm();
    let private = EcPrivateKey::generate(params.curve, &mut rng);
    let sender = EciesAeadHkdfHybridEncrypt::from_params(
        private.public_key(),
        &params.clone().with_point_format(PointFormat::Compressed),
    )
    .unwrap();
    let recipient = EciesAeadHkdfHybridDecrypt::from_params(private, &params).unwrap();

    // Long enough for an uncompressed header, so this fails on the point tag
    let ciphertext = sender.encrypt(b"hello", b"").unwrap();
    assert_eq!(recipient.decrypt(&ciphertext, b""), Err(Error::DecryptionFailed));
}

#[test]
fn rejection_reveals_nothing_about_the_cause() {
    init_tracing();
    let params = EciesAeadHkdfParams::p256_hkdf_sha256_aes128_ctr_hmac_sha256();
    let (sender, recipient) = hybrid_pair(&params, &mut seeded_rng(4)).unwrap();
    let ciphertext = sender.encrypt(b"secret", b"ctx").unwrap();

    let mut bad_point = ciphertext.clone();
    bad_point[10] ^= 0xff;
    let mut bad_tag = ciphertext.clone();
    let last = bad_tag.len() - 1;
    bad_tag[last] ^= 0x01;

    let errors = [
        recipient.decrypt(&bad_point, b"ctx").unwrap_err(),
        recipient.decrypt(&bad_tag, b"ctx").unwrap_err(),
        recipient.decrypt(&ciphertext, b"other").unwrap_err(),
        recipient.decrypt(&ciphertext[..params.header_size()], b"ctx").unwrap_err(),
    ];
    for err in errors {
        assert!(err.is_opaque());
        assert_eq!(err, Error::DecryptionFailed);
        assert_eq!(err.to_string(), "decryption failed");
    }
}
