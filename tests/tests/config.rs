//! Parameter sets loaded from TOML and JSON

use primkit_api::{EllipticCurve, Error, HashType, PointFormat, SignatureEncoding};
use primkit_pke::{AeadDemHelper, DemParams, EciesAeadHkdfParams};
use primkit_tests::fixtures::{load_hybrid_suite, HYBRID_SUITE};

#[test]
fn shipped_suite_parses_and_validates() {
    let suite = load_hybrid_suite(HYBRID_SUITE).unwrap();
    assert_eq!(suite.cases.len(), 4);
    for case in &suite.cases {
        case.params.validate().unwrap_or_else(|e| panic!("{}: {}", case.name, e));
        assert!(AeadDemHelper::new(case.params.dem).is_ok());
    }

    let first = &suite.cases[0];
    assert_eq!(first.params.hkdf_salt, b"primkit salt");
    assert_eq!(first.params.point_format, PointFormat::Compressed);
    assert_eq!(first.params.dem, DemParams::AesGcm { key_size: 16 });

    // salt omitted
    assert!(suite.cases[1].params.hkdf_salt.is_empty());
    assert_eq!(suite.cases[1].params.dem, DemParams::ChaCha20Poly1305);
}

#[test]
fn unknown_names_are_rejected() {
    let md5 = r#"
        [[case]]
        name = "bad hash"

        [case.params]
        curve = "NIST_P256"
        hkdf_hash = "MD5"
        point_format = "UNCOMPRESSED"

        [case.params.dem]
        type = "AES_GCM"
        key_size = 16
    "#;
    assert!(load_hybrid_suite(md5).is_err());

    let curve = md5.replace("MD5", "SHA256").replace("NIST_P256", "SECP256K1");
    assert!(load_hybrid_suite(&curve).is_err());

    let dem = md5.replace("MD5", "SHA256").replace("AES_GCM", "AES_SIV");
    assert!(load_hybrid_suite(&dem).is_err());
}

#[test]
fn parsed_but_unapproved_parameters_fail_validation() {
    let text = r#"
        [[case]]
        name = "short tag"

        [case.params]
        curve = "NIST_P384"
        hkdf_hash = "SHA384"
        point_format = "COMPRESSED"

        [case.params.dem]
        type = "AES_CTR_HMAC"
        aes_key_size = 16
        iv_size = 16
        hmac_hash = "SHA256"
        hmac_key_size = 32
        tag_size = 8
    "#;
    let suite = load_hybrid_suite(text).unwrap();
    let params = &suite.cases[0].params;
    assert!(params.validate().is_err());
    assert!(AeadDemHelper::new(params.dem).is_err());
}

#[test]
fn presets_survive_json() {
    for params in [
        EciesAeadHkdfParams::p256_hkdf_sha256_aes128_gcm(),
        EciesAeadHkdfParams::p256_hkdf_sha256_aes128_ctr_hmac_sha256(),
        EciesAeadHkdfParams::p384_hkdf_sha384_aes256_gcm(),
        EciesAeadHkdfParams::p521_hkdf_sha512_chacha20_poly1305().with_salt(vec![9, 8, 7]),
    ] {
        params.validate().unwrap();
        let json = serde_json::to_string(&params).unwrap();
        let back: EciesAeadHkdfParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}

#[test]
fn identifiers_from_strings() {
    assert_eq!("SHA384".parse::<HashType>(), Ok(HashType::Sha384));
    assert_eq!("NIST_P521".parse::<EllipticCurve>(), Ok(EllipticCurve::NistP521));
    assert_eq!("COMPRESSED".parse::<PointFormat>(), Ok(PointFormat::Compressed));
    assert_eq!("DER".parse::<SignatureEncoding>(), Ok(SignatureEncoding::Der));
    assert!(matches!("MD5".parse::<HashType>(), Err(Error::UnsupportedAlgorithm { .. })));

    for curve in EllipticCurve::ALL {
        assert_eq!(curve.to_string().parse::<EllipticCurve>(), Ok(curve));
    }
    for format in PointFormat::ALL {
        assert_eq!(format.to_string().parse::<PointFormat>(), Ok(format));
    }
}
