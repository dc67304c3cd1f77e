//! PRF, MAC and HKDF working together

use primkit_algorithms::kdf::Hkdf;
use primkit_algorithms::{compute_hkdf, HmacMac, HmacPrf};
use primkit_api::{policy, Error, HashType, Mac, Prf};

const HASHES: [HashType; 4] = [
    HashType::Sha1,
    HashType::Sha256,
    HashType::Sha384,
    HashType::Sha512,
];

#[test]
fn hkdf_first_block_is_prf_of_info() {
    // T(1) = HMAC(PRK, info || 0x01)
    for hash in HASHES {
        let hkdf = Hkdf::new(hash).unwrap();
        let prk = hkdf.extract(b"salt", b"input keying material").unwrap();
        let prf = HmacPrf::new(hash, &prk).unwrap();
        let expected = prf.compute_prf(b"info\x01", hash.output_size()).unwrap();

        let okm = compute_hkdf(hash, b"input keying material", b"salt", b"info", hash.output_size())
            .unwrap();
        assert_eq!(okm.as_slice(), expected.as_slice(), "{}", hash);
    }
}

#[test]
fn mac_tag_is_truncated_prf_output() {
    let key = [0x42u8; 32];
    for hash in HASHES {
        let prf = HmacPrf::new(hash, &key).unwrap();
        let full = prf.compute_prf(b"data", hash.output_size()).unwrap();
        for tag_size in [10, 16, hash.output_size()] {
            let mac = HmacMac::new(hash, &key, tag_size).unwrap();
            let tag = mac.compute_mac(b"data").unwrap();
            assert_eq!(tag, full[..tag_size]);
            assert!(mac.verify_mac(&tag, b"data").is_ok());
            assert_eq!(mac.verify_mac(&full, b"data").is_ok(), tag_size == full.len());
            assert_eq!(mac.verify_mac(&tag, b"Data"), Err(Error::InvalidMac));
        }
    }
}

#[test]
fn primitives_behind_trait_objects() {
    let prfs: Vec<Box<dyn Prf>> = HASHES
        .iter()
        .map(|&hash| Box::new(HmacPrf::new(hash, &[7u8; 16]).unwrap()) as Box<dyn Prf>)
        .collect();
    let outputs: Vec<Vec<u8>> = prfs.iter().map(|prf| prf.compute_prf(b"x", 20).unwrap()).collect();
    for (i, a) in outputs.iter().enumerate() {
        for b in &outputs[i + 1..] {
            assert_ne!(a, b);
        }
    }

    let mac: Box<dyn Mac> = Box::new(HmacMac::new(HashType::Sha384, &[1u8; 24], 24).unwrap());
    let tag = mac.compute_mac(b"payload").unwrap();
    assert_eq!(tag.len(), 24);
    assert!(mac.verify_mac(&tag, b"payload").is_ok());
}

#[test]
fn policy_by_name() {
    assert!(policy::validate_prf_params_by_name("SHA512", 16).is_ok());
    assert!(matches!(
        policy::validate_prf_params_by_name("SHA512", 15),
        Err(Error::InvalidKeySize { .. })
    ));
    for name in ["MD5", "sha256", "SHA3_256", ""] {
        assert!(
            matches!(
                policy::validate_prf_params_by_name(name, 32),
                Err(Error::UnsupportedAlgorithm { .. })
            ),
            "{}",
            name
        );
    }
}

#[test]
fn output_limits() {
    let prf = HmacPrf::new(HashType::Sha256, &[0u8; 32]).unwrap();
    assert!(matches!(
        prf.compute_prf(b"", 33),
        Err(Error::InvalidOutputLength { requested: 33, max: 32, .. })
    ));
    assert_eq!(compute_hkdf(HashType::Sha1, b"ikm", b"", b"", 255 * 20).unwrap().len(), 5100);
    assert!(compute_hkdf(HashType::Sha1, b"ikm", b"", b"", 255 * 20 + 1).is_err());
}
