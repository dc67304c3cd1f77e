//! Property tests for hybrid encryption

use primkit_api::{Error, HybridDecrypt, HybridEncrypt, PointFormat};
use primkit_pke::EciesAeadHkdfParams;
use primkit_tests::{hybrid_pair, seeded_rng};
use proptest::prelude::*;

fn params() -> impl Strategy<Value = EciesAeadHkdfParams> {
    let preset = prop_oneof![
        Just(EciesAeadHkdfParams::p256_hkdf_sha256_aes128_gcm()),
        Just(EciesAeadHkdfParams::p256_hkdf_sha256_aes128_ctr_hmac_sha256()),
        Just(EciesAeadHkdfParams::p384_hkdf_sha384_aes256_gcm()),
    ];
    let format = prop_oneof![
        Just(PointFormat::Uncompressed),
        Just(PointFormat::Compressed),
        Just(PointFormat::LegacyUncompressed),
    ];
    let salt = prop::collection::vec(any::<u8>(), 0..32);
    (preset, format, salt).prop_map(|(p, f, s)| p.with_point_format(f).with_salt(s))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn round_trip(
        params in params(),
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..512),
        context in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let (sender, recipient) = hybrid_pair(&params, &mut seeded_rng(seed)).unwrap();
        let ciphertext = sender.encrypt(&plaintext, &context).unwrap();
        prop_assert_eq!(recipient.decrypt(&ciphertext, &context).unwrap(), plaintext);
    }

    #[test]
    fn any_flipped_bit_is_rejected(
        params in params(),
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..64),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let (sender, recipient) = hybrid_pair(&params, &mut seeded_rng(seed)).unwrap();
        let mut ciphertext = sender.encrypt(&plaintext, b"ctx").unwrap();
        let i = position.index(ciphertext.len());
        ciphertext[i] ^= 1 << bit;
        prop_assert_eq!(recipient.decrypt(&ciphertext, b"ctx"), Err(Error::DecryptionFailed));
    }

    #[test]
    fn context_is_bound(
        params in params(),
        seed in any::<u64>(),
        context in prop::collection::vec(any::<u8>(), 0..32),
        other in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        prop_assume!(context != other);
        let (sender, recipient) = hybrid_pair(&params, &mut seeded_rng(seed)).unwrap();
        let ciphertext = sender.encrypt(b"bound", &context).unwrap();
        prop_assert_eq!(recipient.decrypt(&ciphertext, &other), Err(Error::DecryptionFailed));
    }

    #[test]
    fn truncation_is_rejected(
        params in params(),
        seed in any::<u64>(),
        cut in any::<prop::sample::Index>(),
    ) {
        let (sender, recipient) = hybrid_pair(&params, &mut seeded_rng(seed)).unwrap();
        let ciphertext = sender.encrypt(b"truncate me", b"").unwrap();
        let len = cut.index(ciphertext.len());
        let result = recipient.decrypt(&ciphertext[..len], b"");
        if len < params.header_size() {
            prop_assert_eq!(
                result,
                Err(Error::CiphertextTooShort { min: params.header_size(), actual: len })
            );
        } else {
            prop_assert_eq!(result, Err(Error::DecryptionFailed));
        }
    }
}
