//! Instances are immutable and shared across threads

use std::sync::Arc;
use std::thread;

use primkit_algorithms::HmacMac;
use primkit_api::{HashType, HybridDecrypt, HybridEncrypt, Mac};
use primkit_pke::EciesAeadHkdfParams;
use primkit_tests::{hybrid_pair, seeded_rng};

#[test]
fn hybrid_pair_shared_between_threads() {
    let params = EciesAeadHkdfParams::p256_hkdf_sha256_aes128_gcm();
    let (sender, recipient) = hybrid_pair(&params, &mut seeded_rng(20)).unwrap();
    let sender: Arc<dyn HybridEncrypt> = Arc::from(sender);
    let recipient: Arc<dyn HybridDecrypt> = Arc::from(recipient);

    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            let sender = Arc::clone(&sender);
            let recipient = Arc::clone(&recipient);
            thread::spawn(move || {
                for j in 0..16u8 {
                    let message = [i, j, 0xaa];
                    let context = [j];
                    let ciphertext = sender.encrypt(&message, &context).unwrap();
                    assert_eq!(recipient.decrypt(&ciphertext, &context).unwrap(), message);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn mac_shared_between_threads() {
    let mac = Arc::new(HmacMac::new(HashType::Sha256, &[3u8; 32], 16).unwrap());
    let expected = mac.compute_mac(b"shared").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let mac = Arc::clone(&mac);
            let expected = expected.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(mac.compute_mac(b"shared").unwrap(), expected);
                    assert!(mac.verify_mac(&expected, b"shared").is_ok());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
