//! Shared fixtures for the primkit integration tests

pub mod fixtures;

use primkit_algorithms::EcPrivateKey;
use primkit_api::{HybridDecrypt, HybridEncrypt, Result};
use primkit_pke::{EciesAeadHkdfHybridDecrypt, EciesAeadHkdfHybridEncrypt, EciesAeadHkdfParams};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

/// Route library events to the test harness; filter with `RUST_LOG`.
///
/// Safe to call from every test, only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// A fresh recipient key and the sender/recipient pair for `params`, behind
/// the capability traits
pub fn hybrid_pair(
    params: &EciesAeadHkdfParams,
    rng: &mut ChaCha20Rng,
) -> Result<(Box<dyn HybridEncrypt>, Box<dyn HybridDecrypt>)> {
    let private = EcPrivateKey::generate(params.curve, rng);
    let sender = EciesAeadHkdfHybridEncrypt::from_params(private.public_key(), params)?;
    let recipient = EciesAeadHkdfHybridDecrypt::from_params(private, params)?;
    Ok((Box::new(sender), Box::new(recipient)))
}
