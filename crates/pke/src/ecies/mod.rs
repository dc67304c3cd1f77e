//! ECIES-AEAD-HKDF hybrid encryption
//!
//! A ciphertext is `encoded(R) || aead_ciphertext` where `R` is a fresh
//! ephemeral public point. The header length is a function of the curve
//! and point format only, so it is recomputed by the recipient and never
//! transmitted.
//!
//! The symmetric key is `HKDF(hash, ikm = encoded(R) || x(r·Q), salt,
//! info = context_info)`, truncated to the key size of the DEM. The AEAD
//! is invoked with empty associated data; `context_info` is bound only
//! through HKDF.
//!
//! ```
//! use primkit_algorithms::EcPrivateKey;
//! use primkit_api::{HybridDecrypt, HybridEncrypt};
//! use primkit_pke::{EciesAeadHkdfHybridDecrypt, EciesAeadHkdfHybridEncrypt, EciesAeadHkdfParams};
//!
//! let params = EciesAeadHkdfParams::p256_hkdf_sha256_aes128_gcm();
//! let private = EcPrivateKey::generate(params.curve, &mut rand::rngs::OsRng);
//!
//! let sender = EciesAeadHkdfHybridEncrypt::from_params(private.public_key(), &params)?;
//! let recipient = EciesAeadHkdfHybridDecrypt::from_params(private, &params)?;
//!
//! let ciphertext = sender.encrypt(b"hello", b"context")?;
//! assert_eq!(recipient.decrypt(&ciphertext, b"context")?, b"hello");
//! # Ok::<(), primkit_api::Error>(())
//! ```

mod decrypt;
mod dem;
mod encrypt;
mod kem;
mod params;

pub use decrypt::EciesAeadHkdfHybridDecrypt;
pub use dem::AeadDemHelper;
pub use encrypt::EciesAeadHkdfHybridEncrypt;
pub use kem::{EciesHkdfRecipientKem, EciesHkdfSenderKem, KemKey};
pub use params::{DemParams, EciesAeadHkdfParams};
