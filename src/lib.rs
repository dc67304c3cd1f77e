//! # primkit
//!
//! Interchangeable, policy-checked cryptographic primitives: HMAC PRF/MAC,
//! HKDF, AEAD ciphers, ECDSA verification and ECIES-AEAD-HKDF hybrid
//! encryption over the NIST curves.
//!
//! ## Features
//!
//! - `hybrid` (default): ECIES-AEAD-HKDF public-key encryption
//! - `sign` (default): ECDSA signature verification
//! - `algorithms`: hashes, HMAC, HKDF, AEADs, EC keys and ECDH
//! - `serde`: (de)serialization of algorithm identifiers and parameter sets
//! - `full`: everything above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`api`]: capability traits, algorithm identifiers, errors, policy
//! - [`common`]: zeroizing buffers and constant-time comparison
//! - [`params`]: algorithm constants
//! - `algorithms`: the primitives themselves
//! - `pke`: hybrid encryption
//! - `sign`: signature verification
//!
//! ```
//! # #[cfg(feature = "hybrid")]
//! # {
//! use primkit::prelude::*;
//!
//! let params = EciesAeadHkdfParams::p256_hkdf_sha256_aes128_gcm();
//! let private = EcPrivateKey::generate(params.curve, &mut OsRng);
//! let sender = EciesAeadHkdfHybridEncrypt::from_params(private.public_key(), &params)?;
//! let recipient = EciesAeadHkdfHybridDecrypt::from_params(private, &params)?;
//!
//! let ciphertext = sender.encrypt(b"hello", b"context")?;
//! assert_eq!(recipient.decrypt(&ciphertext, b"context")?, b"hello");
//! # }
//! # Ok::<(), primkit::api::Error>(())
//! ```

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use primkit_api as api;
pub use primkit_common as common;
pub use primkit_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use primkit_algorithms as algorithms;

#[cfg(feature = "hybrid")]
pub use primkit_pke as pke;

#[cfg(feature = "sign")]
pub use primkit_sign as sign;

/// Common imports for primkit users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Capability traits
    pub use crate::api::{Aead, DemHelper, HybridDecrypt, HybridEncrypt, Mac, Prf, Verifier};

    // Algorithm identifiers
    pub use crate::api::{EllipticCurve, HashType, PointFormat, SignatureEncoding};

    // Security types
    pub use crate::common::{ct_eq, SecretVec};

    pub use rand::rngs::OsRng;
    pub use zeroize::Zeroize;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        compute_hkdf, AesCtrHmac, AesGcm, ChaCha20Poly1305, EcPrivateKey, EcPublicKey, HmacMac,
        HmacPrf, XChaCha20Poly1305,
    };

    #[cfg(feature = "hybrid")]
    pub use crate::pke::{
        AeadDemHelper, DemParams, EciesAeadHkdfHybridDecrypt, EciesAeadHkdfHybridEncrypt,
        EciesAeadHkdfParams,
    };

    #[cfg(feature = "sign")]
    pub use crate::sign::{encode_der, EcdsaVerifier};
}
