//! Cryptographic building blocks for the primkit primitives
//!
//! This crate wraps audited RustCrypto implementations behind the
//! capability traits of `primkit-api`, applying the library policy when
//! each instance is constructed:
//!
//! - [`hash`]: SHA-1 and SHA-2 dispatch by [`HashType`](primkit_api::HashType)
//! - [`mac`]: HMAC as a PRF and as a truncated MAC
//! - [`kdf`]: HKDF (RFC 5869) on top of the HMAC primitive
//! - [`aead`]: AES-GCM, ChaCha20-Poly1305, XChaCha20-Poly1305 and
//!   AES-CTR-HMAC, all producing self-contained ciphertexts
//! - [`ec`]: NIST curve keys, the point codec and ECDH

#![forbid(unsafe_code)]

pub mod aead;
pub mod ec;
pub mod hash;
pub mod kdf;
pub mod mac;

pub use aead::{AesCtrHmac, AesGcm, ChaCha20Poly1305, XChaCha20Poly1305};
pub use ec::{EcPrivateKey, EcPublicKey};
pub use hash::compute_hash;
pub use kdf::hkdf::compute_hkdf;
pub use mac::hmac::{HmacMac, HmacPrf};
