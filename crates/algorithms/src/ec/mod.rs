//! Elliptic-curve keys, point encoding and Diffie-Hellman
//!
//! The curve arithmetic comes from the RustCrypto `p256`, `p384` and `p521`
//! crates. Keys are held in enums over the supported curves so callers can
//! select a curve at run time from an [`EllipticCurve`] value.
//!
//! [`EllipticCurve`]: primkit_api::EllipticCurve

pub mod ecdh;
mod keys;
pub mod point;

pub use ecdh::{ephemeral_shared_secret, shared_secret};
pub use keys::{EcPrivateKey, EcPublicKey};
pub use point::{decode_point, encode_point, header_size};
