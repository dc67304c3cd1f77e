//! Key derivation functions

pub mod hkdf;

pub use self::hkdf::{compute_hkdf, Hkdf};
