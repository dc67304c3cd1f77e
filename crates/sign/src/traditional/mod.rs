//! Traditional (pre-quantum) signature schemes

pub mod ecdsa;

pub use ecdsa::{encode_der, EcdsaVerifier};
