//! Digital signature verification
//!
//! Only verification is offered: keys arrive as public points and signatures
//! as bytes produced elsewhere. See [`traditional::ecdsa`].

#![forbid(unsafe_code)]

pub mod traditional;

pub use traditional::ecdsa::{encode_der, EcdsaVerifier};
