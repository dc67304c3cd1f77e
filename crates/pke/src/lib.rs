//! Public-key encryption schemes for the primkit library
//!
//! The only scheme is ECIES-AEAD-HKDF: an ephemeral-static ECDH key
//! encapsulation, HKDF key derivation and a pluggable AEAD for the payload.

pub mod ecies;

// Re-export key items
pub use ecies::{
    AeadDemHelper, DemParams, EciesAeadHkdfHybridDecrypt, EciesAeadHkdfHybridEncrypt,
    EciesAeadHkdfParams, EciesHkdfRecipientKem, EciesHkdfSenderKem,
};
