//! Capability traits implemented by the primitive crates
//!
//! Each trait describes one capability with the bytes-in/bytes-out shape
//! callers program against. Implementations are immutable after
//! construction and may be shared across threads.

pub mod aead;
pub mod dem;
pub mod hybrid;
pub mod mac;
pub mod prf;
pub mod signature;

pub use aead::Aead;
pub use dem::DemHelper;
pub use hybrid::{HybridDecrypt, HybridEncrypt};
pub use mac::Mac;
pub use prf::Prf;
pub use signature::Verifier;
