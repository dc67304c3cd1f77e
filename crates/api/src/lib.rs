//! Public API traits and types for the primkit library
//!
//! This crate provides the public API surface shared by every primitive crate:
//! the capability traits, the algorithm identifiers, the error taxonomy and the
//! approved-algorithm policy that each primitive checks when it is built.

pub mod error;
pub mod policy;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::{EllipticCurve, HashType, PointFormat, SignatureEncoding};

// Re-export all traits from the traits module
pub use traits::{Aead, DemHelper, HybridDecrypt, HybridEncrypt, Mac, Prf, Verifier};
