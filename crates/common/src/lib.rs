//! Shared functionality for the primkit primitive crates
//!
//! Key material and intermediate secrets are held in zeroizing containers
//! from [`security`], and every comparison of secret-dependent bytes goes
//! through [`ct_eq`].

pub mod security;

pub use security::secret::SecretVec;
pub use security::compare::ct_eq;
