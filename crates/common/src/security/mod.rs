//! Secret containers and constant-time helpers

pub mod compare;
pub mod secret;

pub use compare::ct_eq;
pub use secret::SecretVec;
