//! Constants for elliptic-curve algorithms

pub mod ecdh;
pub mod ecdsa;
