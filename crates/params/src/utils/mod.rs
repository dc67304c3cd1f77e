//! Constants for hashes, MACs and symmetric ciphers

pub mod hash;
pub mod symmetric;
