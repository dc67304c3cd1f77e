//! Constant values for primkit cryptographic operations
//!
//! Sizes and policy minimums shared by every primitive crate. Nothing in here
//! allocates or depends on another crate.

#![no_std]

pub mod traditional;
pub mod utils;
