//! Validation utilities for cryptographic primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::InvalidLength {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum output length
#[inline(always)]
pub fn max_output(context: &'static str, requested: usize, max: usize) -> Result<()> {
    if requested > max {
        return Err(Error::InvalidOutputLength {
            context,
            requested,
            max,
        });
    }
    Ok(())
}

/// Validate a key size against a minimum
#[inline(always)]
pub fn min_key_size(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::InvalidKeySize { context, actual });
    }
    Ok(())
}

/// Validate a key size against an exact requirement
#[inline(always)]
pub fn key_size(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKeySize { context, actual });
    }
    Ok(())
}
