//! Pseudo-random functions

use crate::Result;

/// A keyed pseudo-random function with variable output length
pub trait Prf: Send + Sync {
    /// Returns the first `output_length` bytes of the PRF output on `data`.
    ///
    /// Fails with `InvalidOutputLength` if more bytes are requested than
    /// the underlying function produces.
    fn compute_prf(&self, data: &[u8], output_length: usize) -> Result<Vec<u8>>;
}
