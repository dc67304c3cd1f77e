//! Message authentication codes

use crate::Result;

/// A keyed MAC with a fixed tag size
pub trait Mac: Send + Sync {
    /// Compute the tag for `data`
    fn compute_mac(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Check `tag` against `data` in constant time.
    ///
    /// Any mismatch, including a tag of the wrong length, is reported as
    /// `InvalidMac`.
    fn verify_mac(&self, tag: &[u8], data: &[u8]) -> Result<()>;
}
