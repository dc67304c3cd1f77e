//! Data encapsulation for hybrid encryption

use super::Aead;
use crate::Result;

/// Turns a derived symmetric key into a ready AEAD.
///
/// A hybrid scheme asks the helper how many key bytes to derive, derives
/// them from the KEM shared secret, then builds a fresh AEAD from those
/// bytes for a single message.
pub trait DemHelper: Send + Sync {
    /// Number of key bytes the KEM must derive
    fn symmetric_key_size(&self) -> usize;

    /// Build an AEAD keyed with `symmetric_key`.
    ///
    /// Fails with `InvalidKeySize` unless the key is exactly
    /// [`symmetric_key_size`](Self::symmetric_key_size) bytes.
    fn aead(&self, symmetric_key: &[u8]) -> Result<Box<dyn Aead>>;
}
