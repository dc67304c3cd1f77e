//! Digital signature verification

use crate::Result;

/// Verifies signatures under one public key.
///
/// Verification is all-or-nothing: a malformed encoding and a valid
/// encoding of the wrong signature are both `InvalidSignature`.
pub trait Verifier: Send + Sync {
    fn verify(&self, signature: &[u8], data: &[u8]) -> Result<()>;
}
