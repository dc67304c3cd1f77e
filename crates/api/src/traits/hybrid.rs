//! Hybrid public-key encryption

use crate::Result;

/// Encrypts to a recipient public key
pub trait HybridEncrypt: Send + Sync {
    /// Encrypt `plaintext`, binding `context_info` into the derived key.
    ///
    /// The same `context_info` must be supplied to decrypt.
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>>;
}

/// Decrypts with a recipient private key
pub trait HybridDecrypt: Send + Sync {
    /// Decrypt `ciphertext` produced for the same `context_info`.
    ///
    /// A ciphertext shorter than its header is `CiphertextTooShort`; every
    /// other failure is `DecryptionFailed`.
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>>;
}
