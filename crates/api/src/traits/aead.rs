//! Authenticated encryption with associated data

use crate::Result;

/// An AEAD instance bound to one key.
///
/// The ciphertext is self-contained: implementations pick a fresh nonce
/// per call and carry it in the output, so `decrypt` needs nothing but the
/// bytes `encrypt` returned and the same associated data.
pub trait Aead: Send + Sync {
    /// Encrypt and authenticate `plaintext`, binding `associated_data`
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>>;

    /// Authenticate and decrypt.
    ///
    /// Any failure is `DecryptionFailed`; the cause is not revealed.
    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>>;
}

impl<T: Aead + ?Sized> Aead for Box<T> {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        (**self).encrypt(plaintext, associated_data)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        (**self).decrypt(ciphertext, associated_data)
    }
}
