//! ChaCha20-Poly1305 (RFC 8439)
//!
//! Ciphertext layout: `nonce (12) || ciphertext || tag (16)`.

use chacha20poly1305::aead::KeyInit;
use primkit_api::error::validate;
use primkit_api::{Aead, Error, Result};
use primkit_params::utils::symmetric::{CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE, POLY1305_TAG_SIZE};

use super::{open, seal};

#[derive(Clone)]
pub struct ChaCha20Poly1305 {
    cipher: chacha20poly1305::ChaCha20Poly1305,
}

impl ChaCha20Poly1305 {
    /// Fails with `InvalidKeySize` unless `key` is 32 bytes
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::key_size("ChaCha20-Poly1305 key", key.len(), CHACHA20_KEY_SIZE)?;
        let cipher = chacha20poly1305::ChaCha20Poly1305::new_from_slice(key).map_err(|_| {
            Error::InvalidKeySize {
                context: "ChaCha20-Poly1305 key",
                actual: key.len(),
            }
        })?;
        Ok(Self { cipher })
    }

    /// Bytes added to every plaintext
    pub fn overhead(&self) -> usize {
        CHACHA20_NONCE_SIZE + POLY1305_TAG_SIZE
    }
}

impl Aead for ChaCha20Poly1305 {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        seal(&self.cipher, "ChaCha20-Poly1305", plaintext, associated_data)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        open(&self.cipher, ciphertext, associated_data)
    }
}

impl core::fmt::Debug for ChaCha20Poly1305 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("ChaCha20Poly1305([REDACTED])")
    }
}
