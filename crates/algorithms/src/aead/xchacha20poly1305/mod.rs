//! XChaCha20-Poly1305
//!
//! The extended 24-byte nonce makes random nonces safe for any practical
//! number of messages under one key. Ciphertext layout:
//! `nonce (24) || ciphertext || tag (16)`.

use chacha20poly1305::aead::KeyInit;
use primkit_api::error::validate;
use primkit_api::{Aead, Error, Result};
use primkit_params::utils::symmetric::{CHACHA20_KEY_SIZE, XCHACHA20_NONCE_SIZE, POLY1305_TAG_SIZE};

use super::{open, seal};

#[derive(Clone)]
pub struct XChaCha20Poly1305 {
    cipher: chacha20poly1305::XChaCha20Poly1305,
}

impl XChaCha20Poly1305 {
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::key_size("XChaCha20-Poly1305 key", key.len(), CHACHA20_KEY_SIZE)?;
        let cipher = chacha20poly1305::XChaCha20Poly1305::new_from_slice(key).map_err(|_| {
            Error::InvalidKeySize {
                context: "XChaCha20-Poly1305 key",
                actual: key.len(),
            }
        })?;
        Ok(Self { cipher })
    }

    /// Bytes added to every plaintext
    pub fn overhead(&self) -> usize {
        XCHACHA20_NONCE_SIZE + POLY1305_TAG_SIZE
    }
}

impl Aead for XChaCha20Poly1305 {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        seal(&self.cipher, "XChaCha20-Poly1305", plaintext, associated_data)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        open(&self.cipher, ciphertext, associated_data)
    }
}

impl core::fmt::Debug for XChaCha20Poly1305 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("XChaCha20Poly1305([REDACTED])")
    }
}
