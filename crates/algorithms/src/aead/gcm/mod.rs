//! AES-GCM with 128- or 256-bit keys
//!
//! Ciphertext layout: `nonce (12) || ciphertext || tag (16)`.

use aes_gcm::aead::KeyInit;
use aes_gcm::{Aes128Gcm, Aes256Gcm};
use primkit_api::{policy, Aead, Error, Result};
use primkit_params::utils::symmetric::{AES128_KEY_SIZE, AES_GCM_NONCE_SIZE, AES_GCM_TAG_SIZE};

use super::{open, seal};

#[derive(Clone)]
enum Cipher {
    Aes128(Aes128Gcm),
    Aes256(Aes256Gcm),
}

/// AES-GCM keyed at construction
#[derive(Clone)]
pub struct AesGcm {
    cipher: Cipher,
}

impl AesGcm {
    /// Fails with `InvalidKeySize` unless `key` is 16 or 32 bytes
    pub fn new(key: &[u8]) -> Result<Self> {
        policy::validate_aes_key_size(key.len())?;
        let invalid = |_| Error::InvalidKeySize {
            context: "AES-GCM key",
            actual: key.len(),
        };
        let cipher = if key.len() == AES128_KEY_SIZE {
            Cipher::Aes128(Aes128Gcm::new_from_slice(key).map_err(invalid)?)
        } else {
            Cipher::Aes256(Aes256Gcm::new_from_slice(key).map_err(invalid)?)
        };
        Ok(Self { cipher })
    }

    /// Bytes added to every plaintext
    pub fn overhead(&self) -> usize {
        AES_GCM_NONCE_SIZE + AES_GCM_TAG_SIZE
    }
}

impl Aead for AesGcm {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        match &self.cipher {
            Cipher::Aes128(c) => seal(c, "AES-GCM", plaintext, associated_data),
            Cipher::Aes256(c) => seal(c, "AES-GCM", plaintext, associated_data),
        }
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        match &self.cipher {
            Cipher::Aes128(c) => open(c, ciphertext, associated_data),
            Cipher::Aes256(c) => open(c, ciphertext, associated_data),
        }
    }
}

impl core::fmt::Debug for AesGcm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let bits = match self.cipher {
            Cipher::Aes128(_) => 128,
            Cipher::Aes256(_) => 256,
        };
        write!(f, "AesGcm({} bits, [REDACTED])", bits)
    }
}
