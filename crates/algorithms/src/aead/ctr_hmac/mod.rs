//! AES-CTR with HMAC, encrypt-then-authenticate
//!
//! Ciphertext layout: `iv || ctr_ciphertext || tag`. The tag is
//!
//! ```text
//! HMAC(associated_data || iv || ctr_ciphertext || bit_length(associated_data))
//! ```
//!
//! truncated to the configured size, with the bit length as a big-endian
//! `u64`, following draft-mcgrew-aead-aes-cbc-hmac-sha2. The IV is
//! zero-padded on the right to form the initial 16-byte counter block.

use aes::{Aes128, Aes256};
use ctr::cipher::{KeyIvInit, StreamCipher};
use primkit_api::error::{validate, ResultExt};
use primkit_api::{policy, Aead, Error, HashType, Result};
use primkit_common::SecretVec;
use primkit_params::utils::symmetric::{AES128_KEY_SIZE, AES_BLOCK_SIZE};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::trace;

use crate::mac::HmacMac;

type Aes128Ctr = ctr::Ctr128BE<Aes128>;
type Aes256Ctr = ctr::Ctr128BE<Aes256>;

/// Encrypt-then-MAC AEAD over AES-CTR and a truncated HMAC
#[derive(Clone)]
pub struct AesCtrHmac {
    aes_key: SecretVec,
    iv_size: usize,
    mac: HmacMac,
}

impl AesCtrHmac {
    /// Fails unless the AES key is 16 or 32 bytes, the IV between 12 and 16
    /// bytes, and the HMAC key and tag satisfy the MAC policy.
    pub fn new(
        aes_key: &[u8],
        iv_size: usize,
        hmac_hash: HashType,
        hmac_key: &[u8],
        tag_size: usize,
    ) -> Result<Self> {
        policy::validate_aes_key_size(aes_key.len())?;
        policy::validate_aes_ctr_iv_size(iv_size)?;
        let mac = HmacMac::new(hmac_hash, hmac_key, tag_size)?;
        Ok(Self {
            aes_key: SecretVec::from_slice(aes_key),
            iv_size,
            mac,
        })
    }

    /// Bytes this AEAD adds to every plaintext
    pub fn overhead(&self) -> usize {
        self.iv_size + self.mac.tag_size()
    }

    fn apply_keystream(&self, iv: &[u8], buf: &mut [u8]) -> Result<()> {
        let mut counter_block = [0u8; AES_BLOCK_SIZE];
        counter_block[..iv.len()].copy_from_slice(iv);

        let invalid = |_| Error::InvalidKeySize {
            context: "AES-CTR key",
            actual: self.aes_key.len(),
        };
        if self.aes_key.len() == AES128_KEY_SIZE {
            Aes128Ctr::new_from_slices(&self.aes_key, &counter_block)
                .map_err(invalid)?
                .apply_keystream(buf);
        } else {
            Aes256Ctr::new_from_slices(&self.aes_key, &counter_block)
                .map_err(invalid)?
                .apply_keystream(buf);
        }
        Ok(())
    }
}

fn aad_bit_length(associated_data: &[u8]) -> [u8; 8] {
    ((associated_data.len() as u64) * 8).to_be_bytes()
}

impl Aead for AesCtrHmac {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.iv_size];
        OsRng.fill_bytes(&mut out);
        out.extend_from_slice(plaintext);

        let (iv, body) = out.split_at_mut(self.iv_size);
        self.apply_keystream(iv, body)?;

        let tag = self.mac.compute_mac_parts(&[
            associated_data,
            out.as_slice(),
            &aad_bit_length(associated_data)[..],
        ])?;
        out.extend_from_slice(&tag);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        validate::min_length("AES-CTR-HMAC ciphertext", ciphertext.len(), self.overhead())
            .map_err(|err| trace!(%err, "AES-CTR-HMAC ciphertext rejected"))
            .or_decryption_failed()?;
        let (authenticated, tag) = ciphertext.split_at(ciphertext.len() - self.mac.tag_size());

        self.mac
            .verify_mac_parts(
                tag,
                &[
                    associated_data,
                    authenticated,
                    &aad_bit_length(associated_data)[..],
                ],
            )
            .or_decryption_failed()?;

        let (iv, body) = authenticated.split_at(self.iv_size);
        let mut plaintext = body.to_vec();
        self.apply_keystream(iv, &mut plaintext)?;
        Ok(plaintext)
    }
}

impl core::fmt::Debug for AesCtrHmac {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AesCtrHmac")
            .field("aes_key_bits", &(self.aes_key.len() * 8))
            .field("iv_size", &self.iv_size)
            .field("mac", &self.mac)
            .finish()
    }
}
