//! HMAC-based Key Derivation Function (HKDF)
//!
//! This module implements HKDF as defined in RFC 5869. Every HMAC
//! evaluation goes through [`crate::mac::hmac`], so the hash choice is
//! checked in exactly one place.

use primkit_api::error::validate;
use primkit_api::{policy, HashType, Result};
use primkit_common::SecretVec;
use primkit_params::utils::hash::HKDF_MAX_BLOCKS;

use crate::mac::hmac;

/// HKDF bound to one hash function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hkdf {
    hash: HashType,
}

impl Hkdf {
    /// Fails with `UnsupportedAlgorithm` for a hash HKDF may not use
    pub fn new(hash: HashType) -> Result<Self> {
        policy::validate_hkdf_hash(hash)?;
        Ok(Self { hash })
    }

    pub fn hash(&self) -> HashType {
        self.hash
    }

    /// Largest output `derive` can produce: 255 hash blocks
    pub fn max_output_length(&self) -> usize {
        HKDF_MAX_BLOCKS * self.hash.output_size()
    }

    /// HKDF-Extract. An empty salt behaves as `HashLen` zero bytes.
    pub fn extract(&self, salt: &[u8], ikm: &[u8]) -> Result<SecretVec> {
        hmac(self.hash, salt, &[ikm]).map(SecretVec::new)
    }

    /// HKDF-Expand
    pub fn expand(&self, prk: &[u8], info: &[u8], length: usize) -> Result<SecretVec> {
        validate::max_output("HKDF output", length, self.max_output_length())?;

        let mut okm = SecretVec::new(Vec::with_capacity(length));
        let mut block = SecretVec::default();
        let mut counter = 1u8;
        while okm.len() < length {
            block = SecretVec::new(hmac(self.hash, prk, &[block.as_slice(), info, &[counter]])?);
            let take = (length - okm.len()).min(block.len());
            okm.extend_from_slice(&block[..take]);
            counter = counter.wrapping_add(1);
        }
        Ok(okm)
    }

    /// Extract-then-expand
    pub fn derive(&self, ikm: &[u8], salt: &[u8], info: &[u8], length: usize) -> Result<SecretVec> {
        validate::max_output("HKDF output", length, self.max_output_length())?;
        let prk = self.extract(salt, ikm)?;
        self.expand(&prk, info, length)
    }
}

/// One-shot HKDF: `length` bytes derived from `ikm` under `salt` and `info`
pub fn compute_hkdf(
    hash: HashType,
    ikm: &[u8],
    salt: &[u8],
    info: &[u8],
    length: usize,
) -> Result<SecretVec> {
    Hkdf::new(hash)?.derive(ikm, salt, info, length)
}
