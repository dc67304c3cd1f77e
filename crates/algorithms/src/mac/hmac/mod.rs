//! HMAC (RFC 2104 / FIPS 198-1) as a PRF and as a truncated MAC
//!
//! Both types hold the key in a [`SecretVec`] and key a fresh HMAC state
//! per call, so an instance is immutable and can be shared freely.

use ::hmac::digest::KeyInit;
use ::hmac::Hmac;
use primkit_api::error::validate;
use primkit_api::{policy, Error, HashType, Mac, Prf, Result};
use primkit_common::{ct_eq, SecretVec};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use tracing::{debug, trace};

fn hmac_parts<M>(key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>>
where
    M: ::hmac::Mac + KeyInit,
{
    let mut mac = <M as KeyInit>::new_from_slice(key).map_err(|_| Error::InvalidKeySize {
        context: "HMAC key",
        actual: key.len(),
    })?;
    for part in parts {
        ::hmac::Mac::update(&mut mac, part);
    }
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Full-length HMAC of the concatenation of `parts`.
///
/// Taking the input in pieces lets callers authenticate framed data
/// without first copying it into one buffer.
pub fn hmac(hash: HashType, key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>> {
    match hash {
        HashType::Sha1 => hmac_parts::<Hmac<Sha1>>(key, parts),
        HashType::Sha256 => hmac_parts::<Hmac<Sha256>>(key, parts),
        HashType::Sha384 => hmac_parts::<Hmac<Sha384>>(key, parts),
        HashType::Sha512 => hmac_parts::<Hmac<Sha512>>(key, parts),
    }
}

/// HMAC as a variable-length PRF.
///
/// Construction checks the hash only. RFC 2104 keys of any length are
/// accepted here so that standard vectors can be reproduced; key
/// generation goes through [`policy::validate_prf_params`].
#[derive(Clone)]
pub struct HmacPrf {
    hash: HashType,
    key: SecretVec,
}

impl HmacPrf {
    pub fn new(hash: HashType, key: &[u8]) -> Result<Self> {
        policy::validate_hkdf_hash(hash)?;
        debug!(hash = hash.name(), "HMAC PRF constructed");
        Ok(Self {
            hash,
            key: SecretVec::from_slice(key),
        })
    }

    pub fn hash(&self) -> HashType {
        self.hash
    }

    /// Largest `output_length` accepted by [`Prf::compute_prf`]
    pub fn max_output_length(&self) -> usize {
        self.hash.output_size()
    }
}

impl Prf for HmacPrf {
    fn compute_prf(&self, data: &[u8], output_length: usize) -> Result<Vec<u8>> {
        validate::max_output("HMAC PRF output", output_length, self.max_output_length())?;
        let mut out = hmac(self.hash, &self.key, &[data])?;
        out.truncate(output_length);
        Ok(out)
    }
}

impl core::fmt::Debug for HmacPrf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HmacPrf")
            .field("hash", &self.hash)
            .field("key", &self.key)
            .finish()
    }
}

/// HMAC with a tag truncated to `tag_size` bytes
#[derive(Clone)]
pub struct HmacMac {
    prf: HmacPrf,
    tag_size: usize,
}

impl HmacMac {
    /// Fails unless the key is at least 16 bytes and `tag_size` is between
    /// 10 bytes and the digest size.
    pub fn new(hash: HashType, key: &[u8], tag_size: usize) -> Result<Self> {
        policy::validate_mac_params(hash, key.len(), tag_size)?;
        debug!(hash = hash.name(), tag_size, "HMAC MAC constructed");
        Ok(Self {
            prf: HmacPrf {
                hash,
                key: SecretVec::from_slice(key),
            },
            tag_size,
        })
    }

    pub fn tag_size(&self) -> usize {
        self.tag_size
    }

    /// Tag over the concatenation of `parts`
    pub(crate) fn compute_mac_parts(&self, parts: &[&[u8]]) -> Result<Vec<u8>> {
        let mut tag = hmac(self.prf.hash, &self.prf.key, parts)?;
        tag.truncate(self.tag_size);
        Ok(tag)
    }

    /// Constant-time check of `tag` over the concatenation of `parts`
    pub(crate) fn verify_mac_parts(&self, tag: &[u8], parts: &[&[u8]]) -> Result<()> {
        let expected = self.compute_mac_parts(parts)?;
        if ct_eq(&expected, tag) {
            Ok(())
        } else {
            trace!("HMAC tag rejected");
            Err(Error::InvalidMac)
        }
    }
}

impl Mac for HmacMac {
    fn compute_mac(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.compute_mac_parts(&[data])
    }

    fn verify_mac(&self, tag: &[u8], data: &[u8]) -> Result<()> {
        self.verify_mac_parts(tag, &[data])
    }
}

impl core::fmt::Debug for HmacMac {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HmacMac")
            .field("hash", &self.prf.hash)
            .field("tag_size", &self.tag_size)
            .finish_non_exhaustive()
    }
}
