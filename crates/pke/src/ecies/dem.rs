use primkit_algorithms::{AesCtrHmac, AesGcm, ChaCha20Poly1305, XChaCha20Poly1305};
use primkit_api::error::validate;
use primkit_api::{Aead, DemHelper, Result};

use super::DemParams;

/// [`DemHelper`] backed by one of the library AEADs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AeadDemHelper {
    params: DemParams,
}

impl AeadDemHelper {
    /// Fails if `params` violate the AEAD policy
    pub fn new(params: DemParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &DemParams {
        &self.params
    }
}

impl DemHelper for AeadDemHelper {
    fn symmetric_key_size(&self) -> usize {
        self.params.symmetric_key_size()
    }

    fn aead(&self, symmetric_key: &[u8]) -> Result<Box<dyn Aead>> {
        validate::key_size("DEM key", symmetric_key.len(), self.symmetric_key_size())?;
        Ok(match self.params {
            DemParams::AesGcm { .. } => Box::new(AesGcm::new(symmetric_key)?),
            DemParams::ChaCha20Poly1305 => Box::new(ChaCha20Poly1305::new(symmetric_key)?),
            DemParams::XChaCha20Poly1305 => Box::new(XChaCha20Poly1305::new(symmetric_key)?),
            DemParams::AesCtrHmac {
                aes_key_size,
                iv_size,
                hmac_hash,
                tag_size,
                ..
            } => {
                let (aes_key, hmac_key) = symmetric_key.split_at(aes_key_size);
                Box::new(AesCtrHmac::new(aes_key, iv_size, hmac_hash, hmac_key, tag_size)?)
            }
        })
    }
}
