use primkit_algorithms::ec::header_size;
use primkit_algorithms::EcPrivateKey;
use primkit_api::{policy, DemHelper, Error, HashType, HybridDecrypt, PointFormat, Result};
use tracing::{debug, trace};

use super::{AeadDemHelper, EciesAeadHkdfParams, EciesHkdfRecipientKem};

/// ECIES-AEAD-HKDF decryption with one recipient private key
pub struct EciesAeadHkdfHybridDecrypt {
    kem: EciesHkdfRecipientKem,
    hkdf_hash: HashType,
    hkdf_salt: Vec<u8>,
    point_format: PointFormat,
    dem: Box<dyn DemHelper>,
}

impl EciesAeadHkdfHybridDecrypt {
    pub fn new(
        private: EcPrivateKey,
        hkdf_hash: HashType,
        hkdf_salt: &[u8],
        point_format: PointFormat,
        dem: Box<dyn DemHelper>,
    ) -> Result<Self> {
        policy::validate_ecies_params(
            private.curve(),
            hkdf_hash,
            point_format,
            dem.symmetric_key_size(),
        )?;
        debug!(
            curve = private.curve().name(),
            hkdf_hash = hkdf_hash.name(),
            point_format = point_format.name(),
            dem_key_size = dem.symmetric_key_size(),
            "ECIES decrypter constructed"
        );
        Ok(Self {
            kem: EciesHkdfRecipientKem::new(private),
            hkdf_hash,
            hkdf_salt: hkdf_salt.to_vec(),
            point_format,
            dem,
        })
    }

    /// Build from a parameter set. The key must be on `params.curve`.
    pub fn from_params(private: EcPrivateKey, params: &EciesAeadHkdfParams) -> Result<Self> {
        params.validate()?;
        if private.curve() != params.curve {
            return Err(Error::param("ECIES private key", "key is not on the configured curve"));
        }
        let dem = AeadDemHelper::new(params.dem)?;
        Self::new(
            private,
            params.hkdf_hash,
            &params.hkdf_salt,
            params.point_format,
            Box::new(dem),
        )
    }

    /// Length of the encapsulated key at the front of every ciphertext
    pub fn header_size(&self) -> usize {
        header_size(self.kem.private_key().curve(), self.point_format)
    }

    fn open(&self, encapsulated: &[u8], sealed: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        let symmetric_key = self.kem.decapsulate(
            encapsulated,
            self.hkdf_hash,
            &self.hkdf_salt,
            context_info,
            self.dem.symmetric_key_size(),
            self.point_format,
        )?;
        self.dem.aead(&symmetric_key)?.decrypt(sealed, &[])
    }
}

impl HybridDecrypt for EciesAeadHkdfHybridDecrypt {
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        let header = self.header_size();
        if ciphertext.len() < header {
            return Err(Error::CiphertextTooShort {
                min: header,
                actual: ciphertext.len(),
            });
        }
        let (encapsulated, sealed) = ciphertext.split_at(header);
        self.open(encapsulated, sealed, context_info).map_err(|_| {
            trace!(ciphertext_len = ciphertext.len(), "ECIES decryption rejected");
            Error::DecryptionFailed
        })
    }
}
