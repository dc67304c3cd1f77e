use primkit_algorithms::EcPublicKey;
use primkit_api::{policy, DemHelper, Error, HashType, HybridEncrypt, PointFormat, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use super::{AeadDemHelper, EciesAeadHkdfParams, EciesHkdfSenderKem};

/// ECIES-AEAD-HKDF encryption to one recipient public key
pub struct EciesAeadHkdfHybridEncrypt {
    kem: EciesHkdfSenderKem,
    hkdf_hash: HashType,
    hkdf_salt: Vec<u8>,
    point_format: PointFormat,
    dem: Box<dyn DemHelper>,
}

impl EciesAeadHkdfHybridEncrypt {
    pub fn new(
        recipient: EcPublicKey,
        hkdf_hash: HashType,
        hkdf_salt: &[u8],
        point_format: PointFormat,
        dem: Box<dyn DemHelper>,
    ) -> Result<Self> {
        policy::validate_ecies_params(
            recipient.curve(),
            hkdf_hash,
            point_format,
            dem.symmetric_key_size(),
        )?;
        debug!(
            curve = recipient.curve().name(),
            hkdf_hash = hkdf_hash.name(),
            point_format = point_format.name(),
            dem_key_size = dem.symmetric_key_size(),
            "ECIES encrypter constructed"
        );
        Ok(Self {
            kem: EciesHkdfSenderKem::new(recipient),
            hkdf_hash,
            hkdf_salt: hkdf_salt.to_vec(),
            point_format,
            dem,
        })
    }

    /// Build from a parameter set. The key must be on `params.curve`.
    pub fn from_params(recipient: EcPublicKey, params: &EciesAeadHkdfParams) -> Result<Self> {
        params.validate()?;
        if recipient.curve() != params.curve {
            return Err(Error::param("ECIES recipient key", "key is not on the configured curve"));
        }
        let dem = AeadDemHelper::new(params.dem)?;
        Self::new(
            recipient,
            params.hkdf_hash,
            &params.hkdf_salt,
            params.point_format,
            Box::new(dem),
        )
    }

    /// Encrypt with the ephemeral scalar drawn from `rng`.
    ///
    /// Only the KEM uses `rng`; the DEM draws its nonce from the OS RNG.
    pub fn encrypt_with_rng<R: CryptoRng + RngCore>(
        &self,
        plaintext: &[u8],
        context_info: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let kem_key = self.kem.encapsulate(
            self.hkdf_hash,
            &self.hkdf_salt,
            context_info,
            self.dem.symmetric_key_size(),
            self.point_format,
            rng,
        )?;
        let aead = self.dem.aead(&kem_key.symmetric_key)?;
        let sealed = aead.encrypt(plaintext, &[])?;

        let mut out = kem_key.encapsulated;
        out.extend_from_slice(&sealed);
        Ok(out)
    }
}

impl HybridEncrypt for EciesAeadHkdfHybridEncrypt {
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        self.encrypt_with_rng(plaintext, context_info, &mut OsRng)
    }
}
