//! Parameter sets for ECIES-AEAD-HKDF
//!
//! With the `serde` feature these types (de)serialize with the canonical
//! algorithm names, e.g.
//!
//! ```toml
//! curve = "NIST_P256"
//! hkdf_hash = "SHA256"
//! hkdf_salt = "0001020304"
//! point_format = "COMPRESSED"
//!
//! [dem]
//! type = "AES_GCM"
//! key_size = 16
//! ```

use primkit_api::{policy, EllipticCurve, HashType, PointFormat, Result};
use primkit_params::utils::symmetric::CHACHA20_KEY_SIZE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Choice of AEAD for the data encapsulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum DemParams {
    /// AES-GCM with a 16- or 32-byte key
    #[cfg_attr(feature = "serde", serde(rename = "AES_GCM"))]
    AesGcm { key_size: usize },

    #[cfg_attr(feature = "serde", serde(rename = "CHACHA20_POLY1305"))]
    ChaCha20Poly1305,

    #[cfg_attr(feature = "serde", serde(rename = "XCHACHA20_POLY1305"))]
    XChaCha20Poly1305,

    /// AES-CTR then HMAC. The derived key is the AES key followed by the
    /// HMAC key.
    #[cfg_attr(feature = "serde", serde(rename = "AES_CTR_HMAC"))]
    AesCtrHmac {
        aes_key_size: usize,
        iv_size: usize,
        hmac_hash: HashType,
        hmac_key_size: usize,
        tag_size: usize,
    },
}

impl DemParams {
    /// Key bytes the KEM has to derive for this DEM
    pub fn symmetric_key_size(&self) -> usize {
        match *self {
            Self::AesGcm { key_size } => key_size,
            Self::ChaCha20Poly1305 | Self::XChaCha20Poly1305 => CHACHA20_KEY_SIZE,
            Self::AesCtrHmac {
                aes_key_size,
                hmac_key_size,
                ..
            } => aes_key_size + hmac_key_size,
        }
    }

    /// Human-readable name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::AesGcm { .. } => "AES_GCM",
            Self::ChaCha20Poly1305 => "CHACHA20_POLY1305",
            Self::XChaCha20Poly1305 => "XCHACHA20_POLY1305",
            Self::AesCtrHmac { .. } => "AES_CTR_HMAC",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::AesGcm { key_size } => policy::validate_aes_key_size(key_size),
            Self::ChaCha20Poly1305 | Self::XChaCha20Poly1305 => Ok(()),
            Self::AesCtrHmac {
                aes_key_size,
                iv_size,
                hmac_hash,
                hmac_key_size,
                tag_size,
            } => {
                policy::validate_aes_key_size(aes_key_size)?;
                policy::validate_aes_ctr_iv_size(iv_size)?;
                policy::validate_mac_params(hmac_hash, hmac_key_size, tag_size)
            }
        }
    }
}

/// Everything sender and recipient must agree on besides the key pair
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EciesAeadHkdfParams {
    pub curve: EllipticCurve,
    pub hkdf_hash: HashType,
    #[cfg_attr(feature = "serde", serde(default, with = "hex_salt"))]
    pub hkdf_salt: Vec<u8>,
    pub point_format: PointFormat,
    pub dem: DemParams,
}

impl EciesAeadHkdfParams {
    pub fn validate(&self) -> Result<()> {
        self.dem.validate()?;
        policy::validate_ecies_params(
            self.curve,
            self.hkdf_hash,
            self.point_format,
            self.dem.symmetric_key_size(),
        )
    }

    /// Size of the encapsulated key at the front of every ciphertext
    pub fn header_size(&self) -> usize {
        self.point_format.encoding_size(self.curve)
    }

    pub fn p256_hkdf_sha256_aes128_gcm() -> Self {
        Self {
            curve: EllipticCurve::NistP256,
            hkdf_hash: HashType::Sha256,
            hkdf_salt: Vec::new(),
            point_format: PointFormat::Uncompressed,
            dem: DemParams::AesGcm { key_size: 16 },
        }
    }

    pub fn p256_hkdf_sha256_aes128_ctr_hmac_sha256() -> Self {
        Self {
            curve: EllipticCurve::NistP256,
            hkdf_hash: HashType::Sha256,
            hkdf_salt: Vec::new(),
            point_format: PointFormat::Uncompressed,
            dem: DemParams::AesCtrHmac {
                aes_key_size: 16,
                iv_size: 16,
                hmac_hash: HashType::Sha256,
                hmac_key_size: 32,
                tag_size: 16,
            },
        }
    }

    pub fn p384_hkdf_sha384_aes256_gcm() -> Self {
        Self {
            curve: EllipticCurve::NistP384,
            hkdf_hash: HashType::Sha384,
            hkdf_salt: Vec::new(),
            point_format: PointFormat::Uncompressed,
            dem: DemParams::AesGcm { key_size: 32 },
        }
    }

    pub fn p521_hkdf_sha512_chacha20_poly1305() -> Self {
        Self {
            curve: EllipticCurve::NistP521,
            hkdf_hash: HashType::Sha512,
            hkdf_salt: Vec::new(),
            point_format: PointFormat::Compressed,
            dem: DemParams::ChaCha20Poly1305,
        }
    }

    /// Replace the HKDF salt
    pub fn with_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.hkdf_salt = salt.into();
        self
    }

    /// Replace the point format
    pub fn with_point_format(mut self, point_format: PointFormat) -> Self {
        self.point_format = point_format;
        self
    }
}

#[cfg(feature = "serde")]
mod hex_salt {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(salt: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(salt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}
