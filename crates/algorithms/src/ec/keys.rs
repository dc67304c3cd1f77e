use core::fmt;

use primkit_api::error::validate;
use primkit_api::{EllipticCurve, Error, PointFormat, Result};
use primkit_common::SecretVec;
use primkit_params::traditional::ecdh::SEC1_TAG_UNCOMPRESSED;
use rand::{CryptoRng, RngCore};

use super::point::{decode_point, decode_sec1, encode_point};

/// A validated point on one of the supported curves.
///
/// Every value is on its curve and is not the identity; the constructors
/// reject anything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EcPublicKey {
    P256(p256::PublicKey),
    P384(p384::PublicKey),
    P521(p521::PublicKey),
}

impl EcPublicKey {
    pub fn curve(&self) -> EllipticCurve {
        match self {
            Self::P256(_) => EllipticCurve::NistP256,
            Self::P384(_) => EllipticCurve::NistP384,
            Self::P521(_) => EllipticCurve::NistP521,
        }
    }

    /// Build a key from big-endian affine coordinates.
    ///
    /// Coordinates shorter than the field size are left-padded; longer ones
    /// are accepted only if the excess leading bytes are zero.
    pub fn from_coordinates(curve: EllipticCurve, x: &[u8], y: &[u8]) -> Result<Self> {
        let n = curve.field_size();
        let x = fixed_width(x, n).ok_or(Error::InvalidPointEncoding {
            context: "EC x coordinate",
        })?;
        let y = fixed_width(y, n).ok_or(Error::InvalidPointEncoding {
            context: "EC y coordinate",
        })?;

        let mut sec1 = Vec::with_capacity(1 + 2 * n);
        sec1.push(SEC1_TAG_UNCOMPRESSED);
        sec1.extend_from_slice(&x);
        sec1.extend_from_slice(&y);

        Ok(match curve {
            EllipticCurve::NistP256 => Self::P256(decode_sec1(&sec1)?),
            EllipticCurve::NistP384 => Self::P384(decode_sec1(&sec1)?),
            EllipticCurve::NistP521 => Self::P521(decode_sec1(&sec1)?),
        })
    }

    /// Decode from the wire format
    pub fn from_encoded(curve: EllipticCurve, bytes: &[u8], format: PointFormat) -> Result<Self> {
        decode_point(bytes, curve, format)
    }

    /// Encode in the wire format
    pub fn encode(&self, format: PointFormat) -> Vec<u8> {
        encode_point(self, format)
    }

    /// Big-endian affine `(x, y)`, each exactly one field element wide
    pub fn coordinates(&self) -> (Vec<u8>, Vec<u8>) {
        let raw = self.encode(PointFormat::LegacyUncompressed);
        let (x, y) = raw.split_at(self.curve().field_size());
        (x.to_vec(), y.to_vec())
    }
}

fn fixed_width(bytes: &[u8], n: usize) -> Option<Vec<u8>> {
    let first_nonzero = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first_nonzero..];
    if significant.len() > n {
        return None;
    }
    let mut out = vec![0u8; n - significant.len()];
    out.extend_from_slice(significant);
    Some(out)
}

/// A private scalar on one of the supported curves.
///
/// The scalar is wiped when the key is dropped and never printed.
#[derive(Clone)]
pub enum EcPrivateKey {
    P256(p256::SecretKey),
    P384(p384::SecretKey),
    P521(p521::SecretKey),
}

impl EcPrivateKey {
    /// Generate a fresh key with `rng`
    pub fn generate<R: CryptoRng + RngCore>(curve: EllipticCurve, rng: &mut R) -> Self {
        match curve {
            EllipticCurve::NistP256 => Self::P256(p256::SecretKey::random(rng)),
            EllipticCurve::NistP384 => Self::P384(p384::SecretKey::random(rng)),
            EllipticCurve::NistP521 => Self::P521(p521::SecretKey::random(rng)),
        }
    }

    /// Import a big-endian scalar, left-padding it to the field size.
    ///
    /// Zero and values not below the group order are rejected.
    pub fn from_bytes(curve: EllipticCurve, scalar: &[u8]) -> Result<Self> {
        let n = curve.field_size();
        validate::parameter(!scalar.is_empty(), "EC private key", "empty scalar")?;
        if scalar.len() > n {
            return Err(Error::InvalidKeySize {
                context: "EC private key",
                actual: scalar.len(),
            });
        }
        let mut padded = SecretVec::new(vec![0u8; n - scalar.len()]);
        padded.extend_from_slice(scalar);

        let out_of_range = |_| Error::param("EC private key", "scalar out of range");
        Ok(match curve {
            EllipticCurve::NistP256 => {
                Self::P256(p256::SecretKey::from_slice(&padded).map_err(out_of_range)?)
            }
            EllipticCurve::NistP384 => {
                Self::P384(p384::SecretKey::from_slice(&padded).map_err(out_of_range)?)
            }
            EllipticCurve::NistP521 => {
                Self::P521(p521::SecretKey::from_slice(&padded).map_err(out_of_range)?)
            }
        })
    }

    pub fn curve(&self) -> EllipticCurve {
        match self {
            Self::P256(_) => EllipticCurve::NistP256,
            Self::P384(_) => EllipticCurve::NistP384,
            Self::P521(_) => EllipticCurve::NistP521,
        }
    }

    /// Big-endian scalar, exactly one field element wide
    pub fn to_bytes(&self) -> SecretVec {
        match self {
            Self::P256(k) => SecretVec::from_slice(k.to_bytes().as_slice()),
            Self::P384(k) => SecretVec::from_slice(k.to_bytes().as_slice()),
            Self::P521(k) => SecretVec::from_slice(k.to_bytes().as_slice()),
        }
    }

    pub fn public_key(&self) -> EcPublicKey {
        match self {
            Self::P256(k) => EcPublicKey::P256(k.public_key()),
            Self::P384(k) => EcPublicKey::P384(k.public_key()),
            Self::P521(k) => EcPublicKey::P521(k.public_key()),
        }
    }
}

impl fmt::Debug for EcPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcPrivateKey({}, [REDACTED])", self.curve())
    }
}
