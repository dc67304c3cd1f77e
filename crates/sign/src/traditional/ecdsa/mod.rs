//! ECDSA verification over the NIST curves
//!
//! The verifier hashes the message with the configured hash, then checks
//! the signature against the prehash. Digests longer than the group order
//! are truncated to its bit length, shorter ones are used as-is, following
//! FIPS 186-4.
//!
//! ```
//! use primkit_api::{EllipticCurve, HashType, SignatureEncoding, Verifier};
//! use primkit_sign::EcdsaVerifier;
//!
//! let x = hex::decode("60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6").unwrap();
//! let y = hex::decode("7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299").unwrap();
//! let verifier = EcdsaVerifier::new(
//!     HashType::Sha256,
//!     EllipticCurve::NistP256,
//!     SignatureEncoding::IeeeP1363,
//!     &x,
//!     &y,
//! )
//! .unwrap();
//!
//! let signature = hex::decode(
//!     "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716\
//!      f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8",
//! )
//! .unwrap();
//! assert!(verifier.verify(&signature, b"sample").is_ok());
//! assert!(verifier.verify(&signature, b"sampler").is_err());
//! ```

mod der;

pub use der::encode_der;

use ecdsa::hazmat::VerifyPrimitive;
use ecdsa::signature::hazmat::PrehashVerifier;
use ecdsa::{Signature, SignatureSize, VerifyingKey};
use elliptic_curve::generic_array::ArrayLength;
use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytesSize, PrimeCurve, PublicKey};
use primkit_algorithms::{compute_hash, EcPublicKey};
use primkit_api::{
    policy, EllipticCurve, Error, HashType, Result, SignatureEncoding, Verifier,
};
use tracing::{debug, trace};

use self::der::decode_der;

/// Verifies ECDSA signatures under one public key
#[derive(Debug, Clone)]
pub struct EcdsaVerifier {
    hash: HashType,
    encoding: SignatureEncoding,
    key: EcPublicKey,
}

impl EcdsaVerifier {
    /// Build from the affine coordinates of the public key.
    ///
    /// Fails with `InvalidPointEncoding` if `(x, y)` is not on `curve`, or
    /// with a policy error if the hash is not approved for the curve.
    pub fn new(
        hash: HashType,
        curve: EllipticCurve,
        encoding: SignatureEncoding,
        x: &[u8],
        y: &[u8],
    ) -> Result<Self> {
        policy::validate_ecdsa_params(hash, curve, encoding)?;
        let key = EcPublicKey::from_coordinates(curve, x, y)?;
        Self::from_public_key(hash, encoding, key)
    }

    pub fn from_public_key(
        hash: HashType,
        encoding: SignatureEncoding,
        key: EcPublicKey,
    ) -> Result<Self> {
        policy::validate_ecdsa_params(hash, key.curve(), encoding)?;
        debug!(
            curve = key.curve().name(),
            hash = hash.name(),
            encoding = encoding.name(),
            "ECDSA verifier constructed"
        );
        Ok(Self {
            hash,
            encoding,
            key,
        })
    }

    pub fn hash(&self) -> HashType {
        self.hash
    }

    pub fn encoding(&self) -> SignatureEncoding {
        self.encoding
    }

    pub fn public_key(&self) -> &EcPublicKey {
        &self.key
    }

    /// Fixed-width `r || s`
    fn raw_signature(&self, signature: &[u8]) -> Result<Vec<u8>> {
        let n = self.key.curve().field_size();
        match self.encoding {
            SignatureEncoding::Der => decode_der(signature, n),
            SignatureEncoding::IeeeP1363 if signature.len() == 2 * n => Ok(signature.to_vec()),
            SignatureEncoding::IeeeP1363 => Err(Error::InvalidSignature),
        }
    }
}

fn verify_prehash<C>(key: &PublicKey<C>, raw_signature: &[u8], prehash: &[u8]) -> bool
where
    C: PrimeCurve + CurveArithmetic,
    AffinePoint<C>: VerifyPrimitive<C> + FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
    SignatureSize<C>: ArrayLength<u8>,
{
    // Rejects r or s equal to zero or not below the group order
    let Ok(signature) = Signature::<C>::from_slice(raw_signature) else {
        return false;
    };
    let Ok(verifying_key) = VerifyingKey::<C>::from_affine(*key.as_affine()) else {
        return false;
    };
    verifying_key.verify_prehash(prehash, &signature).is_ok()
}

impl Verifier for EcdsaVerifier {
    fn verify(&self, signature: &[u8], data: &[u8]) -> Result<()> {
        let prehash = compute_hash(self.hash, data);
        let valid = match self.raw_signature(signature) {
            Ok(raw) => match &self.key {
                EcPublicKey::P256(key) => verify_prehash(key, &raw, &prehash),
                EcPublicKey::P384(key) => verify_prehash(key, &raw, &prehash),
                EcPublicKey::P521(key) => verify_prehash(key, &raw, &prehash),
            },
            Err(_) => false,
        };

        if valid {
            Ok(())
        } else {
            trace!(
                curve = self.key.curve().name(),
                signature_len = signature.len(),
                "ECDSA signature rejected"
            );
            Err(Error::InvalidSignature)
        }
    }
}
