//! Approved-algorithm policy
//!
//! Every primitive calls one of these functions from its constructor, so a
//! successfully built instance is compliant for its whole lifetime and no
//! per-call checks are needed.

use primkit_params::utils::hash::{HKDF_MAX_BLOCKS, HMAC_MIN_KEY_SIZE, HMAC_MIN_TAG_SIZE};
use primkit_params::utils::symmetric::{
    AES128_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE, AES_CTR_MIN_IV_SIZE,
};

use crate::error::{validate, Error, Result};
use crate::types::{EllipticCurve, HashType, PointFormat, SignatureEncoding};

/// Hashes HKDF may be instantiated with. SHA-1 stays for legacy peers.
pub fn validate_hkdf_hash(hash: HashType) -> Result<()> {
    match hash {
        HashType::Sha1 | HashType::Sha256 | HashType::Sha384 | HashType::Sha512 => Ok(()),
    }
}

/// Hash and key size for an HMAC PRF
pub fn validate_prf_params(hash: HashType, key_size: usize) -> Result<()> {
    validate_hkdf_hash(hash)?;
    validate::min_key_size("HMAC key", key_size, HMAC_MIN_KEY_SIZE)
}

/// Same as [`validate_prf_params`] by hash name; unknown names such as `MD5`
/// fail regardless of the key size.
pub fn validate_prf_params_by_name(hash_name: &str, key_size: usize) -> Result<()> {
    let hash: HashType = hash_name.parse()?;
    validate_prf_params(hash, key_size)
}

/// Hash, key size and truncated tag size for an HMAC MAC
pub fn validate_mac_params(hash: HashType, key_size: usize, tag_size: usize) -> Result<()> {
    validate_prf_params(hash, key_size)?;
    if tag_size < HMAC_MIN_TAG_SIZE {
        return Err(Error::param("HMAC tag size", "tag too short"));
    }
    validate::max_output("HMAC tag size", tag_size, hash.output_size())
}

/// AES keys are 128 or 256 bits
pub fn validate_aes_key_size(key_size: usize) -> Result<()> {
    match key_size {
        AES128_KEY_SIZE | AES256_KEY_SIZE => Ok(()),
        actual => Err(Error::InvalidKeySize {
            context: "AES key",
            actual,
        }),
    }
}

/// IV size for AES-CTR; shorter IVs are zero-padded to a full block
pub fn validate_aes_ctr_iv_size(iv_size: usize) -> Result<()> {
    if !(AES_CTR_MIN_IV_SIZE..=AES_BLOCK_SIZE).contains(&iv_size) {
        return Err(Error::param("AES-CTR IV size", "must be between 12 and 16 bytes"));
    }
    Ok(())
}

/// Parameters of an ECIES-AEAD-HKDF instance
pub fn validate_ecies_params(
    _curve: EllipticCurve,
    hkdf_hash: HashType,
    _point_format: PointFormat,
    dem_key_size: usize,
) -> Result<()> {
    validate_hkdf_hash(hkdf_hash)?;
    validate::parameter(dem_key_size > 0, "ECIES DEM", "symmetric key size must be positive")?;
    // the DEM key is a single HKDF output
    validate::max_output(
        "ECIES DEM key size",
        dem_key_size,
        HKDF_MAX_BLOCKS * hkdf_hash.output_size(),
    )
}

/// Curve/hash pairing and signature encoding for ECDSA
pub fn validate_ecdsa_params(
    hash: HashType,
    curve: EllipticCurve,
    encoding: SignatureEncoding,
) -> Result<()> {
    match encoding {
        SignatureEncoding::Der | SignatureEncoding::IeeeP1363 => {}
    }
    let approved = match curve {
        EllipticCurve::NistP256 => hash == HashType::Sha256,
        EllipticCurve::NistP384 => matches!(hash, HashType::Sha384 | HashType::Sha512),
        EllipticCurve::NistP521 => hash == HashType::Sha512,
    };
    if !approved {
        return Err(Error::unsupported(
            "ECDSA hash for curve",
            format!("{} with {}", hash.name(), curve.name()),
        ));
    }
    Ok(())
}
