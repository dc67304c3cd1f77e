//! Algorithm identifiers shared by every primitive
//!
//! These are closed sets: a value of one of these types is always a known
//! algorithm. Whether it is *approved* for a particular use is decided by
//! [`crate::policy`], not by the type.

use core::fmt;
use core::str::FromStr;

use primkit_params::traditional::ecdh::{P256_FIELD_SIZE, P384_FIELD_SIZE, P521_FIELD_SIZE};
use primkit_params::utils::hash::{
    SHA1_OUTPUT_SIZE, SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE, SHA512_OUTPUT_SIZE,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Hash functions known to the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum HashType {
    /// SHA-1, accepted only where legacy compatibility requires it
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashType {
    /// Canonical upper-case name, e.g. `SHA256`
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
        }
    }

    /// Digest size in bytes
    pub fn output_size(self) -> usize {
        match self {
            Self::Sha1 => SHA1_OUTPUT_SIZE,
            Self::Sha256 => SHA256_OUTPUT_SIZE,
            Self::Sha384 => SHA384_OUTPUT_SIZE,
            Self::Sha512 => SHA512_OUTPUT_SIZE,
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SHA1" => Ok(Self::Sha1),
            "SHA256" => Ok(Self::Sha256),
            "SHA384" => Ok(Self::Sha384),
            "SHA512" => Ok(Self::Sha512),
            other => Err(Error::unsupported("hash", other)),
        }
    }
}

/// Named elliptic curves.
///
/// The table is fixed at compile time; every lookup is a `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum EllipticCurve {
    NistP256,
    NistP384,
    NistP521,
}

impl EllipticCurve {
    /// Every supported curve, in ascending size
    pub const ALL: [EllipticCurve; 3] = [Self::NistP256, Self::NistP384, Self::NistP521];

    /// Canonical name, e.g. `NIST_P256`
    pub fn name(self) -> &'static str {
        match self {
            Self::NistP256 => "NIST_P256",
            Self::NistP384 => "NIST_P384",
            Self::NistP521 => "NIST_P521",
        }
    }

    /// Size of one field element (one coordinate) in bytes
    pub fn field_size(self) -> usize {
        match self {
            Self::NistP256 => P256_FIELD_SIZE,
            Self::NistP384 => P384_FIELD_SIZE,
            Self::NistP521 => P521_FIELD_SIZE,
        }
    }
}

impl fmt::Display for EllipticCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EllipticCurve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "NIST_P256" => Ok(Self::NistP256),
            "NIST_P384" => Ok(Self::NistP384),
            "NIST_P521" => Ok(Self::NistP521),
            other => Err(Error::unsupported("curve", other)),
        }
    }
}

/// Byte layout of an encoded curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PointFormat {
    /// `0x04 || X || Y`
    Uncompressed,
    /// `(0x02 | y_parity) || X`
    Compressed,
    /// `X || Y` without the SEC1 tag byte, kept for legacy producers
    LegacyUncompressed,
}

impl PointFormat {
    /// Every supported format
    pub const ALL: [PointFormat; 3] = [
        Self::Uncompressed,
        Self::Compressed,
        Self::LegacyUncompressed,
    ];

    /// Canonical name, e.g. `UNCOMPRESSED`
    pub fn name(self) -> &'static str {
        match self {
            Self::Uncompressed => "UNCOMPRESSED",
            Self::Compressed => "COMPRESSED",
            Self::LegacyUncompressed => "LEGACY_UNCOMPRESSED",
        }
    }

    /// Encoded size of a point on `curve` in this format.
    ///
    /// This is the hybrid ciphertext header size; it depends on public
    /// configuration only.
    pub fn encoding_size(self, curve: EllipticCurve) -> usize {
        let n = curve.field_size();
        match self {
            Self::Uncompressed => 1 + 2 * n,
            Self::Compressed => 1 + n,
            Self::LegacyUncompressed => 2 * n,
        }
    }
}

impl fmt::Display for PointFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PointFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "UNCOMPRESSED" => Ok(Self::Uncompressed),
            "COMPRESSED" => Ok(Self::Compressed),
            "LEGACY_UNCOMPRESSED" => Ok(Self::LegacyUncompressed),
            other => Err(Error::unsupported("point format", other)),
        }
    }
}

/// Wire encoding of an ECDSA signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignatureEncoding {
    /// ASN.1 `SEQUENCE { r INTEGER, s INTEGER }`, strictly DER
    #[cfg_attr(feature = "serde", serde(rename = "DER"))]
    Der,
    /// Fixed-width `r || s`
    #[cfg_attr(feature = "serde", serde(rename = "IEEE_P1363"))]
    IeeeP1363,
}

impl SignatureEncoding {
    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Self::Der => "DER",
            Self::IeeeP1363 => "IEEE_P1363",
        }
    }
}

impl fmt::Display for SignatureEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "DER" => Ok(Self::Der),
            "IEEE_P1363" => Ok(Self::IeeeP1363),
            other => Err(Error::unsupported("signature encoding", other)),
        }
    }
}
