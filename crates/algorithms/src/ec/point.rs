//! Point codec
//!
//! | format                | layout                       | size      |
//! |-----------------------|------------------------------|-----------|
//! | `UNCOMPRESSED`        | `0x04 \|\| X \|\| Y`         | `1 + 2n`  |
//! | `COMPRESSED`          | `(0x02 \| y_parity) \|\| X`  | `1 + n`   |
//! | `LEGACY_UNCOMPRESSED` | `X \|\| Y`                   | `2n`      |
//!
//! `n` is the field size of the curve. Decoding checks the length and the
//! tag, then lets the curve crate check that the point satisfies the curve
//! equation and is not the identity. Every rejection is the same
//! `InvalidPointEncoding` error.

use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytesSize, PublicKey};
use primkit_api::{EllipticCurve, Error, PointFormat, Result};
use primkit_params::traditional::ecdh::{
    SEC1_TAG_COMPRESSED_EVEN, SEC1_TAG_COMPRESSED_ODD, SEC1_TAG_UNCOMPRESSED,
};

use super::EcPublicKey;

const INVALID_POINT: Error = Error::InvalidPointEncoding { context: "EC point" };

/// Encoded size of a point; also the hybrid ciphertext header size
pub fn header_size(curve: EllipticCurve, format: PointFormat) -> usize {
    format.encoding_size(curve)
}

pub(crate) fn decode_sec1<C>(sec1: &[u8]) -> Result<PublicKey<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    PublicKey::<C>::from_sec1_bytes(sec1).map_err(|_| INVALID_POINT)
}

pub(crate) fn encode_sec1<C>(key: &PublicKey<C>, compress: bool) -> Vec<u8>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    key.to_encoded_point(compress).as_bytes().to_vec()
}

/// Encode `key` in `format`
pub fn encode_point(key: &EcPublicKey, format: PointFormat) -> Vec<u8> {
    let compress = format == PointFormat::Compressed;
    let sec1 = match key {
        EcPublicKey::P256(k) => encode_sec1(k, compress),
        EcPublicKey::P384(k) => encode_sec1(k, compress),
        EcPublicKey::P521(k) => encode_sec1(k, compress),
    };
    match format {
        PointFormat::LegacyUncompressed => sec1[1..].to_vec(),
        PointFormat::Uncompressed | PointFormat::Compressed => sec1,
    }
}

/// Decode a point on `curve` from `bytes` in `format`
pub fn decode_point(
    bytes: &[u8],
    curve: EllipticCurve,
    format: PointFormat,
) -> Result<EcPublicKey> {
    if bytes.len() != header_size(curve, format) {
        return Err(INVALID_POINT);
    }

    let mut sec1 = Vec::with_capacity(bytes.len() + 1);
    match format {
        PointFormat::Uncompressed if bytes[0] == SEC1_TAG_UNCOMPRESSED => {}
        PointFormat::Compressed
            if bytes[0] == SEC1_TAG_COMPRESSED_EVEN || bytes[0] == SEC1_TAG_COMPRESSED_ODD => {}
        PointFormat::LegacyUncompressed => sec1.push(SEC1_TAG_UNCOMPRESSED),
        _ => return Err(INVALID_POINT),
    }
    sec1.extend_from_slice(bytes);

    Ok(match curve {
        EllipticCurve::NistP256 => EcPublicKey::P256(decode_sec1(&sec1)?),
        EllipticCurve::NistP384 => EcPublicKey::P384(decode_sec1(&sec1)?),
        EllipticCurve::NistP521 => EcPublicKey::P521(decode_sec1(&sec1)?),
    })
}
