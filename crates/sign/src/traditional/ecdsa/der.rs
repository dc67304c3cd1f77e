//! Strict DER codec for `ECDSA-Sig-Value ::= SEQUENCE { r INTEGER, s INTEGER }`
//!
//! The decoder accepts exactly one encoding per signature: definite
//! minimal lengths (short form, or `0x81 len` for lengths above 127),
//! minimal non-negative integers and no trailing bytes anywhere.

use primkit_api::{Error, Result};
use primkit_params::traditional::ecdsa::{
    DER_LENGTH_LONG_FORM_1, DER_SHORT_FORM_MAX, DER_TAG_INTEGER, DER_TAG_SEQUENCE,
};

const MALFORMED: Error = Error::InvalidSignature;

/// DER-encode the big-endian integers `r` and `s`.
///
/// Leading zero bytes are stripped and a zero byte is prepended where the
/// high bit is set, so any fixed-width `r || s` halves may be passed in.
/// Each value must fit in one field element of a supported curve.
pub fn encode_der(r: &[u8], s: &[u8]) -> Vec<u8> {
    let mut body = der_integer(r);
    body.extend_from_slice(&der_integer(s));

    let mut out = Vec::with_capacity(body.len() + 3);
    out.push(DER_TAG_SEQUENCE);
    push_length(&mut out, body.len());
    out.extend_from_slice(&body);
    out
}

fn der_integer(value: &[u8]) -> Vec<u8> {
    let first_nonzero = value.iter().position(|&b| b != 0).unwrap_or(value.len());
    let magnitude = &value[first_nonzero..];
    let pad = magnitude.first().map_or(true, |&b| b & 0x80 != 0);

    let mut out = Vec::with_capacity(magnitude.len() + 3);
    out.push(DER_TAG_INTEGER);
    push_length(&mut out, magnitude.len() + usize::from(pad));
    if pad {
        out.push(0);
    }
    out.extend_from_slice(magnitude);
    out
}

fn push_length(out: &mut Vec<u8>, len: usize) {
    debug_assert!(len <= 0xff);
    if len > DER_SHORT_FORM_MAX {
        out.push(DER_LENGTH_LONG_FORM_1);
    }
    out.push(len as u8);
}

/// Decode a DER signature into fixed-width `r || s`, each half
/// `field_size` bytes.
pub(crate) fn decode_der(der: &[u8], field_size: usize) -> Result<Vec<u8>> {
    let mut input = der;
    let mut sequence = take_tlv(&mut input, DER_TAG_SEQUENCE)?;
    if !input.is_empty() {
        return Err(MALFORMED);
    }

    let r = take_tlv(&mut sequence, DER_TAG_INTEGER)?;
    let s = take_tlv(&mut sequence, DER_TAG_INTEGER)?;
    if !sequence.is_empty() {
        return Err(MALFORMED);
    }

    let mut out = fixed_width_integer(r, field_size)?;
    out.extend_from_slice(&fixed_width_integer(s, field_size)?);
    Ok(out)
}

/// Split one tag-length-value off the front of `input`
fn take_tlv<'a>(input: &mut &'a [u8], tag: u8) -> Result<&'a [u8]> {
    let (&found, rest) = input.split_first().ok_or(MALFORMED)?;
    if found != tag {
        return Err(MALFORMED);
    }

    let (&first, mut rest) = rest.split_first().ok_or(MALFORMED)?;
    let len = match first {
        short if usize::from(short) <= DER_SHORT_FORM_MAX => usize::from(short),
        DER_LENGTH_LONG_FORM_1 => {
            let (&long, tail) = rest.split_first().ok_or(MALFORMED)?;
            // would have fit the short form
            if usize::from(long) <= DER_SHORT_FORM_MAX {
                return Err(MALFORMED);
            }
            rest = tail;
            usize::from(long)
        }
        _ => return Err(MALFORMED),
    };

    if rest.len() < len {
        return Err(MALFORMED);
    }
    let (value, tail) = rest.split_at(len);
    *input = tail;
    Ok(value)
}

fn fixed_width_integer(value: &[u8], field_size: usize) -> Result<Vec<u8>> {
    match value {
        [] => return Err(MALFORMED),
        // negative
        [first, ..] if first & 0x80 != 0 => return Err(MALFORMED),
        // redundant leading zero
        [0, second, ..] if second & 0x80 == 0 => return Err(MALFORMED),
        _ => {}
    }

    let magnitude = value.strip_prefix(&[0]).unwrap_or(value);
    if magnitude.len() > field_size {
        return Err(MALFORMED);
    }
    let mut out = vec![0u8; field_size - magnitude.len()];
    out.extend_from_slice(magnitude);
    Ok(out)
}
