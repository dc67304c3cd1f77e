//! Constants for ECDSA signature encodings

/// ASN.1 SEQUENCE tag
pub const DER_TAG_SEQUENCE: u8 = 0x30;

/// ASN.1 INTEGER tag
pub const DER_TAG_INTEGER: u8 = 0x02;

/// First length byte of the one-byte long form
pub const DER_LENGTH_LONG_FORM_1: u8 = 0x81;

/// Largest length encodable in the DER short form
pub const DER_SHORT_FORM_MAX: usize = 0x7f;
