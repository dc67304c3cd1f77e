//! Constants for the NIST prime curves used by ECDH and ECIES

/// Field element size for P-256 in bytes
pub const P256_FIELD_SIZE: usize = 32;

/// Field element size for P-384 in bytes
pub const P384_FIELD_SIZE: usize = 48;

/// Field element size for P-521 in bytes (521 bits rounded up)
pub const P521_FIELD_SIZE: usize = 66;

/// SEC1 tag of an uncompressed point
pub const SEC1_TAG_UNCOMPRESSED: u8 = 0x04;

/// SEC1 tag of a compressed point with even Y
pub const SEC1_TAG_COMPRESSED_EVEN: u8 = 0x02;

/// SEC1 tag of a compressed point with odd Y
pub const SEC1_TAG_COMPRESSED_ODD: u8 = 0x03;
