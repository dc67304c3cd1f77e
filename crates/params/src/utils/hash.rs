//! Constants for hash functions and HMAC

/// Output size of SHA-1 in bytes
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// HKDF can expand to at most this many hash blocks (RFC 5869)
pub const HKDF_MAX_BLOCKS: usize = 255;

/// Minimum HMAC key size accepted for a PRF or MAC, in bytes
pub const HMAC_MIN_KEY_SIZE: usize = 16;

/// Minimum truncated HMAC tag size, in bytes
pub const HMAC_MIN_TAG_SIZE: usize = 10;
