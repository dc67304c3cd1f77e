//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-GCM nonce size in bytes
pub const AES_GCM_NONCE_SIZE: usize = 12;

/// AES-GCM tag size in bytes
pub const AES_GCM_TAG_SIZE: usize = 16;

/// Smallest IV accepted by AES-CTR; shorter IVs leave too little counter space
pub const AES_CTR_MIN_IV_SIZE: usize = 12;

/// ChaCha20 key size in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;

/// ChaCha20-Poly1305 nonce size in bytes
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// XChaCha20-Poly1305 nonce size in bytes
pub const XCHACHA20_NONCE_SIZE: usize = 24;

/// Poly1305 tag size in bytes
pub const POLY1305_TAG_SIZE: usize = 16;
