//! Authenticated encryption
//!
//! Every cipher here implements [`primkit_api::Aead`] and emits a
//! self-contained ciphertext: a fresh random nonce (or IV) from the OS RNG,
//! followed by the encrypted data and the tag.

pub mod chacha20poly1305;
pub mod ctr_hmac;
pub mod gcm;
pub mod xchacha20poly1305;

pub use self::chacha20poly1305::ChaCha20Poly1305;
pub use self::ctr_hmac::AesCtrHmac;
pub use self::gcm::AesGcm;
pub use self::xchacha20poly1305::XChaCha20Poly1305;

use aes_gcm::aead::generic_array::typenum::Unsigned;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead as RawAead, AeadCore, Payload};
use primkit_api::error::{validate, ResultExt};
use primkit_api::{Error, Result};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::trace;

/// `nonce || ciphertext || tag` under a fresh random nonce
pub(crate) fn seal<C: RawAead>(
    cipher: &C,
    context: &'static str,
    plaintext: &[u8],
    associated_data: &[u8],
) -> Result<Vec<u8>> {
    let mut nonce = GenericArray::<u8, <C as AeadCore>::NonceSize>::default();
    OsRng.fill_bytes(nonce.as_mut_slice());

    let sealed = cipher
        .encrypt(
            &nonce,
            Payload {
                msg: plaintext,
                aad: associated_data,
            },
        )
        .map_err(|_| Error::param(context, "plaintext too long"))?;

    let mut out = Vec::with_capacity(nonce.len() + sealed.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&sealed);
    Ok(out)
}

/// Inverse of [`seal`]; every failure is `DecryptionFailed`
pub(crate) fn open<C: RawAead>(
    cipher: &C,
    ciphertext: &[u8],
    associated_data: &[u8],
) -> Result<Vec<u8>> {
    let nonce_size = <C as AeadCore>::NonceSize::USIZE;
    let tag_size = <C as AeadCore>::TagSize::USIZE;
    validate::min_length("AEAD ciphertext", ciphertext.len(), nonce_size + tag_size)
        .map_err(|err| trace!(%err, "AEAD ciphertext rejected"))
        .or_decryption_failed()?;

    let (nonce, sealed) = ciphertext.split_at(nonce_size);
    cipher
        .decrypt(
            GenericArray::from_slice(nonce),
            Payload {
                msg: sealed,
                aad: associated_data,
            },
        )
        .or_decryption_failed()
}
