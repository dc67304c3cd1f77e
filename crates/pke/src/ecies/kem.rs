//! Ephemeral-static ECDH key encapsulation with HKDF

use primkit_algorithms::ec::{ephemeral_shared_secret, shared_secret};
use primkit_algorithms::{compute_hkdf, EcPrivateKey, EcPublicKey};
use primkit_api::{HashType, PointFormat, Result};
use primkit_common::SecretVec;
use rand::{CryptoRng, RngCore};

/// Output of [`EciesHkdfSenderKem::encapsulate`]
#[derive(Debug)]
pub struct KemKey {
    /// Encoded ephemeral point, sent in the clear
    pub encapsulated: Vec<u8>,
    /// Derived symmetric key material
    pub symmetric_key: SecretVec,
}

fn derive_key(
    hash: HashType,
    encapsulated: &[u8],
    shared_x: &SecretVec,
    salt: &[u8],
    info: &[u8],
    key_size: usize,
) -> Result<SecretVec> {
    let mut ikm = SecretVec::from_slice(encapsulated);
    ikm.extend_from_slice(shared_x);
    compute_hkdf(hash, &ikm, salt, info, key_size)
}

/// Sender side, bound to the recipient public key
#[derive(Debug, Clone)]
pub struct EciesHkdfSenderKem {
    recipient: EcPublicKey,
}

impl EciesHkdfSenderKem {
    pub fn new(recipient: EcPublicKey) -> Self {
        Self { recipient }
    }

    pub fn recipient(&self) -> &EcPublicKey {
        &self.recipient
    }

    /// Fresh ephemeral key, encoded in `format`, and `key_size` derived bytes
    pub fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        hash: HashType,
        salt: &[u8],
        info: &[u8],
        key_size: usize,
        format: PointFormat,
        rng: &mut R,
    ) -> Result<KemKey> {
        let (ephemeral, shared_x) = ephemeral_shared_secret(&self.recipient, rng);
        let encapsulated = ephemeral.encode(format);
        let symmetric_key = derive_key(hash, &encapsulated, &shared_x, salt, info, key_size)?;
        Ok(KemKey {
            encapsulated,
            symmetric_key,
        })
    }
}

/// Recipient side, bound to the static private key
#[derive(Debug, Clone)]
pub struct EciesHkdfRecipientKem {
    private: EcPrivateKey,
}

impl EciesHkdfRecipientKem {
    pub fn new(private: EcPrivateKey) -> Self {
        Self { private }
    }

    pub fn private_key(&self) -> &EcPrivateKey {
        &self.private
    }

    /// Decode the ephemeral point and re-derive the sender's key material.
    ///
    /// Fails with `InvalidPointEncoding` if `encapsulated` is not a valid
    /// point on the recipient's curve in `format`.
    pub fn decapsulate(
        &self,
        encapsulated: &[u8],
        hash: HashType,
        salt: &[u8],
        info: &[u8],
        key_size: usize,
        format: PointFormat,
    ) -> Result<SecretVec> {
        let ephemeral = EcPublicKey::from_encoded(self.private.curve(), encapsulated, format)?;
        let shared_x = shared_secret(&self.private, &ephemeral)?;
        derive_key(hash, encapsulated, &shared_x, salt, info, key_size)
    }
}
