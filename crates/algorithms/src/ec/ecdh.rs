//! Elliptic-curve Diffie-Hellman
//!
//! The shared secret is the big-endian x-coordinate of the product point,
//! one field element wide, returned in a zeroizing buffer.

use elliptic_curve::ecdh::{diffie_hellman, EphemeralSecret};
use elliptic_curve::{CurveArithmetic, PublicKey, SecretKey};
use primkit_api::{Error, Result};
use primkit_common::SecretVec;
use rand::{CryptoRng, RngCore};

use super::{EcPrivateKey, EcPublicKey};

const CURVE_MISMATCH: &str = "private and public key are on different curves";

fn agree<C: CurveArithmetic>(private: &SecretKey<C>, peer: &PublicKey<C>) -> SecretVec {
    let shared = diffie_hellman(private.to_nonzero_scalar(), peer.as_affine());
    SecretVec::from_slice(shared.raw_secret_bytes().as_slice())
}

fn agree_ephemeral<C, R>(peer: &PublicKey<C>, rng: &mut R) -> (PublicKey<C>, SecretVec)
where
    C: CurveArithmetic,
    R: CryptoRng + RngCore,
{
    let ephemeral = EphemeralSecret::<C>::random(rng);
    let shared = ephemeral.diffie_hellman(peer);
    (
        ephemeral.public_key(),
        SecretVec::from_slice(shared.raw_secret_bytes().as_slice()),
    )
}

/// `x(d·Q)` for a static private key `d` and peer point `Q`
pub fn shared_secret(private: &EcPrivateKey, peer: &EcPublicKey) -> Result<SecretVec> {
    match (private, peer) {
        (EcPrivateKey::P256(d), EcPublicKey::P256(q)) => Ok(agree(d, q)),
        (EcPrivateKey::P384(d), EcPublicKey::P384(q)) => Ok(agree(d, q)),
        (EcPrivateKey::P521(d), EcPublicKey::P521(q)) => Ok(agree(d, q)),
        _ => Err(Error::param("ECDH", CURVE_MISMATCH)),
    }
}

/// Draw a fresh scalar `r`, returning `R = r·G` and `x(r·Q)`.
///
/// `r` lives only inside this call and is wiped before it returns.
pub fn ephemeral_shared_secret<R: CryptoRng + RngCore>(
    peer: &EcPublicKey,
    rng: &mut R,
) -> (EcPublicKey, SecretVec) {
    match peer {
        EcPublicKey::P256(q) => {
            let (r, s) = agree_ephemeral(q, rng);
            (EcPublicKey::P256(r), s)
        }
        EcPublicKey::P384(q) => {
            let (r, s) = agree_ephemeral(q, rng);
            (EcPublicKey::P384(r), s)
        }
        EcPublicKey::P521(q) => {
            let (r, s) = agree_ephemeral(q, rng);
            (EcPublicKey::P521(r), s)
        }
    }
}
