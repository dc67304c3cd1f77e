//! Hash dispatch
//!
//! The digests themselves come from the `sha1` and `sha2` crates; this
//! module only maps a [`HashType`] onto them.

use primkit_api::HashType;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Hash `data` with the selected function
pub fn compute_hash(hash: HashType, data: &[u8]) -> Vec<u8> {
    match hash {
        HashType::Sha1 => Sha1::digest(data).to_vec(),
        HashType::Sha256 => Sha256::digest(data).to_vec(),
        HashType::Sha384 => Sha384::digest(data).to_vec(),
        HashType::Sha512 => Sha512::digest(data).to_vec(),
    }
}
