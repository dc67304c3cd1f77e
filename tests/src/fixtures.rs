//! TOML-described hybrid encryption cases
//!
//! A case with `recipient_key` and `ciphertext` is a known answer that must
//! decrypt to `plaintext`; a case without them is only round-tripped.

use primkit_pke::EciesAeadHkdfParams;
use serde::Deserialize;

/// Cases shipped with the test crate
pub const HYBRID_SUITE: &str = include_str!("../data/hybrid_suite.toml");

#[derive(Debug, Deserialize)]
pub struct HybridSuite {
    #[serde(rename = "case")]
    pub cases: Vec<HybridCase>,
}

#[derive(Debug, Deserialize)]
pub struct HybridCase {
    pub name: String,
    pub params: EciesAeadHkdfParams,
    #[serde(default)]
    pub plaintext: String,
    #[serde(default)]
    pub context_info: String,
    /// Hex private scalar
    pub recipient_key: Option<String>,
    /// Hex ciphertext
    pub ciphertext: Option<String>,
}

impl HybridCase {
    /// Decoded `(recipient_key, ciphertext)` for known-answer cases
    pub fn known_answer(&self) -> Option<(Vec<u8>, Vec<u8>)> {
        let key = hex::decode(self.recipient_key.as_ref()?).ok()?;
        let ciphertext = hex::decode(self.ciphertext.as_ref()?).ok()?;
        Some((key, ciphertext))
    }
}

pub fn load_hybrid_suite(text: &str) -> Result<HybridSuite, toml::de::Error> {
    toml::from_str(text)
}
