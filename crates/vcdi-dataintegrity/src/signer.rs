//! # Proof Creation
//!
//! [`DataIntegritySigner`] holds signing keys indexed by verification method
//! id. `add_proof` signs the document without its existing proofs, so each
//! proof in a multi-proof document is independent of the others, and then
//! appends the new proof after any existing ones.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use vcdi_core::Timestamp;
use vcdi_crypto::{encode_proof_value, KeyPair, PublicKey};

use crate::document::{append_proof, parse_document, take_proof, PROOF_KEY};
use crate::error::SignerError;
use crate::options::{ProofOptions, DATA_INTEGRITY_PROOF};
use crate::resolver::StaticKeyResolver;
use crate::suite::CryptoSuite;

/// Capability that embeds a proof into a serialized document.
pub trait ProofSigner: Send + Sync {
    /// Return `document` with a new proof built from `options` embedded
    /// under the `proof` key.
    fn add_proof(&self, document: &[u8], options: &ProofOptions) -> Result<Vec<u8>, SignerError>;
}

/// Signer for the JCS Data Integrity cryptosuites.
#[derive(Debug, Default)]
pub struct DataIntegritySigner {
    keys: BTreeMap<String, KeyPair>,
}

impl DataIntegritySigner {
    /// A signer with no keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a signing key under a verification method id.
    pub fn with_key(
        mut self,
        verification_method: impl Into<String>,
        key: impl Into<KeyPair>,
    ) -> Self {
        self.keys.insert(verification_method.into(), key.into());
        self
    }

    /// A resolver holding the public halves of every registered key.
    pub fn key_resolver(&self) -> StaticKeyResolver {
        self.keys
            .iter()
            .fold(StaticKeyResolver::new(), |resolver, (vm, key)| {
                resolver.with_key(vm.clone(), key.public_key())
            })
    }

    /// Public key registered under `verification_method`, if any.
    pub fn public_key(&self, verification_method: &str) -> Option<PublicKey> {
        self.keys.get(verification_method).map(KeyPair::public_key)
    }
}

impl ProofSigner for DataIntegritySigner {
    fn add_proof(&self, document: &[u8], options: &ProofOptions) -> Result<Vec<u8>, SignerError> {
        if !options.is_data_integrity() {
            return Err(SignerError::UnsupportedProofType(options.proof_type.clone()));
        }
        let suite = CryptoSuite::from_name(&options.suite_type)
            .ok_or_else(|| SignerError::UnsupportedSuite(options.suite_type.clone()))?;
        let key = self
            .keys
            .get(&options.verification_method_id)
            .ok_or_else(|| {
                SignerError::UnknownVerificationMethod(options.verification_method_id.clone())
            })?;
        if key.algorithm() != suite.key_algorithm() {
            return Err(SignerError::KeyMismatch {
                verification_method: options.verification_method_id.clone(),
                suite: suite.to_string(),
                algorithm: key.algorithm().to_string(),
                expected: suite.key_algorithm().to_string(),
            });
        }

        let mut unsecured = parse_document(document).map_err(SignerError::MalformedDocument)?;
        let existing = take_proof(&mut unsecured);

        let mut proof = proof_configuration(options, suite);
        let hash_data = suite.hash_data(&proof, &unsecured)?;
        let signature = key.sign(&hash_data);
        proof.insert("proofValue".into(), Value::String(encode_proof_value(&signature)));

        let mut secured = unsecured;
        secured.insert(PROOF_KEY.into(), append_proof(existing, Value::Object(proof)));

        tracing::debug!(
            suite = %suite,
            verification_method = %options.verification_method_id,
            purpose = %options.purpose,
            "data integrity proof created"
        );
        Ok(serde_json::to_vec(&secured)?)
    }
}

/// The proof object without `proofValue`.
///
/// Empty `purpose`, `domain` and `challenge` are omitted.
fn proof_configuration(options: &ProofOptions, suite: CryptoSuite) -> Map<String, Value> {
    let created = options.created.unwrap_or_else(Timestamp::now);

    let mut config = Map::new();
    config.insert("type".into(), Value::String(DATA_INTEGRITY_PROOF.into()));
    config.insert("cryptosuite".into(), Value::String(suite.name().into()));
    config.insert("created".into(), Value::String(created.to_iso8601()));
    config.insert(
        "verificationMethod".into(),
        Value::String(options.verification_method_id.clone()),
    );
    if !options.purpose.is_empty() {
        config.insert("proofPurpose".into(), Value::String(options.purpose.clone()));
    }
    if let Some(expires) = options.expires {
        config.insert("expires".into(), Value::String(expires.to_iso8601()));
    }
    if !options.domain.is_empty() {
        config.insert("domain".into(), Value::String(options.domain.clone()));
    }
    if !options.challenge.is_empty() {
        config.insert("challenge".into(), Value::String(options.challenge.clone()));
    }
    config
}
