//! # Proof Verification
//!
//! [`DataIntegrityVerifier`] checks every `DataIntegrityProof` embedded in a
//! document. Proofs of other types are skipped, but at least one Data
//! Integrity proof must be present and every one of them must pass.
//!
//! Per proof, in order:
//!
//! 1. `proofPurpose` equals the expected purpose.
//! 2. `domain` and `challenge` match when the options set them.
//! 3. `expires`, if present, is not in the past.
//! 4. The verification method resolves to a key of the suite's algorithm.
//! 5. The signature verifies over the recomputed hash data.

use serde_json::{Map, Value};
use vcdi_core::Timestamp;
use vcdi_crypto::decode_proof_value;

use crate::document::{json_kind, parse_document, proof_entries, take_proof};
use crate::error::VerifierError;
use crate::options::{ProofOptions, DATA_INTEGRITY_PROOF};
use crate::resolver::VerificationMethodResolver;
use crate::suite::CryptoSuite;

/// Capability that checks the proofs embedded in a serialized document.
pub trait ProofVerifier: Send + Sync {
    /// Verify the proofs in `document` against `options`.
    fn verify_proof(&self, document: &[u8], options: &ProofOptions) -> Result<(), VerifierError>;
}

/// Verifier for the JCS Data Integrity cryptosuites.
#[derive(Debug, Clone)]
pub struct DataIntegrityVerifier<R> {
    resolver: R,
}

impl<R: VerificationMethodResolver> DataIntegrityVerifier<R> {
    /// Create a verifier that resolves keys through `resolver`.
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// The key resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    fn verify_entry(
        &self,
        mut proof: Map<String, Value>,
        unsecured: &Map<String, Value>,
        options: &ProofOptions,
    ) -> Result<(), VerifierError> {
        let proof_value = match proof.remove("proofValue") {
            Some(Value::String(s)) => s,
            Some(other) => {
                return Err(VerifierError::MalformedProof(format!(
                    "proofValue must be a string, got {}",
                    json_kind(&other)
                )))
            }
            None => return Err(VerifierError::MalformedProof("missing proofValue".into())),
        };

        let suite_name = string_field(&proof, "cryptosuite")?.unwrap_or_default();
        let suite = CryptoSuite::from_name(suite_name)
            .ok_or_else(|| VerifierError::UnsupportedSuite(suite_name.to_string()))?;

        let purpose = string_field(&proof, "proofPurpose")?.unwrap_or_default();
        if purpose != options.purpose {
            return Err(VerifierError::PurposeMismatch {
                expected: options.purpose.clone(),
                found: purpose.to_string(),
            });
        }

        if !options.domain.is_empty() {
            check_domain(proof.get("domain"), &options.domain)?;
        }

        if !options.challenge.is_empty() {
            let challenge = string_field(&proof, "challenge")?.unwrap_or_default();
            if challenge != options.challenge {
                return Err(VerifierError::ChallengeMismatch {
                    expected: options.challenge.clone(),
                    found: challenge.to_string(),
                });
            }
        }

        if let Some(created) = string_field(&proof, "created")? {
            Timestamp::parse_lenient(created)
                .map_err(|e| VerifierError::MalformedProof(format!("created: {e}")))?;
        }
        if let Some(expires) = string_field(&proof, "expires")? {
            let expires = Timestamp::parse_lenient(expires)
                .map_err(|e| VerifierError::MalformedProof(format!("expires: {e}")))?;
            if expires.has_passed(Timestamp::now()) {
                return Err(VerifierError::Expired(expires));
            }
        }

        let verification_method = string_field(&proof, "verificationMethod")?
            .ok_or_else(|| VerifierError::MalformedProof("missing verificationMethod".into()))?;
        let key = self
            .resolver
            .resolve(verification_method)
            .map_err(|reason| VerifierError::KeyResolution {
                verification_method: verification_method.to_string(),
                reason,
            })?;
        if key.algorithm() != suite.key_algorithm() {
            return Err(VerifierError::KeyMismatch {
                verification_method: verification_method.to_string(),
                suite: suite.to_string(),
                algorithm: key.algorithm().to_string(),
                expected: suite.key_algorithm().to_string(),
            });
        }

        let signature = decode_proof_value(&proof_value)
            .map_err(|e| VerifierError::MalformedProof(format!("proofValue: {e}")))?;
        let hash_data = suite.hash_data(&proof, unsecured)?;
        key.verify(&hash_data, &signature)?;

        tracing::debug!(
            suite = %suite,
            verification_method = %verification_method,
            purpose = %purpose,
            "data integrity proof verified"
        );
        Ok(())
    }
}

impl<R: VerificationMethodResolver> ProofVerifier for DataIntegrityVerifier<R> {
    fn verify_proof(&self, document: &[u8], options: &ProofOptions) -> Result<(), VerifierError> {
        if !options.is_data_integrity() {
            return Err(VerifierError::UnsupportedProofType(options.proof_type.clone()));
        }

        let mut unsecured = parse_document(document).map_err(VerifierError::MalformedDocument)?;
        let proof = take_proof(&mut unsecured).ok_or(VerifierError::MissingProof)?;

        let mut checked = 0usize;
        for entry in proof_entries(proof) {
            let proof = match entry {
                Value::Object(map) => map,
                other => {
                    return Err(VerifierError::MalformedProof(format!(
                        "proof entry must be an object, got {}",
                        json_kind(&other)
                    )))
                }
            };
            if proof.get("type").and_then(Value::as_str) != Some(DATA_INTEGRITY_PROOF) {
                tracing::debug!("skipping proof of another type");
                continue;
            }
            self.verify_entry(proof, &unsecured, options)?;
            checked += 1;
        }

        if checked == 0 {
            return Err(VerifierError::MissingProof);
        }
        Ok(())
    }
}

/// Optional string member of a proof; present non-strings are malformed.
fn string_field<'a>(
    proof: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a str>, VerifierError> {
    match proof.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(VerifierError::MalformedProof(format!(
            "{key} must be a string, got {}",
            json_kind(other)
        ))),
    }
}

/// A proof `domain` may be a single string or an array of strings.
fn check_domain(found: Option<&Value>, expected: &str) -> Result<(), VerifierError> {
    let matches = match found {
        Some(Value::String(s)) => s == expected,
        Some(Value::Array(domains)) => domains.iter().any(|d| d.as_str() == Some(expected)),
        _ => false,
    };
    if matches {
        return Ok(());
    }
    Err(VerifierError::DomainMismatch {
        expected: expected.to_string(),
        found: match found {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        },
    })
}
