//! # Data Integrity Orchestration
//!
//! The byte-level operations shared by credentials and presentations.
//!
//! [`add_data_integrity_proof`] resolves a [`ProofContext`], hands the
//! document bytes to a [`ProofSigner`] and decodes the proofs embedded in the
//! signer's output. [`verify_data_integrity_proof`] resolves the purpose and
//! hands the bytes to the configured [`ProofVerifier`].
//!
//! Signer and verifier failures are propagated as-is. Nothing is retried.
//!
//! [`ProofVerifier`]: vcdi_dataintegrity::ProofVerifier

use serde::Deserialize;
use serde_json::Value;
use vcdi_dataintegrity::ProofSigner;

use crate::context::{ProofContext, VerificationOptions};
use crate::error::{DataIntegrityError, ProofDecodeError};
use crate::proof::{parse_ld_proof, Proof};

/// The `proof` member of a signed document; everything else is ignored.
#[derive(Deserialize)]
struct RawProof {
    #[serde(default)]
    proof: Option<Value>,
}

/// Sign `document` and return every proof embedded in the signer's output.
///
/// The returned sequence includes proofs the document already carried when
/// the signer preserves them.
pub fn add_data_integrity_proof(
    document: &[u8],
    context: &ProofContext,
    signer: &dyn ProofSigner,
) -> Result<Vec<Proof>, DataIntegrityError> {
    let resolved = context.resolve();
    let options = resolved.to_proof_options();

    let signed = signer.add_proof(document, &options).map_err(|e| {
        tracing::warn!(
            suite = %options.suite_type,
            verification_method = %options.verification_method_id,
            error = %e,
            "signer rejected data integrity proof request"
        );
        e
    })?;

    let proofs = decode_proofs(&signed)?;
    if proofs.is_empty() {
        tracing::warn!(
            suite = %options.suite_type,
            "signer succeeded but its output carries no proof"
        );
    } else {
        tracing::debug!(
            suite = %options.suite_type,
            purpose = %options.purpose,
            proof_count = proofs.len(),
            "data integrity proof added"
        );
    }
    Ok(proofs)
}

/// Verify the Data Integrity proofs embedded in `document`.
///
/// Fails with [`DataIntegrityError::MissingVerifier`] before looking at the
/// document when `options` is absent or has no verifier.
pub fn verify_data_integrity_proof(
    document: &[u8],
    options: Option<&VerificationOptions>,
) -> Result<(), DataIntegrityError> {
    let Some(options) = options else {
        tracing::warn!("data integrity verification requested without options");
        return Err(DataIntegrityError::MissingVerifier);
    };
    let Some(verifier) = options.verifier.as_ref() else {
        tracing::warn!("data integrity verification requested without a verifier");
        return Err(DataIntegrityError::MissingVerifier);
    };

    let proof_options = options.to_proof_options();
    verifier.verify_proof(document, &proof_options).map_err(|e| {
        tracing::warn!(
            purpose = %proof_options.purpose,
            error = %e,
            "data integrity proof rejected"
        );
        e
    })?;

    tracing::debug!(purpose = %proof_options.purpose, "data integrity proof verified");
    Ok(())
}

fn decode_proofs(signed: &[u8]) -> Result<Vec<Proof>, ProofDecodeError> {
    let raw: RawProof = serde_json::from_slice(signed)?;
    parse_ld_proof(raw.proof.as_ref())
}
