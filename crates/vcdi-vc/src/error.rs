//! # Error Types
//!
//! [`DataIntegrityError`] is the failure taxonomy of the attach and verify
//! operations. Signer and verifier rejections are carried unmodified so the
//! caller can inspect the underlying reason; decode failures are kept apart
//! from signer failures because they indicate a contract mismatch with the
//! signer rather than a rejected request.

use thiserror::Error;
use vcdi_dataintegrity::{SignerError, VerifierError};

/// Failure to decode a raw `proof` field into [`Proof`](crate::Proof) values.
#[derive(Error, Debug)]
pub enum ProofDecodeError {
    /// The signer output is not valid JSON.
    #[error("signed document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The `proof` field is neither an object nor an array.
    #[error("proof field must be an object or an array, got {0}")]
    InvalidShape(&'static str),

    /// An entry of a proof array is not an object.
    #[error("proof entry {index} must be an object, got {kind}")]
    EntryNotObject {
        /// Position in the proof array.
        index: usize,
        /// JSON kind that was found.
        kind: &'static str,
    },

    /// A proof object has no string `type` member.
    #[error("proof entry {index} has no string \"type\"")]
    MissingType {
        /// Position in the proof array (0 for a single proof object).
        index: usize,
    },
}

/// Errors from attaching or verifying a Data Integrity proof.
#[derive(Error, Debug)]
pub enum DataIntegrityError {
    /// Verification was requested without options or without a verifier.
    #[error("data integrity proof needs data integrity verifier")]
    MissingVerifier,

    /// The document could not be rendered to its byte form.
    #[error("failed to serialize {operation}: {source}")]
    Serialization {
        /// Which document was being serialized: `credential` or `presentation`.
        operation: &'static str,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// The signer rejected the request.
    #[error("add data integrity proof: {0}")]
    Signer(#[from] SignerError),

    /// The verifier rejected the document.
    #[error("verify data integrity proof: {0}")]
    Verifier(#[from] VerifierError),

    /// The signer output could not be decoded into proofs.
    #[error("decode data integrity proof: {0}")]
    Decode(#[from] ProofDecodeError),
}

impl DataIntegrityError {
    /// Verification was misconfigured and failed before any external call.
    pub fn is_configuration_failure(&self) -> bool {
        matches!(self, Self::MissingVerifier)
    }

    /// The document could not be serialized.
    pub fn is_serialization_failure(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// The signer rejected the request.
    pub fn is_signer_failure(&self) -> bool {
        matches!(self, Self::Signer(_))
    }

    /// The verifier rejected the document.
    pub fn is_verifier_failure(&self) -> bool {
        matches!(self, Self::Verifier(_))
    }

    /// The signer output could not be decoded.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Errors from parsing or building credential and presentation documents.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not a JSON object.
    #[error("{0} must be a JSON object")]
    NotAnObject(&'static str),

    /// The embedded `proof` field could not be decoded.
    #[error("invalid proof: {0}")]
    Proof(#[from] ProofDecodeError),
}
