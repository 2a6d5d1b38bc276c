//! # Signer and Verifier Errors
//!
//! One variant per rejection reason so callers can tell a bad key from a
//! malformed document or a purpose mismatch without string matching.

use thiserror::Error;
use vcdi_core::{CanonicalizationError, CryptoError, Timestamp};

/// Errors from [`ProofSigner::add_proof`](crate::ProofSigner::add_proof).
#[derive(Error, Debug)]
pub enum SignerError {
    /// The options requested a proof type other than `DataIntegrityProof`.
    #[error("unsupported proof type: {0:?}")]
    UnsupportedProofType(String),

    /// The cryptosuite identifier is not supported.
    #[error("unsupported cryptosuite: {0:?}")]
    UnsupportedSuite(String),

    /// No signing key is registered for the verification method.
    #[error("no signing key for verification method {0:?}")]
    UnknownVerificationMethod(String),

    /// The registered key cannot produce signatures for the suite.
    #[error("key for {verification_method} is {algorithm}, cryptosuite {suite} needs {expected}")]
    KeyMismatch {
        /// Verification method the key was registered under.
        verification_method: String,
        /// Requested cryptosuite.
        suite: String,
        /// Algorithm of the registered key.
        algorithm: String,
        /// Algorithm the suite requires.
        expected: String,
    },

    /// The input bytes are not a JSON object.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// Canonicalization of the proof configuration or document failed.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// The signed document could not be serialized.
    #[error("failed to serialize signed document: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from [`ProofVerifier::verify_proof`](crate::ProofVerifier::verify_proof).
#[derive(Error, Debug)]
pub enum VerifierError {
    /// The options requested a proof type other than `DataIntegrityProof`.
    #[error("unsupported proof type: {0:?}")]
    UnsupportedProofType(String),

    /// The input bytes are not a JSON object.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// The document carries no `DataIntegrityProof`.
    #[error("document has no data integrity proof")]
    MissingProof,

    /// A proof entry is structurally invalid.
    #[error("malformed proof: {0}")]
    MalformedProof(String),

    /// The proof names a cryptosuite that is not supported.
    #[error("unsupported cryptosuite: {0:?}")]
    UnsupportedSuite(String),

    /// The proof purpose differs from the expected purpose.
    #[error("proof purpose mismatch: expected {expected:?}, found {found:?}")]
    PurposeMismatch {
        /// Purpose requested by the verifier options.
        expected: String,
        /// Purpose recorded in the proof.
        found: String,
    },

    /// The proof is not bound to the expected domain.
    #[error("proof domain mismatch: expected {expected:?}, found {found:?}")]
    DomainMismatch {
        /// Domain requested by the verifier options.
        expected: String,
        /// Domain(s) recorded in the proof.
        found: String,
    },

    /// The proof challenge differs from the expected challenge.
    #[error("proof challenge mismatch: expected {expected:?}, found {found:?}")]
    ChallengeMismatch {
        /// Challenge requested by the verifier options.
        expected: String,
        /// Challenge recorded in the proof.
        found: String,
    },

    /// The proof `expires` time has passed.
    #[error("proof expired at {0}")]
    Expired(Timestamp),

    /// The verification method could not be resolved to a public key.
    #[error("cannot resolve verification method {verification_method:?}: {reason}")]
    KeyResolution {
        /// Verification method named in the proof.
        verification_method: String,
        /// Resolver failure reason.
        reason: String,
    },

    /// The resolved key does not match the proof's cryptosuite.
    #[error("key for {verification_method} is {algorithm}, cryptosuite {suite} needs {expected}")]
    KeyMismatch {
        /// Verification method named in the proof.
        verification_method: String,
        /// Cryptosuite named in the proof.
        suite: String,
        /// Algorithm of the resolved key.
        algorithm: String,
        /// Algorithm the suite requires.
        expected: String,
    },

    /// The signature does not verify.
    #[error("invalid signature: {0}")]
    InvalidSignature(#[from] CryptoError),

    /// Canonicalization of the proof configuration or document failed.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}
