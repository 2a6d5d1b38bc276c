//! # vcdi-vc: Data Integrity Proofs on Credentials and Presentations
//!
//! Attaches and verifies Data Integrity proofs on W3C verifiable credentials
//! and presentations. The cryptography lives behind the
//! [`ProofSigner`](vcdi_dataintegrity::ProofSigner) and
//! [`ProofVerifier`](vcdi_dataintegrity::ProofVerifier) capabilities; this
//! crate owns the orchestration around them:
//!
//! - **Defaulting** ([`ProofContext`], [`VerificationOptions`]): signing and
//!   verification apply the same purpose default, so the two sides agree
//!   without the caller knowing it.
//! - **Signing** ([`add_data_integrity_proof`]): serialize, sign, and decode
//!   the signer's output back into [`Proof`] values.
//! - **Verification** ([`verify_data_integrity_proof`]): fail closed when no
//!   verifier is configured, otherwise delegate.
//! - **Entry points** ([`Credential`], [`Presentation`]): bind the decoded
//!   proofs back onto the document.
//!
//! ## Failure Classes
//!
//! Every operation returns [`DataIntegrityError`]. Configuration, signer,
//! verifier and decode failures are separate variants, and a failed attach
//! never leaves a partially updated document.

pub mod context;
pub mod credential;
pub mod data_integrity;
pub mod error;
pub mod presentation;
pub mod proof;
pub mod value;

// Re-export primary types.
pub use context::{
    resolve_purpose, ProofContext, ResolvedProofContext, VerificationOptions, ASSERTION_METHOD,
};
pub use credential::{
    Credential, CredentialContents, CREDENTIALS_V1_CONTEXT, VERIFIABLE_CREDENTIAL_TYPE,
};
pub use data_integrity::{add_data_integrity_proof, verify_data_integrity_proof};
pub use error::{CredentialError, DataIntegrityError, ProofDecodeError};
pub use presentation::{Presentation, VERIFIABLE_PRESENTATION_TYPE};
pub use proof::{parse_ld_proof, proofs_to_raw, Proof};
pub use value::OneOrMany;
