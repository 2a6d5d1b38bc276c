//! # vcdi-dataintegrity: Signer and Verifier Capabilities
//!
//! The cryptographic side of a Data Integrity proof. Callers hand over a
//! serialized JSON document plus [`ProofOptions`]; the signer returns the
//! document with a `proof` embedded, the verifier checks the embedded proofs.
//!
//! - [`ProofSigner`] / [`ProofVerifier`] are the capability traits the
//!   orchestration layer in `vcdi-vc` consumes.
//! - [`DataIntegritySigner`] / [`DataIntegrityVerifier`] implement them for
//!   the JCS cryptosuites in [`CryptoSuite`].
//! - [`VerificationMethodResolver`] maps a verification method id to a
//!   public key; [`StaticKeyResolver`] is the in-memory implementation.
//!
//! ## Hash Data
//!
//! `SHA-256(JCS(proof configuration)) || SHA-256(JCS(document without proof))`.
//! The proof configuration is the proof object minus `proofValue`.

pub mod document;
pub mod error;
pub mod options;
pub mod resolver;
pub mod signer;
pub mod suite;
pub mod verifier;

pub use error::{SignerError, VerifierError};
pub use options::{ProofOptions, DATA_INTEGRITY_PROOF};
pub use resolver::{StaticKeyResolver, VerificationMethodResolver};
pub use signer::{DataIntegritySigner, ProofSigner};
pub use suite::CryptoSuite;
pub use verifier::{DataIntegrityVerifier, ProofVerifier};
