//! # Proof Contexts and Option Defaulting
//!
//! [`ProofContext`] describes a proof to create and [`VerificationOptions`]
//! describes the proofs to accept. Both are defaulted by the same rules
//! before use, so a proof signed with default options verifies with default
//! options:
//!
//! - an empty purpose becomes [`ASSERTION_METHOD`];
//! - an absent `created` becomes the current time at the moment of signing;
//! - an absent `expires` stays absent (the proof does not expire);
//! - `domain` and `challenge` pass through unchanged.
//!
//! Defaulting never mutates the caller's value. [`ProofContext::resolve`]
//! returns a new [`ResolvedProofContext`], so one context may be shared by
//! concurrent signing calls.

use std::fmt;
use std::sync::Arc;

use vcdi_core::Timestamp;
use vcdi_dataintegrity::{ProofOptions, ProofVerifier, DATA_INTEGRITY_PROOF};

/// Default proof purpose.
pub const ASSERTION_METHOD: &str = "assertionMethod";

/// Apply the purpose default.
pub fn resolve_purpose(purpose: &str) -> &str {
    if purpose.is_empty() {
        ASSERTION_METHOD
    } else {
        purpose
    }
}

/// Caller-supplied description of a proof to attach.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProofContext {
    /// Verification method (DID URL) of the signing key.
    pub signing_key_id: String,
    /// Proof purpose; empty means [`ASSERTION_METHOD`].
    pub proof_purpose: String,
    /// Cryptosuite identifier, e.g. `ecdsa-2019`.
    pub crypto_suite: String,
    /// Creation time; `None` means the time of signing.
    pub created: Option<Timestamp>,
    /// Expiry time; `None` means the proof does not expire.
    pub expires: Option<Timestamp>,
    /// Security domain; empty means unbound.
    pub domain: String,
    /// Challenge; empty means none.
    pub challenge: String,
}

impl ProofContext {
    /// A context for the given key and cryptosuite with every other field
    /// left to its default.
    pub fn new(signing_key_id: impl Into<String>, crypto_suite: impl Into<String>) -> Self {
        Self {
            signing_key_id: signing_key_id.into(),
            crypto_suite: crypto_suite.into(),
            ..Default::default()
        }
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.proof_purpose = purpose.into();
        self
    }

    pub fn with_created(mut self, created: Timestamp) -> Self {
        self.created = Some(created);
        self
    }

    pub fn with_expires(mut self, expires: Timestamp) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_challenge(mut self, challenge: impl Into<String>) -> Self {
        self.challenge = challenge.into();
        self
    }

    /// Apply defaults using the current time.
    pub fn resolve(&self) -> ResolvedProofContext {
        self.resolve_at(Timestamp::now())
    }

    /// Apply defaults with `now` standing in for the current time.
    pub fn resolve_at(&self, now: Timestamp) -> ResolvedProofContext {
        ResolvedProofContext {
            signing_key_id: self.signing_key_id.clone(),
            proof_purpose: resolve_purpose(&self.proof_purpose).to_string(),
            crypto_suite: self.crypto_suite.clone(),
            created: self.created.unwrap_or(now),
            expires: self.expires,
            domain: self.domain.clone(),
            challenge: self.challenge.clone(),
        }
    }
}

/// A [`ProofContext`] with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProofContext {
    pub signing_key_id: String,
    /// Never empty.
    pub proof_purpose: String,
    pub crypto_suite: String,
    pub created: Timestamp,
    pub expires: Option<Timestamp>,
    pub domain: String,
    pub challenge: String,
}

impl ResolvedProofContext {
    /// Signer options for this context.
    pub fn to_proof_options(&self) -> ProofOptions {
        ProofOptions {
            purpose: self.proof_purpose.clone(),
            verification_method_id: self.signing_key_id.clone(),
            proof_type: DATA_INTEGRITY_PROOF.to_string(),
            suite_type: self.crypto_suite.clone(),
            domain: self.domain.clone(),
            challenge: self.challenge.clone(),
            created: Some(self.created),
            expires: self.expires,
        }
    }
}

/// Caller-supplied verification parameters.
///
/// Verification fails closed when `verifier` is `None`. Key, suite and
/// timestamps are not part of the options; the verifier reads them from the
/// embedded proof.
#[derive(Clone, Default)]
pub struct VerificationOptions {
    /// The verifier capability.
    pub verifier: Option<Arc<dyn ProofVerifier>>,
    /// Expected proof purpose; empty means [`ASSERTION_METHOD`].
    pub purpose: String,
    /// Expected domain; empty means unconstrained.
    pub domain: String,
    /// Expected challenge; empty means unconstrained.
    pub challenge: String,
}

impl VerificationOptions {
    /// Options using `verifier` with every other field left to its default.
    pub fn new(verifier: Arc<dyn ProofVerifier>) -> Self {
        Self {
            verifier: Some(verifier),
            ..Default::default()
        }
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_challenge(mut self, challenge: impl Into<String>) -> Self {
        self.challenge = challenge.into();
        self
    }

    /// The purpose with the default applied.
    pub fn resolved_purpose(&self) -> &str {
        resolve_purpose(&self.purpose)
    }

    /// Verifier options for these parameters.
    pub fn to_proof_options(&self) -> ProofOptions {
        ProofOptions {
            purpose: self.resolved_purpose().to_string(),
            proof_type: DATA_INTEGRITY_PROOF.to_string(),
            domain: self.domain.clone(),
            challenge: self.challenge.clone(),
            ..Default::default()
        }
    }
}

impl fmt::Debug for VerificationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationOptions")
            .field("verifier", &self.verifier.as_ref().map(|_| "<verifier>"))
            .field("purpose", &self.purpose)
            .field("domain", &self.domain)
            .field("challenge", &self.challenge)
            .finish()
    }
}
