//! # Verification Method Resolution
//!
//! The verifier reads the verification method id from the proof and asks a
//! [`VerificationMethodResolver`] for the matching public key. DID
//! resolution proper lives behind this trait; the workspace ships an
//! in-memory [`StaticKeyResolver`] and a blanket impl for closures.

use std::collections::BTreeMap;

use vcdi_crypto::PublicKey;

/// Resolves a verification method id (DID URL) to a public key.
pub trait VerificationMethodResolver: Send + Sync {
    /// Resolve `verification_method`, returning a failure reason on error.
    fn resolve(&self, verification_method: &str) -> Result<PublicKey, String>;
}

impl<F> VerificationMethodResolver for F
where
    F: Fn(&str) -> Result<PublicKey, String> + Send + Sync,
{
    fn resolve(&self, verification_method: &str) -> Result<PublicKey, String> {
        self(verification_method)
    }
}

/// A fixed map of verification method ids to public keys.
#[derive(Debug, Clone, Default)]
pub struct StaticKeyResolver {
    keys: BTreeMap<String, PublicKey>,
}

impl StaticKeyResolver {
    /// An empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key, replacing any previous key for the same id.
    pub fn insert(&mut self, verification_method: impl Into<String>, key: PublicKey) {
        self.keys.insert(verification_method.into(), key);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_key(mut self, verification_method: impl Into<String>, key: PublicKey) -> Self {
        self.insert(verification_method, key);
        self
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no keys are registered.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl VerificationMethodResolver for StaticKeyResolver {
    fn resolve(&self, verification_method: &str) -> Result<PublicKey, String> {
        self.keys
            .get(verification_method)
            .cloned()
            .ok_or_else(|| format!("unknown verification method: {verification_method}"))
    }
}
