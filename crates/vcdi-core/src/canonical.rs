//! # Canonical Form
//!
//! Data Integrity proofs over JSON documents hash the RFC 8785 (JCS) form of
//! two objects: the proof configuration and the document without its proof.
//! [`CanonicalBytes`] is the only type in the workspace that holds such
//! bytes, and it can only be built by running a value through `serde_jcs`.
//!
//! ## Security Invariant
//!
//! The inner buffer is private. A signer and a verifier that both go through
//! this type hash identical bytes for the same JSON, whatever member order or
//! whitespace the document had in transit.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// JCS-canonical JSON bytes.
///
/// # Invariants
///
/// - Built only by [`CanonicalBytes::new`] or [`CanonicalBytes::from_value`].
/// - Object members sorted by UTF-16 code units, no insignificant whitespace.
/// - Always valid UTF-8 JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Canonicalize any serializable value.
    ///
    /// # Errors
    ///
    /// `CanonicalizationError::SerializationFailed` if the value has no JSON
    /// representation (e.g. a map with non-string keys).
    pub fn new(value: &impl Serialize) -> Result<Self, CanonicalizationError> {
        Ok(Self(serde_jcs::to_vec(value)?))
    }

    /// Canonicalize an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self, CanonicalizationError> {
        Self::new(value)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
