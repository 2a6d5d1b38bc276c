//! # Digests and Signing Input
//!
//! SHA-256 digests over [`CanonicalBytes`] and the [`SigningInput`] newtype
//! that carries Data Integrity hash data to a key pair.
//!
//! For the JCS cryptosuites the hash data is the SHA-256 of the canonical
//! proof configuration followed by the SHA-256 of the canonical unsecured
//! document (64 bytes total).

use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// A 32-byte SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Compute a SHA-256 digest from canonical bytes.
///
/// Accepts only `&CanonicalBytes`, so no digest can be taken over a
/// non-canonical serialization.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    ContentDigest(Sha256::digest(data.as_bytes()).into())
}

/// Bytes handed to a key pair for signing or verification.
///
/// The inner field is private; the only constructor combines two canonical
/// forms, so a signature can never be computed over raw document bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningInput(Vec<u8>);

impl SigningInput {
    /// Build hash data from the canonical proof configuration and the
    /// canonical unsecured document.
    pub fn from_parts(proof_config: &CanonicalBytes, document: &CanonicalBytes) -> Self {
        let mut bytes = Vec::with_capacity(64);
        bytes.extend_from_slice(sha256_digest(proof_config).as_bytes());
        bytes.extend_from_slice(sha256_digest(document).as_bytes());
        Self(bytes)
    }

    /// Access the hash data.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
