//! # P-256 ECDSA Signing and Verification
//!
//! Key material for the `ecdsa-2019` cryptosuite: ECDSA over NIST P-256 with
//! SHA-256, fixed-size `r || s` signatures (64 bytes). Public keys are held
//! as compressed SEC1 points (33 bytes).

use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use vcdi_core::{CryptoError, SigningInput};

/// Length in bytes of a compressed SEC1 P-256 point.
pub const COMPRESSED_POINT_LENGTH: usize = 33;

/// A P-256 public key in compressed SEC1 form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct P256PublicKey(Vec<u8>);

/// A P-256 key pair for signing operations.
pub struct P256KeyPair {
    signing_key: SigningKey,
}

impl P256PublicKey {
    /// Parse a SEC1-encoded point (compressed or uncompressed).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let vk = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| CryptoError::KeyError(format!("invalid P-256 public key: {e}")))?;
        Ok(Self::from_verifying_key(&vk))
    }

    fn from_verifying_key(vk: &VerifyingKey) -> Self {
        Self(vk.to_encoded_point(true).as_bytes().to_vec())
    }

    /// The compressed SEC1 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Verify a 64-byte `r || s` signature over the given hash data.
    pub fn verify(&self, data: &SigningInput, signature: &[u8]) -> Result<(), CryptoError> {
        let vk = VerifyingKey::from_sec1_bytes(&self.0)
            .map_err(|e| CryptoError::KeyError(format!("invalid P-256 public key: {e}")))?;
        let sig = Signature::from_slice(signature).map_err(|e| {
            CryptoError::Encoding(format!(
                "malformed P-256 signature ({} bytes): {e}",
                signature.len()
            ))
        })?;
        vk.verify(data.as_bytes(), &sig)
            .map_err(|e| CryptoError::VerificationFailed(format!("P-256: {e}")))
    }
}

impl std::fmt::Debug for P256PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "P256PublicKey({prefix}...)")
    }
}

impl P256KeyPair {
    /// Generate a new random P-256 key pair.
    pub fn generate() -> Self {
        let mut csprng = rand::rngs::OsRng;
        Self {
            signing_key: SigningKey::random(&mut csprng),
        }
    }

    /// Create a key pair from a 32-byte big-endian secret scalar.
    pub fn from_secret_bytes(secret: &[u8; 32]) -> Result<Self, CryptoError> {
        let signing_key = SigningKey::from_slice(secret)
            .map_err(|e| CryptoError::KeyError(format!("invalid P-256 secret scalar: {e}")))?;
        Ok(Self { signing_key })
    }

    /// Get the public key of this key pair.
    pub fn public_key(&self) -> P256PublicKey {
        P256PublicKey::from_verifying_key(self.signing_key.verifying_key())
    }

    /// Sign Data Integrity hash data.
    pub fn sign(&self, data: &SigningInput) -> Vec<u8> {
        let sig: Signature = self.signing_key.sign(data.as_bytes());
        sig.to_bytes().to_vec()
    }
}

impl std::fmt::Debug for P256KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P256KeyPair(<private>)")
    }
}
