//! Algorithm-agnostic key pair and public key wrappers.

use vcdi_core::{CryptoError, SigningInput};

use crate::ed25519::{Ed25519KeyPair, Ed25519PublicKey};
#[cfg(feature = "ecdsa")]
use crate::ecdsa_p256::{P256KeyPair, P256PublicKey};

/// Signature algorithm of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    /// Ed25519 (EdDSA over Curve25519).
    Ed25519,
    /// ECDSA over NIST P-256 with SHA-256.
    P256,
}

impl std::fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyAlgorithm::Ed25519 => f.write_str("Ed25519"),
            KeyAlgorithm::P256 => f.write_str("P-256"),
        }
    }
}

/// A private key of any supported algorithm.
#[derive(Debug)]
pub enum KeyPair {
    /// Ed25519 key pair.
    Ed25519(Ed25519KeyPair),
    /// P-256 key pair.
    #[cfg(feature = "ecdsa")]
    P256(P256KeyPair),
}

impl KeyPair {
    /// The algorithm of this key pair.
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            KeyPair::Ed25519(_) => KeyAlgorithm::Ed25519,
            #[cfg(feature = "ecdsa")]
            KeyPair::P256(_) => KeyAlgorithm::P256,
        }
    }

    /// The matching public key.
    pub fn public_key(&self) -> PublicKey {
        match self {
            KeyPair::Ed25519(kp) => PublicKey::Ed25519(kp.public_key()),
            #[cfg(feature = "ecdsa")]
            KeyPair::P256(kp) => PublicKey::P256(kp.public_key()),
        }
    }

    /// Sign Data Integrity hash data, returning raw signature bytes.
    pub fn sign(&self, data: &SigningInput) -> Vec<u8> {
        match self {
            KeyPair::Ed25519(kp) => kp.sign(data).to_vec(),
            #[cfg(feature = "ecdsa")]
            KeyPair::P256(kp) => kp.sign(data),
        }
    }
}

impl From<Ed25519KeyPair> for KeyPair {
    fn from(kp: Ed25519KeyPair) -> Self {
        KeyPair::Ed25519(kp)
    }
}

#[cfg(feature = "ecdsa")]
impl From<P256KeyPair> for KeyPair {
    fn from(kp: P256KeyPair) -> Self {
        KeyPair::P256(kp)
    }
}

/// A public key of any supported algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    /// Ed25519 public key.
    Ed25519(Ed25519PublicKey),
    /// P-256 public key.
    #[cfg(feature = "ecdsa")]
    P256(P256PublicKey),
}

impl PublicKey {
    /// The algorithm of this public key.
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            PublicKey::Ed25519(_) => KeyAlgorithm::Ed25519,
            #[cfg(feature = "ecdsa")]
            PublicKey::P256(_) => KeyAlgorithm::P256,
        }
    }

    /// Verify raw signature bytes over the given hash data.
    pub fn verify(&self, data: &SigningInput, signature: &[u8]) -> Result<(), CryptoError> {
        match self {
            PublicKey::Ed25519(pk) => pk.verify(data, signature),
            #[cfg(feature = "ecdsa")]
            PublicKey::P256(pk) => pk.verify(data, signature),
        }
    }
}

impl From<Ed25519PublicKey> for PublicKey {
    fn from(pk: Ed25519PublicKey) -> Self {
        PublicKey::Ed25519(pk)
    }
}

#[cfg(feature = "ecdsa")]
impl From<P256PublicKey> for PublicKey {
    fn from(pk: P256PublicKey) -> Self {
        PublicKey::P256(pk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcdi_core::CanonicalBytes;

    fn input() -> SigningInput {
        let cb = CanonicalBytes::new(&serde_json::json!({"k": "v"})).unwrap();
        SigningInput::from_parts(&cb, &cb)
    }

    #[test]
    fn ed25519_through_wrapper() {
        let kp = KeyPair::from(Ed25519KeyPair::generate());
        assert_eq!(kp.algorithm(), KeyAlgorithm::Ed25519);
        let sig = kp.sign(&input());
        assert_eq!(kp.public_key().algorithm(), KeyAlgorithm::Ed25519);
        kp.public_key().verify(&input(), &sig).unwrap();
    }

    #[cfg(feature = "ecdsa")]
    #[test]
    fn cross_algorithm_verification_fails() {
        let ed = KeyPair::from(Ed25519KeyPair::generate());
        let ec = KeyPair::from(P256KeyPair::generate());
        let sig = ed.sign(&input());
        assert!(ec.public_key().verify(&input(), &sig).is_err());
    }

    #[test]
    fn algorithm_display() {
        assert_eq!(KeyAlgorithm::P256.to_string(), "P-256");
        assert_eq!(KeyAlgorithm::Ed25519.to_string(), "Ed25519");
    }
}
