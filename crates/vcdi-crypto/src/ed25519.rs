//! # Ed25519 Keys
//!
//! Key material for the `eddsa-2022` cryptosuite. Public keys travel in
//! Multikey form: the `ed25519-pub` multicodec prefix (`0xed 0x01`) followed
//! by the 32 key bytes, base58-btc multibase encoded (`z6Mk…`).

use ed25519_dalek::{Signer, Verifier};
use multibase::Base;
use vcdi_core::{CryptoError, SigningInput};

/// Length in bytes of an Ed25519 signature.
pub const SIGNATURE_LENGTH: usize = 64;

/// Multicodec prefix of an Ed25519 public key.
const MULTICODEC_ED25519_PUB: [u8; 2] = [0xed, 0x01];

/// Raw 32-byte Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey([u8; 32]);

impl Ed25519PublicKey {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Encode as a Multikey `publicKeyMultibase` value.
    pub fn to_multibase(&self) -> String {
        let mut buf = Vec::with_capacity(MULTICODEC_ED25519_PUB.len() + self.0.len());
        buf.extend_from_slice(&MULTICODEC_ED25519_PUB);
        buf.extend_from_slice(&self.0);
        multibase::encode(Base::Base58Btc, buf)
    }

    /// Decode a Multikey `publicKeyMultibase` value.
    ///
    /// # Errors
    ///
    /// `CryptoError::KeyError` if the value is not multibase, lacks the
    /// Ed25519 multicodec prefix, or does not hold exactly 32 key bytes.
    pub fn from_multibase(value: &str) -> Result<Self, CryptoError> {
        let (_, decoded) = multibase::decode(value)
            .map_err(|e| CryptoError::KeyError(format!("invalid multibase key {value:?}: {e}")))?;
        let key = decoded
            .strip_prefix(&MULTICODEC_ED25519_PUB[..])
            .ok_or_else(|| CryptoError::KeyError("missing ed25519-pub multicodec prefix".into()))?;
        let key: [u8; 32] = key.try_into().map_err(|_| {
            CryptoError::KeyError(format!("Ed25519 public key must be 32 bytes, got {}", key.len()))
        })?;
        Ok(Self(key))
    }

    /// Verify a 64-byte signature over Data Integrity hash data.
    pub fn verify(&self, data: &SigningInput, signature: &[u8]) -> Result<(), CryptoError> {
        let key = ed25519_dalek::VerifyingKey::from_bytes(&self.0)
            .map_err(|e| CryptoError::KeyError(format!("not an Ed25519 point: {e}")))?;
        let signature = ed25519_dalek::Signature::from_slice(signature).map_err(|_| {
            CryptoError::Encoding(format!(
                "Ed25519 signature is {} bytes, expected {SIGNATURE_LENGTH}",
                signature.len()
            ))
        })?;
        key.verify(data.as_bytes(), &signature)
            .map_err(|e| CryptoError::VerificationFailed(format!("Ed25519: {e}")))
    }
}

impl std::fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Ed25519PublicKey").field(&self.to_multibase()).finish()
    }
}

/// Ed25519 signing key. Not serializable; `Debug` prints no key material.
pub struct Ed25519KeyPair {
    signing_key: ed25519_dalek::SigningKey,
}

impl Ed25519KeyPair {
    /// A fresh key from the operating system RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: ed25519_dalek::SigningKey::generate(&mut rand::rngs::OsRng),
        }
    }

    /// Derive a key pair from a 32-byte secret seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: ed25519_dalek::SigningKey::from_bytes(seed),
        }
    }

    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign Data Integrity hash data.
    pub fn sign(&self, data: &SigningInput) -> [u8; SIGNATURE_LENGTH] {
        self.signing_key.sign(data.as_bytes()).to_bytes()
    }
}

impl std::fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519KeyPair(<private>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcdi_core::CanonicalBytes;

    fn hash_data(document: serde_json::Value) -> SigningInput {
        let config =
            CanonicalBytes::new(&serde_json::json!({"cryptosuite": "eddsa-2022"})).unwrap();
        SigningInput::from_parts(&config, &CanonicalBytes::new(&document).unwrap())
    }

    #[test]
    fn signature_verifies_under_own_key() {
        let key = Ed25519KeyPair::generate();
        let data = hash_data(serde_json::json!({"issuer": "did:example:1"}));
        key.public_key().verify(&data, &key.sign(&data)).unwrap();
    }

    #[test]
    fn other_key_rejects() {
        let data = hash_data(serde_json::json!({"issuer": "did:example:1"}));
        let signature = Ed25519KeyPair::generate().sign(&data);
        let result = Ed25519KeyPair::generate().public_key().verify(&data, &signature);
        assert!(matches!(result, Err(CryptoError::VerificationFailed(_))));
    }

    #[test]
    fn changed_document_rejects() {
        let key = Ed25519KeyPair::from_seed(&[9u8; 32]);
        let signature = key.sign(&hash_data(serde_json::json!({"n": 1})));
        let result = key.public_key().verify(&hash_data(serde_json::json!({"n": 2})), &signature);
        assert!(matches!(result, Err(CryptoError::VerificationFailed(_))));
    }

    #[test]
    fn short_signature_is_encoding_error() {
        let key = Ed25519KeyPair::from_seed(&[9u8; 32]);
        let data = hash_data(serde_json::json!({}));
        let signature = key.sign(&data);
        let result = key.public_key().verify(&data, &signature[..SIGNATURE_LENGTH - 1]);
        assert!(matches!(result, Err(CryptoError::Encoding(_))));
    }

    #[test]
    fn seeded_keys_sign_deterministically() {
        let data = hash_data(serde_json::json!({"id": "urn:uuid:1"}));
        let a = Ed25519KeyPair::from_seed(&[1u8; 32]);
        let b = Ed25519KeyPair::from_seed(&[1u8; 32]);
        assert_eq!(a.public_key(), b.public_key());
        assert_eq!(a.sign(&data), b.sign(&data));
    }

    #[test]
    fn multikey_encoding() {
        let pk = Ed25519KeyPair::from_seed(&[2u8; 32]).public_key();
        let encoded = pk.to_multibase();
        assert!(encoded.starts_with("z6Mk"), "{encoded}");
        assert_eq!(Ed25519PublicKey::from_multibase(&encoded).unwrap(), pk);
    }

    #[test]
    fn multikey_rejects_wrong_codec_or_length() {
        let p256_codec = multibase::encode(Base::Base58Btc, [0x80, 0x24, 1, 2, 3]);
        assert!(Ed25519PublicKey::from_multibase(&p256_codec).is_err());
        let short = multibase::encode(Base::Base58Btc, [0xed, 0x01, 1, 2, 3]);
        assert!(Ed25519PublicKey::from_multibase(&short).is_err());
        assert!(Ed25519PublicKey::from_multibase("not multibase").is_err());
    }

    #[test]
    fn key_pair_debug_is_redacted() {
        let key = Ed25519KeyPair::from_seed(&[3u8; 32]);
        assert_eq!(format!("{key:?}"), "Ed25519KeyPair(<private>)");
    }
}
