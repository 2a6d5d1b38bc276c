//! # Error Types
//!
//! Failures of the foundational layer, shared by every crate above it.

use thiserror::Error;

/// Failures of core value construction.
#[derive(Error, Debug)]
pub enum VcdiError {
    /// A value could not be canonicalized.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// A proof time could not be parsed or is out of range.
    #[error("invalid timestamp: {0}")]
    Timestamp(String),
}

/// JCS canonicalization failure.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// The value has no JSON representation.
    #[error("value is not representable as JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Failures of key handling, signing and signature checks.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// The signature does not match the key and hash data.
    #[error("signature verification failed: {0}")]
    VerificationFailed(String),

    /// A key could not be parsed, generated or used.
    #[error("key error: {0}")]
    KeyError(String),

    /// A signature or proof value is malformed.
    #[error("encoding error: {0}")]
    Encoding(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crypto_error_messages() {
        let err = CryptoError::Encoding("proofValue is not base58-btc".into());
        assert_eq!(err.to_string(), "encoding error: proofValue is not base58-btc");
    }

    #[test]
    fn canonicalization_error_lifts_into_core_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\"proof\":").unwrap_err();
        let err = VcdiError::from(CanonicalizationError::from(json_err));
        assert!(matches!(err, VcdiError::Canonicalization(_)));
        assert!(err.to_string().starts_with("canonicalization error"));
    }
}
