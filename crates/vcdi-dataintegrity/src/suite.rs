//! # Cryptosuites
//!
//! Both suites canonicalize with JCS and hash with SHA-256; they differ only
//! in the signature algorithm.
//!
//! | identifier   | key       | signature            |
//! |--------------|-----------|----------------------|
//! | `ecdsa-2019` | P-256     | 64-byte `r \|\| s`   |
//! | `eddsa-2022` | Ed25519   | 64-byte Ed25519      |

use serde_json::{Map, Value};
use vcdi_core::{CanonicalBytes, CanonicalizationError, SigningInput};
use vcdi_crypto::KeyAlgorithm;

/// A supported Data Integrity cryptosuite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CryptoSuite {
    /// ECDSA over P-256 with JCS canonicalization.
    #[cfg(feature = "ecdsa")]
    Ecdsa2019,
    /// EdDSA over Ed25519 with JCS canonicalization.
    Eddsa2022,
}

impl CryptoSuite {
    /// Identifier for the ECDSA suite.
    pub const ECDSA_2019: &'static str = "ecdsa-2019";
    /// Identifier for the EdDSA suite.
    pub const EDDSA_2022: &'static str = "eddsa-2022";

    /// Look up a suite by its `cryptosuite` identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            #[cfg(feature = "ecdsa")]
            Self::ECDSA_2019 => Some(Self::Ecdsa2019),
            Self::EDDSA_2022 => Some(Self::Eddsa2022),
            _ => None,
        }
    }

    /// The `cryptosuite` identifier.
    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "ecdsa")]
            Self::Ecdsa2019 => Self::ECDSA_2019,
            Self::Eddsa2022 => Self::EDDSA_2022,
        }
    }

    /// The key algorithm this suite signs with.
    pub fn key_algorithm(&self) -> KeyAlgorithm {
        match self {
            #[cfg(feature = "ecdsa")]
            Self::Ecdsa2019 => KeyAlgorithm::P256,
            Self::Eddsa2022 => KeyAlgorithm::Ed25519,
        }
    }

    /// Compute the hash data for a proof configuration and unsecured document.
    pub fn hash_data(
        &self,
        proof_config: &Map<String, Value>,
        unsecured_document: &Map<String, Value>,
    ) -> Result<SigningInput, CanonicalizationError> {
        let config = CanonicalBytes::new(proof_config)?;
        let document = CanonicalBytes::new(unsecured_document)?;
        Ok(SigningInput::from_parts(&config, &document))
    }
}

impl std::fmt::Display for CryptoSuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
