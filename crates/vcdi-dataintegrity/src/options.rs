//! # Proof Options
//!
//! The parameter set passed alongside document bytes to a [`ProofSigner`] or
//! [`ProofVerifier`](crate::ProofVerifier).
//!
//! Signing uses every field. Verification only reads `purpose`,
//! `proof_type`, `domain` and `challenge`; the verification method, suite and
//! timestamps are read from the embedded proof itself.
//!
//! [`ProofSigner`]: crate::ProofSigner

use serde::{Deserialize, Serialize};
use vcdi_core::Timestamp;

/// The `type` value of every proof produced or checked by this crate.
pub const DATA_INTEGRITY_PROOF: &str = "DataIntegrityProof";

/// Options controlling proof creation or verification.
///
/// Empty strings mean "not specified": an empty `domain` or `challenge` is
/// left out of a created proof and does not constrain verification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofOptions {
    /// Proof purpose, e.g. `assertionMethod`.
    pub purpose: String,
    /// DID URL of the signing key, e.g. `did:example:1#key-1`.
    #[serde(rename = "verificationMethod")]
    pub verification_method_id: String,
    /// Proof type marker; always [`DATA_INTEGRITY_PROOF`] from this workspace.
    pub proof_type: String,
    /// Cryptosuite identifier, e.g. `ecdsa-2019`.
    #[serde(rename = "cryptosuite")]
    pub suite_type: String,
    /// Security domain the proof is bound to.
    #[serde(default)]
    pub domain: String,
    /// Replay-protection challenge.
    #[serde(default)]
    pub challenge: String,
    /// Creation time; the signer uses the current time when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// Expiry time; absent means the proof does not expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<Timestamp>,
}

impl ProofOptions {
    /// Whether the options name the Data Integrity proof type.
    pub fn is_data_integrity(&self) -> bool {
        self.proof_type == DATA_INTEGRITY_PROOF
    }
}
