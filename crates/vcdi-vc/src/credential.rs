//! # Verifiable Credentials
//!
//! A [`Credential`] keeps two views of the same document: the raw JSON object
//! exactly as parsed or created, and the decoded proof collection. The raw
//! object is what gets serialized and signed, so members this crate does not
//! model survive signing untouched.
//!
//! ## Proof Attachment
//!
//! [`Credential::add_data_integrity_proof`] replaces the proof collection
//! with the proofs decoded from the signer's output, and writes them to the
//! raw `proof` member only when there is at least one. A signer output with
//! no proofs therefore leaves the raw member as it was. On error the
//! credential is left unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use vcdi_core::Timestamp;
use vcdi_dataintegrity::document::PROOF_KEY;
use vcdi_dataintegrity::ProofSigner;

use crate::context::{ProofContext, VerificationOptions};
use crate::data_integrity;
use crate::error::{CredentialError, DataIntegrityError};
use crate::proof::{parse_ld_proof, proofs_to_raw, Proof};
use crate::value::OneOrMany;

/// The W3C VC Data Model v1 context.
pub const CREDENTIALS_V1_CONTEXT: &str = "https://www.w3.org/2018/credentials/v1";

/// The base credential type.
pub const VERIFIABLE_CREDENTIAL_TYPE: &str = "VerifiableCredential";

/// The unsigned members of a credential.
///
/// Members without a dedicated field are kept in `custom_fields`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CredentialContents {
    /// JSON-LD context.
    #[serde(rename = "@context", default, skip_serializing_if = "OneOrMany::is_empty")]
    pub context: OneOrMany<Value>,

    /// Credential identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Credential type(s).
    #[serde(rename = "type", default, skip_serializing_if = "OneOrMany::is_empty")]
    pub types: OneOrMany<String>,

    /// Issuer DID or issuer object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Value>,

    /// Issuance time.
    #[serde(rename = "issuanceDate", default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<Timestamp>,

    /// Expiration time.
    #[serde(rename = "expirationDate", default, skip_serializing_if = "Option::is_none")]
    pub expired: Option<Timestamp>,

    /// Credential subject(s).
    #[serde(rename = "credentialSubject", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Value>,

    /// Any other members.
    #[serde(flatten)]
    pub custom_fields: Map<String, Value>,
}

/// A verifiable credential.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    raw: Map<String, Value>,
    contents: CredentialContents,
    proofs: Vec<Proof>,
}

impl Credential {
    /// Build an unsigned credential from its contents.
    pub fn create(contents: CredentialContents) -> Result<Self, CredentialError> {
        match serde_json::to_value(&contents)? {
            Value::Object(raw) => Ok(Self {
                raw,
                contents,
                proofs: Vec::new(),
            }),
            _ => Err(CredentialError::NotAnObject("credential")),
        }
    }

    /// Parse a serialized credential, decoding any embedded proofs.
    pub fn parse(bytes: &[u8]) -> Result<Self, CredentialError> {
        let raw = match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(raw) => raw,
            _ => return Err(CredentialError::NotAnObject("credential")),
        };
        let proofs = parse_ld_proof(raw.get(PROOF_KEY))?;

        let mut unsigned = raw.clone();
        unsigned.remove(PROOF_KEY);
        let contents = serde_json::from_value(Value::Object(unsigned))?;

        Ok(Self { raw, contents, proofs })
    }

    /// Serialize the raw document, proofs included.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.raw)
    }

    /// The unsigned members.
    pub fn contents(&self) -> &CredentialContents {
        &self.contents
    }

    /// The decoded proofs, in document order.
    pub fn proofs(&self) -> &[Proof] {
        &self.proofs
    }

    /// The raw JSON object.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Sign the credential and attach the resulting proofs.
    pub fn add_data_integrity_proof(
        &mut self,
        context: &ProofContext,
        signer: &dyn ProofSigner,
    ) -> Result<(), DataIntegrityError> {
        let bytes = self
            .to_json_bytes()
            .map_err(|source| DataIntegrityError::Serialization {
                operation: "credential",
                source,
            })?;
        let proofs = data_integrity::add_data_integrity_proof(&bytes, context, signer)?;

        if !proofs.is_empty() {
            self.raw.insert(PROOF_KEY.to_string(), proofs_to_raw(&proofs));
        }
        self.proofs = proofs;
        Ok(())
    }

    /// Serialize the credential and verify its Data Integrity proofs.
    pub fn verify_data_integrity_proof(
        &self,
        options: Option<&VerificationOptions>,
    ) -> Result<(), DataIntegrityError> {
        let bytes = self
            .to_json_bytes()
            .map_err(|source| DataIntegrityError::Serialization {
                operation: "credential",
                source,
            })?;
        data_integrity::verify_data_integrity_proof(&bytes, options)
    }
}
