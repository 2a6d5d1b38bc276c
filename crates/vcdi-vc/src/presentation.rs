//! # Verifiable Presentations
//!
//! Unlike [`Credential`], a presentation has no raw JSON mirror: its typed
//! fields are the document. Attaching a proof always overwrites the proof
//! collection with the proofs decoded from the signer's output, even when
//! that collection is empty.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use vcdi_dataintegrity::ProofSigner;

use crate::context::{ProofContext, VerificationOptions};
use crate::credential::{Credential, CREDENTIALS_V1_CONTEXT};
use crate::data_integrity;
use crate::error::{CredentialError, DataIntegrityError};
use crate::proof::{parse_ld_proof, proofs_to_raw, Proof};
use crate::value::OneOrMany;

/// The base presentation type.
pub const VERIFIABLE_PRESENTATION_TYPE: &str = "VerifiablePresentation";

/// A verifiable presentation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Presentation {
    /// JSON-LD context.
    #[serde(rename = "@context", default, skip_serializing_if = "OneOrMany::is_empty")]
    pub context: OneOrMany<Value>,

    /// Presentation identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Presentation type(s).
    #[serde(rename = "type", default, skip_serializing_if = "OneOrMany::is_empty")]
    pub types: OneOrMany<String>,

    /// Holder, as an identifier string or an object with an `id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder: Option<Value>,

    /// Embedded credentials, as JSON.
    #[serde(
        rename = "verifiableCredential",
        default,
        skip_serializing_if = "OneOrMany::is_empty"
    )]
    pub credentials: OneOrMany<Value>,

    /// Proofs over the presentation; omitted from the JSON when empty.
    #[serde(
        rename = "proof",
        default,
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_proofs",
        deserialize_with = "deserialize_proofs"
    )]
    pub proofs: Vec<Proof>,

    /// Any other members.
    #[serde(flatten)]
    pub custom_fields: Map<String, Value>,
}

impl Presentation {
    /// An empty presentation with the v1 context and base type.
    pub fn new() -> Self {
        Self {
            context: vec![Value::String(CREDENTIALS_V1_CONTEXT.to_string())].into(),
            types: vec![VERIFIABLE_PRESENTATION_TYPE.to_string()].into(),
            ..Default::default()
        }
    }

    /// Parse a serialized presentation.
    pub fn parse(bytes: &[u8]) -> Result<Self, CredentialError> {
        match serde_json::from_slice::<Value>(bytes)? {
            value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
            _ => Err(CredentialError::NotAnObject("presentation")),
        }
    }

    /// Serialize the presentation.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Embed credentials, in order, after any already present.
    pub fn add_credentials<'a>(&mut self, credentials: impl IntoIterator<Item = &'a Credential>) {
        for credential in credentials {
            self.credentials.push(Value::Object(credential.raw().clone()));
        }
    }

    /// Sign the presentation and replace its proofs with the signer's.
    pub fn add_data_integrity_proof(
        &mut self,
        context: &ProofContext,
        signer: &dyn ProofSigner,
    ) -> Result<(), DataIntegrityError> {
        let bytes = self
            .to_json_bytes()
            .map_err(|source| DataIntegrityError::Serialization {
                operation: "presentation",
                source,
            })?;
        self.proofs = data_integrity::add_data_integrity_proof(&bytes, context, signer)?;
        Ok(())
    }

    /// Serialize the presentation and verify its Data Integrity proofs.
    pub fn verify_data_integrity_proof(
        &self,
        options: Option<&VerificationOptions>,
    ) -> Result<(), DataIntegrityError> {
        let bytes = self
            .to_json_bytes()
            .map_err(|source| DataIntegrityError::Serialization {
                operation: "presentation",
                source,
            })?;
        data_integrity::verify_data_integrity_proof(&bytes, options)
    }
}

fn serialize_proofs<S: Serializer>(proofs: &[Proof], serializer: S) -> Result<S::Ok, S::Error> {
    proofs_to_raw(proofs).serialize(serializer)
}

fn deserialize_proofs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Proof>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    parse_ld_proof(raw.as_ref()).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use vcdi_crypto::Ed25519KeyPair;
    use vcdi_dataintegrity::{DataIntegritySigner, DataIntegrityVerifier, ProofOptions, SignerError};

    use crate::credential::CredentialContents;

    struct CannedSigner(Value);

    impl ProofSigner for CannedSigner {
        fn add_proof(&self, _: &[u8], _: &ProofOptions) -> Result<Vec<u8>, SignerError> {
            Ok(serde_json::to_vec(&self.0).unwrap())
        }
    }

    struct FailingSigner;

    impl ProofSigner for FailingSigner {
        fn add_proof(&self, _: &[u8], _: &ProofOptions) -> Result<Vec<u8>, SignerError> {
            Err(SignerError::UnknownVerificationMethod("did:example:holder#key-1".into()))
        }
    }

    fn proof_json() -> Value {
        json!({"type": "DataIntegrityProof", "cryptosuite": "eddsa-2022", "proofValue": "z1"})
    }

    fn context() -> ProofContext {
        ProofContext::new("did:example:holder#key-1", "eddsa-2022").with_purpose("authentication")
    }

    #[test]
    fn new_has_context_and_type() {
        let vp = Presentation::new();
        let json: Value = serde_json::from_slice(&vp.to_json_bytes().unwrap()).unwrap();
        assert_eq!(json["@context"], json!([CREDENTIALS_V1_CONTEXT]));
        assert_eq!(json["type"], json!(["VerifiablePresentation"]));
        assert!(json.get("proof").is_none());
        assert!(json.get("verifiableCredential").is_none());
    }

    #[test]
    fn add_credentials_embeds_raw_documents() {
        let vc = Credential::create(CredentialContents {
            id: Some("urn:uuid:1".into()),
            ..Default::default()
        })
        .unwrap();
        let mut vp = Presentation::new();
        vp.add_credentials([&vc, &vc]);
        assert_eq!(vp.credentials.len(), 2);
        assert_eq!(vp.credentials.as_slice()[0]["id"], "urn:uuid:1");
    }

    #[test]
    fn attach_assigns_proofs() {
        let mut vp = Presentation::new();
        vp.add_data_integrity_proof(&context(), &CannedSigner(json!({"proof": proof_json()})))
            .unwrap();
        assert_eq!(vp.proofs.len(), 1);

        let json: Value = serde_json::from_slice(&vp.to_json_bytes().unwrap()).unwrap();
        assert_eq!(json["proof"], proof_json());
    }

    #[test]
    fn zero_proofs_overwrite_collection() {
        let mut vp = Presentation::new();
        vp.proofs = parse_ld_proof(Some(&proof_json())).unwrap();
        vp.add_data_integrity_proof(&context(), &CannedSigner(json!({}))).unwrap();
        assert!(vp.proofs.is_empty());
    }

    #[test]
    fn serialize_then_parse_is_equivalent() {
        let mut vp = Presentation::new();
        vp.holder = Some(json!("did:example:holder"));
        vp.custom_fields.insert("termsOfUse".into(), json!([{"type": "IssuerPolicy"}]));
        vp.add_data_integrity_proof(
            &context(),
            &CannedSigner(json!({"proof": [proof_json(), proof_json()]})),
        )
        .unwrap();

        let parsed = Presentation::parse(&vp.to_json_bytes().unwrap()).unwrap();
        assert_eq!(parsed, vp);
    }

    #[test]
    fn parse_accepts_single_values() {
        let vp = Presentation::parse(
            br#"{"type":"VerifiablePresentation","verifiableCredential":{"id":"urn:uuid:2"},"proof":null}"#,
        )
        .unwrap();
        assert_eq!(vp.types, OneOrMany::One("VerifiablePresentation".to_string()));
        assert_eq!(vp.credentials.len(), 1);
        assert!(vp.proofs.is_empty());
    }

    #[test]
    fn parse_rejects_bad_documents() {
        assert!(matches!(
            Presentation::parse(b"3"),
            Err(CredentialError::NotAnObject("presentation"))
        ));
        assert!(matches!(
            Presentation::parse(br#"{"proof": [{"id": "no type"}]}"#),
            Err(CredentialError::Json(_))
        ));
    }

    #[test]
    fn failed_attach_leaves_presentation_unchanged() {
        let mut vp = Presentation::new();
        vp.proofs = parse_ld_proof(Some(&proof_json())).unwrap();
        let before = vp.clone();

        let err = vp.add_data_integrity_proof(&context(), &FailingSigner).unwrap_err();
        assert!(err.is_signer_failure());
        assert_eq!(vp, before);

        let err = vp
            .add_data_integrity_proof(&context(), &CannedSigner(json!({"proof": [1]})))
            .unwrap_err();
        assert!(err.is_decode_failure());
        assert_eq!(vp, before);
    }

    #[test]
    fn parse_accepts_holder_object() {
        let vp = Presentation::parse(
            br#"{"holder":{"id":"did:example:holder"},"type":"VerifiablePresentation"}"#,
        )
        .unwrap();
        assert_eq!(vp.holder.as_ref().unwrap()["id"], "did:example:holder");
    }

    #[test]
    fn ed25519_signed_presentation_verifies() {
        let signer = DataIntegritySigner::new()
            .with_key("did:example:holder#key-1", Ed25519KeyPair::from_seed(&[7u8; 32]));
        let verifier = DataIntegrityVerifier::new(signer.key_resolver());

        let mut vp = Presentation::new();
        vp.holder = Some(json!("did:example:holder"));
        let context = context().with_domain("example.org").with_challenge("c-42");
        vp.add_data_integrity_proof(&context, &signer).unwrap();
        assert_eq!(vp.proofs.len(), 1);
        assert_eq!(vp.proofs[0].proof_purpose(), Some("authentication"));

        let options = VerificationOptions::new(Arc::new(verifier))
            .with_purpose("authentication")
            .with_domain("example.org")
            .with_challenge("c-42");
        vp.verify_data_integrity_proof(Some(&options)).unwrap();

        let replayed = options.clone().with_challenge("c-43");
        let err = vp.verify_data_integrity_proof(Some(&replayed)).unwrap_err();
        assert!(err.is_verifier_failure());
    }
}
