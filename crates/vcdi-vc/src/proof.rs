//! # Embedded Proofs
//!
//! A document's `proof` member holds either one proof object or an ordered
//! array of them. [`parse_ld_proof`] normalizes both shapes into a
//! `Vec<Proof>`; [`proofs_to_raw`] writes a collection back, as a bare object
//! when there is exactly one proof and as an array otherwise.
//!
//! [`Proof`] keeps the proof object as-is. Members the signer adds beyond the
//! Data Integrity core set survive a decode/encode cycle untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use vcdi_core::Timestamp;
use vcdi_dataintegrity::document::json_kind;

use crate::error::ProofDecodeError;

/// One proof object embedded in a credential or presentation.
///
/// # Invariants
///
/// The underlying object always has a string `type` member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Proof(Map<String, Value>);

impl Proof {
    /// Wrap a proof object, checking that it carries a string `type`.
    pub fn from_map(map: Map<String, Value>) -> Result<Self, ProofDecodeError> {
        Self::from_entry(map, 0)
    }

    fn from_entry(map: Map<String, Value>, index: usize) -> Result<Self, ProofDecodeError> {
        match map.get("type") {
            Some(Value::String(_)) => Ok(Self(map)),
            _ => Err(ProofDecodeError::MissingType { index }),
        }
    }

    /// The proof `type`, e.g. `DataIntegrityProof`.
    pub fn proof_type(&self) -> &str {
        self.0.get("type").and_then(Value::as_str).unwrap_or_default()
    }

    /// The `cryptosuite` identifier.
    pub fn cryptosuite(&self) -> Option<&str> {
        self.str_member("cryptosuite")
    }

    /// The `verificationMethod` DID URL.
    pub fn verification_method(&self) -> Option<&str> {
        self.str_member("verificationMethod")
    }

    /// The `proofPurpose`.
    pub fn proof_purpose(&self) -> Option<&str> {
        self.str_member("proofPurpose")
    }

    /// The `created` time, if present and well-formed.
    pub fn created(&self) -> Option<Timestamp> {
        self.timestamp_member("created")
    }

    /// The `expires` time, if present and well-formed.
    pub fn expires(&self) -> Option<Timestamp> {
        self.timestamp_member("expires")
    }

    /// The `domain` member; a string or an array of strings.
    pub fn domain(&self) -> Option<&Value> {
        self.0.get("domain")
    }

    /// The `challenge`.
    pub fn challenge(&self) -> Option<&str> {
        self.str_member("challenge")
    }

    /// The multibase-encoded `proofValue`.
    pub fn proof_value(&self) -> Option<&str> {
        self.str_member("proofValue")
    }

    /// Any member by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The proof object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the proof object.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    fn str_member(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    fn timestamp_member(&self, key: &str) -> Option<Timestamp> {
        self.str_member(key).and_then(|s| Timestamp::parse_lenient(s).ok())
    }
}

impl TryFrom<Map<String, Value>> for Proof {
    type Error = ProofDecodeError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_map(map)
    }
}

impl From<Proof> for Map<String, Value> {
    fn from(proof: Proof) -> Self {
        proof.0
    }
}

impl From<Proof> for Value {
    fn from(proof: Proof) -> Self {
        Value::Object(proof.0)
    }
}

/// Decode a raw `proof` member into an ordered proof sequence.
///
/// Absent or `null` yields an empty sequence, an object yields one proof and
/// an array yields its entries in order.
pub fn parse_ld_proof(raw: Option<&Value>) -> Result<Vec<Proof>, ProofDecodeError> {
    match raw {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Object(map)) => Ok(vec![Proof::from_entry(map.clone(), 0)?]),
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Object(map) => Proof::from_entry(map.clone(), index),
                other => Err(ProofDecodeError::EntryNotObject {
                    index,
                    kind: json_kind(other),
                }),
            })
            .collect(),
        Some(other) => Err(ProofDecodeError::InvalidShape(json_kind(other))),
    }
}

/// Encode a proof sequence as a raw `proof` member.
pub fn proofs_to_raw(proofs: &[Proof]) -> Value {
    match proofs {
        [single] => Value::Object(single.0.clone()),
        many => Value::Array(many.iter().map(|p| Value::Object(p.0.clone())).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn proof(n: usize) -> Value {
        json!({
            "type": "DataIntegrityProof",
            "cryptosuite": "eddsa-2022",
            "verificationMethod": format!("did:example:{n}#key-1"),
            "proofPurpose": "assertionMethod",
            "created": "2026-01-15T12:00:00Z",
            "proofValue": "z3FXQjecWufY46yg5abdVZsXqLhxhueuSoZgNSARiKBk5"
        })
    }

    #[test]
    fn absent_and_null_are_empty() {
        assert!(parse_ld_proof(None).unwrap().is_empty());
        assert!(parse_ld_proof(Some(&Value::Null)).unwrap().is_empty());
    }

    #[test]
    fn single_object() {
        let proofs = parse_ld_proof(Some(&proof(1))).unwrap();
        assert_eq!(proofs.len(), 1);
        let p = &proofs[0];
        assert_eq!(p.proof_type(), "DataIntegrityProof");
        assert_eq!(p.cryptosuite(), Some("eddsa-2022"));
        assert_eq!(p.verification_method(), Some("did:example:1#key-1"));
        assert_eq!(p.proof_purpose(), Some("assertionMethod"));
        assert_eq!(p.created().unwrap().to_iso8601(), "2026-01-15T12:00:00Z");
        assert!(p.expires().is_none());
        assert!(p.proof_value().unwrap().starts_with('z'));
    }

    #[test]
    fn array_keeps_order() {
        let proofs = parse_ld_proof(Some(&json!([proof(1), proof(2)]))).unwrap();
        assert_eq!(proofs[0].verification_method(), Some("did:example:1#key-1"));
        assert_eq!(proofs[1].verification_method(), Some("did:example:2#key-1"));
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(matches!(
            parse_ld_proof(Some(&json!("z123"))),
            Err(ProofDecodeError::InvalidShape("string"))
        ));
        assert!(matches!(
            parse_ld_proof(Some(&json!([proof(1), 7]))),
            Err(ProofDecodeError::EntryNotObject { index: 1, kind: "number" })
        ));
        assert!(matches!(
            parse_ld_proof(Some(&json!({"proofValue": "z1"}))),
            Err(ProofDecodeError::MissingType { index: 0 })
        ));
        assert!(matches!(
            parse_ld_proof(Some(&json!([proof(1), {"type": 3}]))),
            Err(ProofDecodeError::MissingType { index: 1 })
        ));
    }

    #[test]
    fn raw_shape_depends_on_count() {
        assert_eq!(proofs_to_raw(&[]), json!([]));
        let one = parse_ld_proof(Some(&proof(1))).unwrap();
        assert_eq!(proofs_to_raw(&one), proof(1));
        let two = parse_ld_proof(Some(&json!([proof(1), proof(2)]))).unwrap();
        assert_eq!(proofs_to_raw(&two), json!([proof(1), proof(2)]));
    }

    #[test]
    fn unknown_members_survive() {
        let mut raw = proof(1);
        raw["previousProof"] = json!("urn:uuid:abc");
        let proofs = parse_ld_proof(Some(&raw)).unwrap();
        assert_eq!(proofs[0].get("previousProof"), Some(&json!("urn:uuid:abc")));
        assert_eq!(proofs_to_raw(&proofs), raw);
    }

    #[test]
    fn serde_enforces_type_member() {
        let p: Proof = serde_json::from_value(proof(3)).unwrap();
        assert_eq!(serde_json::to_value(&p).unwrap(), proof(3));
        assert!(serde_json::from_value::<Proof>(json!({"id": "x"})).is_err());
    }

    proptest! {
        #[test]
        fn decode_of_encode_preserves_sequence(count in 0usize..6) {
            let raw = Value::Array((0..count).map(proof).collect());
            let proofs = parse_ld_proof(Some(&raw)).unwrap();
            prop_assert_eq!(proofs.len(), count);

            let encoded = proofs_to_raw(&proofs);
            prop_assert_eq!(encoded.is_object(), count == 1);
            let decoded = parse_ld_proof(Some(&encoded)).unwrap();
            prop_assert_eq!(decoded, proofs);
        }
    }
}
