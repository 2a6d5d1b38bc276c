//! Helpers for the JSON document shape shared by signer and verifier.

use serde_json::{Map, Value};

/// Key under which proofs are embedded in a secured document.
pub const PROOF_KEY: &str = "proof";

/// Parse document bytes as a JSON object.
pub fn parse_document(bytes: &[u8]) -> Result<Map<String, Value>, String> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(format!("expected a JSON object, got {}", json_kind(&other))),
        Err(e) => Err(e.to_string()),
    }
}

/// Remove and return the proof field; `null` counts as absent.
pub fn take_proof(document: &mut Map<String, Value>) -> Option<Value> {
    document.remove(PROOF_KEY).filter(|v| !v.is_null())
}

/// Flatten a proof field into its entries (single object or array).
pub fn proof_entries(proof: Value) -> Vec<Value> {
    match proof {
        Value::Array(entries) => entries,
        single => vec![single],
    }
}

/// Append a new proof to an existing proof field.
///
/// No existing field yields the bare proof object; an existing single proof
/// becomes a two-element array; an existing array is extended.
pub fn append_proof(existing: Option<Value>, proof: Value) -> Value {
    match existing {
        None => proof,
        Some(Value::Array(mut entries)) => {
            entries.push(proof);
            Value::Array(entries)
        }
        Some(single) => Value::Array(vec![single, proof]),
    }
}

/// Name of the JSON kind of `value`, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_rejects_non_objects() {
        assert!(parse_document(b"[1,2]").unwrap_err().contains("array"));
        assert!(parse_document(b"not json").is_err());
        assert!(parse_document(br#"{"a":1}"#).is_ok());
    }

    #[test]
    fn take_proof_treats_null_as_absent() {
        let mut doc = parse_document(br#"{"proof":null,"id":"x"}"#).unwrap();
        assert!(take_proof(&mut doc).is_none());
        assert!(!doc.contains_key(PROOF_KEY));
    }

    #[test]
    fn append_builds_arrays() {
        let p1 = json!({"type": "A"});
        let p2 = json!({"type": "B"});
        let p3 = json!({"type": "C"});
        assert_eq!(append_proof(None, p1.clone()), p1);
        let two = append_proof(Some(p1.clone()), p2.clone());
        assert_eq!(two, json!([p1, p2]));
        let three = append_proof(Some(two), p3.clone());
        assert_eq!(proof_entries(three).len(), 3);
    }
}
