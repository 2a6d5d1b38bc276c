//! JSON-LD members that may hold either a single value or an array.

use serde::{Deserialize, Serialize};

/// A member such as `@context`, `type` or `verifiableCredential` that is
/// either a single value or an array of values.
///
/// The shape found on the wire is preserved when re-serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// An array of values.
    Many(Vec<T>),
    /// A single bare value.
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    /// Returns `true` if there are no values.
    pub fn is_empty(&self) -> bool {
        match self {
            OneOrMany::One(_) => false,
            OneOrMany::Many(values) => values.is_empty(),
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// The values as a slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }

    /// Add a value, converting a single value into an array.
    pub fn push(&mut self, value: T) {
        match std::mem::take(self) {
            OneOrMany::One(prev) => *self = OneOrMany::Many(vec![prev, value]),
            OneOrMany::Many(mut values) => {
                values.push(value);
                *self = OneOrMany::Many(values);
            }
        }
    }

    /// Consume into an owned vector.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl<T: PartialEq> OneOrMany<T> {
    /// Returns `true` if any value equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_wire_shape() {
        let one: OneOrMany<String> = serde_json::from_str(r#""VerifiablePresentation""#).unwrap();
        assert_eq!(one, OneOrMany::One("VerifiablePresentation".to_string()));
        assert_eq!(serde_json::to_string(&one).unwrap(), r#""VerifiablePresentation""#);

        let many: OneOrMany<String> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(many.len(), 2);
        assert!(many.contains(&"b".to_string()));
    }

    #[test]
    fn push_promotes_single_value() {
        let mut v = OneOrMany::One(1);
        v.push(2);
        assert_eq!(v, OneOrMany::Many(vec![1, 2]));

        let mut empty: OneOrMany<i32> = OneOrMany::default();
        assert!(empty.is_empty());
        empty.push(7);
        assert_eq!(empty.into_vec(), vec![7]);
    }
}
