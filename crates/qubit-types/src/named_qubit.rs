//! # Named Qubit
//!
//! A qubit identified only by a name. Named qubits have no lattice position,
//! so they are never adjacent to anything.

use crate::errors::QubitError;
use crate::proto::{self, ProtoDict};
use crate::qubit_id::{QubitId, QubitOrdering};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A qubit labelled by a string.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NamedQubit {
    name: String,
}

impl NamedQubit {
    /// Type tag used for hashing and diagnostics.
    pub const TYPE_TAG: &'static str = "NamedQubit";

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read a named qubit from a dict with a `"name"` key.
    pub fn from_proto_dict(dict: &ProtoDict) -> Result<Self, QubitError> {
        proto::require_keys(dict, &["name"])?;
        Ok(Self::new(proto::str_field(dict, "name")?))
    }
}

impl Hash for NamedQubit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Self::TYPE_TAG.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Debug for NamedQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamedQubit({:?})", self.name)
    }
}

impl fmt::Display for NamedQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl QubitId for NamedQubit {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_tag(&self) -> &'static str {
        Self::TYPE_TAG
    }

    fn compare(&self, other: &dyn QubitId) -> QubitOrdering {
        QubitOrdering::compare_same_type(self, other, |a, b| a.name.cmp(&b.name))
    }

    fn hash_fields(&self, mut state: &mut dyn Hasher) {
        self.name.hash(&mut state);
    }

    fn to_proto_dict(&self) -> ProtoDict {
        let mut dict = ProtoDict::new();
        dict.insert("name".to_string(), Value::from(self.name.as_str()));
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_named_ordering_is_lexical() {
        assert!(NamedQubit::new("a") < NamedQubit::new("b"));
        assert!(NamedQubit::new("q10") < NamedQubit::new("q9"));
        assert_eq!(NamedQubit::new("a"), NamedQubit::new(String::from("a")));
    }

    #[test]
    fn test_named_string_forms() {
        let q = NamedQubit::new("anc");
        assert_eq!(format!("{q:?}"), r#"NamedQubit("anc")"#);
        assert_eq!(q.to_string(), "anc");
    }

    #[test]
    fn test_named_proto_dict() {
        let q = NamedQubit::new("data0");
        let dict = q.to_proto_dict();
        assert_eq!(Value::Object(dict.clone()), json!({"name": "data0"}));
        assert_eq!(NamedQubit::from_proto_dict(&dict).unwrap(), q);
    }
}
