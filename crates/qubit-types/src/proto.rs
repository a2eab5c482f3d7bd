//! # Proto Dict Helpers
//!
//! Qubit identifiers travel inside larger protocol messages as small JSON
//! objects, e.g. `{"row": 3, "col": 4}`. This module holds the shared
//! field-extraction logic used by every `from_proto_dict` implementation.

use crate::errors::QubitError;
use serde_json::Value;

/// The mapping form of a qubit identifier.
pub type ProtoDict = serde_json::Map<String, Value>;

/// Render a proto dict compactly for diagnostics.
pub fn render(dict: &ProtoDict) -> String {
    Value::Object(dict.clone()).to_string()
}

/// Check that every key in `expected` is present in `dict`.
///
/// Extra keys are ignored.
pub fn require_keys(dict: &ProtoDict, expected: &[&'static str]) -> Result<(), QubitError> {
    let missing: Vec<&str> = expected
        .iter()
        .copied()
        .filter(|key| !dict.contains_key(*key))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    tracing::debug!(?missing, "proto dict is missing required keys");
    Err(QubitError::MissingField {
        expected: expected.to_vec(),
        received: render(dict),
    })
}

/// Read `key` as a signed 64-bit integer.
pub fn int_field(dict: &ProtoDict, key: &'static str) -> Result<i64, QubitError> {
    let value = field(dict, key)?;
    value.as_i64().ok_or_else(|| invalid(key, value))
}

/// Read `key` as a string.
pub fn str_field(dict: &ProtoDict, key: &'static str) -> Result<String, QubitError> {
    let value = field(dict, key)?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| invalid(key, value))
}

/// Parse a JSON document that must be an object.
pub fn parse_object(json: &str) -> Result<ProtoDict, QubitError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(dict) => Ok(dict),
        other => Err(QubitError::InvalidFormat(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

fn field<'a>(dict: &'a ProtoDict, key: &'static str) -> Result<&'a Value, QubitError> {
    dict.get(key).ok_or_else(|| QubitError::MissingField {
        expected: vec![key],
        received: render(dict),
    })
}

fn invalid(key: &'static str, value: &Value) -> QubitError {
    tracing::debug!(key = key, %value, "proto dict field has an unexpected type");
    QubitError::InvalidFieldValue {
        key,
        value: value.to_string(),
    }
}
