//! # Error Types
//!
//! Defines the errors raised when decoding qubit identifiers.

use thiserror::Error;

/// Errors that can occur when reading a qubit identifier from its proto dict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QubitError {
    /// One or more required keys are absent from the proto dict.
    #[error("Proto dict does not contain {}: {}", .expected.join(" or "), .received)]
    MissingField {
        expected: Vec<&'static str>,
        received: String,
    },

    /// A key is present but its value cannot be read as the expected type.
    #[error("Invalid value for '{key}': {value}")]
    InvalidFieldValue { key: &'static str, value: String },

    /// The input is not a JSON object.
    #[error("Invalid proto dict format: {0}")]
    InvalidFormat(String),

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for QubitError {
    fn from(err: serde_json::Error) -> Self {
        QubitError::Serialization(err.to_string())
    }
}
