//! Validation adapters
//!
//! Exposes identifier parsing in the `(warnings, errors)` shape expected by
//! attribute validation. Warnings are never produced; a failed parse yields
//! exactly one error.

use thiserror::Error;

use crate::error::IdError;
use crate::id::ParseId;
use crate::value::Value;

/// Error reported for an identifier-typed attribute
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("expected {key:?} to be a string, got {got}")]
    NotAString { key: String, got: &'static str },

    #[error("{key:?} is not a valid {label} ID: {source}")]
    InvalidId {
        key: String,
        label: &'static str,
        #[source]
        source: IdError,
    },
}

/// Warnings and errors collected by a validation function
pub type Diagnostics = (Vec<String>, Vec<ValidationError>);

/// Signature of an identifier validation adapter
pub type ValidateFn = fn(&Value, &str) -> Diagnostics;

/// Validate an untyped attribute value as a `T` identifier
pub fn validate_id<T: ParseId>(input: &Value, key: &str) -> Diagnostics {
    match input {
        Value::String(s) => validate_id_str::<T>(s, key),
        other => (
            Vec::new(),
            vec![ValidationError::NotAString {
                key: key.to_string(),
                got: other.type_name(),
            }],
        ),
    }
}

/// Validate a string attribute as a `T` identifier
pub fn validate_id_str<T: ParseId>(input: &str, key: &str) -> Diagnostics {
    match T::parse_id(input) {
        Ok(_) => (Vec::new(), Vec::new()),
        Err(source) => (
            Vec::new(),
            vec![ValidationError::InvalidId {
                key: key.to_string(),
                label: T::LABEL,
                source,
            }],
        ),
    }
}
