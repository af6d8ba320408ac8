//! # Error Hierarchy
//!
//! Structured error types for the pass toolkit, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Every error here is a caller-input problem. Nothing is retryable and
//! nothing is fatal to the process: supply a corrected value and call again.

use thiserror::Error;

/// Top-level error type for the pass toolkit.
///
/// Returned where one call crosses several layers: parsing a document
/// (`Json`, then `Validation`), loading one from disk (`Io`), checking it
/// against the bundled schema (`SchemaValidation`), and encoding it
/// (`Canonicalization`, `Json`).
#[derive(Error, Debug)]
pub enum PassKitError {
    /// A mutator rejected its input.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Canonical serialization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// A serialized document did not match the pass schema. Carries the
    /// rendered violation list.
    #[error("schema validation error: {0}")]
    SchemaValidation(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejections raised by the mutator layer and by domain parsing.
///
/// A mutator that returns any of these has left the document unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A scalar, record, or collection was empty where a value is required.
    #[error("{field} can not be empty")]
    EmptyValue {
        /// Wire name of the rejected field.
        field: &'static str,
    },

    /// A field that only admits one value was given another.
    #[error("{field} can only be {expected}, got {actual}")]
    InvalidFixedValue {
        /// Wire name of the rejected field.
        field: &'static str,
        /// The only accepted value.
        expected: i64,
        /// The value that was supplied.
        actual: i64,
    },

    /// A string is not a member of the enumerated domain.
    #[error("unknown {domain} code: {value:?}")]
    UnknownCode {
        /// Name of the domain that was being parsed.
        domain: &'static str,
        /// The rejected input.
        value: String,
    },

    /// More than one style variant was supplied for a single pass.
    #[error("a pass carries exactly one style, found both {first} and {second}")]
    ConflictingStyles {
        /// Wire key of the first style found.
        first: &'static str,
        /// Wire key of the second style found.
        second: &'static str,
    },

    /// A number outside the range its field admits, or not finite.
    #[error("{field} must be {bounds}, got {value}")]
    OutOfRange {
        /// Wire name of the rejected field.
        field: &'static str,
        /// The rejected number, as rendered by `Display`.
        value: String,
        /// The admitted range, in words.
        bounds: &'static str,
    },

    /// Timestamp string is not valid ISO 8601.
    #[error("invalid timestamp: \"{value}\" ({reason})")]
    InvalidTimestamp {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ValidationError {
    /// Wire name of the field this error is about, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::EmptyValue { field }
            | Self::InvalidFixedValue { field, .. }
            | Self::OutOfRange { field, .. } => Some(*field),
            Self::UnknownCode { .. }
            | Self::ConflictingStyles { .. }
            | Self::InvalidTimestamp { .. } => None,
        }
    }
}

/// Errors during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization failed during canonicalization.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
