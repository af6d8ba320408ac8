//! # Canonical Serialization — Deterministic Pass Bytes
//!
//! `CanonicalBytes` is the sole construction path for the serialized form of
//! a pass document. The inner buffer is private. The only constructor
//! serializes through `serde_jcs` (RFC 8785): sorted keys, compact
//! separators, no insignificant whitespace.
//!
//! The consumer of a pass document does not care about key order. Signing
//! and packaging collaborators hash the bytes, though, so re-serializing an
//! unchanged document must produce identical output.
//!
//! Omission of empty fields is not decided here. It is a property of the
//! `Serialize` implementations of the wire types. This module only fixes
//! the byte layout.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization.
///
/// # Invariants
///
/// - The only constructors are [`CanonicalBytes::new()`] and
///   [`CanonicalBytes::from_value()`].
/// - Object keys are sorted, separators are compact.
/// - The bytes are valid UTF-8 JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::SerializationFailed` if the value
    /// cannot be represented as JSON (for example a map with non-string keys).
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        Self::from_value(value)
    }

    /// Construct canonical bytes from an already-built JSON value.
    pub fn from_value(value: Value) -> Result<Self, CanonicalizationError> {
        let bytes = serde_jcs::to_vec(&value)?;
        Ok(Self(bytes))
    }

    /// Access the canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// View the canonical bytes as a string slice.
    ///
    /// Always succeeds for bytes built by this type, which only ever holds
    /// UTF-8 produced by the JSON serializer.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Re-parse into a JSON value.
    pub fn to_value(&self) -> Result<Value, CanonicalizationError> {
        Ok(serde_json::from_slice(&self.0)?)
    }

    /// Consume and return the raw byte buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
