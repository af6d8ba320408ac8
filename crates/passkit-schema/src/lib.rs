//! # passkit-schema — Structural Validation of pass.json
//!
//! Validates serialized pass documents against the bundled
//! `schemas/pass.schema.json` (JSON Schema Draft 2020-12). Key entry point:
//!
//! - [`PassSchema::validate`] returns every violation with its instance
//!   path, schema path and message.
//!
//! The schema encodes the wire contract: the five identity keys, the fixed
//! `formatVersion`, every enumerated domain, at most one style key, and
//! non-empty relevance collections.
//!
//! ## Crate Policy
//!
//! - No dependency on the document model. Input is a `serde_json::Value`,
//!   so documents from any producer can be checked. The only internal
//!   dependency is `passkit-core`, whose `PassKitError` absorbs
//!   [`SchemaValidationError`].
//! - Schema validation is a trust boundary: invalid documents are rejected
//!   with structured errors.

pub mod validate;

pub use validate::{
    PassSchema, SchemaValidationError, ValidationViolations, Violation, PASS_SCHEMA_JSON,
};
