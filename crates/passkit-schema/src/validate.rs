//! # Schema Validation
//!
//! Structural validation of serialized pass documents against the bundled
//! `pass.schema.json` (Draft 2020-12).
//!
//! The schema is a second, independent statement of the wire contract. The
//! mutators guarantee it for documents built in-process. The schema check
//! covers documents that arrive from elsewhere and catches drift between the
//! serializer and the contract.
//!
//! The schema only uses internal `#/$defs/...` references, so no retriever
//! is installed and validation never leaves the process.

use std::fmt;

use jsonschema::Validator;
use passkit_core::PassKitError;
use serde_json::Value;
use thiserror::Error;

/// The bundled schema source.
pub const PASS_SCHEMA_JSON: &str = include_str!("../schemas/pass.schema.json");

/// Error during schema validation.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The document did not conform to the schema.
    #[error("validation failed against schema '{schema_name}':\n{violations}")]
    ValidationFailed {
        /// Name of the schema that was validated against.
        schema_name: String,
        /// Structured list of individual violations.
        violations: ValidationViolations,
    },

    /// The bundled schema is not valid JSON.
    #[error("schema load error for '{schema_name}': {reason}")]
    SchemaLoadError {
        schema_name: String,
        reason: String,
    },

    /// The schema parsed but could not be compiled.
    #[error("validator build error for schema '{schema_name}': {reason}")]
    ValidatorBuildError {
        schema_name: String,
        reason: String,
    },
}

impl From<SchemaValidationError> for PassKitError {
    fn from(e: SchemaValidationError) -> Self {
        PassKitError::SchemaValidation(e.to_string())
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }

    /// Whether any violation points at `instance_path` or below it.
    pub fn touches(&self, instance_path: &str) -> bool {
        self.violations
            .iter()
            .any(|v| v.instance_path.starts_with(instance_path))
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// The compiled `pass.json` validator.
///
/// Compile once and reuse; `PassSchema` is `Send + Sync`.
pub struct PassSchema {
    validator: Validator,
}

impl fmt::Debug for PassSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassSchema")
            .field("schema", &Self::NAME)
            .finish_non_exhaustive()
    }
}

impl PassSchema {
    /// File name of the bundled schema, used in error reports.
    pub const NAME: &'static str = "pass.schema.json";

    /// The bundled schema as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `SchemaLoadError` if the bundled file is not valid JSON.
    pub fn schema_value() -> Result<Value, SchemaValidationError> {
        serde_json::from_str(PASS_SCHEMA_JSON).map_err(|e| SchemaValidationError::SchemaLoadError {
            schema_name: Self::NAME.to_string(),
            reason: format!("invalid JSON: {e}"),
        })
    }

    /// Compile the bundled schema.
    pub fn new() -> Result<Self, SchemaValidationError> {
        let schema = Self::schema_value()?;
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        let validator =
            opts.build(&schema)
                .map_err(|e| SchemaValidationError::ValidatorBuildError {
                    schema_name: Self::NAME.to_string(),
                    reason: e.to_string(),
                })?;
        Ok(Self { validator })
    }

    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }

    /// Validate a serialized pass document.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` carrying every violation found.
    pub fn validate(&self, instance: &Value) -> Result<(), SchemaValidationError> {
        let errors: Vec<Violation> = self
            .validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::ValidationFailed {
                schema_name: Self::NAME.to_string(),
                violations: ValidationViolations { violations: errors },
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "formatVersion": 1,
            "organizationName": "Acme",
            "passTypeIdentifier": "pass.com.acme.demo",
            "serialNumber": "0001",
            "teamIdentifier": "ACME1234"
        })
    }

    fn violations(v: &Value) -> ValidationViolations {
        let schema = PassSchema::new().unwrap();
        match schema.validate(v) {
            Err(SchemaValidationError::ValidationFailed { violations, .. }) => violations,
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn bundled_schema_compiles() {
        assert!(PassSchema::new().is_ok());
    }

    #[test]
    fn minimal_document_is_valid() {
        let schema = PassSchema::new().unwrap();
        assert!(schema.validate(&minimal()).is_ok());
    }

    #[test]
    fn missing_identity_key_reported() {
        let mut doc = minimal();
        doc.as_object_mut().unwrap().remove("teamIdentifier");
        let v = violations(&doc);
        assert!(v.violations().iter().any(|x| x.message.contains("teamIdentifier")));
    }

    #[test]
    fn empty_identity_string_rejected() {
        let mut doc = minimal();
        doc["serialNumber"] = json!("");
        assert!(violations(&doc).touches("/serialNumber"));
    }

    #[test]
    fn format_version_must_be_one() {
        let mut doc = minimal();
        doc["formatVersion"] = json!(2);
        assert!(violations(&doc).touches("/formatVersion"));
    }

    #[test]
    fn two_styles_rejected() {
        let mut doc = minimal();
        doc["coupon"] = json!({});
        doc["storeCard"] = json!({});
        assert!(!violations(&doc).is_empty());
    }

    #[test]
    fn unknown_enum_code_rejected() {
        let mut doc = minimal();
        doc["boardingPass"] = json!({"transitType": "PKTransitTypeRocket"});
        assert!(violations(&doc).touches("/boardingPass/transitType"));
    }

    #[test]
    fn empty_barcode_list_rejected() {
        let mut doc = minimal();
        doc["barcodes"] = json!([]);
        assert!(violations(&doc).touches("/barcodes"));
    }

    #[test]
    fn unknown_top_level_key_rejected() {
        let mut doc = minimal();
        doc["webserviceUrl"] = json!("https://x.test/");
        assert!(!violations(&doc).is_empty());
    }

    #[test]
    fn converts_into_top_level_error() {
        let mut doc = minimal();
        doc["serialNumber"] = json!("");
        let err: PassKitError = PassSchema::new().unwrap().validate(&doc).unwrap_err().into();
        match err {
            PassKitError::SchemaValidation(msg) => assert!(msg.contains("/serialNumber"), "{msg}"),
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn violation_display_includes_path() {
        let v = Violation {
            instance_path: "/barcodes".into(),
            schema_path: "/properties/barcodes/minItems".into(),
            message: "[] has less than 1 item".into(),
        };
        assert_eq!(v.to_string(), "  /barcodes: [] has less than 1 item");
    }
}
