//! # Validate Subcommand
//!
//! `passkit validate <pass.json>...` checks existing documents twice: once
//! through the pass mutators (empty values, fixed `formatVersion`, single
//! style, known codes) and once against the bundled schema, which also
//! rejects keys the model does not know.
//!
//! Every file is checked even after a failure. Exit code 0 means all passed.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use passkit_core::PassKitError;
use passkit_pass::Pass;
use passkit_schema::PassSchema;

/// Arguments for `passkit validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// One or more `pass.json` files.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Check one document, returning the parsed pass.
///
/// The schema runs first so a document gets every violation reported, not
/// just the first mutator rejection.
pub fn validate_file(schema: &PassSchema, path: &Path) -> Result<Pass, PassKitError> {
    let bytes = std::fs::read(path)?;
    let raw: Value = serde_json::from_slice(&bytes)?;
    schema.validate(&raw)?;
    Pass::from_value(raw)
}

/// Execute `passkit validate`.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let schema = PassSchema::new()?;
    let mut failures = 0usize;

    for path in &args.paths {
        match validate_file(&schema, path) {
            Ok(pass) => {
                let (pass_type, serial) = pass.identity();
                tracing::debug!(path = %path.display(), pass_type, serial, "valid");
                println!("  OK    {}", path.display());
            }
            Err(e) => {
                failures += 1;
                println!("  FAIL  {}: {e}", path.display());
            }
        }
    }

    println!();
    println!("{} checked, {} failed", args.paths.len(), failures);
    tracing::info!(checked = args.paths.len(), failures, "validation complete");

    Ok(if failures == 0 { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    const VALID: &str = r#"{"formatVersion":1,"organizationName":"Acme","passTypeIdentifier":"pass.com.acme.demo","serialNumber":"0001","teamIdentifier":"ACME1234","generic":{}}"#;

    #[test]
    fn accepts_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "pass.json", VALID);
        let schema = PassSchema::new().unwrap();
        let pass = validate_file(&schema, &path).unwrap();
        assert_eq!(pass.serial_number(), "0001");
    }

    #[test]
    fn rejects_off_globe_location() {
        let dir = tempfile::tempdir().unwrap();
        let doc = VALID.replace(
            r#""generic":{}"#,
            r#""locations":[{"latitude":200.0,"longitude":0.0}]"#,
        );
        let path = write(dir.path(), "pass.json", &doc);
        let schema = PassSchema::new().unwrap();
        assert!(validate_file(&schema, &path).is_err());
    }

    #[test]
    fn rejects_empty_barcode_list() {
        let dir = tempfile::tempdir().unwrap();
        let doc = VALID.replace(r#""generic":{}"#, r#""barcodes":[]"#);
        let path = write(dir.path(), "pass.json", &doc);
        let schema = PassSchema::new().unwrap();
        assert!(validate_file(&schema, &path).is_err());
    }

    #[test]
    fn rejects_non_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "pass.json", "formatVersion: 1");
        let schema = PassSchema::new().unwrap();
        let err = validate_file(&schema, &path).unwrap_err();
        assert!(matches!(err, PassKitError::Json(_)), "{err}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let schema = PassSchema::new().unwrap();
        let err = validate_file(&schema, &dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PassKitError::Io(_)), "{err}");
    }

    #[test]
    fn schema_violations_reported_before_parse() {
        let dir = tempfile::tempdir().unwrap();
        let doc = VALID.replace(r#""serialNumber":"0001""#, r#""serialNumber":"""#);
        let path = write(dir.path(), "pass.json", &doc);
        let schema = PassSchema::new().unwrap();
        let err = validate_file(&schema, &path).unwrap_err();
        assert!(matches!(err, PassKitError::SchemaValidation(_)), "{err}");
    }

    #[test]
    fn exit_code_reflects_any_failure() {
        let dir = tempfile::tempdir().unwrap();
        let good = write(dir.path(), "good.json", VALID);
        let bad_doc = VALID.replace(r#""formatVersion":1"#, r#""formatVersion":2"#);
        let bad = write(dir.path(), "bad.json", &bad_doc);
        let missing = dir.path().join("missing.json");

        let all_good = ValidateArgs { paths: vec![good.clone()] };
        assert_eq!(run_validate(&all_good).unwrap(), 0);

        let mixed = ValidateArgs { paths: vec![good, bad, missing] };
        assert_eq!(run_validate(&mixed).unwrap(), 1);
    }
}
