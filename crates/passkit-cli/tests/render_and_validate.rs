//! Integration test: render passes from YAML templates plus an issuer
//! profile on disk, then validate the written files.

use std::path::{Path, PathBuf};

use passkit_cli::config::IssuerConfig;
use passkit_cli::render::{encode, load_template, render_pass, run_render, RenderArgs};
use passkit_cli::validate::{run_validate, validate_file, ValidateArgs};
use passkit_core::TransitType;
use passkit_pass::PassStyle;
use passkit_schema::PassSchema;
use serde_json::json;

const ISSUER: &str = "\
organizationName: Acme
passTypeIdentifier: pass.com.acme.demo
teamIdentifier: ACME1234
webServiceURL: https://passes.acme.test/
authenticationToken: vxwxd7J8AlNNFPS8k0a0FfUFtq0ewzFdc
colors:
  background: rgb(60, 65, 76)
  foreground: rgb(255, 255, 255)
";

const COUPON: &str = r#"
description: Acme coffee coupon
logoText: ACME
coupon:
  primaryFields:
    - key: offer
      value: 20% off
      label: Any drink
  backFields:
    - key: terms
      value: One per visit
barcodes:
  - format: PKBarcodeFormatQR
    message: COUPON-0042
relevantDate: "2026-03-01T10:00:00+01:00"
maxDistance: 300
userInfo:
  campaign: spring
"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn coupon_template_renders_with_issuer_overlay() {
    let dir = tempfile::tempdir().unwrap();
    let issuer = IssuerConfig::load(&write(dir.path(), "issuer.yaml", ISSUER)).unwrap();
    let template = load_template(&write(dir.path(), "coupon.yaml", COUPON)).unwrap();

    let pass = render_pass(template, Some(&issuer), Some("0042")).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&encode(&pass, false).unwrap()).unwrap();

    assert_eq!(value["organizationName"], json!("Acme"));
    assert_eq!(value["serialNumber"], json!("0042"));
    assert_eq!(value["webServiceURL"], json!("https://passes.acme.test/"));
    assert_eq!(value["backgroundColor"], json!("rgb(60, 65, 76)"));
    assert_eq!(value["relevantDate"], json!("2026-03-01T09:00:00Z"));
    assert_eq!(value["coupon"]["primaryFields"][0]["value"], json!("20% off"));
    assert_eq!(value["barcodes"][0]["messageEncoding"], json!("iso-8859-1"));
    assert_eq!(value["userInfo"], json!({"campaign": "spring"}));
    assert!(value.get("labelColor").is_none());
}

#[test]
fn json_template_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "boarding.json",
        r#"{"boardingPass": {"transitType": "PKTransitTypeTrain"}, "serialNumber": "T-1"}"#,
    );
    let template = load_template(&path).unwrap();
    let issuer: IssuerConfig = serde_yaml::from_str(ISSUER).unwrap();
    let pass = render_pass(template, Some(&issuer), None).unwrap();
    assert_eq!(
        pass.style().and_then(PassStyle::transit_type),
        Some(TransitType::Train)
    );
}

#[test]
fn template_with_two_styles_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "bad.yaml", "coupon: {}\nstoreCard: {}\n");
    let template = load_template(&path).unwrap();
    let issuer: IssuerConfig = serde_yaml::from_str(ISSUER).unwrap();
    let err = render_pass(template, Some(&issuer), Some("1")).unwrap_err();
    assert!(format!("{err:#}").contains("exactly one style"), "{err:#}");
}

#[test]
fn template_with_unknown_code_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "bad.yaml",
        "barcodes:\n  - format: PKBarcodeFormatEAN13\n    message: x\n",
    );
    let err = load_template(&path).unwrap_err();
    assert!(format!("{err:#}").contains("PKBarcodeFormatEAN13"), "{err:#}");
}

#[test]
fn rendered_file_passes_validate() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "issuer.yaml", ISSUER);
    let template = write(dir.path(), "coupon.yaml", COUPON);
    let output = dir.path().join("pass.json");

    let args = RenderArgs {
        template,
        serial: Some("0042".into()),
        output: Some(output.clone()),
        pretty: false,
    };
    assert_eq!(run_render(&args, Some(&config)).unwrap(), 0);

    let schema = PassSchema::new().unwrap();
    let pass = validate_file(&schema, &output).unwrap();
    assert_eq!(pass.identity(), ("pass.com.acme.demo", "0042"));

    let args = ValidateArgs { paths: vec![output] };
    assert_eq!(run_validate(&args).unwrap(), 0);
}

#[test]
fn canonical_render_is_stable_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "issuer.yaml", ISSUER);
    let template = write(dir.path(), "coupon.yaml", COUPON);

    let mut outputs = Vec::new();
    for name in ["a.json", "b.json"] {
        let output = dir.path().join(name);
        let args = RenderArgs {
            template: template.clone(),
            serial: Some("0042".into()),
            output: Some(output.clone()),
            pretty: false,
        };
        run_render(&args, Some(&config)).unwrap();
        outputs.push(std::fs::read(output).unwrap());
    }
    assert_eq!(outputs[0], outputs[1]);
}
