//! # Render Subcommand
//!
//! `passkit render <template>` builds a `pass.json` from a YAML or JSON
//! template:
//!
//! 1. Parse the template into a `PassTemplate`.
//! 2. Overlay the issuer profile from `--config`, if given.
//! 3. Build through the pass mutators.
//! 4. Apply `--serial`, if given, through its mutator.
//! 5. Check the result against the bundled schema.
//! 6. Write canonical bytes (or pretty JSON with `--pretty`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use passkit_core::PassKitError;
use passkit_pass::{Pass, PassTemplate};
use passkit_schema::PassSchema;

use crate::config::IssuerConfig;

/// Arguments for `passkit render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Pass template (`.yaml`, `.yml` or `.json`).
    pub template: PathBuf,

    /// Serial number for this pass, overriding the template.
    #[arg(long)]
    pub serial: Option<String>,

    /// Write to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Indented output instead of canonical compact bytes.
    #[arg(long)]
    pub pretty: bool,
}

/// Parse a template file. `.json` is read as JSON, anything else as YAML.
pub fn load_template(path: &Path) -> Result<PassTemplate> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read template: {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let template = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON template in {}", path.display()))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML template in {}", path.display()))?
    };
    Ok(template)
}

/// Build the pass a template describes, with the issuer overlay and serial applied.
pub fn render_pass(
    mut template: PassTemplate,
    issuer: Option<&IssuerConfig>,
    serial: Option<&str>,
) -> Result<Pass> {
    if let Some(issuer) = issuer {
        issuer.apply(&mut template);
    }
    let mut pass = template.build().context("template rejected")?;
    if let Some(serial) = serial {
        pass.set_serial_number(serial).context("--serial rejected")?;
    }

    let schema = PassSchema::new()?;
    schema
        .validate(&pass.to_json_value()?)
        .context("rendered pass does not satisfy pass.schema.json")?;
    Ok(pass)
}

/// Serialize a pass for output.
pub fn encode(pass: &Pass, pretty: bool) -> Result<Vec<u8>, PassKitError> {
    let canonical = pass.to_canonical()?;
    if pretty {
        let mut out = serde_json::to_vec_pretty(&canonical.to_value()?)?;
        out.push(b'\n');
        Ok(out)
    } else {
        Ok(canonical.into_bytes())
    }
}

/// Execute `passkit render`.
pub fn run_render(args: &RenderArgs, config: Option<&Path>) -> Result<u8> {
    let issuer = config.map(IssuerConfig::load).transpose()?;
    let template = load_template(&args.template)?;
    let pass = render_pass(template, issuer.as_ref(), args.serial.as_deref())?;
    let bytes = encode(&pass, args.pretty)?;

    let (pass_type, serial) = pass.identity();
    match &args.output {
        Some(path) => {
            std::fs::write(path, &bytes)
                .with_context(|| format!("failed to write pass: {}", path.display()))?;
            tracing::info!(pass_type, serial, output = %path.display(), "rendered pass");
        }
        None => {
            println!("{}", String::from_utf8_lossy(&bytes).trim_end());
            tracing::info!(pass_type, serial, "rendered pass");
        }
    }
    Ok(0)
}
