//! # Issuer Configuration
//!
//! The issuer profile holds the values every pass from one issuer shares:
//! the identity triple plus optional web-service registration and brand
//! colors. It is loaded from YAML with `--config issuer.yaml`:
//!
//! ```yaml
//! organizationName: Acme
//! passTypeIdentifier: pass.com.acme.demo
//! teamIdentifier: ACME1234
//! webServiceURL: https://passes.acme.test/
//! authenticationToken: vxwxd7J8AlNNFPS8k0a0FfUFtq0ewzFdc
//! colors:
//!   background: rgb(10, 20, 30)
//!   foreground: rgb(255, 255, 255)
//! ```
//!
//! Identity fields always override the template. Web-service and color
//! values only fill gaps the template leaves.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use passkit_pass::PassTemplate;

/// Default brand colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Colors {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub label: Option<String>,
}

/// An issuer profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IssuerConfig {
    pub organization_name: String,
    pub pass_type_identifier: String,
    pub team_identifier: String,
    #[serde(rename = "webServiceURL", default)]
    pub web_service_url: Option<String>,
    #[serde(default)]
    pub authentication_token: Option<String>,
    #[serde(default)]
    pub colors: Colors,
}

impl IssuerConfig {
    /// Read and parse an issuer profile.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read issuer config: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid issuer config YAML in {}", path.display()))?;
        tracing::debug!(
            organization = %config.organization_name,
            pass_type = %config.pass_type_identifier,
            "loaded issuer config"
        );
        Ok(config)
    }

    /// Overlay this profile onto a template.
    pub fn apply(&self, template: &mut PassTemplate) {
        template.organization_name = Some(self.organization_name.clone());
        template.pass_type_identifier = Some(self.pass_type_identifier.clone());
        template.team_identifier = Some(self.team_identifier.clone());

        fill(&mut template.web_service_url, &self.web_service_url);
        fill(&mut template.authentication_token, &self.authentication_token);
        fill(&mut template.background_color, &self.colors.background);
        fill(&mut template.foreground_color, &self.colors.foreground);
        fill(&mut template.label_color, &self.colors.label);
    }
}

fn fill(slot: &mut Option<String>, default: &Option<String>) {
    if slot.is_none() {
        slot.clone_from(default);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUER: &str = r#"
organizationName: Acme
passTypeIdentifier: pass.com.acme.demo
teamIdentifier: ACME1234
webServiceURL: https://passes.acme.test/
colors:
  background: rgb(10, 20, 30)
"#;

    #[test]
    fn parses_issuer_yaml() {
        let config: IssuerConfig = serde_yaml::from_str(ISSUER).unwrap();
        assert_eq!(config.organization_name, "Acme");
        assert_eq!(config.web_service_url.as_deref(), Some("https://passes.acme.test/"));
        assert_eq!(config.colors.background.as_deref(), Some("rgb(10, 20, 30)"));
        assert!(config.authentication_token.is_none());
    }

    #[test]
    fn rejects_unknown_keys() {
        let yaml = format!("{ISSUER}teamID: oops\n");
        assert!(serde_yaml::from_str::<IssuerConfig>(&yaml).is_err());
    }

    #[test]
    fn identity_overrides_template() {
        let config: IssuerConfig = serde_yaml::from_str(ISSUER).unwrap();
        let mut template = PassTemplate {
            organization_name: Some("Someone Else".into()),
            ..PassTemplate::default()
        };
        config.apply(&mut template);
        assert_eq!(template.organization_name.as_deref(), Some("Acme"));
        assert_eq!(template.team_identifier.as_deref(), Some("ACME1234"));
    }

    #[test]
    fn template_values_win_over_defaults() {
        let config: IssuerConfig = serde_yaml::from_str(ISSUER).unwrap();
        let mut template = PassTemplate {
            background_color: Some("rgb(0, 0, 0)".into()),
            ..PassTemplate::default()
        };
        config.apply(&mut template);
        assert_eq!(template.background_color.as_deref(), Some("rgb(0, 0, 0)"));
        assert_eq!(
            template.web_service_url.as_deref(),
            Some("https://passes.acme.test/")
        );
        assert!(template.label_color.is_none());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = IssuerConfig::load(Path::new("/nonexistent/issuer.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read issuer config"));
    }
}
