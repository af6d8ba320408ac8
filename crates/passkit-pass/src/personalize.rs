//! # Personalization Document
//!
//! `personalization.json` accompanies a reward-enrollment pass. It lists
//! the details the wallet asks the holder for before the pass is issued.
//!
//! Parsing applies the same setters, so a parsed document is deduplicated
//! and never holds an empty value.

use serde::{Deserialize, Serialize};

use passkit_core::{
    require_non_empty, retain_distinct, CanonicalBytes, CanonicalizationError,
    PassPersonalizationField, ValidationError,
};

/// The personalization request attached to a pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PersonalizeSerde")]
pub struct Personalize {
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    required_personalization_fields: Vec<PassPersonalizationField>,

    #[serde(skip_serializing_if = "Option::is_none")]
    terms_and_conditions: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonalizeSerde {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    required_personalization_fields: Option<Vec<PassPersonalizationField>>,
    #[serde(default)]
    terms_and_conditions: Option<String>,
}

impl TryFrom<PersonalizeSerde> for Personalize {
    type Error = ValidationError;

    fn try_from(value: PersonalizeSerde) -> Result<Self, Self::Error> {
        let mut personalize = Self::new();
        if let Some(description) = value.description {
            personalize.set_description(description)?;
        }
        if let Some(fields) = value.required_personalization_fields {
            personalize.set_required_personalization_fields(fields)?;
        }
        if let Some(terms) = value.terms_and_conditions {
            personalize.set_terms_and_conditions(terms)?;
        }
        Ok(personalize)
    }
}

impl Personalize {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shown to the holder on the enrollment sheet.
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), ValidationError> {
        self.description = require_non_empty("description", description.into())?;
        Ok(())
    }

    /// Duplicates are dropped, first occurrence wins.
    pub fn set_required_personalization_fields(
        &mut self,
        fields: Vec<PassPersonalizationField>,
    ) -> Result<(), ValidationError> {
        let mut fields = require_non_empty("requiredPersonalizationFields", fields)?;
        retain_distinct(&mut fields);
        self.required_personalization_fields = fields;
        Ok(())
    }

    pub fn set_terms_and_conditions(&mut self, terms: impl Into<String>) -> Result<(), ValidationError> {
        self.terms_and_conditions = Some(require_non_empty("termsAndConditions", terms.into())?);
        Ok(())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn required_personalization_fields(&self) -> &[PassPersonalizationField] {
        &self.required_personalization_fields
    }

    pub fn terms_and_conditions(&self) -> Option<&str> {
        self.terms_and_conditions.as_deref()
    }

    pub fn to_canonical(&self) -> Result<CanonicalBytes, CanonicalizationError> {
        CanonicalBytes::new(self)
    }
}
