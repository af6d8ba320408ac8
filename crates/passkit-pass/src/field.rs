//! # Field Entries and Field Group Sets
//!
//! A [`FieldEntry`] is one labeled display value. A [`FieldGroupSet`] holds
//! the five ordered display regions every pass style shares: header,
//! primary, secondary, auxiliary and back.
//!
//! Entry contents are not validated. Values are opaque strings. The core
//! performs no date or number parsing. Formatting hints are passed through
//! for the wallet platform to apply.

use serde::{Deserialize, Deserializer, Serialize};

use passkit_core::{
    is_false, retain_distinct, DataDetectorType, DateStyle, NumberStyle, TextAlignment, TimeStyle,
};

/// One display field on a pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldEntry {
    /// Field identifier, unique within its pass by convention.
    pub key: String,

    /// Raw display value.
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Rich-text value, shown in place of `value` on back fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributed_value: Option<String>,

    /// Notification text shown when the value changes. Contains `%@`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_message: Option<String>,

    /// ISO 4217 code; the value is rendered as a currency amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// A set: repeats are dropped on parse, first occurrence wins.
    #[serde(
        default,
        deserialize_with = "distinct_detectors",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub data_detector_types: Vec<DataDetectorType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_style: Option<DateStyle>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub ignores_time_zone: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_relative: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_style: Option<NumberStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_alignment: Option<TextAlignment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_style: Option<TimeStyle>,
}

impl FieldEntry {
    /// Create an entry with only a key and a value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_attributed_value(mut self, html: impl Into<String>) -> Self {
        self.attributed_value = Some(html.into());
        self
    }

    pub fn with_change_message(mut self, template: impl Into<String>) -> Self {
        self.change_message = Some(template.into());
        self
    }

    pub fn with_currency_code(mut self, code: impl Into<String>) -> Self {
        self.currency_code = Some(code.into());
        self
    }

    /// Add a data detector. Adding one that is already present is a no-op.
    pub fn with_data_detector(mut self, detector: DataDetectorType) -> Self {
        if !self.data_detector_types.contains(&detector) {
            self.data_detector_types.push(detector);
        }
        self
    }

    pub fn with_date_style(mut self, style: DateStyle) -> Self {
        self.date_style = Some(style);
        self
    }

    pub fn with_time_style(mut self, style: TimeStyle) -> Self {
        self.time_style = Some(style);
        self
    }

    pub fn with_number_style(mut self, style: NumberStyle) -> Self {
        self.number_style = Some(style);
        self
    }

    pub fn with_text_alignment(mut self, alignment: TextAlignment) -> Self {
        self.text_alignment = Some(alignment);
        self
    }

    pub fn relative(mut self, is_relative: bool) -> Self {
        self.is_relative = is_relative;
        self
    }

    pub fn ignoring_time_zone(mut self, ignores: bool) -> Self {
        self.ignores_time_zone = ignores;
        self
    }
}

fn distinct_detectors<'de, D>(deserializer: D) -> Result<Vec<DataDetectorType>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut detectors = Vec::<DataDetectorType>::deserialize(deserializer)?;
    retain_distinct(&mut detectors);
    Ok(detectors)
}

/// Names one of the five display regions of a [`FieldGroupSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    Header,
    Primary,
    Secondary,
    Auxiliary,
    Back,
}

impl FieldGroup {
    /// All regions, front to back.
    pub const ALL: [FieldGroup; 5] = [
        Self::Header,
        Self::Primary,
        Self::Secondary,
        Self::Auxiliary,
        Self::Back,
    ];

    /// The JSON key of this region inside a style object.
    pub fn wire_key(&self) -> &'static str {
        match self {
            Self::Header => "headerFields",
            Self::Primary => "primaryFields",
            Self::Secondary => "secondaryFields",
            Self::Auxiliary => "auxiliaryFields",
            Self::Back => "backFields",
        }
    }
}

/// The five ordered display regions shared by every pass style.
///
/// Order within a region is display order and is preserved on output.
/// Empty regions are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldGroupSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auxiliary_fields: Vec<FieldEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub back_fields: Vec<FieldEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header_fields: Vec<FieldEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub primary_fields: Vec<FieldEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_fields: Vec<FieldEntry>,
}

impl FieldGroupSet {
    /// An empty set with all five regions empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self, group: FieldGroup) -> &[FieldEntry] {
        match group {
            FieldGroup::Header => &self.header_fields,
            FieldGroup::Primary => &self.primary_fields,
            FieldGroup::Secondary => &self.secondary_fields,
            FieldGroup::Auxiliary => &self.auxiliary_fields,
            FieldGroup::Back => &self.back_fields,
        }
    }

    pub fn fields_mut(&mut self, group: FieldGroup) -> &mut Vec<FieldEntry> {
        match group {
            FieldGroup::Header => &mut self.header_fields,
            FieldGroup::Primary => &mut self.primary_fields,
            FieldGroup::Secondary => &mut self.secondary_fields,
            FieldGroup::Auxiliary => &mut self.auxiliary_fields,
            FieldGroup::Back => &mut self.back_fields,
        }
    }

    /// Append an entry to the end of `group`.
    pub fn push(&mut self, group: FieldGroup, entry: FieldEntry) -> &mut Self {
        self.fields_mut(group).push(entry);
        self
    }

    /// Look up an entry by key across all regions, front to back.
    pub fn find(&self, key: &str) -> Option<(FieldGroup, &FieldEntry)> {
        FieldGroup::ALL
            .iter()
            .find_map(|g| self.fields(*g).iter().find(|e| e.key == key).map(|e| (*g, e)))
    }

    /// Total number of entries across all regions.
    pub fn len(&self) -> usize {
        FieldGroup::ALL.iter().map(|g| self.fields(*g).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
