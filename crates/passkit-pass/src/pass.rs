//! # Pass Document
//!
//! [`Pass`] is the aggregate root of a `pass.json` document. Every field is
//! private. Reads go through accessors. Writes go through `set_*` mutators,
//! each of which validates its input before touching state.
//!
//! ## Mutator Rules
//!
//! | Rule | Fields | Error |
//! |------|--------|-------|
//! | Non-empty | strings, records, `userInfo`, `maxDistance` | [`ValidationError::EmptyValue`] |
//! | Non-empty collection | `barcodes`, `beacons`, `locations`, `associatedStoreIdentifiers` | [`ValidationError::EmptyValue`] |
//! | Element check | each barcode, beacon and location (`check()`) | [`ValidationError::EmptyValue`], [`ValidationError::OutOfRange`] |
//! | Fixed value | `formatVersion` (must be 1) | [`ValidationError::InvalidFixedValue`] |
//! | Passthrough | `voided`, `sharingProhibited`, `suppressStripShine`, dates, style | never fails |
//!
//! A rejected mutation leaves the document exactly as it was.
//! `set_semantics` prunes all-unset nested records before its emptiness check.
//!
//! ## Serialization
//!
//! The five identity fields (`formatVersion`, `organizationName`,
//! `passTypeIdentifier`, `serialNumber`, `teamIdentifier`) are always
//! emitted. Every other key is omitted when unset. The style occupies exactly
//! one of `boardingPass` / `coupon` / `eventTicket` / `generic` /
//! `storeCard`, or none.
//!
//! Deserialization routes through [`PassTemplate`], so parsing a document
//! applies the same mutators a caller would. An empty identity string reads
//! back as unset, so an unidentified document still round-trips.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use passkit_core::{
    is_false, require_fixed, require_non_empty, CanonicalBytes, CanonicalizationError, IsEmpty,
    PassKitError, Timestamp, ValidationError, FORMAT_VERSION,
};

use crate::field::FieldGroupSet;
use crate::records::{Barcode, Beacon, Location, Nfc};
use crate::semantics::SemanticTags;
use crate::style::{BoardingPass, PassStyle};
use crate::template::PassTemplate;

/// Validate `value` for `field`, logging the rejection.
fn checked<T: IsEmpty>(field: &'static str, value: T) -> Result<T, ValidationError> {
    require_non_empty(field, value).map_err(|e| {
        tracing::debug!(field, "rejected empty value");
        e
    })
}

/// Validate a non-empty list, then every element in it.
fn checked_each<T>(
    field: &'static str,
    items: Vec<T>,
    check: fn(&T) -> Result<(), ValidationError>,
) -> Result<Vec<T>, ValidationError> {
    let items = checked(field, items)?;
    for (index, item) in items.iter().enumerate() {
        check(item).map_err(|e| {
            tracing::debug!(field, index, error = %e, "rejected element");
            e
        })?;
    }
    Ok(items)
}

/// A wallet pass document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PassTemplate")]
pub struct Pass {
    #[serde(rename = "appLaunchURL", skip_serializing_if = "Option::is_none")]
    app_launch_url: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    associated_store_identifiers: Vec<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    authentication_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    barcodes: Vec<Barcode>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    beacons: Vec<Beacon>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    expiration_date: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    foreground_color: Option<String>,

    format_version: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    grouping_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    label_color: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    locations: Vec<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    logo_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    max_distance: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    nfc: Option<Nfc>,

    organization_name: String,

    pass_type_identifier: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    relevant_date: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    semantics: Option<SemanticTags>,

    serial_number: String,

    #[serde(skip_serializing_if = "is_false")]
    sharing_prohibited: bool,

    #[serde(flatten)]
    style: Option<PassStyle>,

    #[serde(skip_serializing_if = "is_false")]
    suppress_strip_shine: bool,

    team_identifier: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    user_info: Option<Value>,

    #[serde(skip_serializing_if = "is_false")]
    voided: bool,

    #[serde(rename = "webServiceURL", skip_serializing_if = "Option::is_none")]
    web_service_url: Option<String>,
}

impl Default for Pass {
    fn default() -> Self {
        Self::new()
    }
}

impl Pass {
    /// An empty document with `formatVersion` already set to 1.
    pub fn new() -> Self {
        Self {
            app_launch_url: None,
            associated_store_identifiers: Vec::new(),
            authentication_token: None,
            background_color: None,
            barcodes: Vec::new(),
            beacons: Vec::new(),
            description: None,
            expiration_date: None,
            foreground_color: None,
            format_version: FORMAT_VERSION,
            grouping_identifier: None,
            label_color: None,
            locations: Vec::new(),
            logo_text: None,
            max_distance: None,
            nfc: None,
            organization_name: String::new(),
            pass_type_identifier: String::new(),
            relevant_date: None,
            semantics: None,
            serial_number: String::new(),
            sharing_prohibited: false,
            style: None,
            suppress_strip_shine: false,
            team_identifier: String::new(),
            user_info: None,
            voided: false,
            web_service_url: None,
        }
    }

    // ── Identity ────────────────────────────────────────────────────

    pub fn set_organization_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.organization_name = checked("organizationName", name.into())?;
        Ok(())
    }

    pub fn set_pass_type_identifier(
        &mut self,
        identifier: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.pass_type_identifier = checked("passTypeIdentifier", identifier.into())?;
        Ok(())
    }

    pub fn set_serial_number(&mut self, number: impl Into<String>) -> Result<(), ValidationError> {
        self.serial_number = checked("serialNumber", number.into())?;
        Ok(())
    }

    pub fn set_team_identifier(&mut self, identifier: impl Into<String>) -> Result<(), ValidationError> {
        self.team_identifier = checked("teamIdentifier", identifier.into())?;
        Ok(())
    }

    /// Only `1` is accepted.
    pub fn set_format_version(&mut self, version: i64) -> Result<(), ValidationError> {
        self.format_version =
            require_fixed("formatVersion", FORMAT_VERSION, version).map_err(|e| {
                tracing::debug!(version, "rejected format version");
                e
            })?;
        Ok(())
    }

    // ── Presentation ────────────────────────────────────────────────

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), ValidationError> {
        self.description = Some(checked("description", description.into())?);
        Ok(())
    }

    pub fn set_logo_text(&mut self, text: impl Into<String>) -> Result<(), ValidationError> {
        self.logo_text = Some(checked("logoText", text.into())?);
        Ok(())
    }

    /// Colors are CSS-style strings such as `rgb(255, 255, 255)`.
    pub fn set_background_color(&mut self, color: impl Into<String>) -> Result<(), ValidationError> {
        self.background_color = Some(checked("backgroundColor", color.into())?);
        Ok(())
    }

    pub fn set_foreground_color(&mut self, color: impl Into<String>) -> Result<(), ValidationError> {
        self.foreground_color = Some(checked("foregroundColor", color.into())?);
        Ok(())
    }

    pub fn set_label_color(&mut self, color: impl Into<String>) -> Result<(), ValidationError> {
        self.label_color = Some(checked("labelColor", color.into())?);
        Ok(())
    }

    pub fn set_grouping_identifier(
        &mut self,
        identifier: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.grouping_identifier = Some(checked("groupingIdentifier", identifier.into())?);
        Ok(())
    }

    pub fn set_sharing_prohibited(&mut self, prohibited: bool) -> Result<(), ValidationError> {
        self.sharing_prohibited = prohibited;
        Ok(())
    }

    pub fn set_suppress_strip_shine(&mut self, suppress: bool) -> Result<(), ValidationError> {
        self.suppress_strip_shine = suppress;
        Ok(())
    }

    pub fn set_voided(&mut self, voided: bool) -> Result<(), ValidationError> {
        self.voided = voided;
        Ok(())
    }

    // ── Style ───────────────────────────────────────────────────────

    /// Assign the pass style, replacing any previously assigned one.
    pub fn set_style(&mut self, style: PassStyle) -> Result<(), ValidationError> {
        if let Some(previous) = &self.style {
            if previous.wire_key() != style.wire_key() {
                tracing::debug!(
                    from = previous.wire_key(),
                    to = style.wire_key(),
                    "replacing pass style"
                );
            }
        }
        self.style = Some(style);
        Ok(())
    }

    pub fn set_boarding_pass(&mut self, boarding_pass: BoardingPass) -> Result<(), ValidationError> {
        self.set_style(PassStyle::BoardingPass(boarding_pass))
    }

    pub fn set_coupon(&mut self, fields: FieldGroupSet) -> Result<(), ValidationError> {
        self.set_style(PassStyle::Coupon(fields))
    }

    pub fn set_event_ticket(&mut self, fields: FieldGroupSet) -> Result<(), ValidationError> {
        self.set_style(PassStyle::EventTicket(fields))
    }

    pub fn set_generic(&mut self, fields: FieldGroupSet) -> Result<(), ValidationError> {
        self.set_style(PassStyle::Generic(fields))
    }

    pub fn set_store_card(&mut self, fields: FieldGroupSet) -> Result<(), ValidationError> {
        self.set_style(PassStyle::StoreCard(fields))
    }

    // ── Relevance ───────────────────────────────────────────────────

    pub fn set_barcodes(&mut self, barcodes: Vec<Barcode>) -> Result<(), ValidationError> {
        self.barcodes = checked_each("barcodes", barcodes, Barcode::check)?;
        Ok(())
    }

    pub fn set_beacons(&mut self, beacons: Vec<Beacon>) -> Result<(), ValidationError> {
        self.beacons = checked_each("beacons", beacons, Beacon::check)?;
        Ok(())
    }

    /// Latitude within ±90, longitude within ±180, all finite.
    pub fn set_locations(&mut self, locations: Vec<Location>) -> Result<(), ValidationError> {
        self.locations = checked_each("locations", locations, Location::check)?;
        Ok(())
    }

    /// Meters from a location at which the pass becomes relevant. Zero is rejected.
    pub fn set_max_distance(&mut self, meters: u64) -> Result<(), ValidationError> {
        self.max_distance = Some(checked("maxDistance", meters)?);
        Ok(())
    }

    pub fn set_relevant_date(&mut self, date: Timestamp) -> Result<(), ValidationError> {
        self.relevant_date = Some(date);
        Ok(())
    }

    pub fn set_expiration_date(&mut self, date: Timestamp) -> Result<(), ValidationError> {
        self.expiration_date = Some(date);
        Ok(())
    }

    pub fn set_nfc(&mut self, nfc: Nfc) -> Result<(), ValidationError> {
        self.nfc = Some(checked("nfc", nfc)?);
        Ok(())
    }

    pub fn set_semantics(&mut self, semantics: SemanticTags) -> Result<(), ValidationError> {
        self.semantics = Some(checked("semantics", semantics.pruned())?);
        Ok(())
    }

    // ── Integration ─────────────────────────────────────────────────

    pub fn set_app_launch_url(&mut self, url: impl Into<String>) -> Result<(), ValidationError> {
        self.app_launch_url = Some(checked("appLaunchURL", url.into())?);
        Ok(())
    }

    pub fn set_associated_store_identifiers(&mut self, ids: Vec<u64>) -> Result<(), ValidationError> {
        self.associated_store_identifiers = checked("associatedStoreIdentifiers", ids)?;
        Ok(())
    }

    pub fn set_authentication_token(&mut self, token: impl Into<String>) -> Result<(), ValidationError> {
        self.authentication_token = Some(checked("authenticationToken", token.into())?);
        Ok(())
    }

    pub fn set_web_service_url(&mut self, url: impl Into<String>) -> Result<(), ValidationError> {
        self.web_service_url = Some(checked("webServiceURL", url.into())?);
        Ok(())
    }

    /// Opaque caller-defined data. `null`, `""`, `[]` and `{}` are rejected.
    pub fn set_user_info(&mut self, info: Value) -> Result<(), ValidationError> {
        self.user_info = Some(checked("userInfo", info)?);
        Ok(())
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn organization_name(&self) -> &str {
        &self.organization_name
    }

    pub fn pass_type_identifier(&self) -> &str {
        &self.pass_type_identifier
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn team_identifier(&self) -> &str {
        &self.team_identifier
    }

    pub fn format_version(&self) -> i64 {
        self.format_version
    }

    /// `(passTypeIdentifier, serialNumber)`, the pair that identifies a pass.
    pub fn identity(&self) -> (&str, &str) {
        (&self.pass_type_identifier, &self.serial_number)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn logo_text(&self) -> Option<&str> {
        self.logo_text.as_deref()
    }

    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    pub fn foreground_color(&self) -> Option<&str> {
        self.foreground_color.as_deref()
    }

    pub fn label_color(&self) -> Option<&str> {
        self.label_color.as_deref()
    }

    pub fn grouping_identifier(&self) -> Option<&str> {
        self.grouping_identifier.as_deref()
    }

    pub fn sharing_prohibited(&self) -> bool {
        self.sharing_prohibited
    }

    pub fn suppress_strip_shine(&self) -> bool {
        self.suppress_strip_shine
    }

    pub fn voided(&self) -> bool {
        self.voided
    }

    pub fn style(&self) -> Option<&PassStyle> {
        self.style.as_ref()
    }

    /// Field groups of the assigned style, for populating in place.
    pub fn style_fields_mut(&mut self) -> Option<&mut FieldGroupSet> {
        self.style.as_mut().map(PassStyle::fields_mut)
    }

    pub fn barcodes(&self) -> &[Barcode] {
        &self.barcodes
    }

    pub fn beacons(&self) -> &[Beacon] {
        &self.beacons
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn max_distance(&self) -> Option<u64> {
        self.max_distance
    }

    pub fn relevant_date(&self) -> Option<Timestamp> {
        self.relevant_date
    }

    pub fn expiration_date(&self) -> Option<Timestamp> {
        self.expiration_date
    }

    pub fn nfc(&self) -> Option<&Nfc> {
        self.nfc.as_ref()
    }

    pub fn semantics(&self) -> Option<&SemanticTags> {
        self.semantics.as_ref()
    }

    pub fn app_launch_url(&self) -> Option<&str> {
        self.app_launch_url.as_deref()
    }

    pub fn associated_store_identifiers(&self) -> &[u64] {
        &self.associated_store_identifiers
    }

    pub fn authentication_token(&self) -> Option<&str> {
        self.authentication_token.as_deref()
    }

    pub fn web_service_url(&self) -> Option<&str> {
        self.web_service_url.as_deref()
    }

    pub fn user_info(&self) -> Option<&Value> {
        self.user_info.as_ref()
    }

    // ── Serialization ───────────────────────────────────────────────

    /// The document as a JSON value, with empty fields omitted.
    pub fn to_json_value(&self) -> Result<Value, CanonicalizationError> {
        Ok(serde_json::to_value(self)?)
    }

    /// The canonical `pass.json` bytes: compact, sorted keys.
    ///
    /// # Errors
    ///
    /// Every map key in a pass is a string, so this does not fail for a
    /// document built through the mutators.
    pub fn to_canonical(&self) -> Result<CanonicalBytes, CanonicalizationError> {
        CanonicalBytes::new(self)
    }

    /// Parse a `pass.json` document, validating every field through the mutators.
    ///
    /// # Errors
    ///
    /// `Json` for malformed input or an unknown code, `Validation` for the
    /// first mutator rejection.
    pub fn from_json(bytes: &[u8]) -> Result<Self, PassKitError> {
        let template: PassTemplate = serde_json::from_slice(bytes)?;
        Ok(template.build()?)
    }

    /// Like [`Pass::from_json`], for a document already parsed as JSON.
    pub fn from_value(value: Value) -> Result<Self, PassKitError> {
        let template: PassTemplate = serde_json::from_value(value)?;
        Ok(template.build()?)
    }
}
