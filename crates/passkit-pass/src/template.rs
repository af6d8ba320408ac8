//! # Pass Templates
//!
//! [`PassTemplate`] is the inbound shape of a pass: every key optional, no
//! validation on parse. [`PassTemplate::build`] turns it into a [`Pass`] by
//! applying each present field through the matching `set_*` mutator, so a
//! parsed document obeys exactly the rules a programmatic one does.
//!
//! A template may name at most one style key. Two or more is
//! [`ValidationError::ConflictingStyles`].
//!
//! The four identity strings are emitted even when unset, so an empty one
//! here means "unset" rather than a rejected value. Every other empty value
//! is rejected by its mutator.
//!
//! `Pass` deserializes through this type (`#[serde(try_from = "PassTemplate")]`),
//! and the CLI overlays issuer configuration onto a template before building.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use passkit_core::{Timestamp, ValidationError};

use crate::field::FieldGroupSet;
use crate::pass::Pass;
use crate::records::{Barcode, Beacon, Location, Nfc};
use crate::semantics::SemanticTags;
use crate::style::{BoardingPass, PassStyle};

/// A pass as written by hand: all keys optional, nothing validated yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassTemplate {
    #[serde(rename = "appLaunchURL", default, skip_serializing_if = "Option::is_none")]
    pub app_launch_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_store_identifiers: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcodes: Option<Vec<Barcode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beacons: Option<Vec<Beacon>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boarding_pass: Option<BoardingPass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon: Option<FieldGroupSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_ticket: Option<FieldGroupSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic: Option<FieldGroupSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nfc: Option<Nfc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_type_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantics: Option<SemanticTags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_prohibited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_card: Option<FieldGroupSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppress_strip_shine: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voided: Option<bool>,
    #[serde(rename = "webServiceURL", default, skip_serializing_if = "Option::is_none")]
    pub web_service_url: Option<String>,
}

/// Apply every present template field through its mutator.
macro_rules! apply {
    ($pass:ident; $( $value:expr => $setter:ident ),+ $(,)?) => {
        $(
            if let Some(v) = $value {
                $pass.$setter(v)?;
            }
        )+
    };
}

impl PassTemplate {
    /// Remove and return the single style this template names.
    fn take_style(&mut self) -> Result<Option<PassStyle>, ValidationError> {
        let candidates = [
            self.boarding_pass.take().map(PassStyle::BoardingPass),
            self.coupon.take().map(PassStyle::Coupon),
            self.event_ticket.take().map(PassStyle::EventTicket),
            self.generic.take().map(PassStyle::Generic),
            self.store_card.take().map(PassStyle::StoreCard),
        ];
        let mut present = candidates.into_iter().flatten();
        let first = present.next();
        if let (Some(a), Some(b)) = (first.as_ref(), present.next()) {
            tracing::debug!(first = a.wire_key(), second = b.wire_key(), "conflicting styles");
            return Err(ValidationError::ConflictingStyles {
                first: a.wire_key(),
                second: b.wire_key(),
            });
        }
        Ok(first)
    }

    /// Build a validated [`Pass`].
    ///
    /// # Errors
    ///
    /// The first mutator rejection, or [`ValidationError::ConflictingStyles`].
    pub fn build(mut self) -> Result<Pass, ValidationError> {
        let style = self.take_style()?;
        let mut pass = Pass::new();

        apply!(pass;
            self.format_version => set_format_version,
            self.organization_name.filter(|s| !s.is_empty()) => set_organization_name,
            self.pass_type_identifier.filter(|s| !s.is_empty()) => set_pass_type_identifier,
            self.serial_number.filter(|s| !s.is_empty()) => set_serial_number,
            self.team_identifier.filter(|s| !s.is_empty()) => set_team_identifier,
            self.description => set_description,
            self.logo_text => set_logo_text,
            self.background_color => set_background_color,
            self.foreground_color => set_foreground_color,
            self.label_color => set_label_color,
            self.grouping_identifier => set_grouping_identifier,
            self.sharing_prohibited => set_sharing_prohibited,
            self.suppress_strip_shine => set_suppress_strip_shine,
            self.voided => set_voided,
            style => set_style,
            self.barcodes => set_barcodes,
            self.beacons => set_beacons,
            self.locations => set_locations,
            self.max_distance => set_max_distance,
            self.relevant_date => set_relevant_date,
            self.expiration_date => set_expiration_date,
            self.nfc => set_nfc,
            self.semantics => set_semantics,
            self.app_launch_url => set_app_launch_url,
            self.associated_store_identifiers => set_associated_store_identifiers,
            self.authentication_token => set_authentication_token,
            self.web_service_url => set_web_service_url,
            self.user_info => set_user_info,
        );

        Ok(pass)
    }
}

impl TryFrom<PassTemplate> for Pass {
    type Error = ValidationError;

    fn try_from(template: PassTemplate) -> Result<Self, Self::Error> {
        template.build()
    }
}
