//! # Auxiliary Records
//!
//! Small value objects referenced from the pass document: barcodes,
//! iBeacon regions, geographic locations and the NFC payload.
//!
//! Each record implements [`IsEmpty`] as "nothing set". The pass mutators
//! reject an empty record outright, and the list mutators run
//! `check()` on every element before storing the list.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use passkit_core::{is_false, BarcodeFormat, IsEmpty, ValidationError};

/// Text encoding the wallet platform assumes when none is given.
pub const DEFAULT_MESSAGE_ENCODING: &str = "iso-8859-1";

/// A barcode rendered on the front of the pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barcode {
    pub format: BarcodeFormat,

    /// Payload encoded into the barcode.
    pub message: String,

    /// IANA character set name used to encode `message`.
    #[serde(default = "default_message_encoding")]
    pub message_encoding: String,

    /// Human-readable text displayed near the barcode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

fn default_message_encoding() -> String {
    DEFAULT_MESSAGE_ENCODING.to_string()
}

impl Barcode {
    pub fn new(format: BarcodeFormat, message: impl Into<String>) -> Self {
        Self {
            format,
            message: message.into(),
            message_encoding: default_message_encoding(),
            alt_text: None,
        }
    }

    pub fn with_alt_text(mut self, text: impl Into<String>) -> Self {
        self.alt_text = Some(text.into());
        self
    }

    pub fn with_message_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.message_encoding = encoding.into();
        self
    }

    /// A barcode needs a message and the name of its encoding.
    pub fn check(&self) -> Result<(), ValidationError> {
        if IsEmpty::is_empty(self) {
            return Err(ValidationError::EmptyValue { field: "message" });
        }
        if self.message_encoding.is_empty() {
            return Err(ValidationError::EmptyValue {
                field: "messageEncoding",
            });
        }
        Ok(())
    }
}

impl IsEmpty for Barcode {
    /// A barcode without a message has nothing to render.
    fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

/// An iBeacon region that makes the pass relevant when in range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beacon {
    #[serde(rename = "proximityUUID")]
    pub proximity_uuid: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor: Option<u16>,

    /// Lock-screen text shown when the beacon is in range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_text: Option<String>,
}

impl Beacon {
    pub fn new(proximity_uuid: Uuid) -> Self {
        Self {
            proximity_uuid,
            major: None,
            minor: None,
            relevant_text: None,
        }
    }

    pub fn with_major_minor(mut self, major: u16, minor: u16) -> Self {
        self.major = Some(major);
        self.minor = Some(minor);
        self
    }

    pub fn with_relevant_text(mut self, text: impl Into<String>) -> Self {
        self.relevant_text = Some(text.into());
        self
    }

    /// The nil UUID identifies no region.
    pub fn check(&self) -> Result<(), ValidationError> {
        if IsEmpty::is_empty(self) {
            return Err(ValidationError::EmptyValue {
                field: "proximityUUID",
            });
        }
        Ok(())
    }
}

impl IsEmpty for Beacon {
    fn is_empty(&self) -> bool {
        self.proximity_uuid.is_nil()
    }
}

/// A geographic point that makes the pass relevant when nearby.
///
/// Latitude and longitude are always emitted, including `0.0`: the equator
/// and the prime meridian are real coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,

    pub longitude: f64,

    /// Meters above sea level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_text: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
            relevant_text: None,
        }
    }

    pub fn with_altitude(mut self, meters: f64) -> Self {
        self.altitude = Some(meters);
        self
    }

    pub fn with_relevant_text(mut self, text: impl Into<String>) -> Self {
        self.relevant_text = Some(text.into());
        self
    }

    /// Coordinates must be finite degrees on the globe. Altitude only has to
    /// be finite.
    pub fn check(&self) -> Result<(), ValidationError> {
        within("latitude", self.latitude, 90.0, "between -90 and 90")?;
        within("longitude", self.longitude, 180.0, "between -180 and 180")?;
        if let Some(altitude) = self.altitude {
            within("altitude", altitude, f64::MAX, "finite")?;
        }
        Ok(())
    }
}

fn within(
    field: &'static str,
    value: f64,
    limit: f64,
    bounds: &'static str,
) -> Result<(), ValidationError> {
    if value.is_finite() && value.abs() <= limit {
        return Ok(());
    }
    Err(ValidationError::OutOfRange {
        field,
        value: value.to_string(),
        bounds,
    })
}

/// NFC payload for contactless redemption.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nfc {
    /// Payload transmitted to the terminal.
    pub message: String,

    /// Base64 X.509 public key used to encrypt the payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_public_key: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub requires_authentication: bool,
}

impl Nfc {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_encryption_public_key(mut self, key: impl Into<String>) -> Self {
        self.encryption_public_key = Some(key.into());
        self
    }

    pub fn requiring_authentication(mut self, required: bool) -> Self {
        self.requires_authentication = required;
        self
    }
}

impl IsEmpty for Nfc {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn barcode_defaults_encoding() {
        let bc = Barcode::new(BarcodeFormat::Qr, "TICKET-0001");
        assert_eq!(
            serde_json::to_value(&bc).unwrap(),
            json!({
                "format": "PKBarcodeFormatQR",
                "message": "TICKET-0001",
                "messageEncoding": "iso-8859-1"
            })
        );
    }

    #[test]
    fn barcode_encoding_defaults_on_parse() {
        let bc: Barcode =
            serde_json::from_value(json!({"format": "PKBarcodeFormatAztec", "message": "x"})).unwrap();
        assert_eq!(bc.message_encoding, DEFAULT_MESSAGE_ENCODING);
    }

    #[test]
    fn barcode_with_alt_text() {
        let bc = Barcode::new(BarcodeFormat::Code128, "123").with_alt_text("123");
        assert_eq!(serde_json::to_value(&bc).unwrap()["altText"], json!("123"));
    }

    #[test]
    fn barcode_without_message_is_empty() {
        assert!(IsEmpty::is_empty(&Barcode::new(BarcodeFormat::Qr, "")));
        assert!(!IsEmpty::is_empty(&Barcode::new(BarcodeFormat::Qr, "m")));
    }

    #[test]
    fn beacon_uses_uppercase_uuid_key() {
        let id = Uuid::parse_str("f8f589e9-c07e-58b0-aeab-a36be4d48fac").unwrap();
        let beacon = Beacon::new(id).with_major_minor(1, 0);
        assert_eq!(
            serde_json::to_value(&beacon).unwrap(),
            json!({
                "proximityUUID": "f8f589e9-c07e-58b0-aeab-a36be4d48fac",
                "major": 1,
                "minor": 0
            })
        );
    }

    #[test]
    fn beacon_nil_uuid_is_empty() {
        assert!(IsEmpty::is_empty(&Beacon::new(Uuid::nil())));
    }

    #[test]
    fn beacon_rejects_bad_uuid_on_parse() {
        let raw = json!({"proximityUUID": "not-a-uuid"});
        assert!(serde_json::from_value::<Beacon>(raw).is_err());
    }

    #[test]
    fn location_emits_zero_coordinates() {
        let loc = Location::new(0.0, 0.0);
        assert_eq!(
            serde_json::to_value(&loc).unwrap(),
            json!({"latitude": 0.0, "longitude": 0.0})
        );
    }

    #[test]
    fn location_optional_members() {
        let loc = Location::new(37.33, -122.03)
            .with_altitude(12.5)
            .with_relevant_text("Store nearby");
        let v = serde_json::to_value(&loc).unwrap();
        assert_eq!(v["altitude"], json!(12.5));
        assert_eq!(v["relevantText"], json!("Store nearby"));
    }

    #[test]
    fn barcode_check() {
        assert!(Barcode::new(BarcodeFormat::Qr, "m").check().is_ok());
        assert_eq!(
            Barcode::new(BarcodeFormat::Qr, "").check().unwrap_err(),
            ValidationError::EmptyValue { field: "message" }
        );
        let unnamed = Barcode::new(BarcodeFormat::Qr, "m").with_message_encoding("");
        assert_eq!(unnamed.check().unwrap_err().field(), Some("messageEncoding"));
    }

    #[test]
    fn beacon_check_rejects_nil_uuid() {
        assert!(Beacon::new(Uuid::nil()).check().is_err());
        assert!(Beacon::new(Uuid::new_v4()).check().is_ok());
    }

    #[test]
    fn location_check_bounds() {
        assert!(Location::new(90.0, -180.0).check().is_ok());
        assert!(Location::new(-33.86, 151.21).with_altitude(-12.0).check().is_ok());

        let err = Location::new(200.0, 0.0).check().unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "latitude",
                value: "200".to_string(),
                bounds: "between -90 and 90",
            }
        );
        assert_eq!(
            Location::new(0.0, 180.5).check().unwrap_err().field(),
            Some("longitude")
        );
        assert_eq!(
            Location::new(f64::NAN, 0.0).check().unwrap_err().field(),
            Some("latitude")
        );
        assert_eq!(
            Location::new(0.0, 0.0)
                .with_altitude(f64::INFINITY)
                .check()
                .unwrap_err()
                .field(),
            Some("altitude")
        );
    }

    #[test]
    fn nfc_omits_false_authentication() {
        let nfc = Nfc::new("payload");
        assert_eq!(serde_json::to_value(&nfc).unwrap(), json!({"message": "payload"}));
        let nfc = nfc.requiring_authentication(true);
        assert_eq!(
            serde_json::to_value(&nfc).unwrap()["requiresAuthentication"],
            json!(true)
        );
    }

    #[test]
    fn default_nfc_is_empty() {
        assert!(IsEmpty::is_empty(&Nfc::default()));
        assert!(!IsEmpty::is_empty(&Nfc::default().requiring_authentication(true)));
    }
}
