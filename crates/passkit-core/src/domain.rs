//! # Enumerated Domains — Wire Vocabularies
//!
//! Closed, string-valued vocabularies used by pass documents. Each domain is
//! a native enum whose variants map exhaustively to the `PK…` string codes
//! defined by the wallet platform. There is one mapping per enum, written
//! once inside [`wire_enum!`]. `as_str()`, `FromStr`, `Display` and serde all
//! derive from it, so the serialized form and the parsed form cannot drift.
//!
//! ## Membership
//!
//! Parsing is exact and case-sensitive. `"PKBarcodeFormatQR"` parses,
//! `"QR"` and `"pkbarcodeformatqr"` do not. Deserialization routes through
//! `FromStr`, so an unknown code in an inbound document is rejected at the
//! boundary instead of being carried through as an opaque string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Declares a wire-coded enum and its exhaustive string mapping.
///
/// Generates the enum plus `DOMAIN`, `all()`, `as_str()`, `Display`,
/// `FromStr`, `Serialize` and a validating `Deserialize`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Name of this domain as reported in parse errors.
            pub const DOMAIN: &'static str = stringify!($name);

            /// Every variant, in declaration order.
            pub fn all() -> &'static [$name] {
                &[ $( Self::$variant, )+ ]
            }

            /// The wire code for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $code, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $code => Ok(Self::$variant), )+
                    other => Err(ValidationError::UnknownCode {
                        domain: Self::DOMAIN,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

wire_enum! {
    /// Symbology used to render a pass barcode.
    pub enum BarcodeFormat {
        /// QR code.
        Qr => "PKBarcodeFormatQR",
        /// PDF417 stacked linear barcode.
        Pdf417 => "PKBarcodeFormatPDF417",
        /// Aztec code.
        Aztec => "PKBarcodeFormatAztec",
        /// Code 128 linear barcode.
        Code128 => "PKBarcodeFormatCode128",
    }
}

wire_enum! {
    /// Detectors the platform runs over a back-field value.
    pub enum DataDetectorType {
        PhoneNumber => "PKDataDetectorTypePhoneNumber",
        Link => "PKDataDetectorTypeLink",
        Address => "PKDataDetectorTypeAddress",
        CalendarEvent => "PKDataDetectorTypeCalendarEvent",
    }
}

wire_enum! {
    /// Rendering style for the date part of a field value.
    pub enum DateStyle {
        None => "PKDateStyleNone",
        Short => "PKDateStyleShort",
        Medium => "PKDateStyleMedium",
        Long => "PKDateStyleLong",
        Full => "PKDateStyleFull",
    }
}

wire_enum! {
    /// Rendering style for numeric field values.
    pub enum NumberStyle {
        Decimal => "PKNumberStyleDecimal",
        Percent => "PKNumberStylePercent",
        Scientific => "PKNumberStyleScientific",
        SpellOut => "PKNumberStyleSpellOut",
    }
}

wire_enum! {
    /// Contact fields a personalizable pass may request from the holder.
    pub enum PassPersonalizationField {
        Name => "PKPassPersonalizationFieldName",
        PostalCode => "PKPassPersonalizationFieldPostalCode",
        EmailAddress => "PKPassPersonalizationFieldEmailAddress",
        PhoneNumber => "PKPassPersonalizationFieldPhoneNumber",
    }
}

wire_enum! {
    /// Horizontal alignment of a field's text.
    pub enum TextAlignment {
        Left => "PKTextAlignmentLeft",
        Center => "PKTextAlignmentCenter",
        Right => "PKTextAlignmentRight",
        Natural => "PKTextAlignmentNatural",
    }
}

wire_enum! {
    /// Rendering style for the time part of a field value.
    pub enum TimeStyle {
        None => "PKTimeStyleNone",
        Short => "PKTimeStyleShort",
        Medium => "PKTimeStyleMedium",
        Long => "PKTimeStyleLong",
        Full => "PKTimeStyleFull",
    }
}

wire_enum! {
    /// Mode of transport for a boarding pass.
    pub enum TransitType {
        Air => "PKTransitTypeAir",
        Boat => "PKTransitTypeBoat",
        Bus => "PKTransitTypeBus",
        Generic => "PKTransitTypeGeneric",
        Train => "PKTransitTypeTrain",
    }
}

/// Every domain with its wire codes, in a stable order.
///
/// Used by tooling that lists the vocabularies (for example `passkit domains`).
pub fn catalogue() -> Vec<(&'static str, Vec<&'static str>)> {
    fn codes<T: Copy>(all: &[T], as_str: fn(&T) -> &'static str) -> Vec<&'static str> {
        all.iter().map(as_str).collect()
    }

    vec![
        (BarcodeFormat::DOMAIN, codes(BarcodeFormat::all(), BarcodeFormat::as_str)),
        (DataDetectorType::DOMAIN, codes(DataDetectorType::all(), DataDetectorType::as_str)),
        (DateStyle::DOMAIN, codes(DateStyle::all(), DateStyle::as_str)),
        (NumberStyle::DOMAIN, codes(NumberStyle::all(), NumberStyle::as_str)),
        (
            PassPersonalizationField::DOMAIN,
            codes(PassPersonalizationField::all(), PassPersonalizationField::as_str),
        ),
        (TextAlignment::DOMAIN, codes(TextAlignment::all(), TextAlignment::as_str)),
        (TimeStyle::DOMAIN, codes(TimeStyle::all(), TimeStyle::as_str)),
        (TransitType::DOMAIN, codes(TransitType::all(), TransitType::as_str)),
    ]
}
