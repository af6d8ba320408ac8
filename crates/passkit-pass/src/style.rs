//! # Pass Style Variants
//!
//! A pass is exactly one of five styles. All five share a
//! [`FieldGroupSet`]. Only the boarding pass carries extra data, its
//! [`TransitType`].
//!
//! ## Design Decision
//!
//! The style is a single sum type held in one `Option<PassStyle>` slot on
//! the pass. Five independent optional slots would let a document carry a
//! coupon and a store card at once, which the wallet platform rejects.
//! With one slot, assigning a style replaces the previous one and double
//! population cannot be expressed.
//!
//! On the wire the style is an externally tagged object:
//! `{"boardingPass": {"transitType": "...", "primaryFields": [...]}}`.

use serde::{Deserialize, Serialize};

use passkit_core::TransitType;

use crate::field::FieldGroupSet;

/// Field groups plus the mode of transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardingPass {
    pub transit_type: TransitType,

    #[serde(flatten)]
    pub fields: FieldGroupSet,
}

impl BoardingPass {
    /// A boarding pass with empty field groups.
    pub fn new(transit_type: TransitType) -> Self {
        Self {
            transit_type,
            fields: FieldGroupSet::new(),
        }
    }
}

/// The five mutually exclusive pass styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PassStyle {
    BoardingPass(BoardingPass),
    Coupon(FieldGroupSet),
    EventTicket(FieldGroupSet),
    Generic(FieldGroupSet),
    StoreCard(FieldGroupSet),
}

impl PassStyle {
    /// Wire keys of every style, in declaration order.
    pub const WIRE_KEYS: [&'static str; 5] =
        ["boardingPass", "coupon", "eventTicket", "generic", "storeCard"];

    pub fn boarding_pass(transit_type: TransitType) -> Self {
        Self::BoardingPass(BoardingPass::new(transit_type))
    }

    pub fn coupon() -> Self {
        Self::Coupon(FieldGroupSet::new())
    }

    pub fn event_ticket() -> Self {
        Self::EventTicket(FieldGroupSet::new())
    }

    pub fn generic() -> Self {
        Self::Generic(FieldGroupSet::new())
    }

    pub fn store_card() -> Self {
        Self::StoreCard(FieldGroupSet::new())
    }

    /// The top-level key this style occupies in `pass.json`.
    pub fn wire_key(&self) -> &'static str {
        match self {
            Self::BoardingPass(_) => "boardingPass",
            Self::Coupon(_) => "coupon",
            Self::EventTicket(_) => "eventTicket",
            Self::Generic(_) => "generic",
            Self::StoreCard(_) => "storeCard",
        }
    }

    pub fn fields(&self) -> &FieldGroupSet {
        match self {
            Self::BoardingPass(bp) => &bp.fields,
            Self::Coupon(f) | Self::EventTicket(f) | Self::Generic(f) | Self::StoreCard(f) => f,
        }
    }

    pub fn fields_mut(&mut self) -> &mut FieldGroupSet {
        match self {
            Self::BoardingPass(bp) => &mut bp.fields,
            Self::Coupon(f) | Self::EventTicket(f) | Self::Generic(f) | Self::StoreCard(f) => f,
        }
    }

    /// `Some` only for boarding passes.
    pub fn transit_type(&self) -> Option<TransitType> {
        match self {
            Self::BoardingPass(bp) => Some(bp.transit_type),
            Self::Coupon(_) | Self::EventTicket(_) | Self::Generic(_) | Self::StoreCard(_) => None,
        }
    }
}

impl From<BoardingPass> for PassStyle {
    fn from(bp: BoardingPass) -> Self {
        Self::BoardingPass(bp)
    }
}
