//! # passkit-pass — The Wallet Pass Document Model
//!
//! Builds `pass.json` documents for a wallet platform. The model is a tree
//! of typed values rooted at [`Pass`]:
//!
//! ```text
//! Pass
//!  ├── identity:    formatVersion, organizationName, passTypeIdentifier,
//!  │                serialNumber, teamIdentifier
//!  ├── style:       one PassStyle (boardingPass | coupon | eventTicket |
//!  │                generic | storeCard), each holding a FieldGroupSet
//!  ├── relevance:   barcodes, beacons, locations, dates, nfc
//!  ├── integration: webServiceURL, authenticationToken, userInfo, ...
//!  └── semantics:   SemanticTags
//! ```
//!
//! ## Validation Boundary
//!
//! `Pass` fields are private. The `set_*` mutators are the only writers and
//! reject empty values before any state changes. [`PassTemplate`] is the
//! inbound, all-optional shape; building it runs every field through the
//! same mutators, and `Pass` deserializes through it.
//!
//! ## Output
//!
//! [`Pass::to_canonical`] emits compact, key-sorted JSON with every unset
//! field omitted and the five identity keys always present.
//!
//! ## Crate Policy
//!
//! - Depends only on `passkit-core` internally.
//! - No I/O. Callers own reading and writing files.

pub mod field;
pub mod pass;
pub mod personalize;
pub mod records;
pub mod semantics;
pub mod style;
pub mod template;

pub use field::{FieldEntry, FieldGroup, FieldGroupSet};
pub use pass::Pass;
pub use personalize::Personalize;
pub use records::{Barcode, Beacon, Location, Nfc, DEFAULT_MESSAGE_ENCODING};
pub use semantics::{
    CurrencyAmount, PersonNameComponents, Seat, SemanticLocation, SemanticTags, WifiNetwork,
};
pub use style::{BoardingPass, PassStyle};
pub use template::PassTemplate;
