//! # passkit-core — Foundational Types for Wallet Pass Documents
//!
//! This crate is the leaf of the workspace. It defines the primitives every
//! other crate builds on and depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Native enums for wire vocabularies.** Barcode formats, date/time/number
//!    styles, text alignment, data detectors, transit types and
//!    personalization fields are closed enums. Each maps exhaustively to its
//!    `PK…` wire code. Unknown codes are rejected at parse time.
//!
//! 2. **One emptiness rule.** [`IsEmpty`] defines what "empty" means for every
//!    settable value. The mutator layer rejects empty input with it and prunes
//!    empty nested records with it, so the two can never disagree.
//!
//! 3. **`CanonicalBytes` newtype.** Serialized pass documents flow through
//!    `CanonicalBytes::new()`: sorted keys, compact separators, deterministic
//!    bytes.
//!
//! 4. **UTC-only timestamps.** [`Timestamp`] renders `YYYY-MM-DDTHH:MM:SSZ`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `passkit-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod domain;
pub mod error;
pub mod temporal;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use domain::{
    BarcodeFormat, DataDetectorType, DateStyle, NumberStyle, PassPersonalizationField,
    TextAlignment, TimeStyle, TransitType,
};
pub use error::{CanonicalizationError, PassKitError, ValidationError};
pub use temporal::Timestamp;
pub use validate::{
    is_false, require_fixed, require_non_empty, retain_distinct, IsEmpty, FORMAT_VERSION,
};
