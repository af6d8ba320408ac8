//! # passkit-cli — Wallet Pass Command-Line Interface
//!
//! A clap-based CLI over the pass document model.
//!
//! ## Subcommands
//!
//! - `render`: build a `pass.json` from a YAML/JSON template and issuer profile
//! - `validate`: check existing `pass.json` files against the mutators and schema
//! - `domains`: print the enumerated vocabularies and their wire codes
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live in this library.
//! - Handlers return `anyhow::Result<u8>`, the process exit code.
//! - Document rules belong to `passkit-pass` and `passkit-schema`, not here.

pub mod config;
pub mod domains;
pub mod render;
pub mod validate;
