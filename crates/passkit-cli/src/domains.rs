//! # Domains Subcommand
//!
//! `passkit domains [NAME]` prints the enumerated vocabularies and their
//! wire codes, e.g. for filling in templates by hand.

use anyhow::{bail, Result};
use clap::Args;

use passkit_core::domain::catalogue;

/// Arguments for `passkit domains`.
#[derive(Args, Debug)]
pub struct DomainsArgs {
    /// Only this domain (case-insensitive, e.g. `transittype`).
    pub name: Option<String>,
}

/// The selected domains, in catalogue order.
pub fn select(name: Option<&str>) -> Result<Vec<(&'static str, Vec<&'static str>)>> {
    let all = catalogue();
    let Some(name) = name else {
        return Ok(all);
    };
    let selected: Vec<_> = all
        .iter()
        .filter(|(domain, _)| domain.eq_ignore_ascii_case(name))
        .cloned()
        .collect();
    if selected.is_empty() {
        let known: Vec<&str> = all.iter().map(|(d, _)| *d).collect();
        bail!("unknown domain '{name}'. Known: {}", known.join(", "));
    }
    Ok(selected)
}

/// Execute `passkit domains`.
pub fn run_domains(args: &DomainsArgs) -> Result<u8> {
    for (domain, codes) in select(args.name.as_deref())? {
        println!("{domain}");
        for code in codes {
            println!("  {code}");
        }
    }
    Ok(0)
}
