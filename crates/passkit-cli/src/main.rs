//! # passkit CLI entry point
//!
//! Parses command-line arguments, initializes logging, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use passkit_cli::domains::{run_domains, DomainsArgs};
use passkit_cli::render::{run_render, RenderArgs};
use passkit_cli::validate::{run_validate, ValidateArgs};

/// Wallet pass toolchain.
///
/// Renders pass.json documents from templates, validates existing ones,
/// and lists the wire codes of every enumerated field.
#[derive(Parser, Debug)]
#[command(name = "passkit", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the issuer profile (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a pass.json from a template.
    Render(RenderArgs),

    /// Validate pass.json files.
    Validate(ValidateArgs),

    /// List enumerated domains and their wire codes.
    Domains(DomainsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "passkit starting");

    let result = match &cli.command {
        Commands::Render(args) => run_render(args, cli.config.as_deref()),
        Commands::Validate(args) => run_validate(args),
        Commands::Domains(args) => run_domains(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
