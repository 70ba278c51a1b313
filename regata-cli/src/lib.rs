//! Command-line interface for the Regata tour engine.
//!
//! Two subcommands: `quote` prices a custom tour request offline, and
//! `tours` lists the hosted catalog. Options can come from CLI flags,
//! configuration files, or `REGATA_`-prefixed environment variables.
#![forbid(unsafe_code)]

mod error;
mod quote;
mod tours;

pub use error::CliError;

use clap::{Parser, Subcommand};

pub(crate) const ARG_QUOTE_REQUEST: &str = "request";
pub(crate) const ENV_QUOTE_REQUEST: &str = "REGATA_CMDS_QUOTE_REQUEST_PATH";
pub(crate) const ARG_TOURS_BASE_URL: &str = "base-url";
pub(crate) const ENV_TOURS_BASE_URL: &str = "REGATA_CMDS_TOURS_BASE_URL";
pub(crate) const ARG_TOURS_API_KEY: &str = "api-key";
pub(crate) const ENV_TOURS_API_KEY: &str = "REGATA_CMDS_TOURS_API_KEY";

/// Run the Regata CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when argument parsing, configuration layering, or
/// the selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Quote(args) => quote::run_quote(args, &mut stdout),
        Command::Tours(args) => tours::run_tours(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "regata",
    about = "Pricing and catalog utilities for the Regata tour engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Price a custom tour request offline.
    Quote(quote::QuoteArgs),
    /// List the hosted tour catalog.
    Tours(tours::ToursArgs),
}
