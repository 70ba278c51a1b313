//! Quote command implementation for the Regata CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use regata_core::{CompositionSession, LatLng, Quote, TourConfiguration};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Write};

use crate::{ARG_QUOTE_REQUEST, CliError, ENV_QUOTE_REQUEST};

/// CLI arguments for the `quote` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Price a custom tour offline. The request is provided as a \
                 JSON file holding the origin, the tour configuration, the \
                 proposed waypoints, and optionally the party size. The \
                 resulting quote is printed as JSON.",
    about = "Price a custom tour request"
)]
#[ortho_config(prefix = "REGATA")]
pub(crate) struct QuoteArgs {
    /// Path to a JSON file containing the quote request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
}

impl QuoteArgs {
    pub(crate) fn into_config(self) -> Result<QuoteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QuoteConfig::try_from(merged)
    }
}

/// Resolved `quote` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QuoteConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
}

impl TryFrom<QuoteArgs> for QuoteConfig {
    type Error = CliError;

    fn try_from(args: QuoteArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_QUOTE_REQUEST,
            env: ENV_QUOTE_REQUEST,
        })?;
        Ok(Self { request_path })
    }
}

/// A priced-tour request as the `quote` command reads it from disk.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct QuoteRequest {
    /// Departure point of the tour.
    pub(crate) origin: LatLng,
    /// Pricing and limit configuration to apply.
    pub(crate) configuration: TourConfiguration,
    /// Waypoints to propose, in visit order.
    #[serde(default)]
    pub(crate) waypoints: Vec<LatLng>,
    /// Party size; defaults to the smallest valid occupancy.
    #[serde(default)]
    pub(crate) people: Option<u32>,
}

pub(super) fn run_quote(args: QuoteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let quote = execute_quote(args)?;
    write_quote(writer, &quote)
}

fn execute_quote(args: QuoteArgs) -> Result<Quote, CliError> {
    let config = args.into_config()?;
    log::debug!("pricing request from {}", config.request_path);
    let request = load_quote_request(&config.request_path)?;
    price_request(&request)
}

/// Replay a request through a composition session and price it.
pub(crate) fn price_request(request: &QuoteRequest) -> Result<Quote, CliError> {
    request.configuration.validate()?;
    let mut session = CompositionSession::new(request.origin, request.configuration.clone());
    for waypoint in &request.waypoints {
        session.propose_waypoint(*waypoint)?;
    }
    if let Some(people) = request.people {
        session.set_people(people)?;
    }
    Ok(session.quote())
}

/// Loads a JSON-encoded [`QuoteRequest`] from disk.
pub(crate) fn load_quote_request(path: &Utf8Path) -> Result<QuoteRequest, CliError> {
    let file = File::open(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_quote(writer: &mut dyn Write, quote: &Quote) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(quote).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
