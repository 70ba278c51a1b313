//! Tours command implementation for the Regata CLI.

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use regata_core::{PredefinedTour, TourCatalog};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_TOURS_API_KEY, ARG_TOURS_BASE_URL, CliError, ENV_TOURS_API_KEY, ENV_TOURS_BASE_URL,
};
use regata_data::RestTableClient;

/// CLI arguments for the `tours` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List the hosted tour catalog, newest first. The base URL \
                 and API key can come from CLI flags, configuration files, \
                 or environment variables.",
    about = "List the hosted tour catalog"
)]
#[ortho_config(prefix = "REGATA")]
pub(crate) struct ToursArgs {
    /// Base URL of the hosted table service.
    #[arg(long = ARG_TOURS_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    /// Anonymous API key for the hosted table service.
    #[arg(long = ARG_TOURS_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) api_key: Option<String>,
}

impl ToursArgs {
    pub(crate) fn into_config(self) -> Result<ToursConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ToursConfig::try_from(merged)
    }
}

/// Resolved `tours` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ToursConfig {
    pub(crate) base_url: String,
    pub(crate) api_key: String,
}

impl TryFrom<ToursArgs> for ToursConfig {
    type Error = CliError;

    fn try_from(args: ToursArgs) -> Result<Self, Self::Error> {
        let base_url = args.base_url.ok_or(CliError::MissingArgument {
            field: ARG_TOURS_BASE_URL,
            env: ENV_TOURS_BASE_URL,
        })?;
        let api_key = args.api_key.ok_or(CliError::MissingArgument {
            field: ARG_TOURS_API_KEY,
            env: ENV_TOURS_API_KEY,
        })?;
        Ok(Self { base_url, api_key })
    }
}

pub(super) fn run_tours(args: ToursArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    log::debug!("listing catalog from {}", config.base_url);
    let client = RestTableClient::new(config.base_url, config.api_key)?;
    run_tours_with(&client, writer)
}

/// Fetch the catalog from `catalog` and render it to `writer`.
pub(crate) fn run_tours_with(
    catalog: &dyn TourCatalog,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let tours = catalog.list_tours()?;
    write_tours(writer, &tours)
}

fn write_tours(writer: &mut dyn Write, tours: &[PredefinedTour]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(tours).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
