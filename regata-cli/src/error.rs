//! Error types emitted by the Regata CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use regata_core::{FetchError, OccupancyError, ProposeError, TourConfigurationError};
use regata_data::ClientBuildError;
use thiserror::Error;

/// Errors emitted by the Regata CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Opening the quote request file failed.
    #[error("failed to open quote request at {path:?}: {source}")]
    OpenRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Quote request JSON could not be decoded.
    #[error("failed to parse quote request JSON at {path:?}: {source}")]
    ParseRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The request's tour configuration failed validation.
    #[error("invalid tour configuration: {0}")]
    InvalidConfiguration(#[from] TourConfigurationError),
    /// A requested waypoint was rejected.
    #[error("waypoint rejected: {0}")]
    Propose(#[from] ProposeError),
    /// The requested party size was rejected.
    #[error("party size rejected: {0}")]
    Occupancy(#[from] OccupancyError),
    /// Constructing the table-API client failed.
    #[error("failed to build table client: {0}")]
    BuildClient(#[from] ClientBuildError),
    /// Fetching from the hosted service failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
