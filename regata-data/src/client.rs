//! Synchronous table-API client over async HTTP.

use std::time::Duration;

use log::debug;
use regata_core::{FetchError, PredefinedTour, SettingsProvider, TourCatalog, TourConfiguration};
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use crate::rows::{PredefinedTourRow, TourSettingsRow};

/// Error type for [`RestTableClient`] construction failures.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Default user agent for table-API requests.
pub const DEFAULT_USER_AGENT: &str = "regata-data/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fixed identity of the settings singleton row.
const SETTINGS_ROW_FILTER: (&str, &str) = ("id", "eq.1");

/// Configuration for [`RestTableClient`].
#[derive(Debug, Clone)]
pub struct TableClientConfig {
    /// Base URL of the hosted service (e.g. `"https://project.example.co"`).
    pub base_url: String,
    /// Anonymous API key sent with every request.
    pub api_key: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl TableClientConfig {
    /// Create a configuration with the given base URL and API key.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Table-API client implementing the core provider contracts.
///
/// The client owns a Tokio runtime that is reused across calls, avoiding
/// the overhead of creating a new runtime per request.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the client uses its own
/// stored runtime. When called from within an existing multi-threaded Tokio
/// runtime (detected via [`Handle::try_current()`]), it uses that runtime's
/// handle with [`tokio::task::block_in_place`] to avoid nested runtime
/// panics. From within a `current_thread` runtime it falls back to the
/// internal runtime, which may block the caller's runtime.
pub struct RestTableClient {
    client: Client,
    config: TableClientConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for RestTableClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestTableClient")
            .field("client", &self.client)
            .field("base_url", &self.config.base_url)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl RestTableClient {
    /// Create a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ClientBuildError> {
        Self::with_config(TableClientConfig::new(base_url, api_key))
    }

    /// Create a client with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: TableClientConfig) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &TableClientConfig {
        &self.config
    }

    /// The underlying HTTP client, for sibling modules building requests.
    pub(crate) const fn client_ref(&self) -> &Client {
        &self.client
    }

    /// Build the REST endpoint URL for a table.
    pub(crate) fn endpoint(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            table
        )
    }

    /// Run a future to completion from a synchronous context.
    pub(crate) fn block_on<F>(&self, future: F) -> F::Output
    where
        F: Future,
    {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own.
            _ => self.runtime.block_on(future),
        }
    }

    /// Attach the anonymous-key headers to a request.
    pub(crate) fn authorise(
        &self,
        request: reqwest::RequestBuilder,
        bearer: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let token = bearer.unwrap_or(&self.config.api_key);
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(token)
    }

    /// Convert a reqwest error to a [`FetchError`].
    pub(crate) fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> FetchError {
        if error.is_timeout() {
            return FetchError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return FetchError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        FetchError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    async fn fetch_settings_async(&self) -> Result<TourConfiguration, FetchError> {
        let url = self.endpoint("tour_settings");
        debug!("fetching tour settings from {url}");

        let request = self
            .client
            .get(&url)
            .query(&[SETTINGS_ROW_FILTER, ("limit", "1")]);
        let response = self
            .authorise(request, None)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let rows: Vec<TourSettingsRow> =
            response.json().await.map_err(|err| FetchError::Decode {
                message: err.to_string(),
            })?;
        rows.into_iter()
            .next()
            .ok_or(FetchError::MissingRecord {
                table: "tour_settings",
            })?
            .into_configuration()
    }

    async fn list_tours_async(&self) -> Result<Vec<PredefinedTour>, FetchError> {
        let url = self.endpoint("predefined_tours");
        debug!("fetching tour catalog from {url}");

        let request = self
            .client
            .get(&url)
            .query(&[("select", "*"), ("order", "created_at.desc")]);
        let response = self
            .authorise(request, None)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let rows: Vec<PredefinedTourRow> =
            response.json().await.map_err(|err| FetchError::Decode {
                message: err.to_string(),
            })?;
        rows.into_iter().map(PredefinedTourRow::into_tour).collect()
    }
}

impl SettingsProvider for RestTableClient {
    fn get_configuration(&self) -> Result<TourConfiguration, FetchError> {
        self.block_on(self.fetch_settings_async())
    }
}

impl TourCatalog for RestTableClient {
    fn list_tours(&self) -> Result<Vec<PredefinedTour>, FetchError> {
        self.block_on(self.list_tours_async())
    }
}
