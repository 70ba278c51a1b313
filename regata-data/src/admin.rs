//! Administrative write surface.
//!
//! Writes require a signed-in session, injected explicitly as an
//! [`AdminSession`] rather than looked up from ambient state. Catalog route
//! input is validated client-side before any network call; a malformed or
//! empty route never reaches the service.

use log::info;
use regata_core::{FetchError, LatLng, TourConfiguration, TourConfigurationError};
use serde::Serialize;
use thiserror::Error;

use crate::client::RestTableClient;

/// Evidence of a signed-in administrator.
///
/// Presence or absence of this value is the only authentication signal the
/// adapter consumes; token issuance and refresh belong to the hosted
/// service.
#[derive(Clone)]
pub struct AdminSession {
    access_token: String,
}

impl AdminSession {
    /// Wrap an access token obtained from the hosted auth service.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub(crate) fn token(&self) -> &str {
        &self.access_token
    }
}

impl std::fmt::Debug for AdminSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSession")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Errors from validating catalog route input.
///
/// All of these are raised before any network call.
#[derive(Debug, Error)]
pub enum RouteValidationError {
    /// The input was not valid JSON.
    #[error("route coordinates are not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    /// The JSON value was not an array.
    #[error("route coordinates must be a JSON array")]
    NotAnArray,
    /// The array was empty.
    #[error("route coordinates must contain at least one [lat, lng] pair")]
    Empty,
    /// An element was not a `[lat, lng]` pair.
    #[error("route coordinates contain a malformed pair: {0}")]
    MalformedPair(#[source] serde_json::Error),
}

/// Errors from the administrative writes.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The configuration failed validation before submission.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] TourConfigurationError),
    /// The service rejected the request or was unreachable.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// A catalog entry as the administrative form submits it.
///
/// Construction validates the route, so a draft in hand is always
/// submittable.
#[derive(Debug, Clone, PartialEq)]
pub struct TourDraft {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Validated, non-empty route.
    pub route: Vec<LatLng>,
    /// Optional advertised price.
    pub display_price: Option<f64>,
    /// Optional advertised duration label.
    pub display_duration: Option<String>,
}

impl TourDraft {
    /// Build a draft from already-parsed parts.
    ///
    /// # Errors
    ///
    /// [`RouteValidationError::Empty`] when `route` has no coordinates.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        route: Vec<LatLng>,
        display_price: Option<f64>,
        display_duration: Option<String>,
    ) -> Result<Self, RouteValidationError> {
        if route.is_empty() {
            return Err(RouteValidationError::Empty);
        }
        Ok(Self {
            name: name.into(),
            description: description.into(),
            route,
            display_price,
            display_duration,
        })
    }

    /// Build a draft from form input, parsing the route from JSON text.
    ///
    /// # Errors
    ///
    /// [`RouteValidationError`] when the text is not JSON, not an array, an
    /// empty array, or contains an element that is not a `[lat, lng]` pair.
    pub fn from_form(
        name: impl Into<String>,
        description: impl Into<String>,
        route_json: &str,
        display_price: Option<f64>,
        display_duration: Option<String>,
    ) -> Result<Self, RouteValidationError> {
        let route = parse_route(route_json)?;
        Self::new(name, description, route, display_price, display_duration)
    }
}

/// Parse and validate route JSON text into coordinates.
fn parse_route(route_json: &str) -> Result<Vec<LatLng>, RouteValidationError> {
    let value: serde_json::Value =
        serde_json::from_str(route_json).map_err(RouteValidationError::Parse)?;
    let entries = value.as_array().ok_or(RouteValidationError::NotAnArray)?;
    if entries.is_empty() {
        return Err(RouteValidationError::Empty);
    }
    serde_json::from_value(value).map_err(RouteValidationError::MalformedPair)
}

/// Write payload for a catalog row.
#[derive(Debug, Serialize)]
struct TourRecord<'a> {
    name: &'a str,
    description: &'a str,
    route_coordinates: &'a [LatLng],
    display_price: Option<f64>,
    display_duration: Option<&'a str>,
}

impl<'a> TourRecord<'a> {
    fn from_draft(draft: &'a TourDraft) -> Self {
        Self {
            name: &draft.name,
            description: &draft.description,
            route_coordinates: &draft.route,
            display_price: draft.display_price,
            display_duration: draft.display_duration.as_deref(),
        }
    }
}

impl RestTableClient {
    /// Replace the settings singleton with `config`.
    ///
    /// The service stamps `updated_at`; changes take effect for customers on
    /// their next session fetch.
    ///
    /// # Errors
    ///
    /// [`WriteError::InvalidConfiguration`] before submission when `config`
    /// fails validation; [`WriteError::Fetch`] on transport or service
    /// failure.
    pub fn update_configuration(
        &self,
        session: &AdminSession,
        config: &TourConfiguration,
    ) -> Result<(), WriteError> {
        config.validate()?;
        let url = self.endpoint("tour_settings");
        info!("updating tour settings at {url}");
        self.block_on(async {
            let request = self
                .client_ref()
                .patch(&url)
                .query(&[("id", "eq.1")])
                .json(config);
            self.send_write(request, session, &url).await
        })?;
        Ok(())
    }

    /// Create a catalog entry from a validated draft.
    ///
    /// # Errors
    ///
    /// [`WriteError::Fetch`] on transport or service failure.
    pub fn create_tour(
        &self,
        session: &AdminSession,
        draft: &TourDraft,
    ) -> Result<(), WriteError> {
        let url = self.endpoint("predefined_tours");
        info!("creating catalog entry {:?} at {url}", draft.name);
        self.block_on(async {
            let request = self
                .client_ref()
                .post(&url)
                .json(&[TourRecord::from_draft(draft)]);
            self.send_write(request, session, &url).await
        })?;
        Ok(())
    }

    /// Overwrite the catalog entry with identity `id`.
    ///
    /// # Errors
    ///
    /// [`WriteError::Fetch`] on transport or service failure.
    pub fn update_tour(
        &self,
        session: &AdminSession,
        id: &str,
        draft: &TourDraft,
    ) -> Result<(), WriteError> {
        let url = self.endpoint("predefined_tours");
        info!("updating catalog entry {id} at {url}");
        self.block_on(async {
            let request = self
                .client_ref()
                .patch(&url)
                .query(&[("id", format!("eq.{id}"))])
                .json(&TourRecord::from_draft(draft));
            self.send_write(request, session, &url).await
        })?;
        Ok(())
    }

    /// Delete the catalog entry with identity `id`.
    ///
    /// Deleting an absent entry is not an error; the service reports success
    /// with no affected rows.
    ///
    /// # Errors
    ///
    /// [`WriteError::Fetch`] on transport or service failure.
    pub fn delete_tour(&self, session: &AdminSession, id: &str) -> Result<(), WriteError> {
        let url = self.endpoint("predefined_tours");
        info!("deleting catalog entry {id} at {url}");
        self.block_on(async {
            let request = self
                .client_ref()
                .delete(&url)
                .query(&[("id", format!("eq.{id}"))]);
            self.send_write(request, session, &url).await
        })?;
        Ok(())
    }

    async fn send_write(
        &self,
        request: reqwest::RequestBuilder,
        session: &AdminSession,
        url: &str,
    ) -> Result<(), FetchError> {
        self.authorise(request, Some(session.token()))
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, url))?;
        Ok(())
    }
}
