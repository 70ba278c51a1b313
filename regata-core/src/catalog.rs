//! Administrator-authored tours shown in the browse experience.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::LatLng;

/// A fixed-route tour from the catalog.
///
/// The route is an ordered, non-empty coordinate sequence whose first
/// position is the route's start. Entries are immutable from the customer's
/// viewpoint; only the administrative surface creates or edits them.
///
/// The serde representation of `route` is a JSON array of `[lat, lng]`
/// pairs, the catalog's wire format.
///
/// # Examples
/// ```
/// use regata_core::{LatLng, PredefinedTour};
///
/// let tour = PredefinedTour::new(
///     "blue-cave".into(),
///     "Blue Cave & Hvar".into(),
///     "A full-day island-hopping classic.".into(),
///     vec![LatLng::new(43.5081, 16.4402), LatLng::new(43.0000, 16.1000)],
///     Some(120.0),
///     Some("8 hours".into()),
/// )?;
/// assert_eq!(tour.route.len(), 2);
/// # Ok::<(), regata_core::PredefinedTourError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredefinedTour {
    /// Service-assigned identity.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Ordered route coordinates; never empty.
    pub route: Vec<LatLng>,
    /// Optional advertised price.
    pub display_price: Option<f64>,
    /// Optional advertised duration label, e.g. `"4 hours"`.
    pub display_duration: Option<String>,
}

/// Errors returned by [`PredefinedTour::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredefinedTourError {
    /// A tour route needs at least one coordinate.
    #[error("tour route must contain at least one coordinate")]
    EmptyRoute,
}

impl PredefinedTour {
    /// Validate and construct a catalog entry.
    ///
    /// # Errors
    ///
    /// [`PredefinedTourError::EmptyRoute`] when `route` is empty.
    pub fn new(
        id: String,
        name: String,
        description: String,
        route: Vec<LatLng>,
        display_price: Option<f64>,
        display_duration: Option<String>,
    ) -> Result<Self, PredefinedTourError> {
        if route.is_empty() {
            return Err(PredefinedTourError::EmptyRoute);
        }
        Ok(Self {
            id,
            name,
            description,
            route,
            display_price,
            display_duration,
        })
    }

    /// The route's starting position.
    #[must_use]
    pub fn start(&self) -> Option<LatLng> {
        self.route.first().copied()
    }
}
