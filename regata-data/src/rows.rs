//! Row types for the hosted tables.
//!
//! These mirror the `tour_settings` and `predefined_tours` schemas. Service
//! bookkeeping columns (`id` on the settings singleton, timestamps) stay in
//! the rows; the conversion methods strip them when producing domain values.

use regata_core::{DistanceUnit, FetchError, LatLng, PredefinedTour, TourConfiguration};
use serde::{Deserialize, Serialize};

/// The singleton `tour_settings` row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TourSettingsRow {
    pub(crate) id: i64,
    pub(crate) max_points: u32,
    pub(crate) max_people: u32,
    pub(crate) start_fee: f64,
    pub(crate) per_distance_rate: f64,
    pub(crate) distance_unit: DistanceUnit,
    pub(crate) currency_code: String,
    pub(crate) max_distance_radius: f64,
    pub(crate) distance_radius_unit: DistanceUnit,
    #[serde(default)]
    pub(crate) created_at: Option<String>,
    #[serde(default)]
    pub(crate) updated_at: Option<String>,
}

impl TourSettingsRow {
    /// Convert into a validated [`TourConfiguration`] snapshot.
    ///
    /// A record the service accepted but the engine considers invalid (for
    /// example a zero waypoint limit) is reported as a decode failure so the
    /// caller's retry affordance applies.
    pub(crate) fn into_configuration(self) -> Result<TourConfiguration, FetchError> {
        let config = TourConfiguration {
            max_points: self.max_points,
            max_people: self.max_people,
            start_fee: self.start_fee,
            per_distance_rate: self.per_distance_rate,
            distance_unit: self.distance_unit,
            currency_code: self.currency_code,
            max_distance_radius: self.max_distance_radius,
            distance_radius_unit: self.distance_radius_unit,
        };
        config.validate().map_err(|err| FetchError::Decode {
            message: err.to_string(),
        })?;
        Ok(config)
    }
}

/// One `predefined_tours` row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PredefinedTourRow {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) route_coordinates: Vec<LatLng>,
    #[serde(default)]
    pub(crate) display_price: Option<f64>,
    #[serde(default)]
    pub(crate) display_duration: Option<String>,
    #[serde(default)]
    pub(crate) created_at: Option<String>,
    #[serde(default)]
    pub(crate) updated_at: Option<String>,
}

impl PredefinedTourRow {
    /// Convert into a domain [`PredefinedTour`].
    pub(crate) fn into_tour(self) -> Result<PredefinedTour, FetchError> {
        PredefinedTour::new(
            self.id,
            self.name,
            self.description,
            self.route_coordinates,
            self.display_price,
            self.display_duration,
        )
        .map_err(|err| FetchError::Decode {
            message: err.to_string(),
        })
    }
}
