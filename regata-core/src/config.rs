//! Global, administrator-controlled tour parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::DistanceUnit;

/// The single active set of limits and pricing parameters.
///
/// A session reads one immutable snapshot at start; administrator edits take
/// effect on the next session fetch, never live. The route distance unit and
/// the geofence unit are configured independently and must not be conflated.
///
/// # Examples
/// ```
/// use regata_core::TourConfiguration;
///
/// let config = TourConfiguration::default();
/// assert_eq!(config.max_points, 5);
/// config.validate()?;
/// # Ok::<(), regata_core::TourConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourConfiguration {
    /// Maximum number of waypoints in a custom tour.
    pub max_points: u32,
    /// Maximum occupancy for a tour.
    pub max_people: u32,
    /// Flat fee charged for every tour.
    pub start_fee: f64,
    /// Fee per unit of route distance.
    pub per_distance_rate: f64,
    /// Unit used for route distance and the per-distance rate.
    pub distance_unit: DistanceUnit,
    /// ISO 4217 currency code for displayed prices.
    pub currency_code: String,
    /// Maximum allowed distance of a waypoint from the origin. Zero means
    /// no geofence.
    pub max_distance_radius: f64,
    /// Unit for [`Self::max_distance_radius`].
    pub distance_radius_unit: DistanceUnit,
}

/// Errors reported by [`TourConfiguration::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourConfigurationError {
    /// The waypoint limit must be positive.
    #[error("max_points must be at least 1")]
    ZeroMaxPoints,
    /// The occupancy limit must be positive.
    #[error("max_people must be at least 1")]
    ZeroMaxPeople,
    /// The base fee must be a finite, non-negative amount.
    #[error("start_fee must be finite and non-negative")]
    InvalidStartFee,
    /// The per-distance rate must be a finite, non-negative amount.
    #[error("per_distance_rate must be finite and non-negative")]
    InvalidRate,
    /// The geofence radius must be a finite, non-negative distance.
    #[error("max_distance_radius must be finite and non-negative")]
    InvalidRadius,
    /// The currency code must be three ASCII letters.
    #[error("currency_code {0:?} is not a three-letter code")]
    InvalidCurrencyCode(String),
}

impl TourConfiguration {
    /// Check the configured limits and amounts.
    ///
    /// Adapters call this after decoding a settings record so that a
    /// misconfigured service surfaces one precise error instead of odd
    /// engine behaviour later.
    pub fn validate(&self) -> Result<(), TourConfigurationError> {
        if self.max_points == 0 {
            return Err(TourConfigurationError::ZeroMaxPoints);
        }
        if self.max_people == 0 {
            return Err(TourConfigurationError::ZeroMaxPeople);
        }
        if !self.start_fee.is_finite() || self.start_fee < 0.0 {
            return Err(TourConfigurationError::InvalidStartFee);
        }
        if !self.per_distance_rate.is_finite() || self.per_distance_rate < 0.0 {
            return Err(TourConfigurationError::InvalidRate);
        }
        if !self.max_distance_radius.is_finite() || self.max_distance_radius < 0.0 {
            return Err(TourConfigurationError::InvalidRadius);
        }
        if self.currency_code.len() != 3
            || !self.currency_code.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(TourConfigurationError::InvalidCurrencyCode(
                self.currency_code.clone(),
            ));
        }
        Ok(())
    }

    /// Whether a geofence is configured at all.
    #[must_use]
    pub fn has_geofence(&self) -> bool {
        self.max_distance_radius > 0.0
    }
}

impl Default for TourConfiguration {
    /// The service's seed configuration: five points, twelve people, a
    /// 50 EUR base fee, 3 EUR/km, and a 30 km geofence.
    fn default() -> Self {
        Self {
            max_points: 5,
            max_people: 12,
            start_fee: 50.0,
            per_distance_rate: 3.0,
            distance_unit: DistanceUnit::Kilometres,
            currency_code: "EUR".to_owned(),
            max_distance_radius: 30.0,
            distance_radius_unit: DistanceUnit::Kilometres,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_configuration_is_valid() {
        assert!(TourConfiguration::default().validate().is_ok());
    }

    #[rstest]
    fn rejects_zero_max_points() {
        let config = TourConfiguration {
            max_points: 0,
            ..TourConfiguration::default()
        };
        assert_eq!(
            config.validate(),
            Err(TourConfigurationError::ZeroMaxPoints)
        );
    }

    #[rstest]
    fn rejects_zero_max_people() {
        let config = TourConfiguration {
            max_people: 0,
            ..TourConfiguration::default()
        };
        assert_eq!(
            config.validate(),
            Err(TourConfigurationError::ZeroMaxPeople)
        );
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_start_fee(#[case] fee: f64) {
        let config = TourConfiguration {
            start_fee: fee,
            ..TourConfiguration::default()
        };
        assert_eq!(config.validate(), Err(TourConfigurationError::InvalidStartFee));
    }

    #[rstest]
    #[case("EURO")]
    #[case("E1")]
    #[case("€€€")]
    fn rejects_malformed_currency_codes(#[case] code: &str) {
        let config = TourConfiguration {
            currency_code: code.to_owned(),
            ..TourConfiguration::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TourConfigurationError::InvalidCurrencyCode(_))
        ));
    }

    #[rstest]
    fn zero_radius_means_no_geofence() {
        let config = TourConfiguration {
            max_distance_radius: 0.0,
            ..TourConfiguration::default()
        };
        assert!(config.validate().is_ok());
        assert!(!config.has_geofence());
    }
}
