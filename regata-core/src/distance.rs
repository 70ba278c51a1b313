//! Great-circle distance helpers.
//!
//! All distances derive from `geo`'s haversine implementation, which returns
//! metres on a spherical earth. The helpers here convert into the unit the
//! active [`TourConfiguration`](crate::TourConfiguration) asks for. Route
//! length is a plain sum of segment lengths in click order; no reordering or
//! shortest-path logic is applied.

use std::fmt;

use geo::{Distance, Haversine};
use serde::{Deserialize, Serialize};

use crate::LatLng;

const METRES_PER_KILOMETRE: f64 = 1_000.0;
const METRES_PER_MILE: f64 = 1_609.344;

/// Unit for configured distances and displayed route lengths.
///
/// The serde strings (`"km"`, `"miles"`) match the hosted settings schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    /// Kilometres.
    #[serde(rename = "km")]
    Kilometres,
    /// Statute miles.
    #[serde(rename = "miles")]
    Miles,
}

impl DistanceUnit {
    /// Convert a length in metres into this unit.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "unit conversion")]
    pub fn from_metres(self, metres: f64) -> f64 {
        match self {
            Self::Kilometres => metres / METRES_PER_KILOMETRE,
            Self::Miles => metres / METRES_PER_MILE,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kilometres => f.write_str("km"),
            Self::Miles => f.write_str("miles"),
        }
    }
}

/// Great-circle distance between two positions, in `unit`.
///
/// # Examples
/// ```
/// use regata_core::{distance, DistanceUnit, LatLng};
///
/// let origin = LatLng::new(43.5081, 16.4402);
/// let trogir = LatLng::new(43.5138, 16.2522);
/// let km = distance::between(origin, trogir, DistanceUnit::Kilometres);
/// assert!(km > 14.0 && km < 17.0);
/// ```
#[must_use]
pub fn between(a: LatLng, b: LatLng, unit: DistanceUnit) -> f64 {
    unit.from_metres(Haversine.distance(a.to_point(), b.to_point()))
}

/// Total length of an ordered path, in `unit`.
///
/// Paths with fewer than two points have length zero.
#[must_use]
pub fn path_length(path: &[LatLng], unit: DistanceUnit) -> f64 {
    path.windows(2)
        .map(|pair| match pair {
            [a, b] => between(*a, *b, unit),
            _ => 0.0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn split_harbour() -> LatLng {
        LatLng::new(43.5081, 16.4402)
    }

    #[rstest]
    fn empty_path_has_zero_length() {
        assert_eq!(path_length(&[], DistanceUnit::Kilometres), 0.0);
    }

    #[rstest]
    fn single_point_path_has_zero_length() {
        let path = [split_harbour()];
        assert_eq!(path_length(&path, DistanceUnit::Kilometres), 0.0);
    }

    #[rstest]
    fn coincident_points_have_zero_distance() {
        let d = between(split_harbour(), split_harbour(), DistanceUnit::Kilometres);
        assert_eq!(d, 0.0);
    }

    #[rstest]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = LatLng::new(43.0, 16.0);
        let b = LatLng::new(44.0, 16.0);
        let km = between(a, b, DistanceUnit::Kilometres);
        assert!((km - 111.0).abs() < 1.0, "got {km}");
    }

    #[rstest]
    fn miles_are_shorter_numbers_than_kilometres() {
        let a = LatLng::new(43.0, 16.0);
        let b = LatLng::new(44.0, 16.0);
        let km = between(a, b, DistanceUnit::Kilometres);
        let miles = between(a, b, DistanceUnit::Miles);
        assert!(miles < km);
        #[expect(clippy::float_arithmetic, reason = "asserting the conversion factor")]
        let ratio = km / miles;
        assert!((ratio - 1.609_344).abs() < 1e-9);
    }

    #[rstest]
    fn path_length_sums_segments() {
        let a = LatLng::new(43.0, 16.0);
        let b = LatLng::new(43.5, 16.0);
        let c = LatLng::new(44.0, 16.0);
        let direct = between(a, c, DistanceUnit::Kilometres);
        let via = path_length(&[a, b, c], DistanceUnit::Kilometres);
        // b lies on the meridian between a and c, so the sums agree.
        assert!((via - direct).abs() < 1e-6);
    }
}
