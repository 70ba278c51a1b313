//! Geographic coordinates in the order the catalog wire format uses.

use geo::Point;
use serde::{Deserialize, Serialize};

/// A geographic position in signed decimal degrees.
///
/// The serde representation is a two-element `[latitude, longitude]` array,
/// matching the catalog's `route_coordinates` wire format. Note that this is
/// the reverse of `geo`'s axis order, where `x = longitude` and
/// `y = latitude`; [`LatLng::to_point`] performs the swap.
///
/// # Examples
/// ```
/// use regata_core::LatLng;
///
/// let split_harbour = LatLng::new(43.5081, 16.4402);
/// let json = serde_json::to_string(&split_harbour)?;
/// assert_eq!(json, "[43.5081,16.4402]");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

impl LatLng {
    /// Construct a position from latitude and longitude degrees.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Convert to a `geo` point (`x = longitude`, `y = latitude`).
    #[must_use]
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(position: LatLng) -> Self {
        [position.lat, position.lng]
    }
}
