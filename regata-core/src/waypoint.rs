//! User-selected stops in a custom tour.

use serde::{Deserialize, Serialize};

use crate::LatLng;

/// Opaque identity of a waypoint, unique within one composition session.
///
/// Ids are allocated by the session from a monotonic counter; they carry no
/// meaning beyond equality and are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WaypointId(pub u64);

/// A single user-selected stop.
///
/// # Examples
/// ```
/// use regata_core::{LatLng, Waypoint, WaypointId};
///
/// let stop = Waypoint::new(WaypointId(1), LatLng::new(43.5138, 16.2522));
/// assert_eq!(stop.id, WaypointId(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Session-scoped identity.
    pub id: WaypointId,
    /// Geographic position of the stop.
    pub position: LatLng,
}

impl Waypoint {
    /// Construct a waypoint.
    #[must_use]
    pub const fn new(id: WaypointId, position: LatLng) -> Self {
        Self { id, position }
    }
}
