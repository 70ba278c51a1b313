//! The tour composition engine.
//!
//! A [`CompositionSession`] owns the in-progress custom tour for one browser
//! session: the ordered waypoints, the occupancy selection, and an immutable
//! [`TourConfiguration`] snapshot. The fixed origin (the home port) is
//! implicitly prepended to every route. Sessions are ephemeral; nothing here
//! is persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DistanceUnit, LatLng, TourConfiguration, Waypoint, WaypointId, distance};

/// Errors returned by [`CompositionSession::propose_waypoint`].
///
/// Both cases are recoverable by the user: adjust the click, or remove a
/// waypoint first. A rejected proposal never mutates the session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProposeError {
    /// The candidate lies outside the configured geofence.
    ///
    /// The geofence check runs before the count check so that a user always
    /// learns the geography-based rejection first.
    #[error("point is {distance:.1} {unit} from the origin; the limit is {limit} {unit}")]
    OutOfRange {
        /// Great-circle distance from the origin to the candidate.
        distance: f64,
        /// Configured geofence radius.
        limit: f64,
        /// Unit both figures are expressed in.
        unit: DistanceUnit,
    },
    /// The session already holds the configured maximum number of waypoints.
    #[error("maximum number of waypoints ({limit}) reached")]
    LimitReached {
        /// Configured waypoint ceiling.
        limit: u32,
    },
}

/// Errors returned by [`CompositionSession::set_people`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OccupancyError {
    /// A tour needs at least one person aboard.
    #[error("occupancy must be at least 1")]
    Zero,
    /// The requested occupancy exceeds the configured ceiling.
    #[error("requested occupancy {requested} exceeds the limit of {limit}")]
    LimitExceeded {
        /// Occupancy the caller asked for.
        requested: u32,
        /// Configured occupancy ceiling.
        limit: u32,
    },
}

/// Derived price breakdown for the current route.
///
/// `total = start_fee + distance * per_distance_rate`. Values are exact;
/// rounding to two decimal places is a presentation concern. Occupancy does
/// not enter the formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Flat fee charged regardless of distance.
    pub start_fee: f64,
    /// Distance-dependent share of the price.
    pub distance_fee: f64,
    /// Sum of the two fees.
    pub total: f64,
    /// Route distance the quote is based on.
    pub distance: f64,
    /// Unit of [`Self::distance`].
    pub distance_unit: DistanceUnit,
    /// Currency the fees are denominated in.
    pub currency_code: String,
}

/// An active tour-building session.
///
/// # Examples
/// ```
/// use regata_core::{CompositionSession, LatLng, TourConfiguration};
///
/// let origin = LatLng::new(43.5081, 16.4402);
/// let mut session = CompositionSession::new(origin, TourConfiguration::default());
/// session.propose_waypoint(LatLng::new(43.5138, 16.2522))?;
/// assert_eq!(session.waypoints().len(), 1);
/// assert!(session.total_distance() > 0.0);
/// # Ok::<(), regata_core::ProposeError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionSession {
    origin: LatLng,
    config: TourConfiguration,
    waypoints: Vec<Waypoint>,
    people: u32,
    next_id: u64,
}

impl CompositionSession {
    /// Start a session at `origin` with a configuration snapshot.
    ///
    /// Occupancy starts at one; the snapshot is fixed for the session's
    /// lifetime.
    #[must_use]
    pub fn new(origin: LatLng, config: TourConfiguration) -> Self {
        let people = 1.min(config.max_people);
        Self {
            origin,
            config,
            waypoints: Vec::new(),
            people,
            next_id: 1,
        }
    }

    /// The fixed starting location prepended to every route.
    #[must_use]
    pub const fn origin(&self) -> LatLng {
        self.origin
    }

    /// The configuration snapshot this session was started with.
    #[must_use]
    pub const fn configuration(&self) -> &TourConfiguration {
        &self.config
    }

    /// Selected waypoints in visit order.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Currently selected occupancy.
    #[must_use]
    pub const fn people(&self) -> u32 {
        self.people
    }

    /// Validate a candidate position and append it as a waypoint.
    ///
    /// Checks run in order: the geofence (when one is configured), then the
    /// waypoint count. On acceptance the waypoint receives a fresh
    /// session-unique id, returned to the caller for later removal.
    ///
    /// # Errors
    ///
    /// [`ProposeError::OutOfRange`] when the candidate is farther from the
    /// origin than the configured radius; [`ProposeError::LimitReached`]
    /// when the session already holds `max_points` waypoints. Neither
    /// mutates the session.
    pub fn propose_waypoint(&mut self, position: LatLng) -> Result<WaypointId, ProposeError> {
        if self.config.has_geofence() {
            let unit = self.config.distance_radius_unit;
            let from_origin = distance::between(self.origin, position, unit);
            if from_origin > self.config.max_distance_radius {
                return Err(ProposeError::OutOfRange {
                    distance: from_origin,
                    limit: self.config.max_distance_radius,
                    unit,
                });
            }
        }
        let count = u32::try_from(self.waypoints.len()).unwrap_or(u32::MAX);
        if count >= self.config.max_points {
            return Err(ProposeError::LimitReached {
                limit: self.config.max_points,
            });
        }
        let id = WaypointId(self.next_id);
        self.next_id += 1;
        self.waypoints.push(Waypoint::new(id, position));
        Ok(id)
    }

    /// Remove the waypoint with the given id, preserving the order of the
    /// remainder.
    ///
    /// Removal is idempotent: an absent id is a no-op and returns `false`.
    pub fn remove_waypoint(&mut self, id: WaypointId) -> bool {
        let before = self.waypoints.len();
        self.waypoints.retain(|w| w.id != id);
        self.waypoints.len() < before
    }

    /// Select the number of people joining the tour.
    ///
    /// # Errors
    ///
    /// [`OccupancyError::Zero`] for zero, [`OccupancyError::LimitExceeded`]
    /// above the configured `max_people`. The selection is left unchanged on
    /// error.
    pub fn set_people(&mut self, requested: u32) -> Result<(), OccupancyError> {
        if requested == 0 {
            return Err(OccupancyError::Zero);
        }
        if requested > self.config.max_people {
            return Err(OccupancyError::LimitExceeded {
                requested,
                limit: self.config.max_people,
            });
        }
        self.people = requested;
        Ok(())
    }

    /// The route as positions: origin first, then waypoints in visit order.
    #[must_use]
    pub fn route(&self) -> Vec<LatLng> {
        let mut path = Vec::with_capacity(self.waypoints.len() + 1);
        path.push(self.origin);
        path.extend(self.waypoints.iter().map(|w| w.position));
        path
    }

    /// Total route distance in the configuration's distance unit.
    ///
    /// With no waypoints the route is the origin alone and the distance is
    /// exactly zero. This uses `distance_unit`, not the geofence unit; the
    /// two are configured independently.
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        distance::path_length(&self.route(), self.config.distance_unit)
    }

    /// Price breakdown for the current route.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "the pricing formula")]
    pub fn quote(&self) -> Quote {
        let travelled = self.total_distance();
        let distance_fee = travelled * self.config.per_distance_rate;
        Quote {
            start_fee: self.config.start_fee,
            distance_fee,
            total: self.config.start_fee + distance_fee,
            distance: travelled,
            distance_unit: self.config.distance_unit,
            currency_code: self.config.currency_code.clone(),
        }
    }

    /// Whether the tour can be booked: at least two selected waypoints.
    #[must_use]
    pub fn is_bookable(&self) -> bool {
        self.waypoints.len() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn origin() -> LatLng {
        LatLng::new(43.5081, 16.4402)
    }

    fn unfenced_config(max_points: u32) -> TourConfiguration {
        TourConfiguration {
            max_points,
            max_distance_radius: 0.0,
            ..TourConfiguration::default()
        }
    }

    #[fixture]
    fn session() -> CompositionSession {
        CompositionSession::new(origin(), unfenced_config(5))
    }

    #[rstest]
    fn new_session_is_empty(session: CompositionSession) {
        assert!(session.waypoints().is_empty());
        assert_eq!(session.people(), 1);
        assert_eq!(session.total_distance(), 0.0);
        assert!(!session.is_bookable());
    }

    #[rstest]
    fn accepted_waypoints_get_distinct_ids(mut session: CompositionSession) {
        let a = session
            .propose_waypoint(LatLng::new(43.5, 16.3))
            .expect("first accepted");
        let b = session
            .propose_waypoint(LatLng::new(43.4, 16.3))
            .expect("second accepted");
        assert_ne!(a, b);
        assert_eq!(session.waypoints().len(), 2);
    }

    #[rstest]
    fn limit_rejection_keeps_count(mut session: CompositionSession) {
        for i in 0..5 {
            session
                .propose_waypoint(LatLng::new(43.5, 16.0 + f64::from(i) * 0.01))
                .expect("within limit");
        }
        let err = session
            .propose_waypoint(LatLng::new(43.5, 16.9))
            .expect_err("over limit");
        assert_eq!(err, ProposeError::LimitReached { limit: 5 });
        assert_eq!(session.waypoints().len(), 5);
    }

    #[rstest]
    fn removing_a_waypoint_frees_exactly_one_slot() {
        let mut session = CompositionSession::new(origin(), unfenced_config(2));
        let first = session
            .propose_waypoint(LatLng::new(43.5, 16.3))
            .expect("accepted");
        session
            .propose_waypoint(LatLng::new(43.4, 16.3))
            .expect("accepted");
        assert!(matches!(
            session.propose_waypoint(LatLng::new(43.3, 16.3)),
            Err(ProposeError::LimitReached { limit: 2 })
        ));
        assert!(session.remove_waypoint(first));
        session
            .propose_waypoint(LatLng::new(43.3, 16.3))
            .expect("slot freed");
        assert!(matches!(
            session.propose_waypoint(LatLng::new(43.2, 16.3)),
            Err(ProposeError::LimitReached { limit: 2 })
        ));
    }

    #[rstest]
    fn removal_of_absent_id_is_a_no_op(mut session: CompositionSession) {
        session
            .propose_waypoint(LatLng::new(43.5, 16.3))
            .expect("accepted");
        let snapshot = session.waypoints().to_vec();
        assert!(!session.remove_waypoint(WaypointId(999)));
        assert_eq!(session.waypoints(), snapshot.as_slice());
    }

    #[rstest]
    fn removal_preserves_relative_order(mut session: CompositionSession) {
        let a = session.propose_waypoint(LatLng::new(43.5, 16.1)).expect("a");
        let b = session.propose_waypoint(LatLng::new(43.5, 16.2)).expect("b");
        let c = session.propose_waypoint(LatLng::new(43.5, 16.3)).expect("c");
        assert!(session.remove_waypoint(b));
        let ids: Vec<_> = session.waypoints().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[rstest]
    fn geofence_rejects_far_points() {
        let config = TourConfiguration {
            max_distance_radius: 30.0,
            distance_radius_unit: DistanceUnit::Kilometres,
            ..TourConfiguration::default()
        };
        let mut fenced = CompositionSession::new(origin(), config);
        // Roughly 50 km south of the origin.
        let err = fenced
            .propose_waypoint(LatLng::new(43.0581, 16.4402))
            .expect_err("outside the fence");
        match err {
            ProposeError::OutOfRange { distance, limit, unit } => {
                assert!(distance > 30.0 && distance < 70.0, "got {distance}");
                assert_eq!(limit, 30.0);
                assert_eq!(unit, DistanceUnit::Kilometres);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
        assert!(fenced.waypoints().is_empty());
    }

    #[rstest]
    fn geofence_check_precedes_limit_check() {
        let config = TourConfiguration {
            max_points: 1,
            max_distance_radius: 30.0,
            distance_radius_unit: DistanceUnit::Kilometres,
            ..TourConfiguration::default()
        };
        let mut fenced = CompositionSession::new(origin(), config);
        fenced
            .propose_waypoint(LatLng::new(43.5138, 16.2522))
            .expect("inside the fence");
        // Both constraints are violated; the geofence answer wins.
        let err = fenced
            .propose_waypoint(LatLng::new(43.0581, 16.4402))
            .expect_err("rejected");
        assert!(matches!(err, ProposeError::OutOfRange { .. }));
    }

    #[rstest]
    fn geofence_uses_its_own_unit() {
        // 30 miles = 48.3 km; a point 40 km out passes a 30-mile fence but
        // would fail a 30 km one.
        let config = TourConfiguration {
            max_distance_radius: 30.0,
            distance_radius_unit: DistanceUnit::Miles,
            distance_unit: DistanceUnit::Kilometres,
            ..TourConfiguration::default()
        };
        let mut fenced = CompositionSession::new(origin(), config);
        fenced
            .propose_waypoint(LatLng::new(43.1481, 16.4402))
            .expect("inside a 30-mile fence");
    }

    #[rstest]
    fn quote_equals_start_fee_with_no_waypoints(session: CompositionSession) {
        let quote = session.quote();
        assert_eq!(quote.total, 50.0);
        assert_eq!(quote.distance_fee, 0.0);
        assert_eq!(quote.distance, 0.0);
        assert_eq!(quote.currency_code, "EUR");
    }

    #[rstest]
    fn occupancy_respects_bounds(mut session: CompositionSession) {
        assert_eq!(session.set_people(12), Ok(()));
        assert_eq!(session.people(), 12);
        assert_eq!(
            session.set_people(13),
            Err(OccupancyError::LimitExceeded {
                requested: 13,
                limit: 12,
            })
        );
        assert_eq!(session.set_people(0), Err(OccupancyError::Zero));
        assert_eq!(session.people(), 12);
    }

    #[rstest]
    fn occupancy_does_not_affect_the_quote(mut session: CompositionSession) {
        session
            .propose_waypoint(LatLng::new(43.5138, 16.2522))
            .expect("accepted");
        let solo = session.quote();
        session.set_people(12).expect("within limit");
        assert_eq!(session.quote(), solo);
    }

    #[rstest]
    fn two_waypoints_make_the_tour_bookable(mut session: CompositionSession) {
        session
            .propose_waypoint(LatLng::new(43.5138, 16.2522))
            .expect("accepted");
        assert!(!session.is_bookable());
        session
            .propose_waypoint(LatLng::new(43.3844, 16.3022))
            .expect("accepted");
        assert!(session.is_bookable());
    }
}
