//! Property tests for the pricing formula and the selection constraints.

use proptest::prelude::*;
use regata_core::{
    CompositionSession, DistanceUnit, LatLng, ProposeError, TourConfiguration, distance,
};

const ORIGIN: LatLng = LatLng::new(43.5081, 16.4402);

fn adriatic_point() -> impl Strategy<Value = LatLng> {
    (42.0f64..45.0, 14.5f64..18.0).prop_map(|(lat, lng)| LatLng::new(lat, lng))
}

fn unfenced_config() -> TourConfiguration {
    TourConfiguration {
        max_points: 16,
        max_distance_radius: 0.0,
        ..TourConfiguration::default()
    }
}

proptest! {
    /// Price never decreases as waypoints are appended, and equals the base
    /// fee exactly while the route is empty.
    #[test]
    fn price_is_monotone_in_route_growth(points in prop::collection::vec(adriatic_point(), 1..8)) {
        let mut session = CompositionSession::new(ORIGIN, unfenced_config());
        prop_assert_eq!(session.quote().total, 50.0);

        let mut previous = session.quote().total;
        for point in points {
            session.propose_waypoint(point).expect("no fence, generous limit");
            let total = session.quote().total;
            prop_assert!(total >= previous, "price shrank: {} -> {}", previous, total);
            previous = total;
        }
    }

    /// The quote always satisfies the linear formula against the session's
    /// own reported distance.
    #[test]
    fn quote_matches_the_linear_formula(points in prop::collection::vec(adriatic_point(), 0..8)) {
        let mut session = CompositionSession::new(ORIGIN, unfenced_config());
        for point in points {
            session.propose_waypoint(point).expect("no fence, generous limit");
        }
        let quote = session.quote();
        let expected = 50.0 + session.total_distance() * 3.0;
        prop_assert!((quote.total - expected).abs() < 1e-9);
        prop_assert!((quote.total - quote.start_fee - quote.distance_fee).abs() < 1e-12);
    }

    /// A geofenced session accepts a candidate exactly when it lies within
    /// the radius, and a rejection never changes the waypoint count.
    #[test]
    fn geofence_decision_matches_the_distance(candidate in adriatic_point()) {
        let config = TourConfiguration {
            max_distance_radius: 30.0,
            distance_radius_unit: DistanceUnit::Kilometres,
            ..TourConfiguration::default()
        };
        let mut session = CompositionSession::new(ORIGIN, config);
        let from_origin = distance::between(ORIGIN, candidate, DistanceUnit::Kilometres);

        match session.propose_waypoint(candidate) {
            Ok(_) => {
                prop_assert!(from_origin <= 30.0);
                prop_assert_eq!(session.waypoints().len(), 1);
            }
            Err(ProposeError::OutOfRange { distance, limit, .. }) => {
                prop_assert!(from_origin > 30.0);
                prop_assert_eq!(limit, 30.0);
                prop_assert!((distance - from_origin).abs() < 1e-9);
                prop_assert_eq!(session.waypoints().len(), 0);
            }
            Err(other) => prop_assert!(false, "unexpected rejection: {other:?}"),
        }
    }

    /// Once the limit is hit every further proposal is rejected and the
    /// count stays put.
    #[test]
    fn limit_is_a_hard_ceiling(extra in prop::collection::vec(adriatic_point(), 1..4)) {
        let config = TourConfiguration {
            max_points: 3,
            max_distance_radius: 0.0,
            ..TourConfiguration::default()
        };
        let mut session = CompositionSession::new(ORIGIN, config);
        for lng_step in 0..3u32 {
            let point = LatLng::new(43.4, 16.0 + f64::from(lng_step) * 0.05);
            session.propose_waypoint(point).expect("within limit");
        }
        for point in extra {
            let err = session.propose_waypoint(point).expect_err("over limit");
            prop_assert_eq!(err, ProposeError::LimitReached { limit: 3 });
            prop_assert_eq!(session.waypoints().len(), 3);
        }
    }
}
