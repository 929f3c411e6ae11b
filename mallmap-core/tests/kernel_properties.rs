//! Property-based tests for the distance and scoring kernel.
//!
//! # Invariants tested
//!
//! - **Symmetry:** `distance(a, b) == distance(b, a)`.
//! - **Identity:** `distance(a, a) == 0`.
//! - **Bounds:** distances are non-negative and at most half the
//!   circumference, including for exactly antipodal pairs.
//! - **Monotonicity:** for fixed kind and open state, a shorter distance
//!   always scores lower.
#![expect(
    clippy::float_arithmetic,
    reason = "tests use float maths for assertions"
)]

use mallmap_core::{Coordinate, EARTH_RADIUS_KM, Kind, distance_km, score};
use proptest::prelude::*;

fn coordinate_strategy() -> impl Strategy<Value = Coordinate> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
}

fn antipodal_strategy() -> impl Strategy<Value = (Coordinate, Coordinate)> {
    (-89.0_f64..=89.0, -180.0_f64..=0.0).prop_map(|(lat, lng)| {
        (Coordinate::new(lat, lng), Coordinate::new(-lat, lng + 180.0))
    })
}

fn kind_strategy() -> impl Strategy<Value = Option<Kind>> {
    prop_oneof![Just(None), Just(Some(Kind::Mall)), Just(Some(Kind::Store))]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn distance_is_symmetric(a in coordinate_strategy(), b in coordinate_strategy()) {
        let forward = distance_km(a, b);
        let backward = distance_km(b, a);
        prop_assert!((forward - backward).abs() <= 1e-9, "{forward} != {backward}");
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate_strategy()) {
        prop_assert_eq!(distance_km(a, a), 0.0);
    }

    #[test]
    fn distance_is_bounded(a in coordinate_strategy(), b in coordinate_strategy()) {
        let km = distance_km(a, b);
        prop_assert!(km >= 0.0);
        prop_assert!(km <= EARTH_RADIUS_KM * std::f64::consts::PI + 1e-6);
    }

    #[test]
    fn antipodal_distance_is_half_the_circumference((a, b) in antipodal_strategy()) {
        let km = distance_km(a, b);
        prop_assert!(km.is_finite(), "NaN for {a} -> {b}");
        prop_assert!((km - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-3, "{km}");
    }

    #[test]
    fn score_is_monotonic_in_distance(
        near in 0.0_f64..10_000.0,
        gap in 1e-6_f64..10_000.0,
        kind in kind_strategy(),
        open_now in prop::option::of(any::<bool>()),
    ) {
        let far = near + gap;
        prop_assert!(score(near, kind, open_now) < score(far, kind, open_now));
    }
}
