//! Great-circle distance on a spherical Earth.
//!
//! Distances use the Haversine formula with a fixed radius of
//! [`EARTH_RADIUS_KM`]. Inputs are not validated: a non-finite component in
//! either coordinate yields `NaN`. Callers own the range checks.

use crate::Coordinate;
use crate::candidate::SENTINEL_DISTANCE_KM;

/// Mean Earth radius used by [`distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Compute the Haversine distance in kilometres between two coordinates.
///
/// The result is symmetric, zero for identical coordinates and never exceeds
/// half the circumference for finite input.
///
/// # Examples
/// ```
/// use mallmap_core::{Coordinate, distance_km};
///
/// let bangkok = Coordinate::new(13.7563, 100.5018);
/// let siam = Coordinate::new(13.7462, 100.5347);
/// let km = distance_km(bangkok, siam);
/// assert!((km - 3.7267).abs() < 1e-3);
/// assert_eq!(distance_km(bangkok, bangkok), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the Haversine formula is floating-point trigonometry"
)]
pub fn distance_km(origin: Coordinate, destination: Coordinate) -> f64 {
    let d_lat = (destination.lat - origin.lat).to_radians();
    let d_lng = (destination.lng - origin.lng).to_radians();
    let half_lat = (d_lat / 2.0).sin();
    let half_lng = (d_lng / 2.0).sin();

    // Rounding can push the sum just past 1.0 for near-antipodal points.
    let a = (half_lat * half_lat
        + origin.lat.to_radians().cos()
            * destination.lat.to_radians().cos()
            * half_lng
            * half_lng)
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Report whether `point` lies within `radius_km` of `center`.
///
/// The boundary is inclusive. Returns `false` when the distance is `NaN`.
#[must_use]
pub fn is_within_radius(center: Coordinate, point: Coordinate, radius_km: f64) -> bool {
    distance_km(center, point) <= radius_km
}

/// Human-readable rendering of a distance.
///
/// Distances below one kilometre render in whole metres, distances below ten
/// kilometres with one decimal, and longer distances as whole kilometres.
/// Values that would round to the unrankable sentinel or beyond, and
/// non-finite values, render as `distance unavailable`.
///
/// # Examples
/// ```
/// use mallmap_core::DistanceLabel;
///
/// assert_eq!(DistanceLabel::new(0.85).to_string(), "850 m");
/// assert_eq!(DistanceLabel::new(8.76).to_string(), "8.8 km");
/// assert_eq!(DistanceLabel::new(42.4).to_string(), "42 km");
/// assert_eq!(DistanceLabel::new(999.0).to_string(), "distance unavailable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceLabel {
    km: f64,
}

impl DistanceLabel {
    /// Wrap a distance in kilometres for display.
    #[must_use]
    pub const fn new(km: f64) -> Self {
        Self { km }
    }

    /// Report whether the distance is unknown for display purposes.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        !self.km.is_finite() || self.km.round() >= SENTINEL_DISTANCE_KM
    }
}

impl std::fmt::Display for DistanceLabel {
    #[expect(
        clippy::float_arithmetic,
        reason = "converting kilometres to metres for display"
    )]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unavailable() {
            return f.write_str("distance unavailable");
        }
        if self.km < 1.0 {
            write!(f, "{:.0} m", (self.km * 1000.0).round())
        } else if self.km < 10.0 {
            write!(f, "{:.1} km", self.km)
        } else {
            write!(f, "{:.0} km", self.km.round())
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests use float maths for assertions"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn quarter_meridian_matches_radius() {
        let equator = Coordinate::new(0.0, 0.0);
        let pole = Coordinate::new(90.0, 0.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((distance_km(equator, pole) - expected).abs() < 1e-9);
    }

    #[rstest]
    fn non_finite_input_is_not_guarded() {
        let origin = Coordinate::new(f64::NAN, 0.0);
        assert!(distance_km(origin, Coordinate::new(0.0, 0.0)).is_nan());
    }

    #[rstest]
    #[case(0.0, "0 m")]
    #[case(0.4996, "500 m")]
    #[case(1.0, "1.0 km")]
    #[case(9.94, "9.9 km")]
    #[case(10.0, "10 km")]
    #[case(998.4, "998 km")]
    #[case(998.6, "distance unavailable")]
    #[case(f64::NAN, "distance unavailable")]
    #[case(1200.0, "distance unavailable")]
    fn labels_distances(#[case] km: f64, #[case] expected: &str) {
        assert_eq!(DistanceLabel::new(km).to_string(), expected);
    }

    #[rstest]
    fn radius_boundary_is_inclusive() {
        let center = Coordinate::new(0.0, 0.0);
        let point = Coordinate::new(0.0, 1.0);
        let exact = distance_km(center, point);
        assert!(is_within_radius(center, point, exact));
        assert!(!is_within_radius(center, point, 111.0));
    }
}
