//! Latitude/longitude pairs exchanged with callers.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// A WGS84 position in decimal degrees.
///
/// No range validation is performed. Out-of-range values are accepted and
/// non-finite values propagate into distance calculations as `NaN`.
///
/// Converting to [`geo::Coord`] maps `lng` to `x` and `lat` to `y`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use mallmap_core::Coordinate;
///
/// let siam = Coordinate::new(13.7462, 100.5347);
/// let coord: Coord<f64> = siam.into();
/// assert_eq!(coord.x, 100.5347);
/// assert_eq!(Coordinate::from(coord), siam);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinate {
    /// Construct a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Report whether both components are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(coord: Coord<f64>) -> Self {
        Self {
            lat: coord.y,
            lng: coord.x,
        }
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            x: coordinate.lng,
            y: coordinate.lat,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl std::str::FromStr for Coordinate {
    type Err = String;

    /// Parse the `lat,lng` form produced by [`Display`](std::fmt::Display).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("expected LAT,LNG but found '{s}'"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|err| format!("invalid coordinate component '{part}': {err}"))
        };
        Ok(Self::new(parse(lat)?, parse(lng)?))
    }
}
