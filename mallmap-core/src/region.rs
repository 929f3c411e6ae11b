//! Region helpers: bounding boxes and centroids.

use geo::{Centroid, Coord, Intersects, MultiPoint, Point, Rect};
use thiserror::Error;

use crate::Coordinate;

/// Default map centre (Bangkok).
pub const BANGKOK_CENTER: Coordinate = Coordinate::new(13.7563, 100.5018);

/// Bounding box covering Thailand.
pub const THAILAND_BOUNDS: Bounds = Bounds {
    north: 20.4649,
    south: 5.6333,
    east: 105.6372,
    west: 97.3436,
};

/// Errors returned by region helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeoError {
    /// A centroid was requested for an empty set of locations.
    #[error("cannot calculate the centre of an empty set of locations")]
    EmptyLocations,
}

/// Axis-aligned latitude/longitude bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Northern latitude limit.
    pub north: f64,
    /// Southern latitude limit.
    pub south: f64,
    /// Eastern longitude limit.
    pub east: f64,
    /// Western longitude limit.
    pub west: f64,
}

impl Bounds {
    /// Report whether `point` lies inside the bounds.
    ///
    /// Points on the boundary count as inside.
    ///
    /// # Examples
    /// ```
    /// use mallmap_core::{BANGKOK_CENTER, Coordinate, THAILAND_BOUNDS};
    ///
    /// assert!(THAILAND_BOUNDS.contains(BANGKOK_CENTER));
    /// assert!(!THAILAND_BOUNDS.contains(Coordinate::new(51.5074, -0.1278)));
    /// ```
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        self.rect().intersects(&Coord::from(point))
    }

    fn rect(&self) -> Rect<f64> {
        Rect::new(
            Coord {
                x: self.west,
                y: self.south,
            },
            Coord {
                x: self.east,
                y: self.north,
            },
        )
    }
}

/// Return the arithmetic mean of `locations`.
///
/// # Errors
/// Returns [`GeoError::EmptyLocations`] when `locations` is empty.
///
/// # Examples
/// ```
/// use mallmap_core::{Coordinate, centroid};
///
/// let centre = centroid(&[Coordinate::new(10.0, 100.0), Coordinate::new(12.0, 102.0)])?;
/// assert_eq!(centre, Coordinate::new(11.0, 101.0));
/// # Ok::<(), mallmap_core::GeoError>(())
/// ```
pub fn centroid(locations: &[Coordinate]) -> Result<Coordinate, GeoError> {
    let points: MultiPoint<f64> = locations
        .iter()
        .map(|location| Point::from(Coord::from(*location)))
        .collect();
    points
        .centroid()
        .map(|point| Coordinate::from(point.0))
        .ok_or(GeoError::EmptyLocations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn centroid_of_single_point_is_itself() {
        let only = Coordinate::new(13.7, 100.5);
        assert_eq!(centroid(&[only]), Ok(only));
    }

    #[rstest]
    fn centroid_rejects_empty_input() {
        assert_eq!(centroid(&[]), Err(GeoError::EmptyLocations));
    }

    #[rstest]
    #[case(Coordinate::new(20.4649, 100.0), true)]
    #[case(Coordinate::new(5.6333, 97.3436), true)]
    #[case(Coordinate::new(20.5, 100.0), false)]
    #[case(Coordinate::new(13.0, 106.0), false)]
    fn thailand_bounds_are_inclusive(#[case] point: Coordinate, #[case] expected: bool) {
        assert_eq!(THAILAND_BOUNDS.contains(point), expected);
    }
}
