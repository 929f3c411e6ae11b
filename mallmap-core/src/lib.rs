//! Core domain types and scoring kernel for the Mallmap ranking engine.
//!
//! The kernel is a set of pure functions: Haversine distance between two
//! [`Coordinate`] values and a composite score that prefers nearby, open
//! malls. The supporting types describe ranking inputs ([`Candidate`]) and
//! outputs ([`RankedResult`]) together with display and opening-hours
//! helpers used by front ends.
//!
//! # Examples
//!
//! ```
//! use mallmap_core::{Coordinate, Kind, distance_km, score};
//!
//! let origin = Coordinate::new(13.7563, 100.5018);
//! let mall = Coordinate::new(13.6891, 100.5441);
//! let km = distance_km(origin, mall);
//! let ranked = score(km, Some(Kind::Mall), Some(true));
//! assert!(ranked < km);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod candidate;
mod coordinate;
mod distance;
pub mod hours;
mod kind;
mod region;
mod score;

pub use candidate::{
    Candidate, FallbackReason, Location, RankedResult, SENTINEL_DISTANCE_KM, SENTINEL_SCORE,
};
pub use coordinate::Coordinate;
pub use distance::{DistanceLabel, EARTH_RADIUS_KM, distance_km, is_within_radius};
pub use hours::{HoursError, OpenStatus, OpeningHours};
pub use kind::Kind;
pub use region::{BANGKOK_CENTER, Bounds, GeoError, THAILAND_BOUNDS, centroid};
pub use score::{OPEN_NOW_BONUS, ScoreWeights, score};
