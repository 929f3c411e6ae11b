//! Facade crate for the Mallmap ranking engine.
//!
//! This crate re-exports the scoring kernel and, behind the default `ranker`
//! feature, the batch coordinator and its background worker.

#![forbid(unsafe_code)]

pub use mallmap_core::{
    BANGKOK_CENTER, Bounds, Candidate, Coordinate, DistanceLabel, EARTH_RADIUS_KM,
    FallbackReason, GeoError, HoursError, Kind, Location, OPEN_NOW_BONUS, OpenStatus,
    OpeningHours, RankedResult, SENTINEL_DISTANCE_KM, SENTINEL_SCORE, ScoreWeights,
    THAILAND_BOUNDS, centroid, distance_km, is_within_radius, score,
};

#[cfg(feature = "ranker")]
pub use mallmap_ranker::{
    ConfigError, CooperativeRanker, RankReport, RankRequest, Ranker, RankerConfig,
    RankingHandle, rank,
};
