//! Ranking inputs and outputs.
//!
//! A [`Candidate`] is built per request by the caller and consumed by the
//! ranker, which produces exactly one [`RankedResult`] for it. Field names
//! serialise in `camelCase` so the pair matches the request/response
//! messages exchanged with front ends.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Coordinate, Kind};

/// Distance reported for a candidate that could not be ranked.
pub const SENTINEL_DISTANCE_KM: f64 = 999.0;

/// Score reported for a candidate that could not be ranked.
pub const SENTINEL_SCORE: f64 = 999.0;

/// Location payload attached to a candidate.
///
/// Payloads that do not decode as a `{lat, lng}` object are retained as
/// [`Location::Malformed`] so a single corrupt row cannot fail a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    /// A well-formed coordinate.
    Point(Coordinate),
    /// Any other JSON value supplied in the `coords` field.
    Malformed(Value),
}

impl Location {
    /// Return the coordinate, or `None` for a malformed payload.
    #[must_use]
    pub const fn point(&self) -> Option<Coordinate> {
        match self {
            Self::Point(coordinate) => Some(*coordinate),
            Self::Malformed(_) => None,
        }
    }
}

impl From<Coordinate> for Location {
    fn from(coordinate: Coordinate) -> Self {
        Self::Point(coordinate)
    }
}

/// An entity submitted for ranking.
///
/// `id` must be unique within one request. Every other field is optional.
///
/// # Examples
/// ```
/// use mallmap_core::{Candidate, Coordinate, Kind};
///
/// let candidate = Candidate::new("central-world")
///     .with_coords(Coordinate::new(13.7466, 100.5393))
///     .with_kind(Kind::Mall)
///     .with_open_now(true);
/// assert_eq!(candidate.kind, Some(Kind::Mall));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Caller-assigned identifier echoed in the result.
    pub id: String,
    /// Known location, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<Location>,
    /// Mall or store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
    /// Whether the entity is open at request time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
}

impl Candidate {
    /// Construct a candidate carrying only an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            coords: None,
            kind: None,
            open_now: None,
        }
    }

    /// Attach a location.
    #[must_use]
    pub fn with_coords(mut self, coords: impl Into<Location>) -> Self {
        self.coords = Some(coords.into());
        self
    }

    /// Attach a kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Attach an open-now flag.
    #[must_use]
    pub const fn with_open_now(mut self, open_now: bool) -> Self {
        self.open_now = Some(open_now);
        self
    }
}

/// Why a result carries sentinel values instead of a computed ranking.
///
/// Both reasons serialise identically on the wire; the classification is
/// only visible in-process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The candidate had no `coords`.
    MissingCoordinates,
    /// The candidate's location or row could not be interpreted.
    ComputationFailed,
}

/// The ranked form of a [`Candidate`]. Lower scores rank first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    /// Identifier echoed from the candidate.
    pub id: String,
    /// Great-circle distance from the origin in kilometres.
    pub distance_km: f64,
    /// Composite ranking score.
    pub score: f64,
    /// Kind echoed from the candidate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
    /// Open-now flag echoed from the candidate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    /// Set when the sentinel values were used.
    #[serde(skip)]
    pub fallback: Option<FallbackReason>,
}

impl RankedResult {
    /// Build a computed result for `candidate`.
    #[must_use]
    pub fn computed(candidate: &Candidate, distance_km: f64, score: f64) -> Self {
        Self {
            id: candidate.id.clone(),
            distance_km,
            score,
            kind: candidate.kind,
            open_now: candidate.open_now,
            fallback: None,
        }
    }

    /// Build a sentinel result for `candidate`.
    #[must_use]
    pub fn fallback(candidate: &Candidate, reason: FallbackReason) -> Self {
        Self {
            id: candidate.id.clone(),
            distance_km: SENTINEL_DISTANCE_KM,
            score: SENTINEL_SCORE,
            kind: candidate.kind,
            open_now: candidate.open_now,
            fallback: Some(reason),
        }
    }

    /// Report whether the distance should be displayed as unknown.
    #[must_use]
    pub fn is_unrankable(&self) -> bool {
        crate::DistanceLabel::new(self.distance_km).is_unavailable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn decodes_wire_row() {
        let row: Candidate = serde_json::from_str(
            r#"{"id":"A","coords":{"lat":13.6891,"lng":100.5441},"kind":"mall","openNow":true}"#,
        )
        .expect("valid row");
        assert_eq!(
            row,
            Candidate::new("A")
                .with_coords(Coordinate::new(13.6891, 100.5441))
                .with_kind(Kind::Mall)
                .with_open_now(true)
        );
    }

    #[rstest]
    #[case(r#"{"id":"X","coords":{"lat":"north"}}"#)]
    #[case(r#"{"id":"X","coords":{"latitude":13.0,"longitude":100.0}}"#)]
    #[case(r#"{"id":"X","coords":"somewhere"}"#)]
    fn retains_malformed_coords(#[case] raw: &str) {
        let row: Candidate = serde_json::from_str(raw).expect("row decodes");
        assert!(matches!(row.coords, Some(Location::Malformed(_))));
    }

    #[rstest]
    fn null_coords_are_missing() {
        let row: Candidate = serde_json::from_str(r#"{"id":"X","coords":null}"#).expect("row");
        assert_eq!(row.coords, None);
    }

    #[rstest]
    fn fallback_preserves_echoed_fields() {
        let candidate = Candidate::new("C").with_kind(Kind::Store).with_open_now(false);
        let result = RankedResult::fallback(&candidate, FallbackReason::MissingCoordinates);
        assert_eq!(result.distance_km, SENTINEL_DISTANCE_KM);
        assert_eq!(result.score, SENTINEL_SCORE);
        assert_eq!(result.kind, Some(Kind::Store));
        assert_eq!(result.open_now, Some(false));
        assert!(result.is_unrankable());
    }

    #[rstest]
    fn result_serialises_camel_case_without_fallback() {
        let candidate = Candidate::new("C");
        let result = RankedResult::fallback(&candidate, FallbackReason::ComputationFailed);
        let json = serde_json::to_string(&result).expect("serialise result");
        assert_eq!(json, r#"{"id":"C","distanceKm":999.0,"score":999.0}"#);
    }
}
