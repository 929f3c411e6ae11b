//! Request and response messages exchanged with callers.
//!
//! Requests decode from `{"origin": {...}, "rows": [...]}`. A row that does
//! not decode as a [`Candidate`] is not dropped: it becomes a candidate whose
//! location is [`Location::Malformed`], so it ranks as a computation fault.

use mallmap_core::{Candidate, Coordinate, Kind, Location, RankedResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One ranking request.
///
/// # Examples
/// ```
/// use mallmap_ranker::RankRequest;
///
/// let request = RankRequest::from_json(
///     r#"{"origin":{"lat":13.75,"lng":100.5},"rows":[{"id":"A"}, 7]}"#,
/// )?;
/// assert_eq!(request.rows.len(), 2);
/// assert_eq!(request.rows[1].id, "7");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RequestMessage")]
pub struct RankRequest {
    /// Point distances are measured from. `None` yields an empty response.
    pub origin: Option<Coordinate>,
    /// Candidates to rank.
    pub rows: Vec<Candidate>,
}

impl RankRequest {
    /// Construct a request from an origin and candidates.
    #[must_use]
    pub const fn new(origin: Coordinate, rows: Vec<Candidate>) -> Self {
        Self {
            origin: Some(origin),
            rows,
        }
    }

    /// Decode a request message.
    ///
    /// # Errors
    /// Returns the decoder error when the payload is not a request object or
    /// the origin is not a coordinate.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    /// Report whether the request short-circuits to an empty response.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.origin.is_none() || self.rows.is_empty()
    }
}

/// Encode ranked results as a response message.
///
/// # Errors
/// Returns the encoder error from `serde_json`.
pub fn encode_response(results: &[RankedResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string(results)
}

#[derive(Deserialize)]
struct RequestMessage {
    #[serde(default)]
    origin: Option<Coordinate>,
    #[serde(default)]
    rows: Vec<RowMessage>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RowMessage {
    Candidate(Candidate),
    Malformed(Value),
}

impl From<RequestMessage> for RankRequest {
    fn from(message: RequestMessage) -> Self {
        Self {
            origin: message.origin,
            rows: message.rows.into_iter().map(Candidate::from).collect(),
        }
    }
}

impl From<RowMessage> for Candidate {
    fn from(row: RowMessage) -> Self {
        match row {
            RowMessage::Candidate(candidate) => candidate,
            RowMessage::Malformed(value) => salvage_row(value),
        }
    }
}

fn salvage_row(value: Value) -> Candidate {
    let id = match value.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
        None => value.to_string(),
    };
    let kind = value
        .get("kind")
        .and_then(Value::as_str)
        .and_then(|raw| raw.parse::<Kind>().ok());
    let open_now = value.get("openNow").and_then(Value::as_bool);
    Candidate {
        id,
        coords: Some(Location::Malformed(value)),
        kind,
        open_now,
    }
}
