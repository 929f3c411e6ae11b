//! Batch ranking over the scoring kernel.
//!
//! Candidates are evaluated in fixed-size chunks. The asynchronous path
//! yields to the Tokio scheduler after every `yield_every` chunks so large
//! requests do not monopolise a worker thread. Results are sorted once, after
//! every candidate has been evaluated.

use std::future::Future;

use mallmap_core::{
    Candidate, Coordinate, FallbackReason, Location, RankedResult, ScoreWeights, distance_km,
};

use crate::{RankRequest, RankerConfig};

/// Ranked results together with batching statistics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankReport {
    /// Results in ascending score order.
    pub results: Vec<RankedResult>,
    /// Number of chunks evaluated.
    pub chunks: usize,
    /// Number of cooperative yields performed.
    pub yields: usize,
}

/// Rank a request to completion.
///
/// Implementations must return exactly one result per candidate in
/// ascending score order, or no results for an empty request. Rankers must be
/// `Send + Sync` so a worker can share them across tasks.
pub trait Ranker: Send + Sync + 'static {
    /// Rank `request`.
    fn rank(&self, request: RankRequest) -> impl Future<Output = RankReport> + Send;
}

/// Default [`Ranker`] that yields cooperatively between chunks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CooperativeRanker {
    config: RankerConfig,
}

impl CooperativeRanker {
    /// Construct a ranker with `config`.
    #[must_use]
    pub const fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &RankerConfig {
        &self.config
    }
}

impl Ranker for CooperativeRanker {
    async fn rank(&self, request: RankRequest) -> RankReport {
        let Some(origin) = request.origin else {
            return RankReport::default();
        };
        let mut report = RankReport {
            results: Vec::with_capacity(request.rows.len()),
            ..RankReport::default()
        };
        let mut chunks_since_yield = 0_usize;
        for chunk in request.rows.chunks(self.config.chunk_size()) {
            evaluate_chunk(origin, chunk, self.config.weights(), &mut report);
            chunks_since_yield += 1;
            if chunks_since_yield == self.config.yield_every() {
                chunks_since_yield = 0;
                report.yields += 1;
                tokio::task::yield_now().await;
            }
        }
        sort_by_score(&mut report.results);
        report
    }
}

/// Rank a request synchronously, without yielding.
///
/// Returns an empty list when the origin is missing or there are no rows.
///
/// # Examples
/// ```
/// use mallmap_core::{Candidate, Coordinate};
/// use mallmap_ranker::{RankRequest, RankerConfig, rank};
///
/// let request = RankRequest::new(
///     Coordinate::new(13.7563, 100.5018),
///     vec![Candidate::new("far"), Candidate::new("near").with_coords(Coordinate::new(13.75, 100.5))],
/// );
/// let ranked = rank(&request, &RankerConfig::default());
/// assert_eq!(ranked[0].id, "near");
/// assert_eq!(ranked[1].score, 999.0);
/// ```
#[must_use]
pub fn rank(request: &RankRequest, config: &RankerConfig) -> Vec<RankedResult> {
    let Some(origin) = request.origin else {
        return Vec::new();
    };
    let mut report = RankReport {
        results: Vec::with_capacity(request.rows.len()),
        ..RankReport::default()
    };
    for chunk in request.rows.chunks(config.chunk_size()) {
        evaluate_chunk(origin, chunk, config.weights(), &mut report);
    }
    sort_by_score(&mut report.results);
    report.results
}

/// Evaluate one candidate against `origin`.
///
/// Never fails: a candidate without coordinates, or with a malformed
/// location, yields a sentinel result.
#[must_use]
pub fn evaluate(origin: Coordinate, candidate: &Candidate, weights: &ScoreWeights) -> RankedResult {
    match &candidate.coords {
        None => RankedResult::fallback(candidate, FallbackReason::MissingCoordinates),
        Some(Location::Point(destination)) => {
            let km = distance_km(origin, *destination);
            let score = weights.score(km, candidate.kind, candidate.open_now);
            RankedResult::computed(candidate, km, score)
        }
        Some(Location::Malformed(payload)) => {
            log::warn!(
                "distance calculation failed for {}: unusable location {payload}",
                candidate.id
            );
            RankedResult::fallback(candidate, FallbackReason::ComputationFailed)
        }
    }
}

/// Sort results in ascending score order.
///
/// The sort is stable and uses a total order, so repeated runs produce
/// identical output. `NaN` scores of either sign sort after every number.
pub fn sort_by_score(results: &mut [RankedResult]) {
    results.sort_by(|a, b| {
        a.score
            .is_nan()
            .cmp(&b.score.is_nan())
            .then(a.score.total_cmp(&b.score))
    });
}

fn evaluate_chunk(
    origin: Coordinate,
    chunk: &[Candidate],
    weights: &ScoreWeights,
    report: &mut RankReport,
) {
    report.results.extend(
        chunk
            .iter()
            .map(|candidate| evaluate(origin, candidate, weights)),
    );
    report.chunks += 1;
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests use float maths for assertions"
)]
mod tests {
    use super::*;
    use mallmap_core::{Kind, SENTINEL_SCORE};
    use rstest::{fixture, rstest};

    #[fixture]
    fn origin() -> Coordinate {
        Coordinate::new(13.7563, 100.5018)
    }

    fn rows(count: usize) -> Vec<Candidate> {
        let mut lng = 100.5;
        (0..count)
            .map(|index| {
                lng += 1e-4;
                Candidate::new(format!("row-{index}")).with_coords(Coordinate::new(13.7, lng))
            })
            .collect()
    }

    #[rstest]
    fn malformed_location_falls_back(origin: Coordinate) {
        let candidate = Candidate::new("bad")
            .with_coords(Location::Malformed(serde_json::json!({"lat": "x"})))
            .with_kind(Kind::Store);
        let result = evaluate(origin, &candidate, &ScoreWeights::default());
        assert_eq!(result.score, SENTINEL_SCORE);
        assert_eq!(result.fallback, Some(FallbackReason::ComputationFailed));
        assert_eq!(result.kind, Some(Kind::Store));
    }

    #[rstest]
    fn missing_location_is_classified(origin: Coordinate) {
        let result = evaluate(origin, &Candidate::new("none"), &ScoreWeights::default());
        assert_eq!(result.fallback, Some(FallbackReason::MissingCoordinates));
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(49, 1, 0)]
    #[case(250, 5, 1)]
    #[case(251, 6, 1)]
    #[case(1000, 20, 4)]
    #[tokio::test]
    async fn yields_every_five_chunks(
        origin: Coordinate,
        #[case] count: usize,
        #[case] chunks: usize,
        #[case] yields: usize,
    ) {
        let ranker = CooperativeRanker::default();
        let report = ranker.rank(RankRequest::new(origin, rows(count))).await;
        assert_eq!(report.results.len(), count);
        assert_eq!(report.chunks, chunks);
        assert_eq!(report.yields, yields);
    }

    #[rstest]
    #[tokio::test]
    async fn cooperative_and_sync_paths_agree(origin: Coordinate) {
        let request = RankRequest::new(origin, rows(300));
        let config = RankerConfig::default();
        let sync = rank(&request, &config);
        let report = CooperativeRanker::new(config).rank(request).await;
        assert_eq!(report.results, sync);
    }

    #[rstest]
    fn nan_scores_sort_last() {
        let candidate = Candidate::new("nan");
        let mut results = vec![
            RankedResult::computed(&candidate, f64::NAN, f64::NAN),
            RankedResult::computed(&Candidate::new("negative-nan"), -f64::NAN, -f64::NAN),
            RankedResult::computed(&Candidate::new("one"), 1.0, 1.0),
            RankedResult::fallback(&Candidate::new("none"), FallbackReason::MissingCoordinates),
            RankedResult::computed(&Candidate::new("below"), -3.0, 2.0),
        ];
        sort_by_score(&mut results);
        let ids: Vec<_> = results.iter().map(|result| result.id.as_str()).collect();
        assert_eq!(ids, ["below", "one", "none", "negative-nan", "nan"]);
    }
}
