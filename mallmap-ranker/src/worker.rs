//! Background ranking worker.
//!
//! [`RankingHandle::spawn`] starts a Tokio task that receives requests over a
//! bounded channel. Each request is ranked in its own task and answered over
//! a one-shot channel, so concurrent requests share no mutable state.
//!
//! At most `queue_capacity` requests are ranked at once. Further requests
//! wait in the channel, and once it is full [`RankingHandle::rank`] waits for
//! space.
//!
//! The handle never fails: when the worker is missing, has stopped, or a
//! ranking task panics, the fault is logged and the caller receives an empty
//! list.

use std::sync::Arc;

use mallmap_core::RankedResult;
use tokio::runtime::Handle;
use tokio::sync::{OwnedSemaphorePermit, Semaphore, mpsc, oneshot};

use crate::{CooperativeRanker, RankRequest, Ranker, RankerConfig, encode_response};

const EMPTY_RESPONSE: &str = "[]";

struct Job {
    request: RankRequest,
    reply: oneshot::Sender<Vec<RankedResult>>,
}

/// Cloneable handle to a background ranking worker.
///
/// The worker stops once every handle has been dropped and in-flight
/// requests have been answered.
///
/// # Examples
/// ```
/// use mallmap_core::{Candidate, Coordinate};
/// use mallmap_ranker::{RankRequest, RankerConfig, RankingHandle};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let handle = RankingHandle::spawn(RankerConfig::default());
/// let request = RankRequest::new(Coordinate::new(13.75, 100.5), vec![Candidate::new("A")]);
/// let ranked = handle.rank(request).await;
/// assert_eq!(ranked.len(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RankingHandle {
    jobs: mpsc::Sender<Job>,
}

impl RankingHandle {
    /// Spawn a worker running the [`CooperativeRanker`] on the current Tokio
    /// runtime.
    ///
    /// Outside a runtime the worker cannot start; the error is logged and the
    /// returned handle answers every request with an empty list.
    #[must_use]
    pub fn spawn(config: RankerConfig) -> Self {
        Self::spawn_with(CooperativeRanker::new(config), config.queue_capacity())
    }

    /// Spawn a worker running `ranker` with a request queue of
    /// `queue_capacity` (minimum one).
    ///
    /// `queue_capacity` also bounds how many requests are ranked at once.
    #[must_use]
    pub fn spawn_with<R: Ranker>(ranker: R, queue_capacity: usize) -> Self {
        let capacity = queue_capacity.max(1);
        let (jobs, inbox) = mpsc::channel(capacity);
        let started = Handle::try_current().map(|runtime| {
            runtime.spawn(run_worker(Arc::new(ranker), inbox, capacity));
        });
        if let Err(err) = started {
            log::error!("ranking worker failed to start: {err}");
        }
        Self { jobs }
    }

    /// Rank `request` on the worker.
    ///
    /// Always resolves with a list. Faults inside the worker are logged and
    /// reported as an empty list.
    pub async fn rank(&self, request: RankRequest) -> Vec<RankedResult> {
        if request.is_empty() {
            return Vec::new();
        }
        let (reply, response) = oneshot::channel();
        if self.jobs.send(Job { request, reply }).await.is_err() {
            log::error!("ranking worker is not running; returning no results");
            return Vec::new();
        }
        response.await.unwrap_or_else(|_| {
            log::error!("ranking worker dropped the request; returning no results");
            Vec::new()
        })
    }

    /// Rank a JSON request message and return the JSON response message.
    ///
    /// Undecodable requests and encoding failures are logged and produce
    /// `[]`.
    pub async fn rank_json(&self, payload: &str) -> String {
        let request = match RankRequest::from_json(payload) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("discarding undecodable ranking request: {err}");
                return EMPTY_RESPONSE.to_owned();
            }
        };
        let results = self.rank(request).await;
        encode_response(&results).unwrap_or_else(|err| {
            log::error!("failed to encode ranking response: {err}");
            EMPTY_RESPONSE.to_owned()
        })
    }

    /// Report whether the worker has stopped accepting requests.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.jobs.is_closed()
    }
}

async fn run_worker<R: Ranker>(
    ranker: Arc<R>,
    mut inbox: mpsc::Receiver<Job>,
    capacity: usize,
) {
    let permits = Arc::new(Semaphore::new(capacity));
    loop {
        // A permit is held before the next job leaves the channel.
        let Ok(permit) = Arc::clone(&permits).acquire_owned().await else {
            break;
        };
        let Some(job) = inbox.recv().await else {
            break;
        };
        tokio::spawn(answer(Arc::clone(&ranker), job, permit));
    }
    log::debug!("ranking worker stopped");
}

// The permit is released once the reply has been sent.
async fn answer<R: Ranker>(ranker: Arc<R>, job: Job, _permit: OwnedSemaphorePermit) {
    let Job { request, reply } = job;
    let rows = request.rows.len();
    let task = tokio::spawn(async move { ranker.rank(request).await });
    let results = task.await.map_or_else(
        |err| {
            log::error!("ranking task failed: {err}");
            Vec::new()
        },
        |report| {
            log::debug!(
                "ranked {rows} candidates in {} chunks with {} yields",
                report.chunks,
                report.yields
            );
            report.results
        },
    );
    if reply.send(results).is_err() {
        log::debug!("ranking caller went away before the response was ready");
    }
}
