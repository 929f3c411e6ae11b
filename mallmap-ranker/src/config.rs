//! Tuning knobs for the batch coordinator and its worker.

use std::num::NonZeroUsize;

use mallmap_core::ScoreWeights;
use thiserror::Error;

/// Candidates processed between yield checks.
pub const DEFAULT_CHUNK_SIZE: usize = 50;

/// Chunks processed before yielding to the scheduler.
pub const DEFAULT_YIELD_EVERY: usize = 5;

/// Requests buffered by the worker before senders wait.
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Errors returned by [`RankerConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A setting that must be positive was zero.
    #[error("{field} must be greater than zero")]
    Zero {
        /// Name of the offending setting.
        field: &'static str,
    },
}

/// Configuration for [`crate::CooperativeRanker`] and
/// [`crate::RankingHandle`].
///
/// # Examples
/// ```
/// use mallmap_ranker::RankerConfig;
///
/// let config = RankerConfig::new(100, 2)?;
/// assert_eq!(config.chunk_size(), 100);
/// assert!(RankerConfig::new(0, 2).is_err());
/// # Ok::<(), mallmap_ranker::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankerConfig {
    chunk_size: NonZeroUsize,
    yield_every: NonZeroUsize,
    queue_capacity: NonZeroUsize,
    weights: ScoreWeights,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            chunk_size: NonZeroUsize::new(DEFAULT_CHUNK_SIZE).unwrap_or(NonZeroUsize::MIN),
            yield_every: NonZeroUsize::new(DEFAULT_YIELD_EVERY).unwrap_or(NonZeroUsize::MIN),
            queue_capacity: NonZeroUsize::new(DEFAULT_QUEUE_CAPACITY)
                .unwrap_or(NonZeroUsize::MIN),
            weights: ScoreWeights::default(),
        }
    }
}

impl RankerConfig {
    /// Build a configuration with explicit chunking and default queue and
    /// weights.
    ///
    /// # Errors
    /// Returns [`ConfigError::Zero`] when either value is zero.
    pub fn new(chunk_size: usize, yield_every: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            chunk_size: non_zero(chunk_size, "chunk size")?,
            yield_every: non_zero(yield_every, "yield interval")?,
            ..Self::default()
        })
    }

    /// Replace the worker queue capacity.
    ///
    /// # Errors
    /// Returns [`ConfigError::Zero`] when `capacity` is zero.
    pub fn with_queue_capacity(self, capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            queue_capacity: non_zero(capacity, "queue capacity")?,
            ..self
        })
    }

    /// Replace the score weights.
    #[must_use]
    pub const fn with_weights(self, weights: ScoreWeights) -> Self {
        Self { weights, ..self }
    }

    /// Candidates per chunk.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size.get()
    }

    /// Chunks between cooperative yields.
    #[must_use]
    pub const fn yield_every(&self) -> usize {
        self.yield_every.get()
    }

    /// Capacity of the worker request queue.
    #[must_use]
    pub const fn queue_capacity(&self) -> usize {
        self.queue_capacity.get()
    }

    /// Score weights applied to each candidate.
    #[must_use]
    pub const fn weights(&self) -> &ScoreWeights {
        &self.weights
    }
}

fn non_zero(value: usize, field: &'static str) -> Result<NonZeroUsize, ConfigError> {
    NonZeroUsize::new(value).ok_or(ConfigError::Zero { field })
}
