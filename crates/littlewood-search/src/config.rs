//! Search configuration.

use std::num::NonZeroUsize;
use std::time::Duration;

use crate::{Bucket, ConfigError};

/// Default recursion depth guard.
pub const DEFAULT_MAX_DEPTH: u32 = 80;

/// Default sleep between polls of an empty queue.
pub const DEFAULT_IDLE_BACKOFF: Duration = Duration::from_millis(5);

/// Hardware concurrency, or 1 when it cannot be determined.
pub fn available_threads() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Configuration for one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Search bound N.
    pub n: u32,

    /// Number of worker threads.
    pub threads: usize,

    /// The shard of the initial pairs this run processes.
    pub bucket: Bucket,

    /// Pre-split rounds applied to the initial pairs before sharding.
    pub subdivisions: u32,

    /// A pair still unverified at this depth aborts the run.
    pub max_depth: u32,

    /// How long an idle worker sleeps before polling the queue again.
    /// Termination may lag quiescence by up to this interval.
    pub idle_backoff: Duration,

    /// Stop subdividing at the first digit the cutoff reports as covered.
    ///
    /// Off by default: pruned runs can skip children that fail the
    /// criterion on their own, so a pruned run is not a full certificate.
    pub pruning: bool,

    /// Seed for the dispatch shuffle. `None` draws a fresh order each run.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            n: 9,
            threads: available_threads(),
            bucket: Bucket::WHOLE,
            subdivisions: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            idle_backoff: DEFAULT_IDLE_BACKOFF,
            pruning: false,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Create a config for bound `n` with defaults elsewhere.
    #[must_use]
    pub fn new(n: u32) -> Self {
        Self {
            n,
            ..Default::default()
        }
    }

    /// Set the worker count.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Set the shard.
    #[must_use]
    pub fn with_bucket(mut self, bucket: Bucket) -> Self {
        self.bucket = bucket;
        self
    }

    /// Set the number of pre-split rounds.
    #[must_use]
    pub fn with_subdivisions(mut self, subdivisions: u32) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    /// Set the depth guard.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the idle poll interval.
    #[must_use]
    pub fn with_idle_backoff(mut self, backoff: Duration) -> Self {
        self.idle_backoff = backoff;
        self
    }

    /// Enable or disable pruning.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Make the dispatch order reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check bound and worker count, ignoring hardware limits.
    ///
    /// The shard needs no check: a [`Bucket`] is valid by construction.
    pub fn validate_bounds(&self) -> Result<(), ConfigError> {
        if self.n == 0 {
            return Err(ConfigError::NonPositiveBound);
        }
        if self.threads == 0 {
            return Err(ConfigError::NoThreads);
        }
        Ok(())
    }

    /// Full validation against `available` hardware threads.
    pub fn validate(&self, available: usize) -> Result<(), ConfigError> {
        self.validate_bounds()?;
        if self.threads > available {
            return Err(ConfigError::TooManyThreads {
                requested: self.threads,
                available,
            });
        }
        Ok(())
    }
}
