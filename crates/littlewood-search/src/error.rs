//! Error types for littlewood-search.

use thiserror::Error;

/// Result type for littlewood-search operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid run configuration, detected before any work starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// N must be positive.
    #[error("search bound N must be positive")]
    NonPositiveBound,

    /// At least one worker is required.
    #[error("thread count must be at least 1")]
    NoThreads,

    /// More workers than the machine can run concurrently.
    #[error("requested {requested} threads but only {available} are available")]
    TooManyThreads { requested: usize, available: usize },

    /// Shard count must be at least one.
    #[error("bucket count must be at least 1")]
    NoBuckets,

    /// Shard index outside `1..=count`.
    #[error("bucket index {index} is outside 1..={count}")]
    BucketOutOfRange { index: usize, count: usize },
}

/// Fatal search failures. Any of these invalidates the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The configuration was rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A core safety check failed.
    #[error(transparent)]
    Core(#[from] littlewood_core::Error),

    /// A pair stayed unverified past the depth guard.
    #[error("pair {pair} still unverified at depth {depth} (limit {limit})")]
    DepthExceeded {
        depth: u32,
        limit: u32,
        pair: String,
    },

    /// A worker thread panicked.
    #[error("worker {0} panicked")]
    WorkerPanicked(usize),
}
