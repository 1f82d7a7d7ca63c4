//! Parallel Littlewood Search
//!
//! Drives the criterion from `littlewood-core` over a shard of the initial
//! search space with a fixed pool of worker threads.
//!
//! # Lifecycle of a pair
//!
//! ```text
//! pending ──evaluate──▶ verified (retired)
//!    ▲                     │
//!    │                  not verified
//!    │                     ▼
//!    └──── push ◀── subdivide (N−1 children, fewer with pruning)
//! ```
//!
//! The run ends when every worker is idle. The first fatal [`Error`] aborts
//! it instead.
//!
//! # Sharding
//!
//! [`Bucket`] splits the initial pairs statically so independent processes
//! can share a search without talking to each other.

mod bucket;
mod config;
mod coordinator;
mod error;
mod queue;
mod scheduler;
mod space;
mod stats;
mod worker;

pub use bucket::Bucket;
pub use config::{available_threads, SearchConfig, DEFAULT_IDLE_BACKOFF, DEFAULT_MAX_DEPTH};
pub use coordinator::Coordinator;
pub use error::{ConfigError, Error, Result};
pub use queue::{PendingPair, WorkQueue};
pub use scheduler::{run_search, shuffle};
pub use space::SearchSpace;
pub use stats::{SearchReport, WorkerStats};
pub use worker::Worker;
