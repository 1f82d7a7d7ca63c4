//! Parallel search over a shared work queue.
//!
//! A fixed pool of OS threads drains one LIFO queue. Workers never talk to
//! each other except through the queue and the [`Coordinator`].

use std::thread;
use std::time::Instant;

use littlewood_core::{guard, ConvergentPair, Numeric};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;

use crate::{Coordinator, Error, Result, SearchConfig, SearchReport, WorkQueue, Worker, WorkerStats};

/// Shuffle `pairs` so expensive regions do not cluster on one worker.
///
/// With a seed the order is reproducible.
pub fn shuffle<P>(pairs: &mut [P], seed: Option<u64>) {
    match seed {
        Some(seed) => pairs.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => pairs.shuffle(&mut rand::thread_rng()),
    }
}

/// Search every pair in `pairs` and everything they subdivide into.
///
/// Returns once every leaf is certified, or with the first fatal error any
/// worker hit. The hardware thread limit is the caller's concern; see
/// [`SearchConfig::validate`].
pub fn run_search<T: Numeric>(config: &SearchConfig, mut pairs: Vec<ConvergentPair<T>>) -> Result<SearchReport> {
    config.validate_bounds()?;
    for pair in &pairs {
        guard::check_headroom(pair, config.n)?;
    }
    shuffle(&mut pairs, config.seed);

    let initial_pairs = pairs.len();
    let queue = WorkQueue::new(pairs);
    let coordinator = Coordinator::new(config.threads);
    info!(
        n = config.n,
        threads = config.threads,
        backend = T::BACKEND,
        pairs = initial_pairs,
        pruning = config.pruning,
        "starting search"
    );

    let start = Instant::now();
    let outcomes: Vec<thread::Result<WorkerStats>> = thread::scope(|s| {
        let handles: Vec<_> = (0..config.threads)
            .map(|id| {
                let worker = Worker::new(id, config, &queue, &coordinator);
                s.spawn(move || worker.run())
            })
            .collect();
        handles.into_iter().map(|handle| handle.join()).collect()
    });
    let elapsed = start.elapsed();

    let mut totals = WorkerStats::default();
    let mut per_worker = Vec::with_capacity(outcomes.len());
    for (id, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(stats) => {
                totals.merge(&stats);
                per_worker.push(stats);
            }
            Err(_) => coordinator.abort(Error::WorkerPanicked(id)),
        }
    }
    if let Some(error) = coordinator.take_failure() {
        return Err(error);
    }

    let report = SearchReport {
        n: config.n,
        backend: T::BACKEND,
        threads: config.threads,
        initial_pairs,
        totals,
        per_worker,
        elapsed,
    };
    info!(elapsed_ms = elapsed.as_millis() as u64, %report, "search complete");
    Ok(report)
}
