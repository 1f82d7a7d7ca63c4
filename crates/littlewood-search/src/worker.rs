//! Worker loop.
//!
//! Each worker repeatedly takes a pair, evaluates it, and either retires it
//! (certified) or pushes its children. An empty queue sends the worker into
//! poll-with-backoff until every worker is idle or the run is aborted.

use std::thread;

use littlewood_core::{guard, subdivide_into, ConvergentPair, Cutoff, LittlewoodCriterion, Numeric};
use tracing::{debug, trace};

use crate::{Coordinator, Error, PendingPair, Result, SearchConfig, WorkQueue, WorkerStats};

/// One worker's view of a run.
pub struct Worker<'a, T> {
    id: usize,
    config: &'a SearchConfig,
    queue: &'a WorkQueue<T>,
    coordinator: &'a Coordinator,
    criterion: LittlewoodCriterion<T>,
    children: Vec<ConvergentPair<T>>,
    idle: bool,
    stats: WorkerStats,
}

impl<'a, T: Numeric> Worker<'a, T> {
    /// Create worker `id`.
    pub fn new(
        id: usize,
        config: &'a SearchConfig,
        queue: &'a WorkQueue<T>,
        coordinator: &'a Coordinator,
    ) -> Self {
        Self {
            id,
            config,
            queue,
            coordinator,
            criterion: LittlewoodCriterion::new(config.n),
            children: Vec::with_capacity(config.n.saturating_sub(1) as usize),
            idle: false,
            stats: WorkerStats::default(),
        }
    }

    /// Run until quiescence or abort and return this worker's counters.
    pub fn run(mut self) -> WorkerStats {
        let _panic_guard = AbortOnPanic {
            coordinator: self.coordinator,
            worker: self.id,
        };
        debug!(worker = self.id, "worker started");
        loop {
            if self.coordinator.is_aborted() {
                break;
            }
            match self.queue.pop(self.coordinator, &mut self.idle) {
                Some(pending) => {
                    if let Err(error) = self.process(pending) {
                        self.coordinator.abort(error);
                        break;
                    }
                }
                None => {
                    if self.coordinator.should_stop() {
                        break;
                    }
                    thread::sleep(self.config.idle_backoff);
                }
            }
        }
        debug!(worker = self.id, evaluated = self.stats.evaluated, "worker finished");
        self.stats
    }

    /// Evaluate one pair and push its children if it is not certified.
    pub fn process(&mut self, pending: PendingPair<T>) -> Result<()> {
        let PendingPair { pair, depth } = pending;
        let n = self.config.n;
        self.stats.evaluated += 1;
        let bits = guard::criterion_bits(&self.criterion, &pair);
        self.stats.peak_bits = self.stats.peak_bits.max(bits);

        let result = self.criterion.evaluate(&pair);
        if result.meets_criteria {
            trace!(worker = self.id, depth, %pair, "verified");
            self.stats.verified += 1;
            self.stats.deepest = self.stats.deepest.max(depth);
            return Ok(());
        }

        if depth >= self.config.max_depth {
            return Err(Error::DepthExceeded {
                depth,
                limit: self.config.max_depth,
                pair: pair.to_string(),
            });
        }
        guard::check_children(&pair, n)?;

        self.children.clear();
        let produced = if self.config.pruning {
            let cutoff = Cutoff::new(&self.criterion, &result.best_q);
            subdivide_into(&pair, n, Some(&cutoff), &mut self.children)
        } else {
            subdivide_into(&pair, n, None, &mut self.children)
        };
        trace!(worker = self.id, depth, %pair, best_q = %result.best_q, produced, "subdivided");

        self.stats.expanded += 1;
        self.stats.pruned += u64::from(n.saturating_sub(1)) - produced as u64;
        self.queue.push_children(self.children.drain(..), depth + 1);
        Ok(())
    }

    /// Counters so far.
    pub fn stats(&self) -> &WorkerStats {
        &self.stats
    }
}

/// Aborts the run if the worker unwinds, so its siblings do not wait for
/// an idle mark that never comes.
struct AbortOnPanic<'a> {
    coordinator: &'a Coordinator,
    worker: usize,
}

impl Drop for AbortOnPanic<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.coordinator.abort(Error::WorkerPanicked(self.worker));
        }
    }
}
