//! Run statistics.

use std::fmt;
use std::time::Duration;

/// Counters kept by one worker, merged at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    /// Pairs evaluated
    pub evaluated: u64,
    /// Pairs the criterion certified
    pub verified: u64,
    /// Pairs subdivided
    pub expanded: u64,
    /// Children skipped by the cutoff
    pub pruned: u64,
    /// Deepest level at which a pair was certified
    pub deepest: u32,
    /// Largest intermediate bit bound over evaluated pairs
    pub peak_bits: u64,
}

impl WorkerStats {
    /// Fold `other` into `self`.
    pub fn merge(&mut self, other: &WorkerStats) {
        self.evaluated += other.evaluated;
        self.verified += other.verified;
        self.expanded += other.expanded;
        self.pruned += other.pruned;
        self.deepest = self.deepest.max(other.deepest);
        self.peak_bits = self.peak_bits.max(other.peak_bits);
    }
}

/// Summary of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Search bound N
    pub n: u32,
    /// Backend label
    pub backend: &'static str,
    /// Workers used
    pub threads: usize,
    /// Pairs dispatched at depth 0
    pub initial_pairs: usize,
    /// Totals over all workers
    pub totals: WorkerStats,
    /// Per-worker counters, by worker id
    pub per_worker: Vec<WorkerStats>,
    /// Wall-clock time of the parallel phase
    pub elapsed: Duration,
}

impl SearchReport {
    /// Whether every evaluated pair was either certified or subdivided.
    ///
    /// Holds for every completed run; a failure would have aborted it.
    pub fn is_complete(&self) -> bool {
        self.totals.evaluated == self.totals.verified + self.totals.expanded
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pairs evaluated, {} verified, {} subdivided, {} children pruned, max depth {}, peak {} bits",
            self.totals.evaluated,
            self.totals.verified,
            self.totals.expanded,
            self.totals.pruned,
            self.totals.deepest,
            self.totals.peak_bits
        )
    }
}
