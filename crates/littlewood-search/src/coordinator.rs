//! Shared coordination state for a pool of workers.
//!
//! # Termination
//!
//! A worker counts as idle once its last look at the queue found it empty.
//! Taking a pair while marked idle un-marks the worker inside the queue
//! lock, so the idle count never overstates quiescence. Only busy workers
//! push work, and a worker always polls the queue again after pushing, so
//! `idle == workers` implies the queue is empty and will stay empty.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;
use tracing::error;

use crate::Error;

/// Idle/abort bookkeeping shared by reference with every worker.
#[derive(Debug)]
pub struct Coordinator {
    workers: usize,
    idle: AtomicUsize,
    aborted: AtomicBool,
    failure: Mutex<Option<Error>>,
}

impl Coordinator {
    /// Coordination state for `workers` workers, all initially busy.
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            idle: AtomicUsize::new(0),
            aborted: AtomicBool::new(false),
            failure: Mutex::new(None),
        }
    }

    /// Total worker count.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Workers currently marked idle.
    pub fn idle_count(&self) -> usize {
        self.idle.load(Ordering::SeqCst)
    }

    /// Mark one worker idle.
    pub fn mark_idle(&self) {
        self.idle.fetch_add(1, Ordering::SeqCst);
    }

    /// Un-mark one idle worker.
    pub fn mark_busy(&self) {
        self.idle.fetch_sub(1, Ordering::SeqCst);
    }

    /// Every worker is idle: no work remains anywhere.
    pub fn is_quiescent(&self) -> bool {
        self.idle_count() == self.workers
    }

    /// Record `error` and stop all workers. Only the first failure is kept.
    pub fn abort(&self, error: Error) {
        let mut failure = self.failure.lock();
        if failure.is_none() {
            error!(%error, "aborting search");
            *failure = Some(error);
        }
        self.aborted.store(true, Ordering::SeqCst);
    }

    /// Whether any worker has failed.
    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }

    /// Whether workers should stop polling.
    pub fn should_stop(&self) -> bool {
        self.is_aborted() || self.is_quiescent()
    }

    /// Take the recorded failure, if any.
    pub fn take_failure(&self) -> Option<Error> {
        self.failure.lock().take()
    }
}
