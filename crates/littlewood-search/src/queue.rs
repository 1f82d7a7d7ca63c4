//! Shared LIFO work queue.
//!
//! Depth-first order keeps the pending set near `initial + depth·(N−1)`
//! instead of a full breadth-first frontier.

use parking_lot::Mutex;

use littlewood_core::ConvergentPair;

use crate::Coordinator;

/// A pair awaiting evaluation and its subdivision depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPair<T> {
    /// The pair.
    pub pair: ConvergentPair<T>,
    /// 0 for initial pairs, parent depth + 1 for children.
    pub depth: u32,
}

impl<T> PendingPair<T> {
    /// An initial pair.
    pub fn root(pair: ConvergentPair<T>) -> Self {
        Self { pair, depth: 0 }
    }
}

/// The only mutable state shared between workers.
#[derive(Debug)]
pub struct WorkQueue<T> {
    pending: Mutex<Vec<PendingPair<T>>>,
}

impl<T> WorkQueue<T> {
    /// Queue holding `pairs` at depth 0. The last pair is dispatched first.
    pub fn new(pairs: Vec<ConvergentPair<T>>) -> Self {
        Self {
            pending: Mutex::new(pairs.into_iter().map(PendingPair::root).collect()),
        }
    }

    /// Take the most recently pushed pair.
    ///
    /// `idle` is the caller's idle flag. It is updated together with the
    /// coordinator's idle count while the queue lock is held.
    pub fn pop(&self, coordinator: &Coordinator, idle: &mut bool) -> Option<PendingPair<T>> {
        let mut pending = self.pending.lock();
        let next = pending.pop();
        match (&next, *idle) {
            (Some(_), true) => {
                coordinator.mark_busy();
                *idle = false;
            }
            (None, false) => {
                coordinator.mark_idle();
                *idle = true;
            }
            _ => {}
        }
        next
    }

    /// Push a batch of children at `depth` in one critical section.
    pub fn push_children<I>(&self, children: I, depth: u32)
    where
        I: IntoIterator<Item = ConvergentPair<T>>,
    {
        let mut pending = self.pending.lock();
        pending.extend(children.into_iter().map(|pair| PendingPair { pair, depth }));
    }

    /// Number of pending pairs.
    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}
