//! Subdivision: replace a pair by the pairs obtained by extending `alpha`
//! with each partial quotient t = 1, …, N−1.

use crate::{ConvergentPair, LittlewoodCriterion, Numeric};

/// Pruning predicate derived from an uncertified pair's best candidate.
///
/// Unvalidated heuristic. The cutoff checks only the fixed `best_q`, and some
/// of the children it skips fail the criterion when evaluated on their own.
/// A pruned search therefore does not cover the same frontier as a full one.
#[derive(Debug, Clone, Copy)]
pub struct Cutoff<'a, T> {
    criterion: &'a LittlewoodCriterion<T>,
    best_q: &'a T,
}

impl<'a, T: Numeric> Cutoff<'a, T> {
    /// Build the predicate for `best_q` under `criterion`.
    pub fn new(criterion: &'a LittlewoodCriterion<T>, best_q: &'a T) -> Self {
        Self { criterion, best_q }
    }

    /// Whether every child from `digit` upwards is covered by `best_q`.
    pub fn reached(&self, pair: &ConvergentPair<T>, digit: &T) -> bool {
        self.criterion
            .cutoff_reached(self.best_q, &pair.alpha, &pair.beta, digit)
    }
}

/// Append the children of `pair` to `out` and return how many were produced.
///
/// Without a cutoff exactly N−1 children are produced. With one, the first
/// child is always produced and the remaining digits stop at the first digit
/// for which the cutoff holds.
pub fn subdivide_into<T: Numeric>(
    pair: &ConvergentPair<T>,
    n: u32,
    cutoff: Option<&Cutoff<'_, T>>,
    out: &mut Vec<ConvergentPair<T>>,
) -> usize {
    let before = out.len();
    for t in 1..n {
        let digit = T::from(t);
        if t > 1 {
            if let Some(cutoff) = cutoff {
                if cutoff.reached(pair, &digit) {
                    break;
                }
            }
        }
        let next = pair.alpha.next(&digit);
        out.push(ConvergentPair::new(next, pair.beta.clone()));
    }
    out.len() - before
}

/// Children of `pair` as a fresh vector.
pub fn subdivide<T: Numeric>(
    pair: &ConvergentPair<T>,
    n: u32,
    cutoff: Option<&Cutoff<'_, T>>,
) -> Vec<ConvergentPair<T>> {
    let mut out = Vec::with_capacity(n.saturating_sub(1) as usize);
    subdivide_into(pair, n, cutoff, &mut out);
    out
}

/// Subdivide every pair `rounds` times without pruning.
pub fn subdivide_all<T: Numeric>(
    mut pairs: Vec<ConvergentPair<T>>,
    n: u32,
    rounds: u32,
) -> Vec<ConvergentPair<T>> {
    for _ in 0..rounds {
        let mut next = Vec::with_capacity(pairs.len() * n.saturating_sub(1) as usize);
        for pair in &pairs {
            subdivide_into(pair, n, None, &mut next);
        }
        pairs = next;
    }
    pairs
}
