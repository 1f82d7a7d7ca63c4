//! Overflow guard for fixed-width backends.
//!
//! Denominators grow geometrically with depth. For a pair with largest
//! denominator D and scan bound M every candidate satisfies Q ≤ M·D, and
//! the scaled distances are at most 2N·D·max(M, D) (the pruning cutoff scales
//! by up to N·D). With `w = bits(D) + bits(max(M, D)) + bits(2N) + 2` the
//! left-hand side `2N·Q·(Q + a)·(Q + b)` stays below `bits(2N) + 3w` bits,
//! and so do ε and every remainder product.

use crate::numeric::bits_of;
use crate::{ConvergentPair, Error, LittlewoodCriterion, Numeric, Result};

/// Conservative bit bound on every intermediate evaluating `pair` produces.
pub fn required_bits<T: Numeric>(pair: &ConvergentPair<T>, n: u32) -> u64 {
    criterion_bits(&LittlewoodCriterion::new(n), pair)
}

/// [`required_bits`] with the criterion constants already built.
pub fn criterion_bits<T: Numeric>(criterion: &LittlewoodCriterion<T>, pair: &ConvergentPair<T>) -> u64 {
    let den = pair.max_den().clone();
    let bound = criterion.scan_bound(pair);
    let n_bits = bits_of(2 * u64::from(criterion.n()));
    let den_bits = den.bit_length();
    let wide_bits = bound.max(den).bit_length();
    n_bits + 3 * (den_bits + wide_bits + n_bits + 2)
}

/// Fail when the backend cannot hold the intermediates of `pair`.
pub fn check_headroom<T: Numeric>(pair: &ConvergentPair<T>, n: u32) -> Result<()> {
    let Some(capacity) = T::CAPACITY_BITS else {
        return Ok(());
    };
    let required = required_bits(pair, n);
    if required > capacity {
        return Err(Error::Overflow {
            backend: T::BACKEND,
            required_bits: required,
            capacity_bits: capacity,
            pair: pair.to_string(),
        });
    }
    Ok(())
}

/// Fail when the largest child of `pair` (digit N−1) would not fit.
///
/// Every other child has smaller denominators, so one check covers them all.
pub fn check_children<T: Numeric>(pair: &ConvergentPair<T>, n: u32) -> Result<()> {
    if T::CAPACITY_BITS.is_none() || n < 2 {
        return Ok(());
    }
    let largest = pair.alpha.next(&T::from(n - 1));
    let child = ConvergentPair::new(largest, pair.beta.clone());
    check_headroom(&child, n)
}
