//! Initial search space.
//!
//! Seeds `1/i` for `2 <= i < N` are refined by continued-fraction digits
//! 1..N−1 until `q + q' >= 2N`. Every unordered pair of refined convergents
//! whose product of reciprocals already reaches 2N is dropped (Q = 1
//! certifies it), the rest are the initial pairs.

use crate::subdivide::subdivide_all;
use crate::{Convergent, ConvergentPair, Numeric};

/// Seed convergents `1/i` (previous `0/1`) for `2 <= i < n`.
pub fn seed_convergents<T: Numeric>(n: u32) -> Vec<Convergent<T>> {
    (2..n).map(Convergent::seed).collect()
}

/// Refine the seeds until every convergent has `current.den + previous.den >= 2n`.
///
/// The result is in a fixed, reproducible order.
pub fn refined_convergents<T: Numeric>(n: u32) -> Vec<Convergent<T>> {
    let promotion = T::from(2) * T::from(n);
    let digits: Vec<T> = (1..n).map(T::from).collect();

    let mut pending = seed_convergents::<T>(n);
    let mut refined = Vec::new();
    while let Some(candidate) = pending.pop() {
        if candidate.den_sum() >= promotion {
            refined.push(candidate);
        } else {
            pending.extend(digits.iter().map(|d| candidate.next(d)));
        }
    }
    refined
}

/// Whether `(q_α/p_α)·(q_β/p_β) >= 2n`, in which case Q = 1 already satisfies
/// the inequality and the pair can never be a counterexample.
pub fn trivially_satisfied<T: Numeric>(alpha: &Convergent<T>, beta: &Convergent<T>, n: u32) -> bool {
    let dens = alpha.current.den.clone() * beta.current.den.clone();
    let nums = alpha.current.num.clone() * beta.current.num.clone();
    dens >= T::from(2) * T::from(n) * nums
}

/// All non-trivial unordered pairs of refined convergents, canonically ordered.
pub fn initial_pairs<T: Numeric>(n: u32) -> Vec<ConvergentPair<T>> {
    let convergents = refined_convergents::<T>(n);
    let mut pairs = Vec::new();
    for (i, a) in convergents.iter().enumerate() {
        for b in &convergents[..i] {
            if trivially_satisfied(a, b, n) {
                continue;
            }
            pairs.push(ConvergentPair::new(a.clone(), b.clone()));
        }
    }
    pairs
}

/// The initial search space for bound `n`, pre-split `subdivisions` times.
///
/// Pre-splitting only creates more, smaller units of work; it does not change
/// which regions are searched.
pub fn convergent_pairs<T: Numeric>(n: u32, subdivisions: u32) -> Vec<ConvergentPair<T>> {
    subdivide_all(initial_pairs(n), n, subdivisions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use std::collections::HashSet;

    #[test]
    fn seeds() {
        let seeds = seed_convergents::<i64>(5);
        let dens: Vec<_> = seeds.iter().map(|c| c.current.den).collect();
        assert_eq!(dens, vec![2, 3, 4]);
        assert!(seed_convergents::<i64>(2).is_empty());
    }

    #[test]
    fn refined_convergents_reach_promotion_bound() {
        for n in 3..10 {
            for c in refined_convergents::<i64>(n) {
                assert!(c.den_sum() >= 2 * i64::from(n));
            }
        }
    }

    #[test]
    fn refined_counts() {
        let counts: Vec<_> = (2..10).map(|n| refined_convergents::<i64>(n).len()).collect();
        assert_eq!(counts, vec![0, 3, 12, 30, 64, 115, 174, 280]);
    }

    #[test]
    fn initial_pair_counts_are_stable() {
        assert_eq!(convergent_pairs::<i64>(3, 0).len(), 0);
        assert_eq!(convergent_pairs::<i64>(4, 0).len(), 23);
        assert_eq!(convergent_pairs::<i64>(5, 0).len(), 232);
        assert_eq!(convergent_pairs::<i128>(9, 0).len(), 26546);
    }

    #[test]
    fn subdivisions_multiply_by_n_minus_one() {
        assert_eq!(convergent_pairs::<i64>(4, 1).len(), 69);
        assert_eq!(convergent_pairs::<i64>(5, 1).len(), 928);
        assert_eq!(convergent_pairs::<i64>(5, 2).len(), 232 * 16);
    }

    #[test]
    fn generation_is_deterministic() {
        let a = convergent_pairs::<i128>(7, 0);
        let b = convergent_pairs::<i128>(7, 0);
        assert_eq!(a, b);

        let big = convergent_pairs::<BigInt>(7, 0);
        let rendered: Vec<_> = a.iter().map(ToString::to_string).collect();
        let rendered_big: Vec<_> = big.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, rendered_big);
    }

    #[test]
    fn pairs_are_canonical_unique_and_nontrivial() {
        for subdivisions in 0..2 {
            let pairs = convergent_pairs::<i64>(6, subdivisions);
            let unique: HashSet<_> = pairs.iter().cloned().collect();
            assert_eq!(unique.len(), pairs.len());
            for pair in &pairs {
                assert!(pair.is_canonical());
                assert_ne!(pair.alpha, pair.beta);
            }
        }
        for pair in convergent_pairs::<i64>(6, 0) {
            assert!(!trivially_satisfied(&pair.alpha, &pair.beta, 6));
        }
    }

    #[test]
    fn trivial_filter() {
        let half = Convergent::<i64>::seed(2);
        let quarter = Convergent::<i64>::seed(4);
        // 2·4 = 8 >= 2·4
        assert!(trivially_satisfied(&half, &quarter, 4));
        // 2·4 = 8 < 2·5
        assert!(!trivially_satisfied(&half, &quarter, 5));
    }
}
