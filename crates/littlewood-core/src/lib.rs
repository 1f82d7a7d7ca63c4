//! Littlewood Convergent Pairs
//!
//! Exact arithmetic on pairs of continued-fraction convergents and the
//! Littlewood-type criterion that certifies them.
//!
//! # Mathematical Foundation
//!
//! A convergent pair (α, β) stands for every pair of irrationals whose
//! continued-fraction expansions begin with the digits that produced α and β.
//! The pair is certified when an integer Q satisfies
//!
//! ```text
//! 2·N·Q·(Q + a)·(Q + b) < q_α·(q_α + q'_α)·q_β·(q_β + q'_β)
//! ```
//!
//! with `a`, `b` the scaled distances of Q·α and Q·β to the nearest integers.
//! Uncertified pairs are subdivided: `alpha` is extended by each digit
//! 1..N−1, which strictly enlarges its denominator.
//!
//! # Numeric Backends
//!
//! Everything is generic over [`Numeric`]: `i64` and `i128` for speed,
//! `num_bigint::BigInt` when denominators outgrow fixed widths. The
//! [`guard`] module decides when a fixed-width backend is no longer safe.

mod error;
mod evaluator;
mod fraction;
mod generator;
pub mod guard;
pub mod modular;
mod numeric;
mod pair;
mod subdivide;

pub use error::{Error, Result};
pub use evaluator::{evaluate, LittlewoodCriterion, WitnessResult};
pub use fraction::{next_convergent, Convergent, Rational};
pub use generator::{convergent_pairs, initial_pairs, refined_convergents, seed_convergents, trivially_satisfied};
pub use numeric::{bits_of, Numeric};
pub use pair::ConvergentPair;
pub use subdivide::{subdivide, subdivide_all, subdivide_into, Cutoff};

/// Smallest bound with a non-empty search space.
pub const MIN_SEARCH_BOUND: u32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_space_starts_at_min_bound() {
        for n in 1..MIN_SEARCH_BOUND {
            assert!(convergent_pairs::<i64>(n, 0).is_empty());
        }
        assert!(!convergent_pairs::<i64>(MIN_SEARCH_BOUND, 0).is_empty());
    }
}
