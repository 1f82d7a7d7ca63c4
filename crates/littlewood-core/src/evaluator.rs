//! Littlewood criterion evaluation.
//!
//! A pair (α, β) is certified when some integer Q satisfies
//!
//! ```text
//! 2·N·Q·(Q + a)·(Q + b) < ε
//! ε = q_α·(q_α + q'_α)·q_β·(q_β + q'_β)
//! ```
//!
//! where `a` and `b` scale the distances from Q·α and Q·β to the nearest
//! integers by the denominator sums of the two convergents.
//!
//! # Candidate set
//!
//! After a fast check at Q = q_β the evaluator scans `target_remainder`
//! r = 1, 2, …, M−1 with M = 1 + max(N, q'_β / 2N²). For each r it tries five
//! Q values:
//!
//! - the r-th term of k·q'_α folded into (0, q_α], and of k·(q_α − q'_α);
//!   both have ‖Q·α‖ ≤ r/q_α, so `a = r·(q_α + q'_α)`
//! - the same two progressions for β, with `b = r·(q_β + q'_β)`
//! - Q = r·q_α, where the α distance vanishes
//!
//! The distance against the *other* convergent is tracked incrementally: each
//! progression moves by a fixed step modulo a fixed modulus, so its remainder
//! moves by one of two precomputed deltas. The scan therefore costs additions
//! instead of a multiplication and reduction per candidate.

use crate::modular::{fold_remainder, least_absolute_remainder, modular_addition, modular_subtraction};
use crate::{Convergent, ConvergentPair, Numeric, Rational};

/// Outcome of evaluating one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessResult<T> {
    /// Q with the smallest left-hand side seen; meaningful only when
    /// `meets_criteria` is false.
    pub best_q: T,
    /// Whether some candidate satisfied the inequality.
    pub meets_criteria: bool,
}

impl<T: Numeric> WitnessResult<T> {
    /// A certified pair.
    pub fn verified() -> Self {
        Self {
            best_q: T::zero(),
            meets_criteria: true,
        }
    }

    /// An uncertified pair together with its closest candidate.
    pub fn unverified(best_q: T) -> Self {
        Self {
            best_q,
            meets_criteria: false,
        }
    }
}

/// The criterion for a fixed search bound N, with the derived constants cached.
#[derive(Debug, Clone)]
pub struct LittlewoodCriterion<T> {
    n: u32,
    n_value: T,
    two_n: T,
    two_n_squared: T,
}

impl<T: Numeric> LittlewoodCriterion<T> {
    /// Create the criterion for bound `n`.
    pub fn new(n: u32) -> Self {
        let n_value = T::from(n);
        let two_n = T::from(2) * n_value.clone();
        let two_n_squared = two_n.clone() * n_value.clone();
        Self {
            n,
            n_value,
            two_n,
            two_n_squared,
        }
    }

    /// The search bound N.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Left-hand side `2·N·Q·(Q + a)·(Q + b)`.
    #[inline]
    pub fn littlewood(&self, q: &T, a: &T, b: &T) -> T {
        self.two_n.clone() * q.clone() * (q.clone() + a.clone()) * (q.clone() + b.clone())
    }

    /// Right-hand side ε for a pair.
    pub fn epsilon(&self, pair: &ConvergentPair<T>) -> T {
        pair.alpha.den().clone() * pair.alpha.den_sum() * pair.beta.den().clone() * pair.beta.den_sum()
    }

    /// Exclusive upper end M of the `target_remainder` scan:
    /// `1 + max(N, q'_β / 2N²)`.
    pub fn scan_bound(&self, pair: &ConvergentPair<T>) -> T {
        let tail = pair.beta.previous.den.clone() / self.two_n_squared.clone();
        T::one() + self.n_value.clone().max(tail)
    }

    /// Decide whether `pair` is certified; otherwise report the best candidate.
    pub fn evaluate(&self, pair: &ConvergentPair<T>) -> WitnessResult<T> {
        let alpha = &pair.alpha;
        let beta = &pair.beta;
        let alpha_den = alpha.den();
        let beta_den = beta.den();
        let alpha_sum = alpha.den_sum();
        let beta_sum = beta.den_sum();
        let epsilon = self.epsilon(pair);

        // Q = q_β: the β distance vanishes.
        let alpha_remainder = least_absolute_remainder(beta_den, &alpha.current);
        let quantity = self.littlewood(beta_den, &(alpha_remainder * alpha_sum.clone()), &T::zero());
        if quantity < epsilon {
            return WitnessResult::verified();
        }

        let mut best = Best {
            q: beta_den.clone(),
            quantity,
        };

        let alpha_diff = alpha_den.clone() - alpha.previous.den.clone();
        let beta_diff = beta_den.clone() - beta.previous.den.clone();
        let mut alpha_side = [
            Progression::new(&alpha.previous.den, alpha_den, &beta.current),
            Progression::new(&alpha_diff, alpha_den, &beta.current),
        ];
        let mut beta_side = [
            Progression::new(&beta.previous.den, beta_den, &alpha.current),
            Progression::new(&beta_diff, beta_den, &alpha.current),
        ];
        let multiple_step = (alpha_den.clone() * beta.current.num.clone()) % beta_den.clone();
        let mut multiple_remainder = multiple_step.clone();

        let max_remainder = self.scan_bound(pair);
        let mut target = T::one();

        while target < max_remainder {
            let scaled_alpha = target.clone() * alpha_sum.clone();
            for p in &alpha_side {
                let b = p.least_remainder() * beta_sum.clone();
                if self.probe(&p.q, &scaled_alpha, &b, &epsilon, &mut best) {
                    return WitnessResult::verified();
                }
            }

            let scaled_beta = target.clone() * beta_sum.clone();
            for p in &beta_side {
                let a = p.least_remainder() * alpha_sum.clone();
                if self.probe(&p.q, &a, &scaled_beta, &epsilon, &mut best) {
                    return WitnessResult::verified();
                }
            }

            let multiple = target.clone() * alpha_den.clone();
            let b = fold_remainder(multiple_remainder.clone(), beta_den) * beta_sum.clone();
            if self.probe(&multiple, &T::zero(), &b, &epsilon, &mut best) {
                return WitnessResult::verified();
            }

            target = target + T::one();
            for p in alpha_side.iter_mut().chain(beta_side.iter_mut()) {
                p.advance();
            }
            multiple_remainder = modular_addition(multiple_remainder, &multiple_step, beta_den);
        }

        WitnessResult::unverified(best.q)
    }

    /// Pruning predicate for subdivision.
    ///
    /// Checks the inequality at the fixed `best_q` against the enlarged
    /// denominator sum `digit·q_α + q'_α` that appending `digit` to `alpha`
    /// produces. The left-hand side grows more slowly in `digit` than ε does,
    /// so once this holds it holds for every larger digit.
    pub fn cutoff_reached(&self, best_q: &T, alpha: &Convergent<T>, beta: &Convergent<T>, digit: &T) -> bool {
        let new_alpha_sum = digit.clone() * alpha.den().clone() + alpha.previous.den.clone();
        let beta_sum = beta.den_sum();
        let new_epsilon =
            alpha.den().clone() * new_alpha_sum.clone() * beta.den().clone() * beta_sum.clone();
        let a = new_alpha_sum * least_absolute_remainder(best_q, &alpha.current);
        let b = beta_sum * least_absolute_remainder(best_q, &beta.current);
        self.littlewood(best_q, &a, &b) < new_epsilon
    }

    /// Evaluate one candidate. Returns true when it certifies the pair.
    #[inline]
    fn probe(&self, q: &T, a: &T, b: &T, epsilon: &T, best: &mut Best<T>) -> bool {
        let quantity = self.littlewood(q, a, b);
        if quantity < *epsilon {
            return true;
        }
        if quantity < best.quantity {
            best.quantity = quantity;
            best.q = q.clone();
        }
        false
    }
}

/// Evaluate `pair` for bound `n`.
pub fn evaluate<T: Numeric>(pair: &ConvergentPair<T>, n: u32) -> WitnessResult<T> {
    LittlewoodCriterion::new(n).evaluate(pair)
}

struct Best<T> {
    q: T,
    quantity: T,
}

/// Q = k·step folded into (0, modulus] for k = 1, 2, …, together with
/// `Q·other.num mod other.den` maintained by modular addition/subtraction.
struct Progression<T> {
    q: T,
    step: T,
    modulus: T,
    remainder: T,
    forward: T,
    backward: T,
    other_modulus: T,
}

impl<T: Numeric> Progression<T> {
    fn new(step: &T, modulus: &T, other: &Rational<T>) -> Self {
        let complement = modulus.clone() - step.clone();
        let forward = (step.clone() * other.num.clone()) % other.den.clone();
        let backward = (complement * other.num.clone()) % other.den.clone();
        Self {
            q: step.clone(),
            step: step.clone(),
            modulus: modulus.clone(),
            remainder: forward.clone(),
            forward,
            backward,
            other_modulus: other.den.clone(),
        }
    }

    #[inline]
    fn least_remainder(&self) -> T {
        fold_remainder(self.remainder.clone(), &self.other_modulus)
    }

    #[inline]
    fn advance(&mut self) {
        let sum = self.q.clone() + self.step.clone();
        let remainder = std::mem::replace(&mut self.remainder, T::zero());
        if sum <= self.modulus {
            self.q = sum;
            self.remainder = modular_addition(remainder, &self.forward, &self.other_modulus);
        } else {
            self.q = sum - self.modulus.clone();
            self.remainder = modular_subtraction(remainder, &self.backward, &self.other_modulus);
        }
    }
}
