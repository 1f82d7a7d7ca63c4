//! Convergent pairs under the canonical ordering.

use std::fmt;

use crate::{Convergent, Numeric};

/// An unordered pair of convergents, stored with the smaller current
/// denominator first (`alpha.current.den <= beta.current.den`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConvergentPair<T> {
    /// Convergent with the smaller (or equal) denominator
    pub alpha: Convergent<T>,
    /// Convergent with the larger (or equal) denominator
    pub beta: Convergent<T>,
}

impl<T: Numeric> ConvergentPair<T> {
    /// Build a pair from two convergents in either order.
    pub fn new(first: Convergent<T>, second: Convergent<T>) -> Self {
        if first.current.den <= second.current.den {
            Self { alpha: first, beta: second }
        } else {
            Self { alpha: second, beta: first }
        }
    }

    /// Whether the ordering invariant holds.
    pub fn is_canonical(&self) -> bool {
        self.alpha.current.den <= self.beta.current.den
    }

    /// Restore the ordering invariant. A no-op on canonical pairs.
    pub fn canonicalize(self) -> Self {
        Self::new(self.alpha, self.beta)
    }

    /// Largest current denominator in the pair.
    pub fn max_den(&self) -> &T {
        &self.beta.current.den
    }
}

impl<T: fmt::Display> fmt::Display for ConvergentPair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.alpha, self.beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_sorts_by_denominator() {
        let small = Convergent::<i64>::seed(3);
        let large = Convergent::<i64>::seed(7);
        let pair = ConvergentPair::new(large.clone(), small.clone());
        assert_eq!(pair.alpha, small);
        assert_eq!(pair.beta, large);
        assert!(pair.is_canonical());
    }

    #[test]
    fn display_format() {
        let pair = ConvergentPair::new(
            Convergent::<i64>::seed(2).next(&3),
            Convergent::<i64>::seed(4),
        );
        assert_eq!(pair.to_string(), "{1/4, 0/1}, {3/7, 1/2}");
    }

    #[test]
    fn equal_denominators_keep_argument_order() {
        let a = Convergent::<i64>::seed(5);
        let b = Convergent::<i64>::seed(2).next(&2);
        assert_eq!(a.current.den, b.current.den);
        let pair = ConvergentPair::new(a.clone(), b.clone());
        assert_eq!(pair.alpha, a);
        assert_eq!(pair.beta, b);
    }

    proptest! {
        #[test]
        fn canonicalize_is_idempotent(x in 2u32..40, y in 2u32..40, d in 1u32..9) {
            let pair = ConvergentPair::new(
                Convergent::<i64>::seed(x).next(&i64::from(d)),
                Convergent::<i64>::seed(y),
            );
            prop_assert!(pair.is_canonical());
            prop_assert_eq!(pair.clone().canonicalize(), pair);
        }
    }
}
