//! Rationals and continued-fraction convergents.
//!
//! A convergent carries the current approximation p_k/q_k together with the
//! previous one p_{k-1}/q_{k-1}. Appending a partial quotient `d` gives
//!
//! ```text
//! p_{k+1} = d·p_k + p_{k-1}
//! q_{k+1} = d·q_k + q_{k-1}
//! ```
//!
//! which is the single generative step of the whole search tree.

use std::fmt;

use crate::Numeric;

/// A fraction `num/den` with `den > 0`. Not necessarily in lowest terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational<T> {
    /// Numerator
    pub num: T,
    /// Denominator
    pub den: T,
}

impl<T> Rational<T> {
    /// Create a new rational.
    pub const fn new(num: T, den: T) -> Self {
        Self { num, den }
    }
}

impl<T: Numeric> Rational<T> {
    /// Create from small integers.
    pub fn from_u32(num: u32, den: u32) -> Self {
        Self::new(T::from(num), T::from(den))
    }
}

impl<T: fmt::Display> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Two consecutive terms of one continued-fraction expansion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Convergent<T> {
    /// Current approximation
    pub current: Rational<T>,
    /// Previous approximation
    pub previous: Rational<T>,
}

impl<T> Convergent<T> {
    /// Create a convergent from its two terms.
    pub const fn new(current: Rational<T>, previous: Rational<T>) -> Self {
        Self { current, previous }
    }
}

impl<T: Numeric> Convergent<T> {
    /// Seed convergent `1/den` with previous term `0/1` (partial quotient `den`).
    pub fn seed(den: u32) -> Self {
        Self::new(Rational::from_u32(1, den), Rational::from_u32(0, 1))
    }

    /// Append the partial quotient `digit`.
    #[inline]
    pub fn next(&self, digit: &T) -> Self {
        next_convergent(self, digit)
    }

    /// Denominator of the current approximation.
    #[inline]
    pub fn den(&self) -> &T {
        &self.current.den
    }

    /// `current.den + previous.den`.
    #[inline]
    pub fn den_sum(&self) -> T {
        self.current.den.clone() + self.previous.den.clone()
    }
}

/// Continuant recurrence: the convergent obtained by appending `digit` to `base`.
pub fn next_convergent<T: Numeric>(base: &Convergent<T>, digit: &T) -> Convergent<T> {
    Convergent {
        current: Rational {
            num: digit.clone() * base.current.num.clone() + base.previous.num.clone(),
            den: digit.clone() * base.current.den.clone() + base.previous.den.clone(),
        },
        previous: base.current.clone(),
    }
}

impl<T: fmt::Display> fmt::Display for Convergent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.current, self.previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use proptest::prelude::*;

    #[test]
    fn seed_shape() {
        let seed = Convergent::<i64>::seed(5);
        assert_eq!(seed.current, Rational::new(1, 5));
        assert_eq!(seed.previous, Rational::new(0, 1));
        assert_eq!(seed.den_sum(), 6);
    }

    #[test]
    fn golden_ratio_expansion() {
        // [0; 1, 1, 1, ...] walks the Fibonacci numbers.
        let mut c = Convergent::<i64>::new(Rational::new(1, 1), Rational::new(0, 1));
        let mut dens = vec![];
        for _ in 0..8 {
            c = c.next(&1);
            dens.push(c.current.den);
        }
        assert_eq!(dens, vec![2, 3, 5, 8, 13, 21, 34, 55]);
    }

    #[test]
    fn display() {
        let c = Convergent::<i64>::seed(3).next(&2);
        assert_eq!(c.to_string(), "{2/7, 1/3}");
    }

    #[test]
    fn backends_agree() {
        let digits = [3u32, 1, 4, 1, 5, 9, 2, 6];
        let mut small = Convergent::<i128>::seed(2);
        let mut big = Convergent::<BigInt>::seed(2);
        for d in digits {
            small = small.next(&i128::from(d));
            big = big.next(&BigInt::from(d));
        }
        assert_eq!(big.current.den, BigInt::from(small.current.den));
        assert_eq!(big.current.num, BigInt::from(small.current.num));
    }

    proptest! {
        #[test]
        fn denominators_strictly_grow(seed in 2u32..20, digits in prop::collection::vec(1u32..20, 1..12)) {
            let mut c = Convergent::<i128>::seed(seed);
            for d in digits {
                let next = c.next(&i128::from(d));
                prop_assert!(next.current.den > c.current.den);
                prop_assert_eq!(&next.previous, &c.current);
                c = next;
            }
        }

        #[test]
        fn continuant_determinant(seed in 2u32..20, digits in prop::collection::vec(1u32..20, 0..12)) {
            // p_k q_{k-1} - p_{k-1} q_k = ±1 along any expansion
            let mut c = Convergent::<i128>::seed(seed);
            for d in digits {
                c = c.next(&i128::from(d));
            }
            let det = c.current.num * c.previous.den - c.previous.num * c.current.den;
            prop_assert!(det == 1 || det == -1);
        }
    }
}
