//! Modular helpers used by the incremental remainder scan.

use crate::{Numeric, Rational};

/// Distance from `q·x` to the nearest multiple of `y`, for `x/y`:
/// `min(r, y - r)` where `r = (q·x) mod y`.
#[inline]
pub fn least_absolute_remainder<T: Numeric>(q: &T, number: &Rational<T>) -> T {
    let remainder = (q.clone() * number.num.clone()) % number.den.clone();
    fold_remainder(remainder, &number.den)
}

/// `min(r, modulus - r)` for a remainder already in `[0, modulus]`.
#[inline]
pub fn fold_remainder<T: Numeric>(remainder: T, modulus: &T) -> T {
    let complement = modulus.clone() - remainder.clone();
    remainder.min(complement)
}

/// `augend + addend` reduced into `[0, modulus]`, assuming both inputs are.
///
/// The upper end is inclusive: a result equal to `modulus` stands for zero,
/// which [`fold_remainder`] maps to zero anyway.
#[inline]
pub fn modular_addition<T: Numeric>(augend: T, addend: &T, modulus: &T) -> T {
    let sum = augend + addend.clone();
    if sum <= *modulus {
        sum
    } else {
        sum - modulus.clone()
    }
}

/// `minuend - subtrahend` reduced into `[0, modulus]`, assuming both inputs are.
#[inline]
pub fn modular_subtraction<T: Numeric>(minuend: T, subtrahend: &T, modulus: &T) -> T {
    let diff = minuend - subtrahend.clone();
    if diff >= T::zero() {
        diff
    } else {
        diff + modulus.clone()
    }
}
