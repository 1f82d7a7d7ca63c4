//! Numeric backends for exact continuant arithmetic.
//!
//! Every quantity in the search is a non-negative integer, but intermediate
//! differences in the modular recurrences may dip below zero, so backends are
//! signed. Fixed-width backends are fast but bounded; the overflow guard in
//! [`crate::guard`] consults [`Numeric::CAPACITY_BITS`] before the search is
//! allowed to produce larger denominators.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Rem, Sub};

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// A signed integer type the search can run on.
///
/// Arithmetic must be exact: no rounding, no wrapping. The criterion evaluator
/// and the subdivision engine are generic over this trait so fixed-width and
/// arbitrary-precision backends share one implementation.
pub trait Numeric:
    Clone
    + Ord
    + Debug
    + Display
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Zero
    + One
    + From<u32>
{
    /// Human-readable width/mode label.
    const BACKEND: &'static str;

    /// Magnitude bits available, `None` when unbounded.
    const CAPACITY_BITS: Option<u64>;

    /// Number of bits needed to represent `|self|`.
    fn bit_length(&self) -> u64;

    /// Whether a value of `bits` magnitude bits is representable.
    fn holds_bits(bits: u64) -> bool {
        match Self::CAPACITY_BITS {
            Some(capacity) => bits <= capacity,
            None => true,
        }
    }
}

impl Numeric for i64 {
    const BACKEND: &'static str = "i64 (fixed-width)";
    const CAPACITY_BITS: Option<u64> = Some(63);

    #[inline]
    fn bit_length(&self) -> u64 {
        u64::from(u64::BITS - self.unsigned_abs().leading_zeros())
    }
}

impl Numeric for i128 {
    const BACKEND: &'static str = "i128 (fixed-width)";
    const CAPACITY_BITS: Option<u64> = Some(127);

    #[inline]
    fn bit_length(&self) -> u64 {
        u64::from(u128::BITS - self.unsigned_abs().leading_zeros())
    }
}

impl Numeric for BigInt {
    const BACKEND: &'static str = "arbitrary precision (num-bigint)";
    const CAPACITY_BITS: Option<u64> = None;

    #[inline]
    fn bit_length(&self) -> u64 {
        self.bits()
    }
}

/// Bit length of a small unsigned value, used when sizing bounds from `N`.
#[inline]
pub const fn bits_of(value: u64) -> u64 {
    (u64::BITS - value.leading_zeros()) as u64
}
