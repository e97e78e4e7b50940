//! Algebraic capability traits.
//!
//! This module defines the coefficient-type capabilities the polynomial
//! kernel is generic over. Each trait names the operations it adds; the
//! polynomial operations require the weakest capability that suffices.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A semiring: addition and multiplication with their identities.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - `zero()` is absorbing: `a * 0 == 0 * a == 0`
///
/// Multiplication is NOT assumed commutative. Code generic over `Semiring`
/// must preserve the order of multiplication operands.
pub trait Semiring: Clone + Eq + Debug + Add<Output = Self> + Mul<Output = Self> {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self + self + ... (n times) by binary doubling.
    fn mul_natural(&self, n: u64) -> Self {
        let mut result = Self::zero();
        let mut base = self.clone();
        let mut n = n;

        while n > 0 {
            if n & 1 == 1 {
                result = result + base.clone();
            }
            base = base.clone() + base.clone();
            n >>= 1;
        }

        result
    }

    /// Computes self^n for non-negative n by binary exponentiation.
    fn pow(&self, n: u64) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut n = n;

        while n > 0 {
            if n & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            n >>= 1;
        }

        result
    }
}

/// A ring: a semiring with additive inverses.
pub trait Ring: Semiring + Sub<Output = Self> + Neg<Output = Self> {
    /// Computes the n-fold sum for a signed n.
    fn mul_integer(&self, n: i64) -> Self {
        let result = self.mul_natural(n.unsigned_abs());
        if n < 0 {
            -result
        } else {
            result
        }
    }
}

/// A commutative ring: multiplication is commutative.
pub trait CommutativeRing: Ring {}

/// A GCD domain: a commutative ring with exact division and greatest
/// common divisors.
///
/// # Laws
///
/// - `a.try_div(&b) == Some(q)` iff `a == b * q`, and then `q` is unique
/// - `a.gcd(&b)` divides both `a` and `b`, and any common divisor of `a`
///   and `b` divides it (up to units)
pub trait GcdDomain: CommutativeRing {
    /// Divides exactly, returning `None` when `other` does not divide
    /// `self` evenly (in particular when `other` is zero and `self` is not).
    fn try_div(&self, other: &Self) -> Option<Self>;

    /// Computes the greatest common divisor, defined up to units.
    fn gcd(&self, other: &Self) -> Self;
}

/// A field: every non-zero element has a multiplicative inverse.
pub trait Field: GcdDomain {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn div_exact(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integers::Int;

    #[test]
    fn test_mul_natural() {
        let a = Int::new(7);
        assert_eq!(a.mul_natural(0), Int::new(0));
        assert_eq!(a.mul_natural(1), Int::new(7));
        assert_eq!(a.mul_natural(13), Int::new(91));
    }

    #[test]
    fn test_mul_integer() {
        let a = Int::new(5);
        assert_eq!(a.mul_integer(-3), Int::new(-15));
        assert_eq!(a.mul_integer(0), Int::new(0));
    }

    #[test]
    fn test_pow() {
        let a = Int::new(3);
        assert_eq!(a.pow(0), Int::new(1));
        assert_eq!(a.pow(5), Int::new(243));
    }
}
