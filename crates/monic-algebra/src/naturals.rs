//! The semiring of natural numbers N.

use dashu::integer::UBig;
use std::fmt;
use std::ops::{Add, Mul};

use crate::traits::Semiring;

/// An arbitrary precision natural number.
///
/// This is a wrapper around `dashu::UBig`. It has no subtraction, which
/// makes it the canonical `Semiring`-but-not-`Ring` coefficient type.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Nat(UBig);

impl Nat {
    /// Creates a new natural number.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(UBig::from(value))
    }

    /// Returns the inner `dashu::UBig`.
    #[must_use]
    pub fn into_inner(self) -> UBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::UBig`.
    #[must_use]
    pub fn as_inner(&self) -> &UBig {
        &self.0
    }

    /// Attempts to convert to a u64.
    ///
    /// Returns `None` if the value doesn't fit in a u64.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.0.clone().try_into().ok()
    }
}

impl Semiring for Nat {
    fn zero() -> Self {
        Self(UBig::ZERO)
    }

    fn one() -> Self {
        Self(UBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == UBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == UBig::ONE
    }
}

impl num_traits::Zero for Nat {
    fn zero() -> Self {
        Self(UBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == UBig::ZERO
    }
}

impl num_traits::One for Nat {
    fn one() -> Self {
        Self(UBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == UBig::ONE
    }
}

impl Add for Nat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul for Nat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl From<u64> for Nat {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<UBig> for Nat {
    fn from(value: UBig) -> Self {
        Self(value)
    }
}

impl fmt::Display for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
