//! Modular arithmetic Z/n.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::{CommutativeRing, Field, GcdDomain, Ring, Semiring};

/// An integer modulo a compile-time constant N.
///
/// Optimized for moduli below 2^63. For prime N this is the finite field
/// Z_N and the full capability tower applies; for composite N only the
/// `Semiring`/`Ring` surface is meaningful (the type still implements the
/// tower, but `inv`/`try_div` report `None` for non-units and `gcd` treats
/// every non-zero element as a unit, which is only correct for prime N).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Mod<const N: u64>(u64);

impl<const N: u64> Mod<N> {
    /// Creates a new modular integer.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % N)
    }

    /// Creates a modular integer from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        if value >= 0 {
            Self::new(value as u64)
        } else {
            Self((N - (value.unsigned_abs() % N)) % N)
        }
    }

    /// Returns the value as a u64.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus() -> u64 {
        N
    }

    /// Computes the modular inverse using the extended Euclidean algorithm.
    ///
    /// Returns `None` if the inverse doesn't exist (when gcd(self, N) != 1).
    #[must_use]
    pub fn invert(self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }

        let mut t = 0i64;
        let mut new_t = 1i64;
        let mut r = N as i64;
        let mut new_r = self.0 as i64;

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r > 1 {
            return None; // Not coprime
        }

        Some(Self::from_signed(t))
    }
}

impl<const N: u64> Semiring for Mod<N> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self(1 % N)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1 % N
    }
}

impl<const N: u64> Ring for Mod<N> {}
impl<const N: u64> CommutativeRing for Mod<N> {}

impl<const N: u64> GcdDomain for Mod<N> {
    fn try_div(&self, other: &Self) -> Option<Self> {
        other.invert().map(|inv| *self * inv)
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }
}

impl<const N: u64> Field for Mod<N> {
    fn inv(&self) -> Option<Self> {
        self.invert()
    }
}

impl<const N: u64> num_traits::Zero for Mod<N> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const N: u64> num_traits::One for Mod<N> {
    fn one() -> Self {
        Self(1 % N)
    }

    fn is_one(&self) -> bool {
        self.0 == 1 % N
    }
}

impl<const N: u64> Add for Mod<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self((self.0 + rhs.0) % N)
    }
}

impl<const N: u64> Sub for Mod<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self((N + self.0 - rhs.0) % N)
    }
}

impl<const N: u64> Mul for Mod<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(((u128::from(self.0) * u128::from(rhs.0)) % u128::from(N)) as u64)
    }
}

impl<const N: u64> Neg for Mod<N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self((N - self.0) % N)
    }
}

impl<const N: u64> fmt::Debug for Mod<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, N)
    }
}

impl<const N: u64> fmt::Display for Mod<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
