//! Test-only coefficient types.

use std::ops::{Add, Mul, Neg, Sub};

use monic_algebra::{Ring, Semiring};

/// A 2x2 integer matrix: the smallest convenient non-commutative ring,
/// used to pin down the side convention of coefficient multiplication.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Mat2 {
    a: i64,
    b: i64,
    c: i64,
    d: i64,
}

impl Mat2 {
    pub(crate) fn new(a: i64, b: i64, c: i64, d: i64) -> Self {
        Self { a, b, c, d }
    }

    pub(crate) fn zero_mat() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl Add for Mat2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.a + rhs.a,
            self.b + rhs.b,
            self.c + rhs.c,
            self.d + rhs.d,
        )
    }
}

impl Sub for Mat2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.a - rhs.a,
            self.b - rhs.b,
            self.c - rhs.c,
            self.d - rhs.d,
        )
    }
}

impl Mul for Mat2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.a * rhs.a + self.b * rhs.c,
            self.a * rhs.b + self.b * rhs.d,
            self.c * rhs.a + self.d * rhs.c,
            self.c * rhs.b + self.d * rhs.d,
        )
    }
}

impl Neg for Mat2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }
}

impl Semiring for Mat2 {
    fn zero() -> Self {
        Self::zero_mat()
    }

    fn one() -> Self {
        Self::new(1, 0, 0, 1)
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero_mat()
    }

    fn is_one(&self) -> bool {
        *self == Self::new(1, 0, 0, 1)
    }
}

impl Ring for Mat2 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noncommutative() {
        let a = Mat2::new(0, 1, 0, 0);
        let b = Mat2::new(0, 0, 1, 0);
        assert_ne!(a * b, b * a);
    }
}
