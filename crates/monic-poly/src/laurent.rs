//! Laurent polynomials: negative exponents via a degree offset.
//!
//! A Laurent polynomial is a dense body together with a signed offset: the
//! coefficient at signed degree `offset + i` is the body's coefficient at
//! index `i`. All arithmetic re-derives from the dense kernel by offset
//! bookkeeping.

use std::ops::{Add, Mul, Neg, Sub};

use monic_algebra::{CommutativeRing, Field, GcdDomain, Ring, Semiring};

use crate::dense::DensePoly;
use crate::gcd;

/// A univariate Laurent polynomial.
///
/// Normalized so the offset is minimal: the body has a non-zero constant
/// term, or the whole value is the canonical zero `(0, 0)`.
///
/// The `Ord` impl (for `S: Ord`) compares offsets then bodies. It exists
/// for ordered containers and is not a mathematically meaningful order.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct LaurentPoly<S: Semiring> {
    offset: isize,
    body: DensePoly<S>,
}

impl<S: Semiring> LaurentPoly<S> {
    /// Creates a Laurent polynomial from an offset and a dense body.
    ///
    /// Low-order zero coefficients of the body are folded into the offset
    /// so the result is minimal.
    #[must_use]
    pub fn new(offset: isize, body: DensePoly<S>) -> Self {
        if body.is_zero() {
            return Self::zero();
        }

        let low_zeros = body
            .coeffs()
            .iter()
            .take_while(|c| c.is_zero())
            .count();
        if low_zeros == 0 {
            return Self { offset, body };
        }

        let mut coeffs = body.into_coeffs();
        coeffs.drain(..low_zeros);
        Self {
            offset: offset + low_zeros as isize,
            body: DensePoly::new(coeffs),
        }
    }

    /// Creates the zero Laurent polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            offset: 0,
            body: DensePoly::zero(),
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(S::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: S) -> Self {
        Self::new(0, DensePoly::constant(c))
    }

    /// Creates the polynomial x: offset 1 with body 1.
    ///
    /// In the degenerate ring where 1 = 0 this collapses to the zero
    /// polynomial.
    #[must_use]
    pub fn var() -> Self {
        Self::new(1, DensePoly::one())
    }

    /// Creates the monomial c * x^n for a signed n.
    #[must_use]
    pub fn monomial(n: isize, c: S) -> Self {
        Self::new(n, DensePoly::constant(c))
    }

    /// Returns x^n for any sign of n.
    ///
    /// This is the restricted power operator of the variable: it is only
    /// meaningful on the canonical variable value.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not the canonical variable `var()`.
    #[must_use]
    pub fn var_pow(&self, n: isize) -> Self {
        assert!(
            self.is_var(),
            "var_pow applies only to the canonical variable"
        );
        Self::monomial(n, S::one())
    }

    /// Returns the minimal offset and the dense body.
    #[must_use]
    pub fn into_parts(self) -> (isize, DensePoly<S>) {
        (self.offset, self.body)
    }

    /// Returns the degree offset.
    #[must_use]
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Returns the dense body.
    #[must_use]
    pub fn body(&self) -> &DensePoly<S> {
        &self.body
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<isize> {
        self.body.degree().map(|d| self.offset + d as isize)
    }

    /// Returns the leading term as a (degree, coefficient) pair, or `None`
    /// for the zero polynomial.
    #[must_use]
    pub fn leading(&self) -> Option<(isize, &S)> {
        self.body
            .leading()
            .map(|(d, c)| (self.offset + d as isize, c))
    }

    /// Returns the coefficient at a signed degree.
    #[must_use]
    pub fn coeff(&self, n: isize) -> S {
        let i = n - self.offset;
        if i < 0 {
            S::zero()
        } else {
            self.body.coeff(i as usize)
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.body.is_zero()
    }

    /// Returns true if this is the constant polynomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.offset == 0 && self.body.is_one()
    }

    /// Returns true if this is exactly the polynomial x.
    #[must_use]
    pub fn is_var(&self) -> bool {
        self.offset == 1 && self.body.is_one()
    }

    /// Aligns the two operands to their minimum offset and returns the
    /// shifted bodies.
    fn aligned(&self, other: &Self) -> (isize, DensePoly<S>, DensePoly<S>) {
        let offset = self.offset.min(other.offset);
        let a = self.body.shift((self.offset - offset) as usize);
        let b = other.body.shift((other.offset - offset) as usize);
        (offset, a, b)
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (offset, a, b) = self.aligned(other);
        Self::new(offset, DensePoly::add(&a, &b))
    }

    /// Multiplies two polynomials: offsets add, bodies multiply.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(self.offset + other.offset, DensePoly::mul(&self.body, &other.body))
    }

    /// Multiplies by the monomial c * x^n on the left, for a signed n.
    #[must_use]
    pub fn scale(&self, n: isize, c: &S) -> Self {
        Self::new(self.offset + n, self.body.scale(0, c))
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u64) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut n = n;

        while n > 0 {
            if n & 1 == 1 {
                result = Self::mul(&result, &base);
            }
            base = Self::mul(&base, &base);
            n >>= 1;
        }

        result
    }
}

impl<S: Ring> LaurentPoly<S> {
    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            offset: self.offset,
            body: DensePoly::neg(&self.body),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let (offset, a, b) = self.aligned(other);
        Self::new(offset, DensePoly::sub(&a, &b))
    }

    /// Computes the formal derivative.
    ///
    /// The term at signed degree d maps to degree d - 1 with coefficient
    /// d * c; the degree-zero term vanishes.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let offset = self.offset;
        let coeffs = self
            .body
            .coeffs()
            .iter()
            .enumerate()
            .map(|(i, c)| c.mul_integer((offset + i as isize) as i64))
            .collect();
        Self::new(offset - 1, DensePoly::new(coeffs))
    }
}

impl<F: Field> LaurentPoly<F> {
    /// Evaluates the polynomial at a point.
    ///
    /// A negative offset multiplies by the inverse of the point raised to
    /// the offset's magnitude.
    ///
    /// # Panics
    ///
    /// Panics when evaluating at zero with a negative offset (a pole).
    #[must_use]
    pub fn eval(&self, x: &F) -> F {
        if self.is_zero() {
            return F::zero();
        }

        let base = self.body.eval(x);
        if self.offset >= 0 {
            base * x.pow(self.offset as u64)
        } else {
            let inv = x.inv().expect("evaluation at zero with a pole");
            base * inv.pow(self.offset.unsigned_abs() as u64)
        }
    }
}

impl<R: GcdDomain> LaurentPoly<R> {
    /// Divides exactly: offsets subtract, bodies divide.
    ///
    /// Returns `None` when the body division has no exact quotient.
    #[must_use]
    pub fn try_div(&self, other: &Self) -> Option<Self> {
        let quotient = gcd::try_div(&self.body, &other.body)?;
        Some(Self::new(self.offset - other.offset, quotient))
    }

    /// Computes the greatest common divisor of the bodies.
    ///
    /// GCD results are defined up to units and every power of x is a unit
    /// here, so the result always reports offset 0.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self::new(0, gcd::gcd(&self.body, &other.body))
    }
}

impl<S: Semiring> Semiring for LaurentPoly<S> {
    fn zero() -> Self {
        Self::zero()
    }

    fn one() -> Self {
        Self::one()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }

    fn is_one(&self) -> bool {
        self.is_one()
    }
}

impl<S: Ring> Ring for LaurentPoly<S> {}
impl<S: CommutativeRing> CommutativeRing for LaurentPoly<S> {}

impl<S: Semiring> Add for LaurentPoly<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        LaurentPoly::add(&self, &rhs)
    }
}

impl<S: Semiring> Mul for LaurentPoly<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        LaurentPoly::mul(&self, &rhs)
    }
}

impl<S: Ring> Sub for LaurentPoly<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        LaurentPoly::sub(&self, &rhs)
    }
}

impl<S: Ring> Neg for LaurentPoly<S> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        LaurentPoly::neg(&self)
    }
}

impl<S: Semiring> From<DensePoly<S>> for LaurentPoly<S> {
    fn from(body: DensePoly<S>) -> Self {
        Self::new(0, body)
    }
}

impl<S: Semiring> std::fmt::Display for LaurentPoly<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.body.coeffs().iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            let d = self.offset + i as isize;
            let term = match d {
                0 => format!("{c:?}"),
                1 => format!("{c:?}*x"),
                _ => format!("{c:?}*x^{d}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
