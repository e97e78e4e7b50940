//! Dense univariate polynomials.
//!
//! Coefficients are stored in ascending degree order with no trailing
//! zeros; the canonical zero polynomial is the empty buffer. Internal zero
//! coefficients (gaps) are allowed.

use std::ops::{Add, Mul, Neg, Sub};

use monic_algebra::{CommutativeRing, Field, GcdDomain, Ring, Semiring};

use crate::kernel;
use crate::sparse::SparsePoly;

/// A dense univariate polynomial.
///
/// The coefficient of `x^i` lives at index `i`. The buffer is always
/// normalized: empty for the zero polynomial, otherwise ending in a
/// non-zero coefficient.
///
/// The `Ord` impl (for `S: Ord`) is lexicographic on the buffer. It exists
/// for ordered containers and is not a mathematically meaningful order.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct DensePoly<S: Semiring> {
    coeffs: Vec<S>,
}

impl<S: Semiring> DensePoly<S> {
    /// Creates a new polynomial from coefficients in ascending degree
    /// order.
    ///
    /// Trailing zeros are stripped; the input is never rejected.
    #[must_use]
    pub fn new(mut coeffs: Vec<S>) -> Self {
        kernel::strip_trailing_zeros(&mut coeffs);
        Self { coeffs }
    }

    /// Wraps a buffer that is already normalized.
    pub(crate) fn from_normalized(coeffs: Vec<S>) -> Self {
        debug_assert!(coeffs.last().map_or(true, |c| !c.is_zero()));
        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(S::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: S) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    ///
    /// In the degenerate ring where 1 = 0 this collapses to the zero
    /// polynomial.
    #[must_use]
    pub fn var() -> Self {
        Self::new(vec![S::zero(), S::one()])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(n: usize, c: S) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![S::zero(); n + 1];
        coeffs[n] = c;
        Self::from_normalized(coeffs)
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Returns the leading term as a (degree, coefficient) pair, or `None`
    /// for the zero polynomial.
    #[must_use]
    pub fn leading(&self) -> Option<(usize, &S)> {
        self.coeffs.last().map(|c| (self.coeffs.len() - 1, c))
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true if this is the constant polynomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    /// Returns true if this is exactly the polynomial x.
    #[must_use]
    pub fn is_var(&self) -> bool {
        self.coeffs.len() == 2 && self.coeffs[0].is_zero() && self.coeffs[1].is_one()
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> S {
        self.coeffs.get(i).cloned().unwrap_or_else(S::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[S] {
        &self.coeffs
    }

    /// Decomposes into the raw coefficient buffer.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<S> {
        self.coeffs
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::from_normalized(kernel::merge_dense(
            self.coeffs.clone(),
            other.coeffs.clone(),
        ))
    }

    /// Multiplies two polynomials.
    ///
    /// The product coefficient at degree d is the sum of
    /// `self[i] * other[j]` over i + j = d, with `self`'s coefficient on
    /// the left.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_normalized(kernel::mul_dense(&self.coeffs, &other.coeffs))
    }

    /// Multiplies by the monomial c * x^n on the left:
    /// `p.scale(n, &c) == monomial(n, c) * p`.
    #[must_use]
    pub fn scale(&self, n: usize, c: &S) -> Self {
        Self::from_normalized(kernel::scale_dense(&self.coeffs, c, n, true))
    }

    /// Multiplies by x^n.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }

        let mut coeffs = vec![S::zero(); n];
        coeffs.extend(self.coeffs.iter().cloned());
        Self::from_normalized(coeffs)
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

    /// Evaluates the polynomial at a point using Horner's method.
    ///
    /// Coefficients multiply powers of the point from the left.
    #[must_use]
    pub fn eval(&self, x: &S) -> S {
        let mut result = S::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Substitutes a polynomial for the variable.
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        let mut result = Self::zero();
        for c in self.coeffs.iter().rev() {
            result = Self::add(&Self::mul(&result, inner), &Self::constant(c.clone()));
        }
        result
    }

    /// Computes the formal derivative.
    ///
    /// Terms whose scaled coefficient vanishes (finite characteristic) are
    /// dropped by normalization.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() < 2 {
            return Self::zero();
        }

        let mut result = Vec::with_capacity(self.coeffs.len() - 1);
        for (i, c) in self.coeffs.iter().skip(1).enumerate() {
            result.push(c.mul_natural(i as u64 + 1));
        }

        Self::new(result)
    }

    /// Converts to the sparse representation.
    #[must_use]
    pub fn to_sparse(&self) -> SparsePoly<S> {
        let terms = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(d, c)| (d, c.clone()))
            .collect();
        SparsePoly::from_normalized(terms)
    }
}

impl<S: Ring> DensePoly<S> {
    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::from_normalized(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            result.push(self.coeff(i) - other.coeff(i));
        }

        Self::new(result)
    }
}

impl<F: Field> DensePoly<F> {
    /// Computes the formal integral with zero constant term.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient characteristic divides some term degree
    /// plus one, making the required division impossible.
    #[must_use]
    pub fn integral(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let mut result = Vec::with_capacity(self.coeffs.len() + 1);
        result.push(F::zero());
        for (i, c) in self.coeffs.iter().enumerate() {
            let divisor = F::one().mul_natural(i as u64 + 1);
            let inv = divisor
                .inv()
                .expect("integral: coefficient characteristic divides a term degree");
            result.push(c.clone() * inv);
        }

        Self::new(result)
    }
}

impl<S: Semiring> Semiring for DensePoly<S> {
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

impl<S: Ring> Ring for DensePoly<S> {}
impl<S: CommutativeRing> CommutativeRing for DensePoly<S> {}

impl<R: GcdDomain> GcdDomain for DensePoly<R> {
    fn try_div(&self, other: &Self) -> Option<Self> {
        crate::gcd::try_div(self, other)
    }

    fn gcd(&self, other: &Self) -> Self {
        crate::gcd::gcd(self, other)
    }
}

impl<S: Semiring> Add for DensePoly<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        DensePoly::add(&self, &rhs)
    }
}

impl<S: Semiring> Mul for DensePoly<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        DensePoly::mul(&self, &rhs)
    }
}

impl<S: Ring> Sub for DensePoly<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        DensePoly::sub(&self, &rhs)
    }
}

impl<S: Ring> Neg for DensePoly<S> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        DensePoly::neg(&self)
    }
}

impl<S: Semiring> FromIterator<S> for DensePoly<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<S: Semiring> From<SparsePoly<S>> for DensePoly<S> {
    fn from(p: SparsePoly<S>) -> Self {
        p.to_dense()
    }
}

impl<S: Semiring> std::fmt::Display for DensePoly<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            let term = match i {
                0 => format!("{c:?}"),
                1 => format!("{c:?}*x"),
                _ => format!("{c:?}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
