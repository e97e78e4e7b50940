//! Sparse univariate polynomials.
//!
//! Terms are stored as (degree, coefficient) pairs in strictly increasing
//! degree order with no zero coefficients, so polynomials with large
//! degree gaps cost nothing for the gaps.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use monic_algebra::{CommutativeRing, Field, GcdDomain, Ring, Semiring};

use crate::dense::DensePoly;
use crate::kernel;

/// A sparse univariate polynomial.
///
/// The term list is always normalized: strictly increasing degrees, no
/// stored zero coefficients, empty for the zero polynomial.
///
/// The `Ord` impl (for `S: Ord`) is lexicographic on the term list. It
/// exists for ordered containers and is not a mathematically meaningful
/// order.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct SparsePoly<S: Semiring> {
    terms: Vec<(usize, S)>,
}

impl<S: Semiring> SparsePoly<S> {
    /// Creates a new polynomial from (degree, coefficient) pairs.
    ///
    /// The input may be unsorted and may repeat degrees; it is sorted,
    /// same-degree terms are combined, and zero coefficients are dropped.
    /// Malformed input is never rejected.
    #[must_use]
    pub fn new(mut terms: Vec<(usize, S)>) -> Self {
        terms.sort_by_key(|t| t.0);

        let mut normalized: Vec<(usize, S)> = Vec::with_capacity(terms.len());
        for (d, c) in terms {
            match normalized.last_mut() {
                Some(last) if last.0 == d => {
                    last.1 = last.1.clone() + c;
                }
                _ => normalized.push((d, c)),
            }
        }
        normalized.retain(|t| !t.1.is_zero());

        Self { terms: normalized }
    }

    /// Wraps a term list that is already normalized.
    pub(crate) fn from_normalized(terms: Vec<(usize, S)>) -> Self {
        debug_assert!(terms.windows(2).all(|w| w[0].0 < w[1].0));
        debug_assert!(terms.iter().all(|t| !t.1.is_zero()));
        Self { terms }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(S::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: S) -> Self {
        Self::monomial(0, c)
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn var() -> Self {
        Self::monomial(1, S::one())
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(n: usize, c: S) -> Self {
        if c.is_zero() {
            Self::zero()
        } else {
            Self {
                terms: vec![(n, c)],
            }
        }
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.terms.last().map(|t| t.0)
    }

    /// Returns the leading term as a (degree, coefficient) pair, or `None`
    /// for the zero polynomial.
    #[must_use]
    pub fn leading(&self) -> Option<(usize, &S)> {
        self.terms.last().map(|(d, c)| (*d, c))
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the constant polynomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].0 == 0 && self.terms[0].1.is_one()
    }

    /// Returns true if this is exactly the polynomial x.
    #[must_use]
    pub fn is_var(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].0 == 1 && self.terms[0].1.is_one()
    }

    /// Returns the number of stored terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the coefficient of x^n.
    #[must_use]
    pub fn coeff(&self, n: usize) -> S {
        match self.terms.binary_search_by_key(&n, |t| t.0) {
            Ok(i) => self.terms[i].1.clone(),
            Err(_) => S::zero(),
        }
    }

    /// Returns the terms.
    #[must_use]
    pub fn terms(&self) -> &[(usize, S)] {
        &self.terms
    }

    /// Decomposes into the raw term list.
    #[must_use]
    pub fn into_terms(self) -> Vec<(usize, S)> {
        self.terms
    }

    /// Adds two polynomials by a two-pointer merge.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::from_normalized(kernel::merge_sparse(
            self.terms.clone(),
            other.terms.clone(),
        ))
    }

    /// Multiplies two polynomials.
    ///
    /// The product coefficient at degree d is the sum of
    /// `self[i] * other[j]` over i + j = d, with `self`'s coefficient on
    /// the left.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_normalized(kernel::mul_sparse(&self.terms, &other.terms))
    }

    /// Multiplies by the monomial c * x^n on the left:
    /// `p.scale(n, &c) == monomial(n, c) * p`.
    #[must_use]
    pub fn scale(&self, n: usize, c: &S) -> Self {
        Self::from_normalized(kernel::scale_sparse(&self.terms, n, c, true))
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

    /// Evaluates the polynomial at a point.
    ///
    /// Walks the terms in ascending degree, raising the running power of
    /// the point by the degree delta between consecutive terms rather than
    /// recomputing absolute powers.
    #[must_use]
    pub fn eval(&self, x: &S) -> S {
        let mut result = S::zero();
        let mut power = S::one();
        let mut last_degree = 0;

        for (d, c) in &self.terms {
            power = power * x.pow((d - last_degree) as u64);
            result = result + c.clone() * power.clone();
            last_degree = *d;
        }

        result
    }

    /// Substitutes a polynomial for the variable.
    ///
    /// Uses the same degree-delta power tracking as `eval`, with
    /// polynomial-valued accumulators.
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        let mut result = Self::zero();
        let mut power = Self::one();
        let mut last_degree = 0;

        for (d, c) in &self.terms {
            power = Self::mul(&power, &inner.pow((d - last_degree) as u64));
            result = Self::add(&result, &power.scale(0, c));
            last_degree = *d;
        }

        result
    }

    /// Computes the formal derivative.
    ///
    /// Degree-zero terms vanish; terms whose scaled coefficient vanishes
    /// (finite characteristic) are dropped.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let terms = self
            .terms
            .iter()
            .filter(|(d, _)| *d > 0)
            .map(|(d, c)| (d - 1, c.mul_natural(*d as u64)))
            .filter(|(_, c)| !c.is_zero())
            .collect();
        Self::from_normalized(terms)
    }

    /// Converts to the dense representation.
    #[must_use]
    pub fn to_dense(&self) -> DensePoly<S> {
        let Some(degree) = self.degree() else {
            return DensePoly::zero();
        };

        let mut coeffs = vec![S::zero(); degree + 1];
        for (d, c) in &self.terms {
            coeffs[*d] = c.clone();
        }
        DensePoly::new(coeffs)
    }
}

impl<S: Ring> SparsePoly<S> {
    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::from_normalized(
            self.terms
                .iter()
                .map(|(d, c)| (*d, -c.clone()))
                .collect(),
        )
    }

    /// Subtracts two polynomials by a two-pointer merge.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = Vec::with_capacity(self.terms.len() + other.terms.len());
        let mut a = self.terms.iter().cloned().peekable();
        let mut b = other.terms.iter().cloned().peekable();

        loop {
            match (a.peek(), b.peek()) {
                (Some(&(da, _)), Some(&(db, _))) => match da.cmp(&db) {
                    Ordering::Less => result.push(a.next().unwrap()),
                    Ordering::Greater => {
                        let (d, c) = b.next().unwrap();
                        result.push((d, -c));
                    }
                    Ordering::Equal => {
                        let (d, ca) = a.next().unwrap();
                        let (_, cb) = b.next().unwrap();
                        let diff = ca - cb;
                        if !diff.is_zero() {
                            result.push((d, diff));
                        }
                    }
                },
                (Some(_), None) => result.push(a.next().unwrap()),
                (None, Some(_)) => {
                    let (d, c) = b.next().unwrap();
                    result.push((d, -c));
                }
                (None, None) => break,
            }
        }

        Self::from_normalized(result)
    }
}

impl<F: Field> SparsePoly<F> {
    /// Computes the formal integral with zero constant term.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient characteristic divides some term degree
    /// plus one, making the required division impossible.
    #[must_use]
    pub fn integral(&self) -> Self {
        let terms = self
            .terms
            .iter()
            .map(|(d, c)| {
                let divisor = F::one().mul_natural(*d as u64 + 1);
                let inv = divisor
                    .inv()
                    .expect("integral: coefficient characteristic divides a term degree");
                (d + 1, c.clone() * inv)
            })
            .collect();
        Self::from_normalized(terms)
    }
}

impl<S: Semiring> Semiring for SparsePoly<S> {
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

impl<S: Ring> Ring for SparsePoly<S> {}
impl<S: CommutativeRing> CommutativeRing for SparsePoly<S> {}

impl<R: GcdDomain> GcdDomain for SparsePoly<R> {
    fn try_div(&self, other: &Self) -> Option<Self> {
        crate::gcd::try_div_sparse(self, other)
    }

    fn gcd(&self, other: &Self) -> Self {
        crate::gcd::gcd_sparse(self, other)
    }
}

impl<S: Semiring> Add for SparsePoly<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        SparsePoly::add(&self, &rhs)
    }
}

impl<S: Semiring> Mul for SparsePoly<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        SparsePoly::mul(&self, &rhs)
    }
}

impl<S: Ring> Sub for SparsePoly<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        SparsePoly::sub(&self, &rhs)
    }
}

impl<S: Ring> Neg for SparsePoly<S> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        SparsePoly::neg(&self)
    }
}

impl<S: Semiring> FromIterator<(usize, S)> for SparsePoly<S> {
    fn from_iter<I: IntoIterator<Item = (usize, S)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<S: Semiring> From<DensePoly<S>> for SparsePoly<S> {
    fn from(p: DensePoly<S>) -> Self {
        p.to_sparse()
    }
}

impl<S: Semiring> std::fmt::Display for SparsePoly<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (d, c) in self.terms.iter().rev() {
            let term = match *d {
                0 => format!("{c:?}"),
                1 => format!("{c:?}*x"),
                _ => format!("{c:?}*x^{d}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
