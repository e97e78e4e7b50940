//! Polynomial division and GCD.
//!
//! Over GCD-domain coefficients, exact division is a long division whose
//! coefficient divisions must all succeed, and GCD runs a primitive
//! pseudo-remainder sequence. Over field coefficients the `OverField`
//! wrapper dispatches to the plain Euclidean algorithm instead, which
//! avoids the repeated content extraction.

use std::ops::{Add, Mul, Neg, Sub};

use monic_algebra::{CommutativeRing, Field, GcdDomain, Ring, Semiring};

use crate::dense::DensePoly;
use crate::kernel;
use crate::sparse::SparsePoly;

/// Divides exactly, returning `None` when the divisor does not divide the
/// dividend evenly.
///
/// Division by the zero polynomial is always `None`: no unique quotient
/// exists.
pub fn try_div<R: GcdDomain>(num: &DensePoly<R>, den: &DensePoly<R>) -> Option<DensePoly<R>> {
    let (den_deg, den_lead) = den.leading()?;
    let Some(num_deg) = num.degree() else {
        return Some(DensePoly::zero());
    };
    if num_deg < den_deg {
        return None;
    }

    let mut remainder = num.coeffs().to_vec();
    let mut quotient = vec![R::zero(); num_deg - den_deg + 1];

    while remainder.len() > den_deg {
        let shift = remainder.len() - 1 - den_deg;
        let coeff = remainder.last().unwrap().try_div(den_lead)?;

        for (i, dc) in den.coeffs().iter().enumerate() {
            remainder[shift + i] = remainder[shift + i].clone() - coeff.clone() * dc.clone();
        }
        quotient[shift] = coeff;

        // The top coefficient cancels exactly; lower cancellations can
        // strip further.
        kernel::strip_trailing_zeros(&mut remainder);
    }

    if remainder.is_empty() {
        Some(DensePoly::new(quotient))
    } else {
        None
    }
}

/// Computes the GCD over GCD-domain coefficients.
///
/// Runs a primitive pseudo-remainder sequence: contents are split off,
/// the primitive parts iterate pseudo-division, and the result is scaled
/// by the gcd of the contents. The result is defined up to units.
pub fn gcd<R: GcdDomain>(a: &DensePoly<R>, b: &DensePoly<R>) -> DensePoly<R> {
    if a.is_zero() {
        return b.clone();
    }
    if b.is_zero() {
        return a.clone();
    }

    let common_content = content(a).gcd(&content(b));
    let mut p = primitive_part(a);
    let mut q = primitive_part(b);

    while !q.is_zero() {
        let r = pseudo_rem(&p, &q);
        p = q;
        q = primitive_part(&r);
    }

    p.scale(0, &common_content)
}

/// Computes the content: the gcd of all coefficients.
pub fn content<R: GcdDomain>(p: &DensePoly<R>) -> R {
    p.coeffs().iter().fold(R::zero(), |acc, c| acc.gcd(c))
}

/// Divides a polynomial by its content.
pub fn primitive_part<R: GcdDomain>(p: &DensePoly<R>) -> DensePoly<R> {
    let c = content(p);
    if c.is_zero() || c.is_one() {
        return p.clone();
    }

    let coeffs = p
        .coeffs()
        .iter()
        .map(|x| {
            x.try_div(&c)
                .expect("content divides every coefficient")
        })
        .collect();
    DensePoly::new(coeffs)
}

/// Pseudo-remainder: like division-with-remainder but each step scales the
/// remainder by the divisor's leading coefficient, so no coefficient
/// division is needed.
fn pseudo_rem<R: GcdDomain>(a: &DensePoly<R>, b: &DensePoly<R>) -> DensePoly<R> {
    let (b_deg, b_lead) = b.leading().expect("pseudo-division by zero polynomial");
    let mut remainder = a.coeffs().to_vec();

    while remainder.len() > b_deg {
        let shift = remainder.len() - 1 - b_deg;
        let lead = remainder.last().unwrap().clone();

        for c in remainder.iter_mut() {
            *c = c.clone() * b_lead.clone();
        }
        for (i, bc) in b.coeffs().iter().enumerate() {
            remainder[shift + i] = remainder[shift + i].clone() - lead.clone() * bc.clone();
        }

        kernel::strip_trailing_zeros(&mut remainder);
    }

    DensePoly::new(remainder)
}

/// Sparse exact division with the same contract as `try_div`.
pub fn try_div_sparse<R: GcdDomain>(
    num: &SparsePoly<R>,
    den: &SparsePoly<R>,
) -> Option<SparsePoly<R>> {
    let (den_deg, den_lead) = den.leading().map(|(d, c)| (d, c.clone()))?;
    if num.is_zero() {
        return Some(SparsePoly::zero());
    }

    let mut remainder = num.clone();
    let mut quotient = Vec::new();

    while let Some((r_deg, r_lead)) = remainder.leading().map(|(d, c)| (d, c.clone())) {
        if r_deg < den_deg {
            return None;
        }

        let q_coeff = r_lead.try_div(&den_lead)?;
        let q_deg = r_deg - den_deg;
        remainder = SparsePoly::sub(&remainder, &den.scale(q_deg, &q_coeff));
        quotient.push((q_deg, q_coeff));
    }

    Some(SparsePoly::new(quotient))
}

/// Sparse GCD via the same primitive pseudo-remainder sequence as `gcd`.
pub fn gcd_sparse<R: GcdDomain>(a: &SparsePoly<R>, b: &SparsePoly<R>) -> SparsePoly<R> {
    if a.is_zero() {
        return b.clone();
    }
    if b.is_zero() {
        return a.clone();
    }

    let common_content = content_sparse(a).gcd(&content_sparse(b));
    let mut p = primitive_part_sparse(a);
    let mut q = primitive_part_sparse(b);

    while !q.is_zero() {
        let r = pseudo_rem_sparse(&p, &q);
        p = q;
        q = primitive_part_sparse(&r);
    }

    p.scale(0, &common_content)
}

fn content_sparse<R: GcdDomain>(p: &SparsePoly<R>) -> R {
    p.terms().iter().fold(R::zero(), |acc, (_, c)| acc.gcd(c))
}

fn primitive_part_sparse<R: GcdDomain>(p: &SparsePoly<R>) -> SparsePoly<R> {
    let c = content_sparse(p);
    if c.is_zero() || c.is_one() {
        return p.clone();
    }

    let terms = p
        .terms()
        .iter()
        .map(|(d, x)| {
            let reduced = x
                .try_div(&c)
                .expect("content divides every coefficient");
            (*d, reduced)
        })
        .collect();
    SparsePoly::new(terms)
}

fn pseudo_rem_sparse<R: GcdDomain>(a: &SparsePoly<R>, b: &SparsePoly<R>) -> SparsePoly<R> {
    let (b_deg, b_lead) = b
        .leading()
        .map(|(d, c)| (d, c.clone()))
        .expect("pseudo-division by zero polynomial");
    let mut remainder = a.clone();

    while let Some((r_deg, r_lead)) = remainder.leading().map(|(d, c)| (d, c.clone())) {
        if r_deg < b_deg {
            break;
        }
        remainder = SparsePoly::sub(
            &remainder.scale(0, &b_lead),
            &b.scale(r_deg - b_deg, &r_lead),
        );
    }

    remainder
}

/// Division with remainder over field coefficients.
///
/// # Panics
///
/// Panics if the divisor is the zero polynomial.
pub fn div_rem<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> (DensePoly<F>, DensePoly<F>) {
    let (b_deg, b_lead) = b.leading().expect("division by zero polynomial");
    let Some(a_deg) = a.degree() else {
        return (DensePoly::zero(), DensePoly::zero());
    };
    if a_deg < b_deg {
        return (DensePoly::zero(), a.clone());
    }

    let b_lead_inv = b_lead.inv().expect("leading coefficient is non-zero");
    let mut remainder = a.coeffs().to_vec();
    let mut quotient = vec![F::zero(); a_deg - b_deg + 1];

    while remainder.len() > b_deg {
        let shift = remainder.len() - 1 - b_deg;
        let coeff = remainder.last().unwrap().clone() * b_lead_inv.clone();

        for (i, bc) in b.coeffs().iter().enumerate() {
            remainder[shift + i] = remainder[shift + i].clone() - coeff.clone() * bc.clone();
        }
        quotient[shift] = coeff;

        kernel::strip_trailing_zeros(&mut remainder);
    }

    (DensePoly::new(quotient), DensePoly::new(remainder))
}

/// Scales a polynomial to leading coefficient 1.
pub fn make_monic<F: Field>(p: &DensePoly<F>) -> DensePoly<F> {
    let Some((_, lead)) = p.leading() else {
        return p.clone();
    };

    let lead_inv = lead.inv().expect("leading coefficient is non-zero");
    p.scale(0, &lead_inv)
}

/// Computes the GCD over field coefficients by the Euclidean algorithm.
///
/// The result is monic (or zero).
pub fn field_gcd<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> DensePoly<F> {
    let mut p = a.clone();
    let mut q = b.clone();

    while !q.is_zero() {
        let (_, r) = div_rem(&p, &q);
        p = q;
        q = r;
    }

    make_monic(&p)
}

/// A dense polynomial over a field, dispatching to the fast monic
/// Euclidean GCD.
///
/// The generic `DensePoly` GCD runs the primitive pseudo-remainder
/// sequence, which re-extracts contents at every step; over a field every
/// non-zero constant is a unit, so the plain Euclidean algorithm does
/// strictly less work. This wrapper changes only that dispatch.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct OverField<F: Field>(pub DensePoly<F>);

impl<F: Field> OverField<F> {
    /// Wraps a dense polynomial.
    #[must_use]
    pub fn new(p: DensePoly<F>) -> Self {
        Self(p)
    }

    /// Returns the wrapped polynomial.
    #[must_use]
    pub fn into_inner(self) -> DensePoly<F> {
        self.0
    }

    /// Division with remainder.
    ///
    /// # Panics
    ///
    /// Panics if the divisor is the zero polynomial.
    #[must_use]
    pub fn div_rem(&self, other: &Self) -> (Self, Self) {
        let (q, r) = div_rem(&self.0, &other.0);
        (Self(q), Self(r))
    }
}

impl<F: Field> Semiring for OverField<F> {
    fn zero() -> Self {
        Self(DensePoly::zero())
    }

    fn one() -> Self {
        Self(DensePoly::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl<F: Field> Ring for OverField<F> {}
impl<F: Field> CommutativeRing for OverField<F> {}

impl<F: Field> GcdDomain for OverField<F> {
    fn try_div(&self, other: &Self) -> Option<Self> {
        if other.0.is_zero() {
            return None;
        }

        let (q, r) = div_rem(&self.0, &other.0);
        if r.is_zero() {
            Some(Self(q))
        } else {
            None
        }
    }

    fn gcd(&self, other: &Self) -> Self {
        Self(field_gcd(&self.0, &other.0))
    }
}

impl<F: Field> Add for OverField<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(DensePoly::add(&self.0, &rhs.0))
    }
}

impl<F: Field> Sub for OverField<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(DensePoly::sub(&self.0, &rhs.0))
    }
}

impl<F: Field> Mul for OverField<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(DensePoly::mul(&self.0, &rhs.0))
    }
}

impl<F: Field> Neg for OverField<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.neg())
    }
}

impl<F: Field> From<DensePoly<F>> for OverField<F> {
    fn from(p: DensePoly<F>) -> Self {
        Self(p)
    }
}

impl<F: Field> std::fmt::Display for OverField<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
