//! # monic-poly
//!
//! Univariate polynomial arithmetic over generic coefficient semirings.
//!
//! This crate provides:
//! - `DensePoly`: coefficients indexed by degree, no trailing zeros
//! - `SparsePoly`: (degree, coefficient) pairs, no stored zeros
//! - `LaurentPoly`: a dense body plus a signed degree offset
//! - Exact division and GCD over GCD-domain coefficients, with a
//!   field-specialized `OverField` wrapper for the fast monic algorithm
//!
//! All representations are kept fully normalized: construction accepts any
//! raw buffer and canonicalizes it, and every operation returns a
//! normalized value. Multiplication builds one partial product per term of
//! the shorter operand and reduces them with a balanced pairwise merge
//! tree.
//!
//! Coefficient multiplication is never assumed commutative: the product
//! `p * q` always multiplies `p`'s coefficients on the left.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;
pub mod gcd;
pub mod laurent;
pub mod sparse;

mod kernel;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod testutil;

pub use dense::DensePoly;
pub use gcd::OverField;
pub use laurent::LaurentPoly;
pub use sparse::SparsePoly;
