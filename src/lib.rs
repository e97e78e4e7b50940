//! # Monic
//!
//! Univariate polynomial arithmetic over generic algebraic coefficient
//! types.
//!
//! Monic provides dense, sparse and Laurent polynomial representations,
//! all kept fully normalized, over any coefficient type implementing the
//! capability traits of [`monic_algebra`]:
//!
//! - `Semiring` suffices for addition, multiplication, evaluation,
//!   substitution and the derivative
//! - `Ring` adds subtraction and negation
//! - `GcdDomain` adds exact division and polynomial GCD
//! - `Field` adds the integral, Laurent evaluation at negative offsets,
//!   and the fast monic GCD via [`poly::OverField`]
//!
//! ## Quick Start
//!
//! ```
//! use monic::prelude::*;
//!
//! let p: DensePoly<Int> = [1, 2, 3].into_iter().map(Int::new).collect();
//! let q: DensePoly<Int> = [4, 5].into_iter().map(Int::new).collect();
//!
//! let product = p.mul(&q);
//! assert_eq!(product.coeff(2), Int::new(22));
//! assert_eq!(product.eval(&Int::new(1)), Int::new(54));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use monic_algebra as algebra;
pub use monic_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use monic_algebra::{CommutativeRing, Field, GcdDomain, Ring, Semiring};
    pub use monic_algebra::{Int, Mod, Nat, Rat};
    pub use monic_poly::{DensePoly, LaurentPoly, OverField, SparsePoly};
}
