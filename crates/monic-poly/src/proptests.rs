//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use monic_algebra::{GcdDomain, Int, Mod, Rat, Semiring};

    use crate::dense::DensePoly;
    use crate::gcd;
    use crate::laurent::LaurentPoly;
    use crate::sparse::SparsePoly;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Rat> {
        (-50i64..50i64).prop_map(Rat::from_integer)
    }

    // Strategy for generating small dense polynomials (degree <= 5)
    fn small_poly() -> impl Strategy<Value = DensePoly<Rat>> {
        proptest::collection::vec(small_coeff(), 0..=6).prop_map(DensePoly::new)
    }

    // Strategy for generating small sparse polynomials with degree gaps
    fn small_sparse() -> impl Strategy<Value = SparsePoly<Rat>> {
        proptest::collection::vec((0usize..30, small_coeff()), 0..=6).prop_map(SparsePoly::new)
    }

    // Strategy for generating small Laurent polynomials
    fn small_laurent() -> impl Strategy<Value = LaurentPoly<Rat>> {
        (-5isize..5, small_poly()).prop_map(|(offset, body)| LaurentPoly::new(offset, body))
    }

    // Reference schoolbook convolution
    fn naive_mul(a: &DensePoly<Rat>, b: &DensePoly<Rat>) -> DensePoly<Rat> {
        if a.is_zero() || b.is_zero() {
            return DensePoly::zero();
        }

        let mut result = vec![Rat::zero(); a.coeffs().len() + b.coeffs().len() - 1];
        for (i, ai) in a.coeffs().iter().enumerate() {
            for (j, bj) in b.coeffs().iter().enumerate() {
                result[i + j] = result[i + j].clone() + ai.clone() * bj.clone();
            }
        }
        DensePoly::new(result)
    }

    proptest! {
        // Ring axioms, dense

        #[test]
        fn dense_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn dense_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn dense_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn dense_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn dense_zero_absorption(a in small_poly()) {
            let zero = DensePoly::zero();
            prop_assert!(a.mul(&zero).is_zero());
            prop_assert_eq!(a.add(&zero), a);
        }

        #[test]
        fn dense_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        // Normalization

        #[test]
        fn dense_normalize_idempotent(a in small_poly()) {
            prop_assert_eq!(DensePoly::new(a.coeffs().to_vec()), a);
        }

        #[test]
        fn sparse_normalize_idempotent(a in small_sparse()) {
            prop_assert_eq!(SparsePoly::new(a.terms().to_vec()), a);
        }

        // Multiplication against the reference convolution

        #[test]
        fn dense_mul_matches_naive(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), naive_mul(&a, &b));
        }

        // Leading term and monomial scaling

        #[test]
        fn leading_of_monomial(d in 0usize..10, c in small_coeff()) {
            let m = DensePoly::monomial(d, c.clone());
            if c.is_zero() {
                prop_assert_eq!(m.leading(), None);
            } else {
                prop_assert_eq!(m.leading(), Some((d, &c)));
            }
        }

        #[test]
        fn scale_is_monomial_mul(d in 0usize..8, c in small_coeff(), p in small_poly()) {
            prop_assert_eq!(
                p.scale(d, &c),
                DensePoly::monomial(d, c.clone()).mul(&p)
            );
        }

        #[test]
        fn sparse_scale_is_monomial_mul(d in 0usize..8, c in small_coeff(), p in small_sparse()) {
            prop_assert_eq!(
                p.scale(d, &c),
                SparsePoly::monomial(d, c.clone()).mul(&p)
            );
        }

        // Evaluation is a homomorphism

        #[test]
        fn eval_add_homomorphism(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!(
                a.add(&b).eval(&x),
                a.eval(&x) + b.eval(&x)
            );
        }

        #[test]
        fn eval_mul_homomorphism(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!(
                a.mul(&b).eval(&x),
                a.eval(&x) * b.eval(&x)
            );
        }

        #[test]
        fn eval_var_is_identity(x in small_coeff()) {
            prop_assert_eq!(DensePoly::var().eval(&x), x.clone());
            prop_assert_eq!(SparsePoly::var().eval(&x), x);
        }

        #[test]
        fn sparse_eval_matches_dense(a in small_sparse(), x in small_coeff()) {
            prop_assert_eq!(a.eval(&x), a.to_dense().eval(&x));
        }

        // Calculus

        #[test]
        fn deriv_of_integral(a in small_poly()) {
            prop_assert_eq!(a.integral().derivative(), a);
        }

        #[test]
        fn deriv_product_rule(a in small_poly(), b in small_poly()) {
            let left = a.mul(&b).derivative();
            let right = a.mul(&b.derivative()).add(&b.mul(&a.derivative()));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn sparse_deriv_matches_dense(a in small_sparse()) {
            prop_assert_eq!(a.derivative().to_dense(), a.to_dense().derivative());
        }

        #[test]
        fn compose_evaluates_pointwise(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!(
                a.compose(&b).eval(&x),
                a.eval(&b.eval(&x))
            );
        }

        // Dense/sparse cross-consistency

        #[test]
        fn representations_agree_on_mul(a in small_sparse(), b in small_sparse()) {
            let dense = a.to_dense().mul(&b.to_dense());
            prop_assert_eq!(a.mul(&b).to_dense(), dense);
        }

        #[test]
        fn representations_agree_on_add(a in small_sparse(), b in small_sparse()) {
            let dense = a.to_dense().add(&b.to_dense());
            prop_assert_eq!(a.add(&b).to_dense(), dense);
        }

        #[test]
        fn representation_round_trip(a in small_sparse()) {
            prop_assert_eq!(a.to_dense().to_sparse(), a);
        }

        // Finite characteristic

        #[test]
        fn char_p_laws(values in proptest::collection::vec(0u64..5, 0..=6)) {
            let a: DensePoly<Mod<5>> =
                values.iter().map(|&v| Mod::<5>::new(v)).collect();
            prop_assert_eq!(a.add(&a.neg()), DensePoly::zero());
            prop_assert_eq!(a.mul(&DensePoly::one()), a);
        }

        // Laurent

        #[test]
        fn laurent_offset_minimal(p in small_laurent()) {
            if !p.is_zero() {
                let (_, body) = p.clone().into_parts();
                prop_assert!(!body.coeff(0).is_zero());
            }
        }

        #[test]
        fn laurent_add_commutative(a in small_laurent(), b in small_laurent()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn laurent_mul_associative(a in small_laurent(), b in small_laurent(), c in small_laurent()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn laurent_distributive(a in small_laurent(), b in small_laurent(), c in small_laurent()) {
            prop_assert_eq!(
                a.mul(&b.add(&c)),
                a.mul(&b).add(&a.mul(&c))
            );
        }

        #[test]
        fn laurent_var_pow_inverts(n in 0isize..6) {
            let x = LaurentPoly::<Rat>::var();
            let prod = x.var_pow(-n).mul(&x.var_pow(n));
            prop_assert!(prod.is_one());
        }

        #[test]
        fn laurent_eval_mul_homomorphism(
            a in small_laurent(),
            b in small_laurent(),
            x in 1i64..40,
        ) {
            let x = Rat::from_integer(x);
            prop_assert_eq!(
                a.mul(&b).eval(&x),
                a.eval(&x) * b.eval(&x)
            );
        }

        // Division and GCD

        #[test]
        fn try_div_recovers_factor(a in small_poly(), b in small_poly()) {
            if !b.is_zero() {
                let product = b.mul(&a);
                prop_assert_eq!(gcd::try_div(&product, &b), Some(a));
            }
        }

        #[test]
        fn int_gcd_divides_both(
            xs in proptest::collection::vec(-9i64..9, 0..=4),
            ys in proptest::collection::vec(-9i64..9, 0..=4),
        ) {
            let a: DensePoly<Int> = xs.into_iter().map(Int::new).collect();
            let b: DensePoly<Int> = ys.into_iter().map(Int::new).collect();
            let g = gcd::gcd(&a, &b);
            if !g.is_zero() {
                prop_assert!(gcd::try_div(&a, &g).is_some());
                prop_assert!(gcd::try_div(&b, &g).is_some());
            } else {
                prop_assert!(a.is_zero() && b.is_zero());
            }
        }

        #[test]
        fn field_gcd_agrees_with_generic_up_to_units(a in small_poly(), b in small_poly()) {
            let fast = gcd::field_gcd(&a, &b);
            let generic = gcd::gcd(&a, &b);
            // Both are GCDs, so each divides the other
            if fast.is_zero() {
                prop_assert!(generic.is_zero());
            } else {
                prop_assert!(generic.try_div(&fast).is_some());
                prop_assert!(fast.try_div(&generic).is_some());
            }
        }
    }
}
