//! The multiplication kernel.
//!
//! Multiplication builds one partial product per non-zero term of the
//! shorter operand (the full longer operand scaled by that term's
//! coefficient and shifted by its degree) and reduces the partial products
//! with a balanced pairwise merge tree.
//!
//! The tree reduction is what keeps the merge work bounded: a left-fold
//! accumulator grows to full output size after the first merge and is
//! traversed once per partial product, O(k²) pairwise work for k partial
//! products. Pairing adjacent buffers instead halves the buffer count per
//! round, so there are O(log k) rounds whose total work is bounded by the
//! surviving element count.
//!
//! The same merge primitives back the addition and subtraction of the
//! dense and sparse types.

use std::cmp::Ordering;

use monic_algebra::Semiring;

/// Reduces a list of buffers to one by pairwise merging.
///
/// Each round merges adjacent pairs, carrying an odd buffer forward
/// unmerged. Returns `None` for an empty list.
pub(crate) fn reduce_pairwise<T, F>(mut items: Vec<T>, merge: F) -> Option<T>
where
    F: Fn(T, T) -> T,
{
    while items.len() > 1 {
        let mut round = Vec::with_capacity(items.len() / 2 + 1);
        let mut iter = items.into_iter();

        while let Some(first) = iter.next() {
            match iter.next() {
                Some(second) => round.push(merge(first, second)),
                None => round.push(first),
            }
        }

        items = round;
    }

    items.pop()
}

/// Strips the trailing run of zero coefficients.
///
/// The canonical zero buffer is empty.
pub(crate) fn strip_trailing_zeros<S: Semiring>(coeffs: &mut Vec<S>) {
    while coeffs.last().map_or(false, Semiring::is_zero) {
        coeffs.pop();
    }
}

/// Merges two normalized dense buffers by index-wise addition.
pub(crate) fn merge_dense<S: Semiring>(a: Vec<S>, b: Vec<S>) -> Vec<S> {
    let (mut acc, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    for (i, c) in short.into_iter().enumerate() {
        acc[i] = acc[i].clone() + c;
    }

    // A cancellation can only shorten the result when both operands end at
    // the same degree.
    strip_trailing_zeros(&mut acc);
    acc
}

/// One dense partial product: `long` scaled by `coeff` and shifted up by
/// `shift` positions.
///
/// `coeff_on_left` selects which side of each coefficient product `coeff`
/// lands on, so callers can preserve operand order for non-commutative
/// coefficients. Coefficients annihilated by the scaling (zero divisors)
/// leave zero gaps; a zero run at the top is stripped.
pub(crate) fn scale_dense<S: Semiring>(
    long: &[S],
    coeff: &S,
    shift: usize,
    coeff_on_left: bool,
) -> Vec<S> {
    let mut buf = Vec::with_capacity(shift + long.len());
    buf.resize(shift, S::zero());

    for c in long {
        let scaled = if coeff_on_left {
            coeff.clone() * c.clone()
        } else {
            c.clone() * coeff.clone()
        };
        buf.push(scaled);
    }

    strip_trailing_zeros(&mut buf);
    buf
}

/// Multiplies two normalized dense buffers.
pub(crate) fn mul_dense<S: Semiring>(lhs: &[S], rhs: &[S]) -> Vec<S> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }

    // The operand with fewer coefficients drives the partial products. The
    // scaling coefficient keeps its original side so the product is always
    // lhs-coefficient times rhs-coefficient.
    let (short, long, short_is_left) = if lhs.len() <= rhs.len() {
        (lhs, rhs, true)
    } else {
        (rhs, lhs, false)
    };

    let partials: Vec<Vec<S>> = short
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_zero())
        .map(|(shift, c)| scale_dense(long, c, shift, short_is_left))
        .filter(|buf| !buf.is_empty())
        .collect();

    reduce_pairwise(partials, merge_dense).unwrap_or_default()
}

/// Merges two normalized sparse term lists by a two-pointer walk.
///
/// Equal degrees are combined and dropped when the sum is zero.
pub(crate) fn merge_sparse<S: Semiring>(
    a: Vec<(usize, S)>,
    b: Vec<(usize, S)>,
) -> Vec<(usize, S)> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();

    loop {
        match (a.peek(), b.peek()) {
            (Some(&(da, _)), Some(&(db, _))) => match da.cmp(&db) {
                Ordering::Less => result.push(a.next().unwrap()),
                Ordering::Greater => result.push(b.next().unwrap()),
                Ordering::Equal => {
                    let (d, ca) = a.next().unwrap();
                    let (_, cb) = b.next().unwrap();
                    let sum = ca + cb;
                    if !sum.is_zero() {
                        result.push((d, sum));
                    }
                }
            },
            (Some(_), None) => result.push(a.next().unwrap()),
            (None, Some(_)) => result.push(b.next().unwrap()),
            (None, None) => break,
        }
    }

    result
}

/// One sparse partial product: every term of `long` scaled by `coeff` and
/// raised by `degree`.
///
/// Terms annihilated by the scaling are dropped.
pub(crate) fn scale_sparse<S: Semiring>(
    long: &[(usize, S)],
    degree: usize,
    coeff: &S,
    coeff_on_left: bool,
) -> Vec<(usize, S)> {
    let mut terms = Vec::with_capacity(long.len());

    for (d, c) in long {
        let scaled = if coeff_on_left {
            coeff.clone() * c.clone()
        } else {
            c.clone() * coeff.clone()
        };
        if !scaled.is_zero() {
            terms.push((d + degree, scaled));
        }
    }

    terms
}

/// Multiplies two normalized sparse term lists.
pub(crate) fn mul_sparse<S: Semiring>(
    lhs: &[(usize, S)],
    rhs: &[(usize, S)],
) -> Vec<(usize, S)> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }

    let (short, long, short_is_left) = if lhs.len() <= rhs.len() {
        (lhs, rhs, true)
    } else {
        (rhs, lhs, false)
    };

    let partials: Vec<Vec<(usize, S)>> = short
        .iter()
        .map(|(d, c)| scale_sparse(long, *d, c, short_is_left))
        .filter(|terms| !terms.is_empty())
        .collect();

    reduce_pairwise(partials, merge_sparse).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use monic_algebra::{Int, Mod};

    fn ints(values: &[i64]) -> Vec<Int> {
        values.iter().map(|&v| Int::new(v)).collect()
    }

    #[test]
    fn test_reduce_pairwise() {
        // Sum with an operand count that exercises the odd carry
        let items: Vec<i64> = (1..=7).collect();
        let sum = reduce_pairwise(items, |a, b| a + b);
        assert_eq!(sum, Some(28));

        assert_eq!(reduce_pairwise(Vec::<i64>::new(), |a, b| a + b), None);
        assert_eq!(reduce_pairwise(vec![42i64], |a, b| a + b), Some(42));
    }

    #[test]
    fn test_merge_dense_cancellation() {
        // (1 + x) + (1 - x) = 2
        let sum = merge_dense(ints(&[1, 1]), ints(&[1, -1]));
        assert_eq!(sum, ints(&[2]));

        // (1 + x) + (-1 - x) = 0, canonical empty buffer
        let zero = merge_dense(ints(&[1, 1]), ints(&[-1, -1]));
        assert!(zero.is_empty());
    }

    #[test]
    fn test_mul_dense_matches_convolution() {
        // (1 + 2x + 3x^2)(4 + 5x) = 4 + 13x + 22x^2 + 15x^3
        let prod = mul_dense(&ints(&[1, 2, 3]), &ints(&[4, 5]));
        assert_eq!(prod, ints(&[4, 13, 22, 15]));

        // Same result with the operands swapped
        let prod = mul_dense(&ints(&[4, 5]), &ints(&[1, 2, 3]));
        assert_eq!(prod, ints(&[4, 13, 22, 15]));
    }

    #[test]
    fn test_mul_dense_zero_divisors() {
        // 2 * 2 = 0 in Z/4: the whole product collapses
        let two = vec![Mod::<4>::new(2)];
        assert!(mul_dense(&two, &two).is_empty());

        // 2x * (2x + 1) = 2x: the annihilated x^2 term is stripped
        let a = vec![Mod::<4>::new(0), Mod::<4>::new(2)];
        let b = vec![Mod::<4>::new(1), Mod::<4>::new(2)];
        assert_eq!(mul_dense(&a, &b), vec![Mod::<4>::new(0), Mod::<4>::new(2)]);
    }

    #[test]
    fn test_merge_sparse() {
        let a = vec![(0, Int::new(1)), (5, Int::new(2))];
        let b = vec![(3, Int::new(4)), (5, Int::new(-2))];
        let merged = merge_sparse(a, b);
        assert_eq!(merged, vec![(0, Int::new(1)), (3, Int::new(4))]);
    }

    #[test]
    fn test_mul_sparse_matches_convolution() {
        // (1 + 3x^4)(2 + x^4) = 2 + 7x^4 + 3x^8
        let a = vec![(0, Int::new(1)), (4, Int::new(3))];
        let b = vec![(0, Int::new(2)), (4, Int::new(1))];
        let prod = mul_sparse(&a, &b);
        assert_eq!(
            prod,
            vec![(0, Int::new(2)), (4, Int::new(7)), (8, Int::new(3))]
        );
    }
}
