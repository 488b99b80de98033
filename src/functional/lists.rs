//! List operations composed from the combinators and scalar operators

use super::combinators::{map, reduce, zip_combine};
use crate::dtype::Scalar;
use crate::ops::{add, mul, neg};

/// Negate every element: `map(neg)`
pub fn negate_list<I, T>(xs: I) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = T>,
    T: Scalar,
{
    map(neg)(xs)
}

/// Elementwise sum of two sequences: `zip_combine(add)`
///
/// Truncates to the shorter sequence.
pub fn add_lists<A, B, T>(xs: A, ys: B) -> impl Iterator<Item = T>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    T: Scalar,
{
    zip_combine(add)(xs, ys)
}

/// Sum of a sequence: `reduce(add, 0)`
pub fn sum_list<I, T>(xs: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Scalar,
{
    reduce(add, T::zero())(xs)
}

/// Product of a sequence: `reduce(mul, 1)`
pub fn product_list<I, T>(xs: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Scalar,
{
    reduce(mul, T::one())(xs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate_list() {
        let out: Vec<f64> = negate_list(vec![1.0, -2.0, 3.0]).collect();
        assert_eq!(out, vec![-1.0, 2.0, -3.0]);
    }

    #[test]
    fn test_add_lists_truncates() {
        let out: Vec<f64> = add_lists(vec![1.0, 2.0], vec![3.0, 4.0, 5.0]).collect();
        assert_eq!(out, vec![4.0, 6.0]);
    }

    #[test]
    fn test_sum_and_product() {
        assert_eq!(sum_list(vec![1.0, 2.0, 3.0, 4.0]), 10.0);
        assert_eq!(product_list(vec![1.0f32, 2.0, 3.0, 4.0]), 24.0);
        assert_eq!(sum_list(Vec::<f64>::new()), 0.0);
        assert_eq!(product_list(Vec::<f64>::new()), 1.0);
    }

    #[test]
    fn test_list_ops_accept_borrowed_iterators() {
        let xs = [1.0f64, 2.0, 3.0];
        assert_eq!(sum_list(xs.iter().copied()), 6.0);
        let negated: Vec<f64> = negate_list(xs.iter().copied()).collect();
        assert_eq!(sum_list(add_lists(xs, negated)), 0.0);
    }
}
