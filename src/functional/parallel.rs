//! Parallel reductions over slices (rayon)
//!
//! Splitting a fold across threads reorders the applications of the
//! operator, so only associative [`BinaryOp`]s with an identity are
//! accepted. Results can differ from the sequential [`reduce`](super::reduce)
//! by floating point rounding.

use crate::dtype::Scalar;
use crate::error::{Error, Result};
use crate::ops::BinaryOp;
use rayon::prelude::*;

/// Minimum elements per rayon task
pub const PAR_MIN_LEN: usize = 4096;

/// Parallel reduction with a tagged associative operator.
///
/// The operator's identity seeds every partial fold, so an empty slice
/// returns the identity.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `op` is not associative.
pub fn par_reduce<T: Scalar>(op: BinaryOp) -> Result<impl Fn(&[T]) -> T> {
    let identity = match op.identity::<T>() {
        Some(identity) if op.is_associative() => identity,
        _ => {
            let reason = format!("'{}' is not associative", op.name());
            return Err(Error::invalid_argument("op", reason));
        }
    };
    Ok(move |xs: &[T]| par_fold(op, identity, xs))
}

/// Parallel sum of a slice
pub fn par_sum_list<T: Scalar>(xs: &[T]) -> T {
    par_fold(BinaryOp::Add, T::zero(), xs)
}

/// Parallel product of a slice
pub fn par_product_list<T: Scalar>(xs: &[T]) -> T {
    par_fold(BinaryOp::Mul, T::one(), xs)
}

fn par_fold<T: Scalar>(op: BinaryOp, identity: T, xs: &[T]) -> T {
    if xs.len() < PAR_MIN_LEN {
        return xs.iter().fold(identity, |acc, &x| op.apply(acc, x));
    }
    xs.par_iter()
        .with_min_len(PAR_MIN_LEN)
        .copied()
        .reduce(|| identity, |a, b| op.apply(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::{product_list, reduce, sum_list};
    use crate::ops::max;

    #[test]
    fn test_par_reduce_rejects_non_associative() {
        for op in [BinaryOp::Lt, BinaryOp::Eq] {
            let err = par_reduce::<f64>(op).err().unwrap();
            assert!(matches!(err, Error::InvalidArgument { arg: "op", .. }));
        }
    }

    #[test]
    fn test_par_reduce_empty_is_identity() {
        let sum = par_reduce::<f64>(BinaryOp::Add).unwrap();
        let prod = par_reduce::<f64>(BinaryOp::Mul).unwrap();
        let maximum = par_reduce::<f64>(BinaryOp::Max).unwrap();
        let empty: &[f64] = &[];
        assert_eq!(sum(empty), 0.0);
        assert_eq!(prod(empty), 1.0);
        assert_eq!(maximum(empty), f64::NEG_INFINITY);
    }

    #[test]
    fn test_par_reduce_matches_sequential() {
        // Integers up to 2^53 add exactly, so both orders agree bit for bit
        let xs: Vec<f64> = (0..20_000).map(f64::from).collect();
        assert_eq!(par_sum_list(&xs), sum_list(xs.iter().copied()));

        let maximum = par_reduce::<f64>(BinaryOp::Max).unwrap();
        let expected = reduce(max, f64::NEG_INFINITY)(xs.iter().copied());
        assert_eq!(maximum(xs.as_slice()), expected);
    }

    #[test]
    fn test_par_product_small_and_large() {
        let xs = [1.0f64, 2.0, 3.0, 4.0];
        assert_eq!(par_product_list(&xs), product_list(xs));

        let ones = vec![1.0f32; 10_000];
        assert_eq!(par_product_list(&ones), 1.0);
    }
}
