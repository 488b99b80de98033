//! Activation functions

use crate::dtype::Scalar;

/// Sigmoid activation: 1 / (1 + exp(-x))
///
/// Evaluated branch-wise so that neither exponential overflows:
/// - `x >= 0`: `1 / (1 + e^-x)`
/// - `x < 0`: `e^x / (1 + e^x)`
#[inline]
pub fn sigmoid<T: Scalar>(x: T) -> T {
    if x >= T::zero() {
        T::one() / (T::one() + (-x).exp())
    } else {
        let e = x.exp();
        e / (T::one() + e)
    }
}

/// ReLU activation: x if x > 0 else 0
#[inline]
pub fn relu<T: Scalar>(x: T) -> T {
    if x > T::zero() { x } else { T::zero() }
}
