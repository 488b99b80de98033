//! Backward (chain-rule) forms of the unary operators
//!
//! Every `*_back(x, d)` returns `d * f'(x)`, where `d` is the upstream
//! gradient flowing into `f`'s output.

use super::activation::sigmoid;
use super::arithmetic::UnaryOp;
use crate::dtype::Scalar;
use crate::error::{Error, Result};

/// Backward for log: d / x
///
/// Differentiates plain `ln(x)`, not the softened `ln(x + LOG_EPS)` that
/// [`log`](super::log) evaluates.
///
/// # Errors
/// Returns [`Error::Domain`] when `x <= 0`.
#[inline]
pub fn log_back<T: Scalar>(x: T, d: T) -> Result<T> {
    if x <= T::zero() {
        return Err(Error::domain(
            "log_back",
            T::DTYPE,
            x.as_f64(),
            "x must be positive",
        ));
    }
    Ok(d / x)
}

/// Backward for inv: -d / x^2
///
/// Unguarded: `x == 0` follows IEEE division and yields an infinite or NaN value.
#[inline]
pub fn inv_back<T: Scalar>(x: T, d: T) -> T {
    -d / (x * x)
}

/// Backward for relu: d if x > 0 else 0
///
/// The kink at `x = 0` belongs to the zero branch.
#[inline]
pub fn relu_back<T: Scalar>(x: T, d: T) -> T {
    if x > T::zero() { d } else { T::zero() }
}

/// Backward for sigmoid: d * s * (1 - s), with s = sigmoid(x)
#[inline]
pub fn sigmoid_back<T: Scalar>(x: T, d: T) -> T {
    let s = sigmoid(x);
    d * s * (T::one() - s)
}

/// Backward for exp: d * e^x
#[inline]
pub fn exp_back<T: Scalar>(x: T, d: T) -> T {
    d * x.exp()
}

/// Backward operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BackwardOp {
    /// d / x
    Log,
    /// -d / x^2
    Inv,
    /// d if x > 0 else 0
    Relu,
    /// d * sigmoid(x) * (1 - sigmoid(x))
    Sigmoid,
    /// d * e^x
    Exp,
}

impl BackwardOp {
    /// Evaluate `d * f'(x)`.
    ///
    /// Only `Log` can fail.
    #[inline]
    pub fn backward<T: Scalar>(self, x: T, d: T) -> Result<T> {
        match self {
            BackwardOp::Log => log_back(x, d),
            BackwardOp::Inv => Ok(inv_back(x, d)),
            BackwardOp::Relu => Ok(relu_back(x, d)),
            BackwardOp::Sigmoid => Ok(sigmoid_back(x, d)),
            BackwardOp::Exp => Ok(exp_back(x, d)),
        }
    }

    /// The forward operator this is the derivative of
    pub const fn forward(self) -> UnaryOp {
        match self {
            BackwardOp::Log => UnaryOp::Log,
            BackwardOp::Inv => UnaryOp::Inv,
            BackwardOp::Relu => UnaryOp::Relu,
            BackwardOp::Sigmoid => UnaryOp::Sigmoid,
            BackwardOp::Exp => UnaryOp::Exp,
        }
    }

    /// Look up the backward form of a forward operator, if it has one here
    pub const fn of(op: UnaryOp) -> Option<Self> {
        match op {
            UnaryOp::Log => Some(BackwardOp::Log),
            UnaryOp::Inv => Some(BackwardOp::Inv),
            UnaryOp::Relu => Some(BackwardOp::Relu),
            UnaryOp::Sigmoid => Some(BackwardOp::Sigmoid),
            UnaryOp::Exp => Some(BackwardOp::Exp),
            UnaryOp::Id | UnaryOp::Neg => None,
        }
    }

    /// Operator name, as used in error payloads
    pub const fn name(self) -> &'static str {
        match self {
            BackwardOp::Log => "log_back",
            BackwardOp::Inv => "inv_back",
            BackwardOp::Relu => "relu_back",
            BackwardOp::Sigmoid => "sigmoid_back",
            BackwardOp::Exp => "exp_back",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_back() {
        assert_eq!(log_back(2.0f64, 3.0).unwrap(), 1.5);
        assert_eq!(log_back(0.5f32, -1.0).unwrap(), -2.0);
    }

    #[test]
    fn test_log_back_rejects_non_positive() {
        for x in [0.0f64, -0.0, -1.0, -1e-300] {
            let err = log_back(x, 1.0).unwrap_err();
            assert!(err.is_domain(), "x = {x}");
        }
    }

    #[test]
    fn test_inv_back() {
        assert_eq!(inv_back(2.0f64, 1.0), -0.25);
        assert_eq!(inv_back(-2.0f64, 4.0), -1.0);
        assert!(inv_back(0.0f64, 1.0).is_infinite());
    }

    #[test]
    fn test_relu_back_kink_is_off() {
        assert_eq!(relu_back(1.0, 5.0), 5.0);
        assert_eq!(relu_back(0.0, 5.0), 0.0);
        assert_eq!(relu_back(-1.0, 5.0), 0.0);
    }

    #[test]
    fn test_sigmoid_back_at_zero() {
        // sigmoid'(0) = 0.5 * (1 - 0.5) = 0.25
        assert!((sigmoid_back(0.0f64, 1.0) - 0.25).abs() < 1e-12);
        assert_eq!(sigmoid_back(-1000.0f64, 1.0), 0.0);
    }

    #[test]
    fn test_exp_back() {
        assert_eq!(exp_back(0.0f64, 2.0), 2.0);
    }

    #[test]
    fn test_backward_op_round_trip() {
        for op in UnaryOp::ALL {
            if let Some(back) = BackwardOp::of(op) {
                assert_eq!(back.forward(), op);
            }
        }
        assert!(BackwardOp::of(UnaryOp::Neg).is_none());
        assert!(BackwardOp::Log.backward(0.0f64, 1.0).is_err());
        assert_eq!(BackwardOp::Relu.backward(2.0f64, 3.0).unwrap(), 3.0);
    }
}
