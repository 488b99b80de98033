//! Elementary arithmetic operators
//!
//! Pure scalar functions plus the [`UnaryOp`] and [`BinaryOp`] kind enums
//! the autodiff layers record on graph nodes and dispatch through.

use super::activation::{relu, sigmoid};
use super::compare::{eq, lt, max};
use crate::dtype::Scalar;
use crate::error::{Error, Result};

/// Offset added inside [`log`] so that `log(0)` stays finite
pub const LOG_EPS: f64 = 1e-6;

/// Identity: f(x) = x
#[inline]
pub fn id<T: Scalar>(x: T) -> T {
    x
}

/// Addition: f(x, y) = x + y
#[inline]
pub fn add<T: Scalar>(x: T, y: T) -> T {
    x + y
}

/// Multiplication: f(x, y) = x * y
#[inline]
pub fn mul<T: Scalar>(x: T, y: T) -> T {
    x * y
}

/// Negation: f(x) = -x
#[inline]
pub fn neg<T: Scalar>(x: T) -> T {
    -x
}

/// Softened natural log: f(x) = ln(x + LOG_EPS)
///
/// Finite at `x = 0`. Callers must not rely on the result being exactly
/// `ln(x)`; see [`log_back`](super::log_back) for the matching derivative.
#[inline]
pub fn log<T: Scalar>(x: T) -> T {
    (x + T::from_f64(LOG_EPS)).ln()
}

/// Exponential: f(x) = e^x
///
/// Overflows to +inf for large `x`.
#[inline]
pub fn exp<T: Scalar>(x: T) -> T {
    x.exp()
}

/// Reciprocal: f(x) = 1 / x
///
/// # Errors
/// Returns [`Error::Domain`] when `x == 0`.
#[inline]
pub fn inv<T: Scalar>(x: T) -> Result<T> {
    if x == T::zero() {
        return Err(Error::domain(
            "inv",
            T::DTYPE,
            x.as_f64(),
            "division by zero",
        ));
    }
    Ok(T::one() / x)
}

/// Unary operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Identity: a
    Id,
    /// Negation: -a
    Neg,
    /// Logistic sigmoid: 1 / (1 + e^-a)
    Sigmoid,
    /// Rectifier: max(a, 0)
    Relu,
    /// Softened natural log: ln(a + eps)
    Log,
    /// Exponential: e^a
    Exp,
    /// Reciprocal: 1/a
    Inv,
}

impl UnaryOp {
    /// All unary kinds, in declaration order
    pub const ALL: [UnaryOp; 7] = [
        UnaryOp::Id,
        UnaryOp::Neg,
        UnaryOp::Sigmoid,
        UnaryOp::Relu,
        UnaryOp::Log,
        UnaryOp::Exp,
        UnaryOp::Inv,
    ];

    /// Apply the operator to one scalar.
    ///
    /// Only `Inv` can fail.
    #[inline]
    pub fn apply<T: Scalar>(self, x: T) -> Result<T> {
        match self {
            UnaryOp::Id => Ok(id(x)),
            UnaryOp::Neg => Ok(neg(x)),
            UnaryOp::Sigmoid => Ok(sigmoid(x)),
            UnaryOp::Relu => Ok(relu(x)),
            UnaryOp::Log => Ok(log(x)),
            UnaryOp::Exp => Ok(exp(x)),
            UnaryOp::Inv => inv(x),
        }
    }

    /// Operator name, as used in error payloads
    pub const fn name(self) -> &'static str {
        match self {
            UnaryOp::Id => "id",
            UnaryOp::Neg => "neg",
            UnaryOp::Sigmoid => "sigmoid",
            UnaryOp::Relu => "relu",
            UnaryOp::Log => "log",
            UnaryOp::Exp => "exp",
            UnaryOp::Inv => "inv",
        }
    }
}

/// Binary operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Addition: a + b
    Add,
    /// Multiplication: a * b
    Mul,
    /// Less-than indicator: 1 if a < b else 0
    Lt,
    /// Equality indicator: 1 if a == b else 0
    Eq,
    /// Maximum: max(a, b)
    Max,
}

impl BinaryOp {
    /// Apply the operator to a pair of scalars.
    #[inline]
    pub fn apply<T: Scalar>(self, x: T, y: T) -> T {
        match self {
            BinaryOp::Add => add(x, y),
            BinaryOp::Mul => mul(x, y),
            BinaryOp::Lt => lt(x, y),
            BinaryOp::Eq => eq(x, y),
            BinaryOp::Max => max(x, y),
        }
    }

    /// Identity element of the operator, if it has one.
    ///
    /// - add → 0
    /// - mul → 1
    /// - max → -inf
    pub fn identity<T: Scalar>(self) -> Option<T> {
        match self {
            BinaryOp::Add => Some(T::zero()),
            BinaryOp::Mul => Some(T::one()),
            BinaryOp::Max => Some(T::neg_infinity()),
            BinaryOp::Lt | BinaryOp::Eq => None,
        }
    }

    /// Returns true if `(a op b) op c == a op (b op c)` up to rounding.
    ///
    /// Only associative operators may be reduced out of order.
    pub const fn is_associative(self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Mul | BinaryOp::Max)
    }

    /// Operator name, as used in error payloads
    pub const fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Mul => "mul",
            BinaryOp::Lt => "lt",
            BinaryOp::Eq => "eq",
            BinaryOp::Max => "max",
        }
    }
}
