//! Scalar operators
//!
//! Pure functions over one or two scalars, generic over [`Scalar`](crate::dtype::Scalar).
//! These are the leaf operations the tensor and autodiff layers compose.
//!
//! ```text
//! ops
//!   ├── arithmetic   id, add, mul, neg, log, exp, inv
//!   ├── compare      lt, eq, max, is_close
//!   ├── activation   sigmoid, relu
//!   └── backward     log_back, inv_back, relu_back, sigmoid_back, exp_back
//! ```
//!
//! # Backward contract
//!
//! For each forward `f` with a backward form, `f_back(x, d) == d * f'(x)`.
//! Reverse-mode callers pass the upstream gradient as `d`.
//!
//! # Kind enums
//!
//! [`UnaryOp`], [`BinaryOp`] and [`BackwardOp`] name the operator set so a
//! graph node can store which operator produced it and dispatch later.

mod activation;
mod arithmetic;
mod backward;
mod compare;

pub use activation::{relu, sigmoid};
pub use arithmetic::{BinaryOp, LOG_EPS, UnaryOp, add, exp, id, inv, log, mul, neg};
pub use backward::{BackwardOp, exp_back, inv_back, log_back, relu_back, sigmoid_back};
pub use compare::{Tolerance, eq, is_close, is_close_with, lt, max};
