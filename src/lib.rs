//! # torchlet
//!
//! **Scalar operators and sequence combinators for a small autodiff framework.**
//!
//! torchlet is the leaf layer of a differentiable-programming stack: the
//! scalar functions a tensor or autograd graph evaluates at every element,
//! their chain-rule backward forms, and generic combinators that lift those
//! functions over sequences.
//!
//! ## Features
//!
//! - **Scalar operators**: `mul`, `add`, `neg`, `id`, `lt`, `eq`, `max`,
//!   `is_close`, `sigmoid`, `relu`, `log`, `exp`, `inv`
//! - **Backward forms**: `log_back`, `inv_back`, `relu_back`, `sigmoid_back`,
//!   `exp_back`, each returning `d * f'(x)`
//! - **Numerical stability**: branch-wise `sigmoid`, softened `log`
//! - **Combinators**: lazy `map` and `zip_combine`, left-fold `reduce`
//! - **Multiple dtypes**: f64, f32, and with `f16`, half and bfloat16
//!
//! ## Quick Start
//!
//! ```rust
//! use torchlet::prelude::*;
//!
//! let y = sigmoid(0.0f64);
//! assert_eq!(y, 0.5);
//!
//! let grads: Vec<f64> = zip_combine(relu_back)(vec![-1.0, 2.0], vec![1.0, 1.0]).collect();
//! assert_eq!(grads, vec![0.0, 1.0]);
//!
//! assert_eq!(sum_list(negate_list(vec![1.0, 2.0])), -3.0);
//! assert!(inv(0.0f64).is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): parallel `par_reduce` over slices
//! - `f16`: Half-precision floats (F16, BF16)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod functional;
pub mod ops;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Scalar};
    pub use crate::error::{Error, Result};
    pub use crate::functional::{
        add_lists, map, negate_list, product_list, reduce, sum_list, try_map, try_zip_combine,
        zip_combine,
    };
    pub use crate::ops::{
        BackwardOp, BinaryOp, Tolerance, UnaryOp, add, eq, exp, exp_back, id, inv, inv_back,
        is_close, is_close_with, log, log_back, lt, max, mul, neg, relu, relu_back, sigmoid,
        sigmoid_back,
    };

    #[cfg(feature = "rayon")]
    pub use crate::functional::{par_product_list, par_reduce, par_sum_list};
}
