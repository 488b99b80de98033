//! Sequence combinators
//!
//! Higher-order functions that lift scalar operators over sequences:
//!
//! - [`map`] / [`try_map`]: unary operator, element by element
//! - [`zip_combine`] / [`try_zip_combine`]: binary operator, pairwise
//! - [`reduce`]: left fold from a starting accumulator
//!
//! and the list operations built from them: [`negate_list`], [`add_lists`],
//! [`sum_list`], [`product_list`].
//!
//! All combinators are curried: supply the operator first, then the
//! sequence(s).
//!
//! ```
//! use torchlet::functional::{reduce, zip_combine};
//! use torchlet::ops::{add, mul};
//!
//! let dot = |xs: Vec<f64>, ys: Vec<f64>| reduce(add, 0.0)(zip_combine(mul)(xs, ys));
//! assert_eq!(dot(vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]), 32.0);
//! ```

mod combinators;
mod lists;
#[cfg(feature = "rayon")]
mod parallel;

pub use combinators::{ZipWith, map, reduce, try_map, try_zip_combine, zip_combine};
pub use lists::{add_lists, negate_list, product_list, sum_list};
#[cfg(feature = "rayon")]
pub use parallel::{PAR_MIN_LEN, par_product_list, par_reduce, par_sum_list};
