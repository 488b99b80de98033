//! Comparison operators and approximate equality

use crate::dtype::Scalar;
use crate::error::{Error, Result};

/// Less-than indicator: 1 if x < y else 0
#[inline]
pub fn lt<T: Scalar>(x: T, y: T) -> T {
    if x < y { T::one() } else { T::zero() }
}

/// Equality indicator: 1 if x == y else 0
#[inline]
pub fn eq<T: Scalar>(x: T, y: T) -> T {
    if x == y { T::one() } else { T::zero() }
}

/// Maximum: x if x > y else y
///
/// Ties return `y`, which equals `x`.
#[inline]
pub fn max<T: Scalar>(x: T, y: T) -> T {
    if x > y { x } else { y }
}

/// Relative and absolute tolerance for [`is_close_with`].
///
/// Two values are close when `|x - y| <= atol + rtol * |y|`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance {
    rtol: f64,
    atol: f64,
}

impl Tolerance {
    /// Relative tolerance used by [`is_close`]
    pub const DEFAULT_RTOL: f64 = 1e-2;
    /// Absolute tolerance used by [`is_close`]
    pub const DEFAULT_ATOL: f64 = 1e-8;

    /// Create a tolerance.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if either bound is negative or not finite.
    pub fn new(rtol: f64, atol: f64) -> Result<Self> {
        if !rtol.is_finite() || rtol < 0.0 {
            return Err(Error::invalid_argument(
                "rtol",
                format!("must be finite and non-negative, got {rtol}"),
            ));
        }
        if !atol.is_finite() || atol < 0.0 {
            return Err(Error::invalid_argument(
                "atol",
                format!("must be finite and non-negative, got {atol}"),
            ));
        }
        Ok(Self { rtol, atol })
    }

    /// Relative tolerance
    pub fn rtol(&self) -> f64 {
        self.rtol
    }

    /// Absolute tolerance
    pub fn atol(&self) -> f64 {
        self.atol
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rtol: Self::DEFAULT_RTOL,
            atol: Self::DEFAULT_ATOL,
        }
    }
}

/// Approximate equality with the default tolerance (rtol 1e-2, atol 1e-8)
///
/// Not symmetric in its operands; see [`is_close_with`].
#[inline]
pub fn is_close<T: Scalar>(x: T, y: T) -> bool {
    is_close_with(x, y, Tolerance::default())
}

/// Approximate equality: |x - y| <= atol + rtol * |y|
///
/// Asymmetric on purpose: the bound scales with `|y|` only, so
/// `is_close(99.0, 100.0)` holds while `is_close(100.0, 99.0)` does not.
/// Evaluated in f64 so reduced-precision inputs see the same bounds.
#[inline]
pub fn is_close_with<T: Scalar>(x: T, y: T, tol: Tolerance) -> bool {
    let (x, y) = (x.as_f64(), y.as_f64());
    (x - y).abs() <= tol.atol + tol.rtol * y.abs()
}
