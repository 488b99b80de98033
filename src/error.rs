//! Error types for torchlet

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using torchlet's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in torchlet operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A scalar function was evaluated outside its domain
    #[error("Domain error in '{op}': {reason} (got {value} as {dtype})")]
    Domain {
        /// The operator name
        op: &'static str,
        /// The dtype the operator was evaluated in
        dtype: DType,
        /// The offending input, widened to f64
        value: f64,
        /// Why the input is rejected
        reason: &'static str,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a domain error
    pub fn domain(op: &'static str, dtype: DType, value: f64, reason: &'static str) -> Self {
        tracing::debug!(op, %dtype, value, reason, "scalar domain error");
        Self::Domain {
            op,
            dtype,
            value,
            reason,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::warn!(arg, reason = %reason, "invalid argument");
        Self::InvalidArgument { arg, reason }
    }

    /// Returns true for errors raised by a scalar function on a bad input
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}
