//! Data type system for torchlet scalars
//!
//! This module provides the `DType` tag for every supported floating point
//! type and the `Scalar` trait the operator layer is generic over.

mod scalar;

pub use scalar::Scalar;

use std::fmt;

/// Floating point element types understood by the operator layer.
///
/// Discriminants are stable. New types will use new values; existing values
/// are never changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point (most common)
    F32 = 1,
    /// 16-bit floating point (IEEE 754)
    F16 = 2,
    /// 16-bit brain floating point
    BF16 = 3,
}

impl DType {
    /// Short name for display (e.g., "f32", "bf16")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::F16 => "f16",
            Self::BF16 => "bf16",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
