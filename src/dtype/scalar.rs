//! Scalar trait for mapping Rust float types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};
use num_traits::Float;
use std::fmt::Debug;

/// Trait for types the scalar operators and combinators work over
///
/// This trait connects Rust's float types to torchlet's dtype tags.
/// It's implemented for `f64` and `f32`, and for `half::f16` and
/// `half::bf16` with the `f16` feature.
///
/// # Bounds
/// - `Float` - `exp`, `ln`, `abs`, comparisons and the usual arithmetic (num-traits)
/// - `Pod + Zeroable` - Safe memory transmutation for the tensor layers (bytemuck)
/// - `Debug + Send + Sync + 'static` - Basic trait requirements
pub trait Scalar: Float + Pod + Zeroable + Debug + Send + Sync + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Widen to f64, for diagnostics and error payloads
    fn as_f64(self) -> f64;

    /// Convert from f64 to this type, rounding to nearest
    fn from_f64(v: f64) -> Self;
}

impl Scalar for f64 {
    const DTYPE: DType = DType::F64;

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

impl Scalar for f32 {
    const DTYPE: DType = DType::F32;

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

#[cfg(feature = "f16")]
impl Scalar for half::f16 {
    const DTYPE: DType = DType::F16;

    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64()
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        half::f16::from_f64(v)
    }
}

#[cfg(feature = "f16")]
impl Scalar for half::bf16 {
    const DTYPE: DType = DType::BF16;

    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64()
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        half::bf16::from_f64(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_tags() {
        assert_eq!(<f64 as Scalar>::DTYPE, DType::F64);
        assert_eq!(<f32 as Scalar>::DTYPE, DType::F32);
    }

    #[test]
    fn test_f32_round_trip_through_f64() {
        let v = <f32 as Scalar>::from_f64(0.1);
        assert!((v.as_f64() - 0.1).abs() < 1e-7);
    }

    #[cfg(feature = "f16")]
    #[test]
    fn test_half_conversions() {
        let h = <half::f16 as Scalar>::from_f64(1.5);
        assert_eq!(h.as_f64(), 1.5);
        assert_eq!(<half::bf16 as Scalar>::DTYPE, DType::BF16);
    }
}
