//! Integration tests for the reduced-precision scalar types
//!
//! Run with `cargo test --features f16`.

#![cfg(feature = "f16")]

mod common;

use common::assert_close_f64;
use half::{bf16, f16};
use torchlet::ops::LOG_EPS;
use torchlet::prelude::*;

// ============================================================================
// Stability
// ============================================================================

#[test]
fn test_sigmoid_saturates_without_overflow() {
    assert_eq!(sigmoid(f16::from_f64(1000.0)), f16::ONE);
    assert_eq!(sigmoid(f16::from_f64(-1000.0)), f16::ZERO);
    assert_eq!(sigmoid(bf16::from_f64(1000.0)), bf16::ONE);
    assert_eq!(sigmoid(bf16::from_f64(-1000.0)), bf16::ZERO);
}

#[test]
fn test_log_zero_is_finite() {
    // LOG_EPS rounds differently in each format, so only the neighbourhood is fixed
    let h = log(f16::ZERO).to_f64();
    assert!(h.is_finite());
    assert_close_f64(h, LOG_EPS.ln(), 0.0, 0.05, "f16 log(0)");

    let b = log(bf16::ZERO).to_f64();
    assert!(b.is_finite());
    assert_close_f64(b, LOG_EPS.ln(), 0.0, 0.05, "bf16 log(0)");
}

// ============================================================================
// Domain Errors
// ============================================================================

#[test]
fn test_inv_zero_reports_half_dtype() {
    let err = inv(f16::ZERO).unwrap_err();
    assert_eq!(err, Error::domain("inv", DType::F16, 0.0, "division by zero"));

    let err = inv(bf16::ZERO).unwrap_err();
    assert_eq!(err, Error::domain("inv", DType::BF16, 0.0, "division by zero"));
}

// ============================================================================
// Combinators
// ============================================================================

#[test]
fn test_half_list_operations() {
    assert_eq!(sum_list([f16::ONE; 4]), f16::from_f64(4.0));
    assert_eq!(product_list([bf16::from_f64(2.0); 3]), bf16::from_f64(8.0));

    let xs = [f16::from_f64(1.0), f16::from_f64(2.0)];
    let ys = [3.0, 4.0, 5.0].map(f16::from_f64);
    let sums: Vec<f16> = add_lists(xs, ys).collect();
    assert_eq!(sums, [f16::from_f64(4.0), f16::from_f64(6.0)]);
}
