//! Common test utilities
#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded generator so property sweeps are reproducible
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x7041_5d1e)
}

/// Assert two f64 values are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_close_f64(a: f64, b: f64, rtol: f64, atol: f64, msg: &str) {
    let diff = (a - b).abs();
    let tol = atol + rtol * b.abs();
    assert!(
        diff <= tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        diff,
        tol
    );
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Central finite difference of `f` at `x`
pub fn central_difference(f: impl Fn(f64) -> f64, x: f64, h: f64) -> f64 {
    (f(x + h) - f(x - h)) / (2.0 * h)
}
