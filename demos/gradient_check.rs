//! Gradient check and a one-neuron logistic fit
//!
//! This demo compares every backward form against a central finite
//! difference, then uses the combinators to fit `p = sigmoid(w·x + b)` to a
//! tiny separable dataset with plain gradient descent.
//!
//! Run with:
//! ```sh
//! RUST_LOG=debug cargo run --example gradient_check
//! ```

use torchlet::prelude::*;
use tracing_subscriber::EnvFilter;

fn central_difference(f: impl Fn(f64) -> f64, x: f64) -> f64 {
    const H: f64 = 1e-6;
    (f(x + H) - f(x - H)) / (2.0 * H)
}

fn main() -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("info"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // -----------------------------------------------------------------------
    // 1. Backward forms against finite differences
    // -----------------------------------------------------------------------
    let tol = Tolerance::new(1e-4, 1e-7)?;
    let forward = |op: UnaryOp| move |x: f64| op.apply(x).unwrap_or(f64::NAN);

    for back in [
        BackwardOp::Log,
        BackwardOp::Inv,
        BackwardOp::Relu,
        BackwardOp::Sigmoid,
        BackwardOp::Exp,
    ] {
        for x in [0.25, 1.0, 2.5] {
            let analytic = back.backward(x, 1.0)?;
            let numeric = central_difference(forward(back.forward()), x);
            let ok = is_close_with(analytic, numeric, tol);
            println!(
                "{:<13} x={x:<5} analytic={analytic:>12.6} numeric={numeric:>12.6} {}",
                back.name(),
                if ok { "ok" } else { "MISMATCH" }
            );
        }
    }

    // Domain errors surface unchanged; with RUST_LOG=debug they are also traced
    if let Err(e) = log_back(0.0f64, 1.0) {
        println!("log_back(0, 1): {e}");
    }

    // -----------------------------------------------------------------------
    // 2. Logistic fit with the combinators
    // -----------------------------------------------------------------------
    let xs = [-2.0, -1.0, -0.5, 0.5, 1.0, 2.0];
    let ys = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
    let n = xs.len() as f64;
    let (mut w, mut b) = (0.0f64, 0.0f64);
    let lr = 0.5;

    // dL/dp for binary cross-entropy is (p - y) / (p (1 - p)); folding that
    // through sigmoid_back leaves p - y
    let dloss = |p: f64, y: f64| (p - y) / (p * (1.0 - p));
    let bce = |p: f64, y: f64| y * log(p) + (1.0 - y) * log(1.0 - p);

    for step in 0..200 {
        let affine = |x: f64| add(mul(w, x), b);
        let logits: Vec<f64> = map(affine)(xs).collect();
        let probs: Vec<f64> = map(sigmoid)(logits.iter().copied()).collect();

        let upstream: Vec<f64> = zip_combine(dloss)(probs.iter().copied(), ys).collect();
        let dlogits: Vec<f64> = zip_combine(sigmoid_back)(logits, upstream).collect();

        let dw_terms = zip_combine(mul)(dlogits.iter().copied(), xs);
        let dw = sum_list(dw_terms) / n;
        let db = sum_list(dlogits.iter().copied()) / n;
        w -= lr * dw;
        b -= lr * db;

        if step % 50 == 0 {
            let loss = -sum_list(zip_combine(bce)(probs, ys)) / n;
            println!("step {step:>3}: loss={loss:.4} w={w:.3} b={b:.3}");
        }
    }

    let hit = |x: f64, y: f64| eq(lt(0.5, sigmoid(w * x + b)), y);
    let accuracy = sum_list(zip_combine(hit)(xs, ys)) / n;
    println!("final w={w:.3} b={b:.3} accuracy={accuracy:.2}");

    Ok(())
}
