#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use gf_core::Real;
use gf_eval::{EvalOptions, GibbsEvaluator};
use gf_spline::{BSpline, SplineEvaluator, SplineResult, TensorBSplineEvaluator};
use gf_vars::Registry;
use ndarray::{ArrayD, IxDyn};

/// Reference evaluator that counts its calls.
#[derive(Debug, Default)]
pub struct CountingEvaluator {
    inner: TensorBSplineEvaluator,
    calls: AtomicUsize,
}

impl CountingEvaluator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SplineEvaluator for CountingEvaluator {
    fn name(&self) -> &str {
        "counting"
    }

    fn evaluate(&self, spline: &BSpline, axes: &[Vec<Real>], orders: &[usize]) -> SplineResult<ArrayD<Real>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.evaluate(spline, axes, orders)
    }
}

pub fn counting_engine(options: EvalOptions) -> GibbsEvaluator<CountingEvaluator> {
    GibbsEvaluator::new(Registry::standard(), CountingEvaluator::default(), options)
}

/// Clamped cubic knots on `[lo, hi]` with one interior knot.
fn cubic_knots(lo: Real, hi: Real) -> Vec<Real> {
    let mid = 0.5 * (lo + hi);
    vec![lo, lo, lo, lo, mid, hi, hi, hi, hi]
}

/// Smooth P-T surface over P in [0, 3000] MPa and T in [0, 400] K.
pub fn pure_spline() -> BSpline {
    let coefs = ArrayD::from_shape_fn(IxDyn(&[5, 5]), |idx| {
        let (i, j) = (idx[0] as Real, idx[1] as Real);
        1.0e6 * i - 2.0e3 * j * j + 50.0 * i * j - 10.0 * i * i
    });
    BSpline::new(vec![cubic_knots(0.0, 3000.0), cubic_knots(0.0, 400.0)], vec![4, 4], coefs).unwrap()
}

/// Smooth P-T-m surface with molality knots starting at `m_lo`.
pub fn solution_spline(m_lo: Real) -> BSpline {
    let coefs = ArrayD::from_shape_fn(IxDyn(&[5, 5, 5]), |idx| {
        let (i, j, k) = (idx[0] as Real, idx[1] as Real, idx[2] as Real);
        1.0e5 * i - 2.0e3 * j * j + 50.0 * i * j + 300.0 * k - 20.0 * k * k + 5.0 * j * k
    });
    BSpline::new(
        vec![cubic_knots(0.0, 100.0), cubic_knots(250.0, 400.0), cubic_knots(m_lo, 6.0)],
        vec![4, 4, 4],
        coefs,
    )
    .unwrap()
}
