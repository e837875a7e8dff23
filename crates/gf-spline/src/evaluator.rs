//! Spline evaluation trait and reference tensor-product evaluator.

use gf_core::Real;
use ndarray::{Array2, ArrayD, Axis, IxDyn};

use crate::basis::basis_matrix;
use crate::bspline::BSpline;
use crate::error::{SplineError, SplineResult};

/// Trait for multivariate spline evaluation routines.
///
/// Implementations must be thread-safe (Send + Sync) so one evaluator can be
/// shared by every run of the engine.
pub trait SplineEvaluator: Send + Sync {
    /// Evaluator name (for logging).
    fn name(&self) -> &str;

    /// Evaluate a partial derivative of `spline` on the grid spanned by `axes`.
    ///
    /// `axes[d]` holds the ascending sample values along dimension `d` and
    /// `orders[d]` the derivative order taken along it. The result is shaped
    /// `[axes[0].len(), axes[1].len(), ...]`.
    fn evaluate(&self, spline: &BSpline, axes: &[Vec<Real>], orders: &[usize]) -> SplineResult<ArrayD<Real>>;
}

/// Reference evaluator: one collocation matrix per dimension, contracted
/// against the coefficient tensor one axis at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TensorBSplineEvaluator;

impl SplineEvaluator for TensorBSplineEvaluator {
    fn name(&self) -> &str {
        "tensor-bspline"
    }

    fn evaluate(&self, spline: &BSpline, axes: &[Vec<Real>], orders: &[usize]) -> SplineResult<ArrayD<Real>> {
        let dims = spline.dim_count();
        if axes.len() != dims {
            return Err(SplineError::EvalMismatch {
                what: format!("{} point axes for a {dims}-dimensional spline", axes.len()),
            });
        }
        if orders.len() != dims {
            return Err(SplineError::EvalMismatch {
                what: format!("{} derivative orders for a {dims}-dimensional spline", orders.len()),
            });
        }

        let mut values = spline.coefs().clone();
        for (dim, (xs, &deriv)) in axes.iter().zip(orders).enumerate() {
            let basis = basis_matrix(spline.knots(dim), spline.order(dim), spline.number(dim), xs, deriv);
            values = contract_axis(&values, &basis, dim);
        }
        Ok(values)
    }
}

/// Replace axis `axis` of `values` (length = basis columns) by the basis rows.
fn contract_axis(values: &ArrayD<Real>, basis: &Array2<Real>, axis: usize) -> ArrayD<Real> {
    let mut shape = values.shape().to_vec();
    shape[axis] = basis.nrows();
    let mut out = ArrayD::zeros(IxDyn(&shape));
    // Lanes of both arrays walk the remaining axes in the same order.
    for (mut out_lane, in_lane) in out
        .lanes_mut(Axis(axis))
        .into_iter()
        .zip(values.lanes(Axis(axis)))
    {
        out_lane.assign(&basis.dot(&in_lane));
    }
    out
}
