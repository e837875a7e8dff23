//! Tensor-product B-spline descriptor.

use gf_core::Real;
use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

use crate::error::{SplineError, SplineResult};

/// Validated tensor-product B-spline with scalar output.
///
/// Per dimension `d`: `knots[d].len() == coefs.shape()[d] + order[d]`, knots are
/// finite and non-decreasing, and at least one knot interval has positive width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBSpline", into = "RawBSpline")]
pub struct BSpline {
    knots: Vec<Vec<Real>>,
    order: Vec<usize>,
    coefs: ArrayD<Real>,
}

/// Unchecked wire form of [`BSpline`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawBSpline {
    knots: Vec<Vec<Real>>,
    order: Vec<usize>,
    coefs: ArrayD<Real>,
}

impl TryFrom<RawBSpline> for BSpline {
    type Error = SplineError;

    fn try_from(raw: RawBSpline) -> SplineResult<Self> {
        BSpline::new(raw.knots, raw.order, raw.coefs)
    }
}

impl From<BSpline> for RawBSpline {
    fn from(spline: BSpline) -> Self {
        RawBSpline {
            knots: spline.knots,
            order: spline.order,
            coefs: spline.coefs,
        }
    }
}

impl BSpline {
    /// Build a spline, checking knots, order and coefficients for consistency.
    pub fn new(knots: Vec<Vec<Real>>, order: Vec<usize>, coefs: ArrayD<Real>) -> SplineResult<Self> {
        validate(&knots, &order, &coefs)?;
        Ok(Self {
            knots,
            order,
            coefs,
        })
    }

    /// Number of independent variables.
    pub fn dim_count(&self) -> usize {
        self.order.len()
    }

    pub fn knots(&self, dim: usize) -> &[Real] {
        &self.knots[dim]
    }

    pub fn order(&self, dim: usize) -> usize {
        self.order[dim]
    }

    /// Number of coefficients along `dim`.
    pub fn number(&self, dim: usize) -> usize {
        self.coefs.shape()[dim]
    }

    pub fn coefs(&self) -> &ArrayD<Real> {
        &self.coefs
    }

    /// First and last knot along `dim`.
    pub fn knot_range(&self, dim: usize) -> (Real, Real) {
        let knots = &self.knots[dim];
        (knots[0], knots[knots.len() - 1])
    }
}

fn validate(knots: &[Vec<Real>], order: &[usize], coefs: &ArrayD<Real>) -> SplineResult<()> {
    if knots.len() != order.len() {
        return Err(SplineError::Inconsistent {
            what: format!(
                "{} knot sequences but {} orders",
                knots.len(),
                order.len()
            ),
        });
    }
    if coefs.ndim() != order.len() {
        return Err(SplineError::Inconsistent {
            what: format!(
                "coefficients have {} dimensions but {} orders were given",
                coefs.ndim(),
                order.len()
            ),
        });
    }
    if order.is_empty() {
        return Err(SplineError::Inconsistent {
            what: "spline has no dimensions".to_string(),
        });
    }

    for (dim, (seq, &k)) in knots.iter().zip(order).enumerate() {
        if k == 0 {
            return Err(SplineError::InvalidOrder { dim });
        }
        let number = coefs.shape()[dim];
        if seq.len() != number + k {
            return Err(SplineError::KnotCount {
                dim,
                knots: seq.len(),
                number,
                order: k,
            });
        }
        if seq.iter().any(|v| !v.is_finite()) {
            return Err(SplineError::InvalidKnots {
                dim,
                what: "non-finite knot",
            });
        }
        if seq.windows(2).any(|w| w[1] < w[0]) {
            return Err(SplineError::InvalidKnots {
                dim,
                what: "knots decrease",
            });
        }
        // The basis lives on [knots[k-1], knots[number]].
        if seq[number] <= seq[k - 1] {
            return Err(SplineError::InvalidKnots {
                dim,
                what: "no interval of positive width",
            });
        }
    }
    Ok(())
}
