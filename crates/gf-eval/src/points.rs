//! Point-set normalization and grid-shaped auxiliaries.

use gf_core::{Dim, PointSet, Real};
use ndarray::{ArrayD, IxDyn};

/// Evaluation axes as handed to the spline evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPoints {
    axes: Vec<Vec<Real>>,
    zero_injected: bool,
}

impl NormalizedPoints {
    /// Canonicalize `points` into per-dimension axes, prepending a zero
    /// molality when `needs_zero` is set and the molality axis starts above 0.
    pub fn new(points: &PointSet, needs_zero: bool) -> Self {
        let mut axes = points.to_axes();
        let zero_injected = needs_zero
            && match axes.get_mut(Dim::M.index()) {
                Some(m) if m.first().is_some_and(|&m0| m0 > 0.0) => {
                    m.insert(0, 0.0);
                    true
                }
                _ => false,
            };
        Self { axes, zero_injected }
    }

    pub fn axes(&self) -> &[Vec<Real>] {
        &self.axes
    }

    pub fn zero_injected(&self) -> bool {
        self.zero_injected
    }

    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(Vec::len).collect()
    }
}

/// `ij`-indexed mesh grid: one array per dimension, each shaped like the
/// full tensor product of `axes`.
pub fn mesh_grid(axes: &[Vec<Real>]) -> Vec<ArrayD<Real>> {
    let shape: Vec<usize> = axes.iter().map(Vec::len).collect();
    axes.iter()
        .enumerate()
        .map(|(d, axis)| ArrayD::from_shape_fn(IxDyn(&shape), |idx| axis[idx[d]]))
        .collect()
}

/// Molality-to-mass conversion factor `1 + MWu * m` over the grid.
pub fn conversion_factor(axes: &[Vec<Real>], mw_solute: Real) -> ArrayD<Real> {
    let shape: Vec<usize> = axes.iter().map(Vec::len).collect();
    let m = Dim::M.index();
    ArrayD::from_shape_fn(IxDyn(&shape), |idx| match axes.get(m) {
        Some(molality) => 1.0 + mw_solute * molality[idx[m]],
        None => 1.0,
    })
}
