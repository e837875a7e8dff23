//! Evaluation point sets.

use crate::dims::Dim;
use crate::error::{CoreError, CoreResult};
use crate::numeric::Real;

/// Points at which a Gibbs spline is evaluated, as supplied by the caller.
///
/// A grid is one ascending sequence per spline dimension; outputs are shaped
/// to the full tensor product of those sequences. A single point is one
/// scalar per dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointSet {
    Grid(Vec<Vec<Real>>),
    Point(Vec<Real>),
}

impl PointSet {
    /// Grid over pressure and temperature.
    pub fn grid_pt(p: Vec<Real>, t: Vec<Real>) -> Self {
        Self::Grid(vec![p, t])
    }

    /// Grid over pressure, temperature and molality.
    pub fn grid_ptm(p: Vec<Real>, t: Vec<Real>, m: Vec<Real>) -> Self {
        Self::Grid(vec![p, t, m])
    }

    pub fn dim_count(&self) -> usize {
        match self {
            PointSet::Grid(axes) => axes.len(),
            PointSet::Point(values) => values.len(),
        }
    }

    pub fn is_single_point(&self) -> bool {
        matches!(self, PointSet::Point(_))
    }

    /// Number of values along axis `index` (1 for a single point).
    pub fn axis_len(&self, index: usize) -> usize {
        match self {
            PointSet::Grid(axes) => axes.get(index).map_or(0, Vec::len),
            PointSet::Point(values) => usize::from(index < values.len()),
        }
    }

    /// Number of values along every axis.
    pub fn shape(&self) -> Vec<usize> {
        (0..self.dim_count()).map(|i| self.axis_len(i)).collect()
    }

    /// Total number of points in the tensor-product grid.
    pub fn point_count(&self) -> usize {
        self.shape().iter().product()
    }

    /// Smallest and largest value along axis `index`.
    ///
    /// Grid axes are ascending, so these are the first and last entries.
    pub fn extrema(&self, index: usize) -> Option<(Real, Real)> {
        match self {
            PointSet::Grid(axes) => {
                let axis = axes.get(index)?;
                Some((*axis.first()?, *axis.last()?))
            }
            PointSet::Point(values) => values.get(index).map(|&v| (v, v)),
        }
    }

    /// First value along axis `index`.
    pub fn first(&self, index: usize) -> Option<Real> {
        self.extrema(index).map(|(lo, _)| lo)
    }

    /// Per-dimension sequences; a single point becomes one-element sequences.
    pub fn to_axes(&self) -> Vec<Vec<Real>> {
        match self {
            PointSet::Grid(axes) => axes.clone(),
            PointSet::Point(values) => values.iter().map(|&v| vec![v]).collect(),
        }
    }

    /// Check dimension count, finiteness and strict ordering of every axis.
    pub fn validate(&self, expected_dims: usize) -> CoreResult<()> {
        if self.dim_count() != expected_dims {
            return Err(CoreError::DimensionCount {
                expected: expected_dims,
                found: self.dim_count(),
            });
        }
        for (i, axis) in self.to_axes().iter().enumerate() {
            let dim = Dim::from_index(i).map_or("?", Dim::label);
            if axis.is_empty() {
                return Err(CoreError::EmptyAxis { dim });
            }
            if let Some(&value) = axis.iter().find(|v| !v.is_finite()) {
                return Err(CoreError::NonFinite { dim, value });
            }
            if let Some(index) = axis.windows(2).position(|w| w[1] <= w[0]) {
                return Err(CoreError::NotAscending {
                    dim,
                    index: index + 1,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point_axes() {
        let ptm = PointSet::Point(vec![0.1, 300.0, 2.0]);
        assert_eq!(ptm.to_axes(), vec![vec![0.1], vec![300.0], vec![2.0]]);
        assert_eq!(ptm.shape(), vec![1, 1, 1]);
        assert_eq!(ptm.extrema(2), Some((2.0, 2.0)));
    }

    #[test]
    fn grid_shape_and_extrema() {
        let ptm = PointSet::grid_pt(vec![0.0, 10.0, 20.0], vec![250.0, 300.0]);
        assert_eq!(ptm.shape(), vec![3, 2]);
        assert_eq!(ptm.point_count(), 6);
        assert_eq!(ptm.extrema(0), Some((0.0, 20.0)));
        assert_eq!(ptm.first(1), Some(250.0));
        assert_eq!(ptm.extrema(2), None);
    }

    #[test]
    fn validate_rejects_bad_axes() {
        let wrong_dims = PointSet::grid_pt(vec![0.0], vec![300.0]);
        assert!(matches!(
            wrong_dims.validate(3),
            Err(CoreError::DimensionCount { expected: 3, found: 2 })
        ));

        let unsorted = PointSet::grid_pt(vec![0.0, 5.0, 5.0], vec![300.0]);
        assert!(matches!(
            unsorted.validate(2),
            Err(CoreError::NotAscending { dim: "P", index: 2 })
        ));

        let empty = PointSet::grid_pt(vec![0.0], vec![]);
        assert!(matches!(empty.validate(2), Err(CoreError::EmptyAxis { dim: "T" })));

        let nan = PointSet::Point(vec![0.0, f64::NAN]);
        assert!(matches!(nan.validate(2), Err(CoreError::NonFinite { dim: "T", .. })));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn point_count_is_product_of_axes(lens in prop::collection::vec(1usize..6, 2..=3)) {
            let axes: Vec<Vec<Real>> = lens
                .iter()
                .map(|&n| (0..n).map(|i| i as Real).collect())
                .collect();
            let ptm = PointSet::Grid(axes);
            prop_assert!(ptm.validate(lens.len()).is_ok());
            prop_assert_eq!(ptm.point_count(), lens.iter().product::<usize>());
        }
    }
}
