//! Spline errors.

use thiserror::Error;

/// Result type for spline operations.
pub type SplineResult<T> = Result<T, SplineError>;

/// Errors raised while building or evaluating splines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Knots, order and coefficient array disagree on the dimension count.
    #[error("Inconsistent spline dimensions: {what}")]
    Inconsistent { what: String },

    /// Coefficient count along a dimension doesn't match knots and order.
    #[error(
        "Dimension {dim}: {knots} knots do not match {number} coefficients of order {order}"
    )]
    KnotCount {
        dim: usize,
        knots: usize,
        number: usize,
        order: usize,
    },

    /// Knot sequence is decreasing, non-finite or has no usable interval.
    #[error("Dimension {dim}: invalid knot sequence ({what})")]
    InvalidKnots { dim: usize, what: &'static str },

    #[error("Dimension {dim}: order must be at least 1")]
    InvalidOrder { dim: usize },

    /// Gibbs splines are over (P, T) or (P, T, M).
    #[error("Gibbs splines must have 2 or 3 dimensions, found {found}")]
    UnsupportedDimensions { found: usize },

    #[error("Molecular weight list has {found} entries; multi-solute solutions are not supported")]
    MultiSolute { found: usize },

    #[error("Molecular weight {index} is not a finite number")]
    InvalidMolecularWeight { index: usize },

    #[error("A solution spline needs a positive ion count")]
    MissingIonCount,

    /// Evaluation request doesn't fit the spline.
    #[error("Evaluation mismatch: {what}")]
    EvalMismatch { what: String },
}
