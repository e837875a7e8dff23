//! Error types for evaluation runs.

use gf_core::{CoreError, Dim, Real};
use gf_spline::SplineError;
use gf_vars::VarError;
use thiserror::Error;

/// Errors that stop an evaluation run.
///
/// Every variant except [`EvalError::Calc`], [`EvalError::DependencyCycle`]
/// and [`EvalError::Spline`] coming from the evaluator is raised before any
/// spline derivative is computed.
#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Unknown variable: {name}")]
    UnknownVariable { name: String },

    #[error(
        "Cannot compute {} with a spline whose molality knots start at {m_min} instead of 0",
        .variables.join(", ")
    )]
    IncompatibleSpline {
        m_min: Real,
        variables: Vec<&'static str>,
    },

    #[error("Dimension mismatch: {what}")]
    DimensionMismatch {
        what: String,
        variables: Vec<&'static str>,
    },

    #[error("Missing {parameter}, required by {}", .variables.join(", "))]
    MissingParameter {
        parameter: &'static str,
        variables: Vec<&'static str>,
    },

    #[error("Points {dim} in [{lo}, {hi}] extend beyond the knot range [{knot_lo}, {knot_hi}]")]
    Extrapolation {
        dim: Dim,
        lo: Real,
        hi: Real,
        knot_lo: Real,
        knot_hi: Real,
    },

    #[error("No variable can be computed; pending: {}", .pending.join(", "))]
    DependencyCycle { pending: Vec<&'static str> },

    #[error("Invalid point set: {0}")]
    InvalidPointSet(#[from] CoreError),

    #[error("Spline error: {0}")]
    Spline(#[from] SplineError),

    #[error("Registry error: {0}")]
    Registry(#[from] VarError),

    #[error("Failed to compute {variable}: {source}")]
    Calc {
        variable: &'static str,
        #[source]
        source: VarError,
    },
}

pub type EvalResult<T> = Result<T, EvalError>;
