//! gf-spline: B-spline descriptors and evaluation for gibbsflow.
//!
//! Provides:
//! - `BSpline`: validated tensor-product B-spline descriptor (knots, order, coefficients)
//! - `GibbsSpline`: a Gibbs energy spline with molecular weights and ion count
//! - `SplineEvaluator` trait isolating the numerical evaluation routine
//! - `TensorBSplineEvaluator`: reference evaluator (de Boor basis derivatives)
//!
//! # Example
//!
//! ```
//! use gf_spline::{BSpline, SplineEvaluator, TensorBSplineEvaluator};
//! use ndarray::{ArrayD, IxDyn};
//!
//! // Linear in P and T: G(P, T) = P + T on [0, 1] x [0, 1].
//! let knots = vec![vec![0.0, 0.0, 1.0, 1.0], vec![0.0, 0.0, 1.0, 1.0]];
//! let coefs = ArrayD::from_shape_vec(IxDyn(&[2, 2]), vec![0.0, 1.0, 1.0, 2.0]).unwrap();
//! let spline = BSpline::new(knots, vec![2, 2], coefs).unwrap();
//!
//! let values = TensorBSplineEvaluator
//!     .evaluate(&spline, &[vec![0.5], vec![0.25]], &[0, 0])
//!     .unwrap();
//! assert!((values[[0, 0]] - 0.75).abs() < 1e-12);
//! ```

pub mod basis;
pub mod bspline;
pub mod error;
pub mod evaluator;
pub mod gibbs;

pub use bspline::BSpline;
pub use error::{SplineError, SplineResult};
pub use evaluator::{SplineEvaluator, TensorBSplineEvaluator};
pub use gibbs::GibbsSpline;
