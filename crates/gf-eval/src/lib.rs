//! gf-eval: dependency-driven evaluation of Gibbs energy splines.
//!
//! Provides:
//! - `expand`: closure of a variable request over the registry
//! - `validate`: capability, parameter, range and memory checks
//! - `points` / `derivs`: normalized axes, mesh grid and spline derivatives
//! - `schedule` / `reconcile`: batch evaluation and zero-molality stripping
//! - `GibbsEvaluator`: the pipeline, returning `ThermodynamicStates`
//!
//! # Example
//!
//! ```
//! use gf_core::PointSet;
//! use gf_eval::{GibbsEvaluator, Parameters};
//! use gf_spline::BSpline;
//! use ndarray::{ArrayD, IxDyn};
//!
//! // G = 1000 P - 5 T on [0, 10] MPa x [250, 350] K
//! let coefs = vec![-1250.0, -1750.0, 8750.0, 8250.0];
//! let spline = BSpline::new(
//!     vec![vec![0.0, 0.0, 10.0, 10.0], vec![250.0, 250.0, 350.0, 350.0]],
//!     vec![2, 2],
//!     ArrayD::from_shape_vec(IxDyn(&[2, 2]), coefs).unwrap(),
//! )
//! .unwrap();
//!
//! let points = PointSet::grid_pt(vec![1.0, 2.0, 3.0], vec![300.0, 320.0]);
//! let states = GibbsEvaluator::standard()
//!     .evaluate(&spline, &points, &["V", "S"], &Parameters::default())
//!     .unwrap();
//!
//! assert_eq!(states.added(), &["rho"]);
//! let v = states.get("V").unwrap();
//! assert_eq!(v.shape(), &[3, 2]);
//! assert!((v[[0, 0]] - 1e-3).abs() < 1e-12);
//! ```

pub mod config;
pub mod derivs;
pub mod engine;
pub mod error;
pub mod expand;
pub mod points;
pub mod reconcile;
pub mod schedule;
pub mod states;
pub mod validate;

pub use config::{EvalOptions, ExtrapolationPolicy, MemoryGuard, Parameters};
pub use engine::{GibbsEvaluator, eval_solution_gibbs};
pub use error::{EvalError, EvalResult};
pub use expand::Expansion;
pub use states::ThermodynamicStates;
pub use validate::EvalWarning;
