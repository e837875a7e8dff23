//! gf-core: shared foundation for gibbsflow.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - dims (fixed P/T/M axis order of Gibbs splines)
//! - points (caller-supplied evaluation point sets)
//! - timing (lightweight stage timers)
//! - error (shared error types)

pub mod dims;
pub mod error;
pub mod numeric;
pub mod points;
pub mod timing;

// Re-exports for downstream crates
pub use dims::Dim;
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use points::PointSet;
pub use timing::Timer;
