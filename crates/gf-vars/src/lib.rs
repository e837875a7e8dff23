//! gf-vars: thermodynamic variable registry for gibbsflow.
//!
//! Provides:
//! - `Resource` / `Needs`: the capability flags a variable declares
//! - `DerivOrders` / `GibbsDerivatives`: spline derivative requests and their values
//! - `CalcArgs`: the resources handed to one variable's calculation
//! - `VarDescriptor` / `Registry`: variable metadata, validated to be acyclic
//! - `Tdv`: the standard catalog of Gibbs-energy derived variables
//!
//! # Example
//!
//! ```
//! use gf_vars::{Registry, Resource};
//!
//! let registry = Registry::standard();
//! let cp = registry.get("Cp").unwrap();
//! assert!(cp.requires(Resource::Grid));
//! assert!(registry.get("Kt").unwrap().deps.is_empty());
//! ```

pub mod args;
pub mod catalog;
pub mod derivs;
pub mod descriptor;
pub mod error;
pub mod needs;
pub mod registry;
pub mod values;

pub use args::CalcArgs;
pub use catalog::Tdv;
pub use derivs::{DerivOrders, GibbsDerivatives};
pub use descriptor::{CalcFn, VarDescriptor};
pub use error::{VarError, VarResult};
pub use needs::{Needs, Resource};
pub use registry::Registry;
pub use values::VarValues;
