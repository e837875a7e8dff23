//! Variable registry and calculation errors.

use thiserror::Error;

use crate::derivs::DerivOrders;
use crate::needs::Resource;

/// Result type for variable operations.
pub type VarResult<T> = Result<T, VarError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VarError {
    /// A calculation asked for a resource its descriptor did not declare.
    #[error("Variable {var} used undeclared resource {resource}")]
    Undeclared { var: &'static str, resource: Resource },

    #[error("Derivative {deriv} was not computed")]
    MissingDerivative { deriv: DerivOrders },

    #[error("Variable {name} has not been computed")]
    MissingValue { name: String },

    #[error("Variable {name} was already computed")]
    AlreadyComputed { name: &'static str },

    #[error("Variable {name} is registered twice")]
    Duplicate { name: &'static str },

    #[error("Variable {var} depends on unknown variable {dep}")]
    UnknownDependency { var: &'static str, dep: &'static str },

    #[error("Variable {var} depends on itself")]
    SelfDependency { var: &'static str },

    #[error("Dependency cycle through variable {var}")]
    Cycle { var: &'static str },

    #[error("Variable {var}: {what}")]
    Shape { var: &'static str, what: &'static str },
}
