use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite value in dimension {dim}: {value}")]
    NonFinite { dim: &'static str, value: f64 },

    #[error("Dimension {dim} has no evaluation points")]
    EmptyAxis { dim: &'static str },

    #[error("Dimension {dim} is not strictly ascending at index {index}")]
    NotAscending { dim: &'static str, index: usize },

    #[error("Dimension {dim} has negative value {value}")]
    Negative { dim: &'static str, value: f64 },

    #[error("Point set has {found} dimensions, expected {expected}")]
    DimensionCount { expected: usize, found: usize },
}
