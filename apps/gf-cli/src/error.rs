use std::path::PathBuf;

use gf_eval::EvalError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid spline file {path}: {source}")]
    SplineFile {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid options file {path}: {source}")]
    OptionsFile {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid points file {path}: {source}")]
    PointsFile {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Missing {0} axis: pass it or give a points file")]
    MissingAxis(&'static str),

    #[error("Invalid range '{text}': {what}")]
    Range { text: String, what: &'static str },

    #[error("Evaluation failed: {0}")]
    Eval(#[from] EvalError),
}

pub type CliResult<T> = Result<T, CliError>;
