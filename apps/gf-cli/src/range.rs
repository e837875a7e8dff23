//! `start:stop:step` axis ranges.

use gf_core::{Real, stepped_range};

use crate::error::{CliError, CliResult};

/// Parse `start:stop:step`, or a single value, into ascending axis values.
pub fn parse_range(text: &str) -> CliResult<Vec<Real>> {
    let err = |what| CliError::Range {
        text: text.to_string(),
        what,
    };
    let fields = text
        .split(':')
        .map(|f| f.trim().parse::<Real>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| err("expected numbers"))?;

    match fields.as_slice() {
        [value] => Ok(vec![*value]),
        [start, stop, step] => {
            if *step <= 0.0 {
                return Err(err("step must be positive"));
            }
            if stop < start {
                return Err(err("stop is below start"));
            }
            Ok(stepped_range(*start, *stop, *step))
        }
        _ => Err(err("expected start:stop:step or a single value")),
    }
}
