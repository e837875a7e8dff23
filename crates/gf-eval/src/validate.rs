//! Checks run before any derivative is computed.
//!
//! Provides:
//! - capability checks of the spline against the closure
//! - point-set and parameter checks
//! - knot-range (extrapolation) and projected-memory advisories

use std::fmt;

use gf_core::{CoreError, Dim, PointSet, Real, Tolerances, nearly_equal};
use gf_spline::BSpline;
use gf_vars::{Resource, VarDescriptor};
use tracing::warn;

use crate::config::{EvalOptions, ExtrapolationPolicy, Parameters};
use crate::error::{EvalError, EvalResult};

/// Non-fatal finding of a run, logged and kept on the result.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalWarning {
    Extrapolation {
        dim: Dim,
        lo: Real,
        hi: Real,
        knot_lo: Real,
        knot_hi: Real,
    },
    Memory {
        projected_bytes: u64,
        system_bytes: u64,
        factor: Real,
    },
}

impl fmt::Display for EvalWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalWarning::Extrapolation {
                dim,
                lo,
                hi,
                knot_lo,
                knot_hi,
            } => write!(
                f,
                "extrapolating {dim}: points span [{lo}, {hi}], knots span [{knot_lo}, {knot_hi}]"
            ),
            EvalWarning::Memory {
                projected_bytes,
                system_bytes,
                factor,
            } => write!(
                f,
                "projected output of {projected_bytes} bytes exceeds {factor} x system memory ({system_bytes} bytes)"
            ),
        }
    }
}

/// Run every pre-evaluation check, returning the advisories raised.
pub fn validate(
    closure: &[&VarDescriptor],
    spline: &BSpline,
    points: &PointSet,
    params: &Parameters,
    options: &EvalOptions,
) -> EvalResult<Vec<EvalWarning>> {
    check_capability(closure, spline)?;
    check_points(spline, points)?;
    check_parameters(closure, params)?;

    let mut warnings = check_range(spline, points, options.extrapolation)?;
    if let Some((projected_bytes, system_bytes)) = options.memory.exceeded(closure.len(), points.point_count()) {
        let warning = EvalWarning::Memory {
            projected_bytes,
            system_bytes,
            factor: options.memory.warning_factor,
        };
        warn!("{warning}");
        warnings.push(warning);
    }
    Ok(warnings)
}

fn blocked(closure: &[&VarDescriptor], pred: impl Fn(&VarDescriptor) -> bool) -> Vec<&'static str> {
    closure.iter().filter(|v| pred(**v)).map(|v| v.name).collect()
}

fn check_capability(closure: &[&VarDescriptor], spline: &BSpline) -> EvalResult<()> {
    let dims = spline.dim_count();
    if dims > Dim::M.index() {
        let (m_min, _) = spline.knot_range(Dim::M.index());
        let variables = blocked(closure, |v| v.requires(Resource::ZeroMolality));
        if m_min != 0.0 && !variables.is_empty() {
            return Err(EvalError::IncompatibleSpline { m_min, variables });
        }
    } else {
        let variables = blocked(closure, VarDescriptor::requires_molality);
        if !variables.is_empty() {
            return Err(EvalError::DimensionMismatch {
                what: format!("{} need molality but the spline has {dims} dimensions", variables.join(", ")),
                variables,
            });
        }
    }
    Ok(())
}

fn check_points(spline: &BSpline, points: &PointSet) -> EvalResult<()> {
    let dims = spline.dim_count();
    if points.dim_count() != dims {
        return Err(EvalError::DimensionMismatch {
            what: format!("point set has {} dimensions, spline has {dims}", points.dim_count()),
            variables: Vec::new(),
        });
    }
    points.validate(dims)?;
    match points.extrema(Dim::M.index()) {
        Some((m_min, _)) if m_min < 0.0 => Err(CoreError::Negative {
            dim: Dim::M.label(),
            value: m_min,
        }
        .into()),
        _ => Ok(()),
    }
}

fn check_parameters(closure: &[&VarDescriptor], params: &Parameters) -> EvalResult<()> {
    let checks: [(&'static str, bool, fn(&VarDescriptor) -> bool); 3] = [
        ("solvent molecular weight", params.solvent_weight().is_some(), |v| {
            v.requires(Resource::MwSolvent)
        }),
        (
            "solute molecular weight",
            params.solute_weight().is_some(),
            VarDescriptor::requires_solute_weight,
        ),
        ("ion count", params.ions().is_some(), |v| v.requires(Resource::IonCount)),
    ];
    for (parameter, supplied, needs) in checks {
        if supplied {
            continue;
        }
        let variables = blocked(closure, needs);
        if !variables.is_empty() {
            return Err(EvalError::MissingParameter { parameter, variables });
        }
    }
    Ok(())
}

fn check_range(spline: &BSpline, points: &PointSet, policy: ExtrapolationPolicy) -> EvalResult<Vec<EvalWarning>> {
    let tol = Tolerances::default();
    let mut warnings = Vec::new();
    for &dim in Dim::first(spline.dim_count()) {
        let Some((lo, hi)) = points.extrema(dim.index()) else {
            continue;
        };
        let (knot_lo, knot_hi) = spline.knot_range(dim.index());
        // bounds that miss a knot by rounding error (stepped grids) count as inside
        let lo_inside = lo >= knot_lo || nearly_equal(lo, knot_lo, tol);
        let hi_inside = hi <= knot_hi || nearly_equal(hi, knot_hi, tol);
        if lo_inside && hi_inside {
            continue;
        }
        match policy {
            ExtrapolationPolicy::Fail => {
                return Err(EvalError::Extrapolation {
                    dim,
                    lo,
                    hi,
                    knot_lo,
                    knot_hi,
                });
            }
            ExtrapolationPolicy::Warn => {
                let warning = EvalWarning::Extrapolation {
                    dim,
                    lo,
                    hi,
                    knot_lo,
                    knot_hi,
                };
                warn!("{warning}");
                warnings.push(warning);
            }
        }
    }
    Ok(warnings)
}
