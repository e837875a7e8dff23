//! Dependency-ordered evaluation of a closure.
//!
//! Each pass selects every pending variable whose dependencies are complete
//! and computes the batch, optionally on the rayon pool. A pass that selects
//! nothing while work remains means the closure cannot be finished.

use gf_core::{Real, Timer};
use gf_spline::BSpline;
use gf_vars::{CalcArgs, GibbsDerivatives, Resource, VarDescriptor, VarError, VarValues};
use ndarray::ArrayD;
use rayon::prelude::*;
use tracing::debug;

use crate::config::Parameters;
use crate::error::{EvalError, EvalResult};

/// Shared, read-only resources of one run.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    pub spline: &'a BSpline,
    /// Normalized evaluation axes.
    pub axes: &'a [Vec<Real>],
    pub derivs: &'a GibbsDerivatives,
    pub grid: Option<&'a [ArrayD<Real>]>,
    pub conversion: Option<&'a ArrayD<Real>>,
    pub params: &'a Parameters,
}

impl<'a> EvalContext<'a> {
    /// Arguments for `var` holding exactly the resources it declares.
    pub fn args_for(&self, var: &VarDescriptor, prior: &'a VarValues) -> CalcArgs<'a> {
        let wants = |r: Resource| var.requires(r);
        CalcArgs {
            var: var.name,
            derivs: wants(Resource::Derivatives).then_some(self.derivs),
            grid: self.grid.filter(|_| wants(Resource::Grid)),
            mw_solvent: self.params.solvent_weight().filter(|_| wants(Resource::MwSolvent)),
            mw_solute: self.params.solute_weight().filter(|_| wants(Resource::MwSolute)),
            ion_count: self.params.ions().filter(|_| wants(Resource::IonCount)),
            prior: wants(Resource::PriorValues).then_some(prior),
            spline: wants(Resource::Spline).then_some(self.spline),
            ptm: wants(Resource::PointSet).then_some(self.axes),
            conversion: self.conversion.filter(|_| wants(Resource::Conversion)),
        }
    }
}

/// Compute every variable of `closure` exactly once.
pub fn run(closure: &[&VarDescriptor], ctx: &EvalContext<'_>, parallel: bool) -> EvalResult<VarValues> {
    let mut values = VarValues::with_capacity(closure.len());
    let mut pending: Vec<&VarDescriptor> = closure.to_vec();

    while !pending.is_empty() {
        let (ready, blocked): (Vec<&VarDescriptor>, Vec<&VarDescriptor>) = pending
            .into_iter()
            .partition(|v| v.deps.iter().all(|d| values.contains(d)));
        if ready.is_empty() {
            return Err(EvalError::DependencyCycle {
                pending: blocked.iter().map(|v| v.name).collect(),
            });
        }

        let computed: Vec<(&'static str, Result<ArrayD<Real>, VarError>)> = if parallel && ready.len() > 1 {
            ready.par_iter().map(|v| (v.name, compute(v, ctx, &values))).collect()
        } else {
            ready.iter().map(|v| (v.name, compute(v, ctx, &values))).collect()
        };
        for (variable, result) in computed {
            let array = result.map_err(|source| EvalError::Calc { variable, source })?;
            values.insert(variable, array)?;
        }
        pending = blocked;
    }
    Ok(values)
}

fn compute(var: &VarDescriptor, ctx: &EvalContext<'_>, prior: &VarValues) -> Result<ArrayD<Real>, VarError> {
    let timer = Timer::start(var.name);
    let args = ctx.args_for(var, prior);
    let out = (var.calc)(&args)?;
    debug!(var = var.name, seconds = timer.elapsed_seconds(), "computed variable");
    Ok(out)
}
