//! Evaluation entry point.

use gf_core::{PointSet, Timer};
use gf_spline::{BSpline, GibbsSpline, SplineError, SplineEvaluator, TensorBSplineEvaluator};
use gf_vars::{Needs, Registry, Resource, VarDescriptor};
use tracing::info;

use crate::config::{EvalOptions, Parameters};
use crate::derivs::{compute_derivatives, required_derivatives};
use crate::error::EvalResult;
use crate::expand::expand;
use crate::points::{NormalizedPoints, conversion_factor, mesh_grid};
use crate::reconcile::strip_zero_molality;
use crate::schedule::{self, EvalContext};
use crate::states::ThermodynamicStates;
use crate::validate::validate;

/// Evaluates registry variables from a Gibbs energy spline.
#[derive(Debug, Clone)]
pub struct GibbsEvaluator<E = TensorBSplineEvaluator> {
    registry: Registry,
    evaluator: E,
    options: EvalOptions,
}

impl GibbsEvaluator {
    /// Standard catalog with the reference spline evaluator.
    pub fn standard() -> Self {
        Self::new(Registry::standard(), TensorBSplineEvaluator, EvalOptions::default())
    }
}

impl<E: SplineEvaluator> GibbsEvaluator<E> {
    pub fn new(registry: Registry, evaluator: E, options: EvalOptions) -> Self {
        Self {
            registry,
            evaluator,
            options,
        }
    }

    pub fn with_options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    /// Evaluate `requested` (all defaults if empty) at `points`.
    ///
    /// Nothing is computed unless every check passes; on error no partial
    /// result is returned.
    pub fn evaluate(
        &self,
        spline: &BSpline,
        points: &PointSet,
        requested: &[&str],
        params: &Parameters,
    ) -> EvalResult<ThermodynamicStates> {
        let timer = Timer::start("evaluate");
        let dims = spline.dim_count();
        if !(2..=3).contains(&dims) {
            return Err(SplineError::UnsupportedDimensions { found: dims }.into());
        }

        let expansion = expand(&self.registry, requested, dims)?;
        let closure: Vec<&VarDescriptor> = expansion
            .closure
            .iter()
            .filter_map(|name| self.registry.get(name))
            .collect();
        let warnings = validate(&closure, spline, points, params, &self.options)?;

        let needs: Needs = closure.iter().fold(Needs::NONE, |acc, v| acc.union(v.needs));
        let normalized = NormalizedPoints::new(points, needs.contains(Resource::ZeroMolality));
        let axes = normalized.axes();

        let derivs = compute_derivatives(&self.evaluator, spline, axes, &required_derivatives(&closure))?;
        let grid = needs.contains(Resource::Grid).then(|| mesh_grid(axes));
        let conversion = match params.solute_weight() {
            Some(mw_solute) if needs.contains(Resource::Conversion) => Some(conversion_factor(axes, mw_solute)),
            _ => None,
        };

        let ctx = EvalContext {
            spline,
            axes,
            derivs: &derivs,
            grid: grid.as_deref(),
            conversion: conversion.as_ref(),
            params,
        };
        let mut values = schedule::run(&closure, &ctx, self.options.parallel_batches)?;
        if normalized.zero_injected() {
            strip_zero_molality(&mut values);
        }

        let (_, seconds) = timer.stop();
        info!(
            variables = values.len(),
            derivatives = derivs.len(),
            points = points.point_count(),
            seconds,
            "evaluation complete"
        );
        Ok(ThermodynamicStates::new(points.clone(), values, expansion.added, warnings))
    }

    /// Evaluate with the molecular weights and ion count carried by `gibbs`.
    pub fn evaluate_gibbs(
        &self,
        gibbs: &GibbsSpline,
        points: &PointSet,
        requested: &[&str],
    ) -> EvalResult<ThermodynamicStates> {
        self.evaluate(gibbs.spline(), points, requested, &Parameters::from_spline(gibbs))
    }
}

/// Evaluate a pure-substance or single-solute Gibbs spline with the standard
/// catalog and default options.
pub fn eval_solution_gibbs(
    gibbs: &GibbsSpline,
    points: &PointSet,
    requested: &[&str],
) -> EvalResult<ThermodynamicStates> {
    GibbsEvaluator::standard().evaluate_gibbs(gibbs, points, requested)
}
