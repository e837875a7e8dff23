//! Result object of an evaluation run.

use gf_core::{PointSet, Real};
use gf_vars::VarValues;
use ndarray::ArrayD;

use crate::validate::EvalWarning;

/// Computed thermodynamic states on the caller's points.
///
/// Every array is shaped to the caller's grid (`[nP, nT]` or `[nP, nT, nM]`);
/// a single point gives one-element arrays.
#[derive(Debug, Clone)]
pub struct ThermodynamicStates {
    points: PointSet,
    values: VarValues,
    added: Vec<&'static str>,
    warnings: Vec<EvalWarning>,
}

impl ThermodynamicStates {
    pub(crate) fn new(
        points: PointSet,
        values: VarValues,
        added: Vec<&'static str>,
        warnings: Vec<EvalWarning>,
    ) -> Self {
        Self {
            points,
            values,
            added,
            warnings,
        }
    }

    /// Points as supplied by the caller.
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn get(&self, name: &str) -> Option<&ArrayD<Real>> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.names()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ArrayD<Real>)> {
        self.values.iter()
    }

    /// Variables computed because something requested depends on them.
    pub fn added(&self) -> &[&'static str] {
        &self.added
    }

    pub fn warnings(&self) -> &[EvalWarning] {
        &self.warnings
    }

    pub fn into_values(self) -> VarValues {
        self.values
    }
}
