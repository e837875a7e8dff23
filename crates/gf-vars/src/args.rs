//! Resources handed to a variable's calculation.

use gf_core::{Dim, Real};
use gf_spline::BSpline;
use ndarray::ArrayD;

use crate::derivs::{DerivOrders, GibbsDerivatives};
use crate::error::{VarError, VarResult};
use crate::needs::{Needs, Resource};
use crate::values::VarValues;

/// Arguments of one calculation.
///
/// The scheduler fills only the fields whose resource the variable declared;
/// the accessors turn a missing field into [`VarError::Undeclared`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CalcArgs<'a> {
    /// Variable being computed.
    pub var: &'static str,
    pub derivs: Option<&'a GibbsDerivatives>,
    pub grid: Option<&'a [ArrayD<Real>]>,
    pub mw_solvent: Option<Real>,
    pub mw_solute: Option<Real>,
    pub ion_count: Option<u32>,
    pub prior: Option<&'a VarValues>,
    pub spline: Option<&'a BSpline>,
    pub ptm: Option<&'a [Vec<Real>]>,
    pub conversion: Option<&'a ArrayD<Real>>,
}

impl<'a> CalcArgs<'a> {
    fn undeclared(&self, resource: Resource) -> VarError {
        VarError::Undeclared {
            var: self.var,
            resource,
        }
    }

    pub fn deriv(&self, orders: DerivOrders) -> VarResult<&'a ArrayD<Real>> {
        let derivs = self.derivs.ok_or_else(|| self.undeclared(Resource::Derivatives))?;
        derivs
            .get(orders)
            .ok_or(VarError::MissingDerivative { deriv: orders })
    }

    /// Gridded values of dimension `dim`, shaped like every output array.
    pub fn grid(&self, dim: Dim) -> VarResult<&'a ArrayD<Real>> {
        let grid = self.grid.ok_or_else(|| self.undeclared(Resource::Grid))?;
        grid.get(dim.index()).ok_or(VarError::Shape {
            var: self.var,
            what: "grid lacks the requested dimension",
        })
    }

    pub fn mw_solvent(&self) -> VarResult<Real> {
        self.mw_solvent.ok_or_else(|| self.undeclared(Resource::MwSolvent))
    }

    pub fn mw_solute(&self) -> VarResult<Real> {
        self.mw_solute.ok_or_else(|| self.undeclared(Resource::MwSolute))
    }

    pub fn ion_count(&self) -> VarResult<u32> {
        self.ion_count.ok_or_else(|| self.undeclared(Resource::IonCount))
    }

    /// A variable computed earlier in the run.
    pub fn prior(&self, name: &str) -> VarResult<&'a ArrayD<Real>> {
        let prior = self.prior.ok_or_else(|| self.undeclared(Resource::PriorValues))?;
        prior.get(name).ok_or_else(|| VarError::MissingValue {
            name: name.to_string(),
        })
    }

    pub fn spline(&self) -> VarResult<&'a BSpline> {
        self.spline.ok_or_else(|| self.undeclared(Resource::Spline))
    }

    pub fn ptm(&self) -> VarResult<&'a [Vec<Real>]> {
        self.ptm.ok_or_else(|| self.undeclared(Resource::PointSet))
    }

    pub fn conversion(&self) -> VarResult<&'a ArrayD<Real>> {
        self.conversion.ok_or_else(|| self.undeclared(Resource::Conversion))
    }

    /// Resources actually present in these arguments.
    pub fn supplied(&self) -> Needs {
        let present = [
            (Resource::Derivatives, self.derivs.is_some()),
            (Resource::Grid, self.grid.is_some()),
            (Resource::MwSolvent, self.mw_solvent.is_some()),
            (Resource::MwSolute, self.mw_solute.is_some()),
            (Resource::IonCount, self.ion_count.is_some()),
            (Resource::PriorValues, self.prior.is_some()),
            (Resource::Spline, self.spline.is_some()),
            (Resource::PointSet, self.ptm.is_some()),
            (Resource::Conversion, self.conversion.is_some()),
        ];
        present
            .into_iter()
            .filter_map(|(r, yes)| yes.then_some(r))
            .collect()
    }
}
