//! Variable descriptors.

use gf_core::Real;
use ndarray::ArrayD;

use crate::args::CalcArgs;
use crate::derivs::DerivOrders;
use crate::error::VarResult;
use crate::needs::{Needs, Resource};

/// Pure calculation of one variable from its declared resources.
pub type CalcFn = fn(&CalcArgs<'_>) -> VarResult<ArrayD<Real>>;

/// Metadata and calculation of one variable.
#[derive(Debug, Clone)]
pub struct VarDescriptor {
    /// Unique name within a registry.
    pub name: &'static str,
    /// Variables that must be computed first.
    pub deps: Vec<&'static str>,
    /// Gibbs energy derivatives consumed.
    pub derivs: Vec<DerivOrders>,
    pub needs: Needs,
    pub calc: CalcFn,
}

impl VarDescriptor {
    pub fn new(name: &'static str, calc: CalcFn) -> Self {
        Self {
            name,
            deps: Vec::new(),
            derivs: Vec::new(),
            needs: Needs::NONE,
            calc,
        }
    }

    /// Declare dependencies; implies [`Resource::PriorValues`].
    pub fn with_deps(mut self, deps: &[&'static str]) -> Self {
        self.deps.extend_from_slice(deps);
        if !self.deps.is_empty() {
            self.needs = self.needs.with(Resource::PriorValues);
        }
        self
    }

    /// Declare derivatives; implies [`Resource::Derivatives`].
    pub fn with_derivs(mut self, derivs: &[DerivOrders]) -> Self {
        self.derivs.extend_from_slice(derivs);
        if !self.derivs.is_empty() {
            self.needs = self.needs.with(Resource::Derivatives);
        }
        self
    }

    pub fn with_needs(mut self, resources: &[Resource]) -> Self {
        self.needs = self.needs.union(Needs::of(resources));
        self
    }

    pub fn requires(&self, resource: Resource) -> bool {
        self.needs.contains(resource)
    }

    /// Whether the variable can only be computed from a spline with a
    /// molality dimension.
    pub fn requires_molality(&self) -> bool {
        self.requires(Resource::Molality)
            || self.requires(Resource::Conversion)
            || self.requires(Resource::ZeroMolality)
            || self.derivs.iter().any(|d| d.involves_molality())
    }

    /// Whether computing the variable needs the solute molecular weight,
    /// directly or through the conversion factor.
    pub fn requires_solute_weight(&self) -> bool {
        self.requires(Resource::MwSolute) || self.requires(Resource::Conversion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    fn zero(_: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
        Ok(ArrayD::zeros(IxDyn(&[1])))
    }

    #[test]
    fn builder_implies_resources() {
        let d = VarDescriptor::new("x", zero)
            .with_deps(&["y"])
            .with_derivs(&[DerivOrders::D1P]);
        assert!(d.requires(Resource::PriorValues));
        assert!(d.requires(Resource::Derivatives));
        assert!(!d.requires(Resource::Grid));
        assert!(!d.requires_molality());
    }

    #[test]
    fn molality_requirements() {
        let by_deriv = VarDescriptor::new("a", zero).with_derivs(&[DerivOrders::D1M]);
        let by_factor = VarDescriptor::new("b", zero).with_needs(&[Resource::Conversion]);
        assert!(by_deriv.requires_molality());
        assert!(by_factor.requires_molality());
        assert!(by_factor.requires_solute_weight());
        assert!(!by_deriv.requires_solute_weight());
    }
}
