//! Capability flags declared by variables.

use core::fmt;

/// A resource a variable's calculation may consume, or a capability the
/// spline must offer for the variable to be computable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    /// Gibbs energy derivatives.
    Derivatives,
    /// Mesh grid of the evaluation points, one array per dimension.
    Grid,
    /// Solvent molecular weight.
    MwSolvent,
    /// Solute molecular weight.
    MwSolute,
    /// Number of ions per solute formula unit.
    IonCount,
    /// Previously computed variables.
    PriorValues,
    /// The raw spline.
    Spline,
    /// The normalized evaluation axes.
    PointSet,
    /// Solvent-to-solution conversion factor `f = 1 + MWu * m`.
    Conversion,
    /// A molality dimension.
    Molality,
    /// A zero molality row in the evaluation points.
    ZeroMolality,
}

impl Resource {
    pub const ALL: [Resource; 11] = [
        Resource::Derivatives,
        Resource::Grid,
        Resource::MwSolvent,
        Resource::MwSolute,
        Resource::IonCount,
        Resource::PriorValues,
        Resource::Spline,
        Resource::PointSet,
        Resource::Conversion,
        Resource::Molality,
        Resource::ZeroMolality,
    ];

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Resource::Derivatives => "derivatives",
            Resource::Grid => "grid",
            Resource::MwSolvent => "solvent molecular weight",
            Resource::MwSolute => "solute molecular weight",
            Resource::IonCount => "ion count",
            Resource::PriorValues => "prior values",
            Resource::Spline => "spline",
            Resource::PointSet => "point set",
            Resource::Conversion => "conversion factor",
            Resource::Molality => "molality",
            Resource::ZeroMolality => "zero molality",
        }
    }

    /// Whether the resource is passed to the calculation (as opposed to a
    /// capability only checked before evaluation).
    pub const fn is_injected(self) -> bool {
        !matches!(self, Resource::Molality | Resource::ZeroMolality)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of [`Resource`]s.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Needs(u16);

impl Needs {
    pub const NONE: Needs = Needs(0);

    pub const fn of(resources: &[Resource]) -> Needs {
        let mut bits = 0;
        let mut i = 0;
        while i < resources.len() {
            bits |= resources[i].bit();
            i += 1;
        }
        Needs(bits)
    }

    pub const fn with(self, resource: Resource) -> Needs {
        Needs(self.0 | resource.bit())
    }

    pub const fn union(self, other: Needs) -> Needs {
        Needs(self.0 | other.0)
    }

    pub const fn contains(self, resource: Resource) -> bool {
        self.0 & resource.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Resource> {
        Resource::ALL.into_iter().filter(move |r| self.contains(*r))
    }

    /// Only the resources handed to calculations.
    pub fn injected(self) -> Needs {
        self.iter().filter(|r| r.is_injected()).fold(Needs::NONE, Needs::with)
    }
}

impl fmt::Debug for Needs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for Needs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.iter().map(Resource::label).collect();
        f.write_str(&labels.join(", "))
    }
}

impl FromIterator<Resource> for Needs {
    fn from_iter<I: IntoIterator<Item = Resource>>(iter: I) -> Self {
        iter.into_iter().fold(Needs::NONE, Needs::with)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use proptest::sample::subsequence;

    proptest! {
        #[test]
        fn collecting_iterated_needs_is_identity(picked in subsequence(Resource::ALL.to_vec(), 0..=11)) {
            let needs: Needs = picked.iter().copied().collect();
            prop_assert_eq!(needs.iter().count(), picked.len());
            prop_assert_eq!(needs.iter().collect::<Needs>(), needs);
            for r in Resource::ALL {
                prop_assert_eq!(needs.contains(r), picked.contains(&r));
            }
        }
    }
}
