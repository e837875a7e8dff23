//! Axis order of Gibbs energy splines.

use core::fmt;

/// Independent variable of a Gibbs energy spline.
///
/// The discriminant is the axis index: splines, point sets and output arrays
/// all store pressure first, temperature second and molality (if any) third.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dim {
    /// Pressure [MPa]
    P = 0,
    /// Temperature [K]
    T = 1,
    /// Molality [mol/kg]
    M = 2,
}

impl Dim {
    pub const ALL: [Dim; 3] = [Dim::P, Dim::T, Dim::M];

    /// Axis index in spline, point set and output arrays.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Dim::P => "P",
            Dim::T => "T",
            Dim::M => "M",
        }
    }

    /// Dimension at axis `index`, if any.
    pub fn from_index(index: usize) -> Option<Dim> {
        Self::ALL.get(index).copied()
    }

    /// Leading dimensions of a spline with `count` axes.
    pub fn first(count: usize) -> &'static [Dim] {
        &Self::ALL[..count.min(Self::ALL.len())]
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
