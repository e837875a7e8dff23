//! Gibbs energy splines with their species data.

use gf_core::Real;
use serde::{Deserialize, Serialize};

use crate::bspline::BSpline;
use crate::error::{SplineError, SplineResult};

/// A Gibbs energy spline (J/kg) over pressure (MPa), temperature (K) and,
/// for solutions, molality (mol/kg).
///
/// `mw[0]` is the solvent molecular weight and `mw[1]` (solutions only) the
/// solute molecular weight, both in kg/mol. The ion count `nu` is kept for
/// solutions and dropped for pure substances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGibbsSpline", into = "RawGibbsSpline")]
pub struct GibbsSpline {
    sp: BSpline,
    mw: Vec<Real>,
    nu: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawGibbsSpline {
    sp: BSpline,
    #[serde(default)]
    mw: Vec<Real>,
    #[serde(default)]
    nu: Option<u32>,
}

impl TryFrom<RawGibbsSpline> for GibbsSpline {
    type Error = SplineError;

    fn try_from(raw: RawGibbsSpline) -> SplineResult<Self> {
        GibbsSpline::new(raw.sp, raw.mw, raw.nu)
    }
}

impl From<GibbsSpline> for RawGibbsSpline {
    fn from(g: GibbsSpline) -> Self {
        RawGibbsSpline {
            sp: g.sp,
            mw: g.mw,
            nu: g.nu,
        }
    }
}

impl GibbsSpline {
    pub fn new(sp: BSpline, mw: Vec<Real>, nu: Option<u32>) -> SplineResult<Self> {
        let dims = sp.dim_count();
        if !(2..=3).contains(&dims) {
            return Err(SplineError::UnsupportedDimensions { found: dims });
        }
        if mw.len() > 2 {
            return Err(SplineError::MultiSolute { found: mw.len() });
        }
        if let Some(index) = mw.iter().position(|w| !w.is_finite()) {
            return Err(SplineError::InvalidMolecularWeight { index });
        }
        if mw.is_empty() {
            tracing::warn!(
                "Gibbs spline has no molecular weights; variables that need them cannot be evaluated"
            );
        }

        let nu = if mw.len() == 2 {
            match nu {
                Some(n) if n > 0 => Some(n),
                _ => return Err(SplineError::MissingIonCount),
            }
        } else {
            None
        };

        Ok(Self { sp, mw, nu })
    }

    /// Gibbs spline of a pure substance.
    pub fn pure(sp: BSpline, mw_solvent: Real) -> SplineResult<Self> {
        Self::new(sp, vec![mw_solvent], None)
    }

    /// Gibbs spline of a single-solute solution.
    pub fn solution(sp: BSpline, mw_solvent: Real, mw_solute: Real, nu: u32) -> SplineResult<Self> {
        Self::new(sp, vec![mw_solvent, mw_solute], Some(nu))
    }

    pub fn spline(&self) -> &BSpline {
        &self.sp
    }

    pub fn mw_solvent(&self) -> Option<Real> {
        self.mw.first().copied()
    }

    pub fn mw_solute(&self) -> Option<Real> {
        self.mw.get(1).copied()
    }

    pub fn ion_count(&self) -> Option<u32> {
        self.nu
    }

    pub fn is_solution(&self) -> bool {
        self.mw.len() == 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{ArrayD, IxDyn};

    fn spline(dims: usize) -> BSpline {
        let knots = vec![vec![0.0, 0.0, 1.0, 1.0]; dims];
        BSpline::new(knots, vec![2; dims], ArrayD::zeros(IxDyn(&vec![2; dims]))).unwrap()
    }

    #[test]
    fn pure_substance_drops_ion_count() {
        let g = GibbsSpline::new(spline(2), vec![18.015e-3], Some(2)).unwrap();
        assert_eq!(g.ion_count(), None);
        assert_eq!(g.mw_solute(), None);
        assert!(!g.is_solution());
    }

    #[test]
    fn solution_requires_ion_count() {
        let err = GibbsSpline::new(spline(3), vec![18.015e-3, 58.44e-3], None).unwrap_err();
        assert_eq!(err, SplineError::MissingIonCount);

        let g = GibbsSpline::solution(spline(3), 18.015e-3, 58.44e-3, 2).unwrap();
        assert_eq!(g.ion_count(), Some(2));
        assert_eq!(g.mw_solute(), Some(58.44e-3));
    }

    #[test]
    fn rejects_multi_solute_and_bad_weights() {
        let err = GibbsSpline::new(spline(3), vec![1.0, 2.0, 3.0], Some(1)).unwrap_err();
        assert_eq!(err, SplineError::MultiSolute { found: 3 });

        let err = GibbsSpline::new(spline(2), vec![f64::NAN], None).unwrap_err();
        assert_eq!(err, SplineError::InvalidMolecularWeight { index: 0 });
    }

    #[test]
    fn rejects_one_dimensional_spline() {
        let err = GibbsSpline::pure(spline(1), 18.015e-3).unwrap_err();
        assert_eq!(err, SplineError::UnsupportedDimensions { found: 1 });
    }
}
