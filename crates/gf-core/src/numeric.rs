/// Scalar type for pressures, temperatures, molalities and energies.
pub type Real = f64;

/// Universal gas constant [J/(mol·K)].
pub const GAS_CONSTANT: Real = 8.314_462_618;

/// Molecular weight of water [kg/mol], the default solvent.
pub const MW_WATER: Real = 18.015_28e-3;

/// Absolute and relative tolerances for comparing knot bounds and grid points.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Evenly stepped sequence `start, start + step, ...` up to and including `stop`.
///
/// The last value is kept when it lands within half a step's rounding error of `stop`.
pub fn stepped_range(start: Real, stop: Real, step: Real) -> Vec<Real> {
    if step.is_nan() || step <= 0.0 || stop < start {
        return vec![start];
    }
    let count = ((stop - start) / step + 1e-9).floor() as usize + 1;
    (0..count).map(|i| start + i as Real * step).collect()
}
