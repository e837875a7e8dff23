//! Run options and physical parameters.

use std::fs;

use gf_core::{MW_WATER, Real};
use gf_spline::GibbsSpline;
use serde::{Deserialize, Serialize};

/// What to do when evaluation points fall outside the spline's knots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtrapolationPolicy {
    /// Reject the run with [`crate::EvalError::Extrapolation`].
    #[default]
    Fail,
    /// Log a warning, record it on the result and continue.
    Warn,
}

/// Advisory check of the projected output size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryGuard {
    /// Warn when the output exceeds this multiple of system memory.
    pub warning_factor: Real,
    /// Bytes per stored value.
    pub float_bytes: usize,
    /// System memory in bytes; probed from `/proc/meminfo` when unset.
    pub system_bytes: Option<u64>,
}

impl Default for MemoryGuard {
    fn default() -> Self {
        Self {
            warning_factor: 2.0,
            float_bytes: size_of::<Real>(),
            system_bytes: None,
        }
    }
}

impl MemoryGuard {
    /// Bytes needed for `var_count` outputs plus the point set itself.
    pub fn projected_bytes(&self, var_count: usize, point_count: usize) -> u64 {
        let values = (var_count as u64 + 1).saturating_mul(point_count as u64);
        values.saturating_mul(self.float_bytes as u64)
    }

    pub fn system_memory(&self) -> Option<u64> {
        self.system_bytes.or_else(probe_system_memory)
    }

    /// Projected and available bytes if the projection is over the limit.
    /// `None` when within limits or when system memory is unknown.
    pub fn exceeded(&self, var_count: usize, point_count: usize) -> Option<(u64, u64)> {
        let projected = self.projected_bytes(var_count, point_count);
        let system = self.system_memory()?;
        (projected as Real > system as Real * self.warning_factor).then_some((projected, system))
    }
}

/// Total memory as reported by the kernel.
fn probe_system_memory() -> Option<u64> {
    let meminfo = fs::read_to_string("/proc/meminfo").ok()?;
    parse_mem_total(&meminfo)
}

fn parse_mem_total(meminfo: &str) -> Option<u64> {
    let line = meminfo.lines().find(|l| l.starts_with("MemTotal:"))?;
    let mut fields = line["MemTotal:".len()..].split_whitespace();
    let amount: u64 = fields.next()?.parse().ok()?;
    let scale = match fields.next() {
        Some("kB") => 1024,
        None => 1,
        Some(_) => return None,
    };
    amount.checked_mul(scale)
}

/// Options of an evaluation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalOptions {
    pub extrapolation: ExtrapolationPolicy,
    pub memory: MemoryGuard,
    /// Evaluate independent variables of one batch on the rayon pool.
    pub parallel_batches: bool,
}

impl EvalOptions {
    pub fn allow_extrapolation(mut self) -> Self {
        self.extrapolation = ExtrapolationPolicy::Warn;
        self
    }

    pub fn with_parallel_batches(mut self, parallel: bool) -> Self {
        self.parallel_batches = parallel;
        self
    }
}

/// Physical parameters used by solution variables.
///
/// A missing or zero value is treated as not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Solvent molecular weight [kg/mol].
    pub mw_solvent: Option<Real>,
    /// Solute molecular weight [kg/mol].
    pub mw_solute: Option<Real>,
    /// Ions per formula unit of solute.
    pub ion_count: Option<u32>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            mw_solvent: Some(MW_WATER),
            mw_solute: None,
            ion_count: None,
        }
    }
}

impl Parameters {
    /// Aqueous solution of a solute with the given weight and ion count.
    pub fn aqueous(mw_solute: Real, ion_count: u32) -> Self {
        Self {
            mw_solute: Some(mw_solute),
            ion_count: Some(ion_count),
            ..Self::default()
        }
    }

    /// Parameters carried by a Gibbs spline. An empty weight list falls back
    /// to water as the solvent.
    pub fn from_spline(gibbs: &GibbsSpline) -> Self {
        Self {
            mw_solvent: gibbs.mw_solvent().or(Some(MW_WATER)),
            mw_solute: gibbs.mw_solute(),
            ion_count: gibbs.ion_count(),
        }
    }

    /// Solvent weight, if supplied and non-zero.
    pub fn solvent_weight(&self) -> Option<Real> {
        self.mw_solvent.filter(|&mw| mw != 0.0)
    }

    pub fn solute_weight(&self) -> Option<Real> {
        self.mw_solute.filter(|&mw| mw != 0.0)
    }

    pub fn ions(&self) -> Option<u32> {
        self.ion_count.filter(|&nu| nu != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mem_total() {
        let meminfo = "MemTotal:       16318480 kB\nMemFree:         1234 kB\n";
        assert_eq!(parse_mem_total(meminfo), Some(16_318_480 * 1024));
        assert_eq!(parse_mem_total("MemFree: 12 kB"), None);
        assert_eq!(parse_mem_total("MemTotal: lots kB"), None);
    }

    #[test]
    fn memory_guard_projection() {
        let guard = MemoryGuard {
            system_bytes: Some(1000),
            ..MemoryGuard::default()
        };
        // (3 + 1) * 100 * 8
        assert_eq!(guard.projected_bytes(3, 100), 3200);
        assert_eq!(guard.exceeded(3, 100), Some((3200, 1000)));
        assert_eq!(guard.exceeded(3, 50), None);
    }

    #[test]
    fn zero_parameters_count_as_missing() {
        let params = Parameters {
            mw_solvent: Some(0.0),
            mw_solute: Some(0.058),
            ion_count: Some(0),
        };
        assert_eq!(params.solvent_weight(), None);
        assert_eq!(params.solute_weight(), Some(0.058));
        assert_eq!(params.ions(), None);
        assert_eq!(Parameters::default().solvent_weight(), Some(MW_WATER));
    }

    #[test]
    fn options_from_yaml() {
        let yaml = "extrapolation: warn\nmemory:\n  warning_factor: 4.0\nparallel_batches: true\n";
        let options: EvalOptions = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(options.extrapolation, ExtrapolationPolicy::Warn);
        assert_eq!(options.memory.warning_factor, 4.0);
        assert_eq!(options.memory.float_bytes, 8);
        assert!(options.parallel_batches);

        let empty: EvalOptions = serde_yaml::from_str("{}").unwrap();
        assert_eq!(empty, EvalOptions::default());
    }
}
