//! Standard catalog of thermodynamic variables derived from Gibbs energy.
//!
//! Units follow the splines: pressure in MPa, temperature in K, molality in
//! mol/kg and Gibbs energy in J/kg. Pressure derivatives therefore carry a
//! factor 1e6 wherever SI volumes or energies come out.

use gf_core::{Dim, GAS_CONSTANT, Real};
use ndarray::{ArrayD, Axis, Zip};

use crate::args::CalcArgs;
use crate::derivs::DerivOrders;
use crate::descriptor::VarDescriptor;
use crate::error::{VarError, VarResult};
use crate::needs::Resource;

/// Standard thermodynamic variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tdv {
    /// Gibbs energy [J/kg]
    G,
    /// Density [kg/m³]
    Rho,
    /// Specific volume [m³/kg]
    V,
    /// Entropy [J/(kg·K)]
    S,
    /// Isobaric heat capacity [J/(kg·K)]
    Cp,
    /// Isochoric heat capacity [J/(kg·K)]
    Cv,
    /// Isothermal bulk modulus [MPa]
    Kt,
    /// Pressure derivative of the isothermal bulk modulus [-]
    Kp,
    /// Isentropic bulk modulus [MPa]
    Ks,
    /// Thermal expansivity [1/K]
    Alpha,
    /// Sound speed [m/s]
    Vel,
    /// Internal energy [J/kg]
    U,
    /// Enthalpy [J/kg]
    H,
    /// Helmholtz energy [J/kg]
    A,
    /// Solute chemical potential [J/mol]
    Mus,
    /// Solvent chemical potential [J/mol]
    Muw,
    /// Partial molar volume of the solute [m³/mol]
    Vm,
    /// Partial molar heat capacity of the solute [J/(mol·K)]
    Cpm,
    /// Apparent molar volume [m³/mol]
    Va,
    /// Apparent molar heat capacity [J/(mol·K)]
    Cpa,
    /// Osmotic coefficient [-]
    Phi,
    /// Solvent activity [-]
    Aw,
}

impl Tdv {
    pub const ALL: [Tdv; 22] = [
        Tdv::G,
        Tdv::Rho,
        Tdv::V,
        Tdv::S,
        Tdv::Cp,
        Tdv::Cv,
        Tdv::Kt,
        Tdv::Kp,
        Tdv::Ks,
        Tdv::Alpha,
        Tdv::Vel,
        Tdv::U,
        Tdv::H,
        Tdv::A,
        Tdv::Mus,
        Tdv::Muw,
        Tdv::Vm,
        Tdv::Cpm,
        Tdv::Va,
        Tdv::Cpa,
        Tdv::Phi,
        Tdv::Aw,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Tdv::G => "G",
            Tdv::Rho => "rho",
            Tdv::V => "V",
            Tdv::S => "S",
            Tdv::Cp => "Cp",
            Tdv::Cv => "Cv",
            Tdv::Kt => "Kt",
            Tdv::Kp => "Kp",
            Tdv::Ks => "Ks",
            Tdv::Alpha => "alpha",
            Tdv::Vel => "vel",
            Tdv::U => "U",
            Tdv::H => "H",
            Tdv::A => "A",
            Tdv::Mus => "mus",
            Tdv::Muw => "muw",
            Tdv::Vm => "Vm",
            Tdv::Cpm => "Cpm",
            Tdv::Va => "Va",
            Tdv::Cpa => "Cpa",
            Tdv::Phi => "phi",
            Tdv::Aw => "aw",
        }
    }

    pub fn from_name(name: &str) -> Option<Tdv> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn descriptor(self) -> VarDescriptor {
        use DerivOrders as D;
        use Resource::*;

        let d = VarDescriptor::new(self.name(), self.calc_fn());
        match self {
            Tdv::G => d.with_derivs(&[D::G]),
            Tdv::Rho => d.with_derivs(&[D::D1P]),
            Tdv::V => d.with_deps(&["rho"]),
            Tdv::S => d.with_derivs(&[D::D1T]),
            Tdv::Cp => d.with_derivs(&[D::D2T]).with_needs(&[Grid]),
            Tdv::Cv => d.with_deps(&["Cp", "alpha", "Kt", "rho"]).with_needs(&[Grid]),
            Tdv::Kt => d.with_derivs(&[D::D1P, D::D2P]),
            Tdv::Kp => d.with_derivs(&[D::D1P, D::D2P, D::D3P]),
            Tdv::Ks => d.with_deps(&["rho", "vel"]),
            Tdv::Alpha => d.with_derivs(&[D::D2PT]).with_deps(&["rho"]),
            Tdv::Vel => d.with_derivs(&[D::D1P, D::D2P, D::D2T, D::D2PT]),
            Tdv::U => d.with_deps(&["G", "rho", "S"]).with_needs(&[Grid]),
            Tdv::H => d.with_deps(&["U", "rho"]).with_needs(&[Grid]),
            Tdv::A => d.with_deps(&["U", "S"]).with_needs(&[Grid]),
            Tdv::Mus => d
                .with_deps(&["G"])
                .with_derivs(&[D::D1M])
                .with_needs(&[MwSolute, Conversion, Molality]),
            Tdv::Muw => d
                .with_deps(&["G"])
                .with_derivs(&[D::D1M])
                .with_needs(&[MwSolvent, Conversion, Grid, Molality]),
            Tdv::Vm => d
                .with_deps(&["V"])
                .with_derivs(&[D::D2PM])
                .with_needs(&[MwSolute, Conversion, Molality]),
            Tdv::Cpm => d
                .with_deps(&["Cp"])
                .with_derivs(&[D::D3T2M])
                .with_needs(&[MwSolute, Conversion, Grid, Molality]),
            Tdv::Va => d
                .with_deps(&["V", "Vm"])
                .with_needs(&[Conversion, Grid, Molality, ZeroMolality]),
            Tdv::Cpa => d
                .with_deps(&["Cp", "Cpm"])
                .with_needs(&[Conversion, Grid, Molality, ZeroMolality]),
            Tdv::Phi => d
                .with_deps(&["muw"])
                .with_needs(&[MwSolvent, IonCount, Grid, Molality, ZeroMolality]),
            Tdv::Aw => d
                .with_deps(&["muw"])
                .with_needs(&[Grid, Molality, ZeroMolality]),
        }
    }

    /// Descriptors of the whole catalog.
    pub fn descriptors() -> Vec<VarDescriptor> {
        Self::ALL.into_iter().map(Tdv::descriptor).collect()
    }

    fn calc_fn(self) -> crate::descriptor::CalcFn {
        match self {
            Tdv::G => calc_g,
            Tdv::Rho => calc_rho,
            Tdv::V => calc_v,
            Tdv::S => calc_s,
            Tdv::Cp => calc_cp,
            Tdv::Cv => calc_cv,
            Tdv::Kt => calc_kt,
            Tdv::Kp => calc_kp,
            Tdv::Ks => calc_ks,
            Tdv::Alpha => calc_alpha,
            Tdv::Vel => calc_vel,
            Tdv::U => calc_u,
            Tdv::H => calc_h,
            Tdv::A => calc_a,
            Tdv::Mus => calc_mus,
            Tdv::Muw => calc_muw,
            Tdv::Vm => calc_vm,
            Tdv::Cpm => calc_cpm,
            Tdv::Va => calc_va,
            Tdv::Cpa => calc_cpa,
            Tdv::Phi => calc_phi,
            Tdv::Aw => calc_aw,
        }
    }
}

fn calc_g(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    Ok(args.deriv(DerivOrders::G)?.clone())
}

fn calc_rho(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    Ok(args.deriv(DerivOrders::D1P)?.mapv(|d1p| 1e6 / d1p))
}

fn calc_v(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    Ok(args.prior("rho")?.mapv(|rho| 1.0 / rho))
}

fn calc_s(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    Ok(args.deriv(DerivOrders::D1T)?.mapv(|d1t| -d1t))
}

fn calc_cp(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    let t = args.grid(Dim::T)?;
    let d2t = args.deriv(DerivOrders::D2T)?;
    Ok(Zip::from(t).and(d2t).map_collect(|&t, &d2t| -t * d2t))
}

fn calc_cv(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    let t = args.grid(Dim::T)?;
    Ok(Zip::from(args.prior("Cp")?)
        .and(args.prior("alpha")?)
        .and(args.prior("Kt")?)
        .and(args.prior("rho")?)
        .and(t)
        .map_collect(|&cp, &alpha, &kt, &rho, &t| cp - 1e6 * t * alpha * alpha * kt / rho))
}

fn calc_kt(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    Ok(Zip::from(args.deriv(DerivOrders::D1P)?)
        .and(args.deriv(DerivOrders::D2P)?)
        .map_collect(|&d1p, &d2p| -d1p / d2p))
}

fn calc_kp(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    Ok(Zip::from(args.deriv(DerivOrders::D1P)?)
        .and(args.deriv(DerivOrders::D2P)?)
        .and(args.deriv(DerivOrders::D3P)?)
        .map_collect(|&d1p, &d2p, &d3p| d1p * d3p / (d2p * d2p) - 1.0))
}

fn calc_ks(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    Ok(Zip::from(args.prior("rho")?)
        .and(args.prior("vel")?)
        .map_collect(|&rho, &vel| rho * vel * vel / 1e6))
}

fn calc_alpha(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    Ok(Zip::from(args.deriv(DerivOrders::D2PT)?)
        .and(args.prior("rho")?)
        .map_collect(|&d2pt, &rho| 1e-6 * d2pt * rho))
}

fn calc_vel(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    Ok(Zip::from(args.deriv(DerivOrders::D1P)?)
        .and(args.deriv(DerivOrders::D2P)?)
        .and(args.deriv(DerivOrders::D2T)?)
        .and(args.deriv(DerivOrders::D2PT)?)
        .map_collect(|&d1p, &d2p, &d2t, &d2pt| (d1p * d1p / (d2pt * d2pt / d2t - d2p)).sqrt()))
}

fn calc_u(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    Ok(Zip::from(args.prior("G")?)
        .and(args.prior("rho")?)
        .and(args.prior("S")?)
        .and(args.grid(Dim::P)?)
        .and(args.grid(Dim::T)?)
        .map_collect(|&g, &rho, &s, &p, &t| g - 1e6 * p / rho + t * s))
}

fn calc_h(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    Ok(Zip::from(args.prior("U")?)
        .and(args.prior("rho")?)
        .and(args.grid(Dim::P)?)
        .map_collect(|&u, &rho, &p| u + 1e6 * p / rho))
}

fn calc_a(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    Ok(Zip::from(args.prior("U")?)
        .and(args.prior("S")?)
        .and(args.grid(Dim::T)?)
        .map_collect(|&u, &s, &t| u - t * s))
}

fn calc_mus(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    let mwu = args.mw_solute()?;
    Ok(Zip::from(args.prior("G")?)
        .and(args.deriv(DerivOrders::D1M)?)
        .and(args.conversion()?)
        .map_collect(|&g, &d1m, &f| mwu * g + f * d1m))
}

fn calc_muw(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    let mwv = args.mw_solvent()?;
    Ok(Zip::from(args.prior("G")?)
        .and(args.deriv(DerivOrders::D1M)?)
        .and(args.conversion()?)
        .and(args.grid(Dim::M)?)
        .map_collect(|&g, &d1m, &f, &m| mwv * (g - f * m * d1m)))
}

fn calc_vm(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    let mwu = args.mw_solute()?;
    Ok(Zip::from(args.prior("V")?)
        .and(args.deriv(DerivOrders::D2PM)?)
        .and(args.conversion()?)
        .map_collect(|&v, &d2pm, &f| mwu * v + 1e-6 * f * d2pm))
}

fn calc_cpm(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    let mwu = args.mw_solute()?;
    Ok(Zip::from(args.prior("Cp")?)
        .and(args.deriv(DerivOrders::D3T2M)?)
        .and(args.conversion()?)
        .and(args.grid(Dim::T)?)
        .map_collect(|&cp, &d3t2m, &f, &t| mwu * cp - f * t * d3t2m))
}

fn calc_va(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    let v = args.prior("V")?;
    let v0 = at_zero_molality(args.var, v)?;
    Ok(Zip::from(v)
        .and(&v0)
        .and(args.prior("Vm")?)
        .and(args.conversion()?)
        .and(args.grid(Dim::M)?)
        .map_collect(|&v, &v0, &vm, &f, &m| apparent(f * v - v0, m, vm)))
}

fn calc_cpa(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    let cp = args.prior("Cp")?;
    let cp0 = at_zero_molality(args.var, cp)?;
    Ok(Zip::from(cp)
        .and(&cp0)
        .and(args.prior("Cpm")?)
        .and(args.conversion()?)
        .and(args.grid(Dim::M)?)
        .map_collect(|&cp, &cp0, &cpm, &f, &m| apparent(f * cp - cp0, m, cpm)))
}

fn calc_phi(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    let mwv = args.mw_solvent()?;
    let nu = Real::from(args.ion_count()?);
    let muw = args.prior("muw")?;
    let muw0 = at_zero_molality(args.var, muw)?;
    Ok(Zip::from(muw)
        .and(&muw0)
        .and(args.grid(Dim::T)?)
        .and(args.grid(Dim::M)?)
        .map_collect(|&muw, &muw0, &t, &m| {
            if m == 0.0 {
                1.0
            } else {
                -(muw - muw0) / (GAS_CONSTANT * t * mwv * nu * m)
            }
        }))
}

fn calc_aw(args: &CalcArgs<'_>) -> VarResult<ArrayD<Real>> {
    let muw = args.prior("muw")?;
    let muw0 = at_zero_molality(args.var, muw)?;
    Ok(Zip::from(muw)
        .and(&muw0)
        .and(args.grid(Dim::T)?)
        .map_collect(|&muw, &muw0, &t| ((muw - muw0) / (GAS_CONSTANT * t)).exp()))
}

/// Apparent molar quantity `excess / m`, taking its infinite-dilution limit
/// (the partial molar value) at zero molality.
fn apparent(excess: Real, m: Real, partial: Real) -> Real {
    if m == 0.0 { partial } else { excess / m }
}

/// Values at the first molality (zero after normalization), broadcast back
/// over the molality axis.
fn at_zero_molality(var: &'static str, values: &ArrayD<Real>) -> VarResult<ArrayD<Real>> {
    let axis = Axis(Dim::M.index());
    if values.ndim() <= axis.index() || values.len_of(axis) == 0 {
        return Err(VarError::Shape {
            var,
            what: "values have no molality axis",
        });
    }
    let zero_row = values.index_axis(axis, 0).insert_axis(axis);
    zero_row
        .broadcast(values.raw_dim())
        .map(|view| view.to_owned())
        .ok_or(VarError::Shape {
            var,
            what: "zero molality row does not broadcast",
        })
}
