use clap::{Parser, Subcommand};
use gf_core::{PointSet, Real};
use gf_eval::{EvalOptions, GibbsEvaluator, Parameters};
use gf_spline::GibbsSpline;
use gf_vars::Registry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod range;

use error::{CliError, CliResult};
use range::parse_range;

#[derive(Parser)]
#[command(name = "gf-cli")]
#[command(about = "gibbsflow CLI - thermodynamic states from Gibbs energy splines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the standard thermodynamic variables
    Vars,
    /// Evaluate a Gibbs energy spline on a grid
    Eval(EvalArgs),
}

#[derive(clap::Args)]
struct EvalArgs {
    /// Path to the Gibbs spline JSON file
    spline_path: PathBuf,
    /// Pressure axis in MPa (start:stop:step or a single value)
    #[arg(long)]
    p: Option<String>,
    /// Temperature axis in K
    #[arg(long)]
    t: Option<String>,
    /// Molality axis in mol/kg (solution splines only)
    #[arg(long)]
    m: Option<String>,
    /// Variable to compute; repeatable, defaults to all available
    #[arg(long = "var")]
    vars: Vec<String>,
    /// Warn instead of failing when points fall outside the knots
    #[arg(long)]
    allow_extrapolation: bool,
    /// Solvent molecular weight in kg/mol
    #[arg(long)]
    mw_solvent: Option<Real>,
    /// Solute molecular weight in kg/mol
    #[arg(long)]
    mw_solute: Option<Real>,
    /// Ions per formula unit of solute
    #[arg(long)]
    nu: Option<u32>,
    /// YAML file with the points (`!Grid [[p...], [t...]]` or `!Point [p, t]`); replaces the axis flags
    #[arg(long, conflicts_with_all = ["p", "t", "m"])]
    points: Option<PathBuf>,
    /// YAML file with evaluation options
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Vars => {
            cmd_vars();
            Ok(())
        }
        Commands::Eval(args) => cmd_eval(&args),
    }
}

fn cmd_vars() {
    let registry = Registry::standard();
    println!("{:<6} {:<22} needs", "name", "depends on");
    for var in registry.iter() {
        let deps = if var.deps.is_empty() {
            "-".to_string()
        } else {
            var.deps.join(", ")
        };
        let derivs: Vec<String> = var.derivs.iter().map(|d| d.name()).collect();
        let mut needs = var.needs.to_string();
        if !derivs.is_empty() {
            needs = format!("{needs} [{}]", derivs.join(", "));
        }
        println!("{:<6} {:<22} {}", var.name, deps, needs);
    }
}

fn cmd_eval(args: &EvalArgs) -> CliResult<()> {
    let gibbs = load_spline(&args.spline_path)?;
    let mut options = match &args.config {
        Some(path) => load_options(path)?,
        None => EvalOptions::default(),
    };
    if args.allow_extrapolation {
        options = options.allow_extrapolation();
    }

    let points = match &args.points {
        Some(path) => load_points(path)?,
        None => points_from_axes(args)?,
    };

    let from_spline = Parameters::from_spline(&gibbs);
    let params = Parameters {
        mw_solvent: args.mw_solvent.or(from_spline.mw_solvent),
        mw_solute: args.mw_solute.or(from_spline.mw_solute),
        ion_count: args.nu.or(from_spline.ion_count),
    };

    let requested: Vec<&str> = args.vars.iter().map(String::as_str).collect();
    let engine = GibbsEvaluator::standard().with_options(options);
    let states = engine.evaluate(gibbs.spline(), &points, &requested, &params)?;

    println!("Evaluated {} variables on {:?} points", states.len(), points.shape());
    for warning in states.warnings() {
        println!("  warning: {warning}");
    }
    let registry = engine.registry();
    for name in registry.names().filter(|n| states.contains(n)) {
        let Some(values) = states.get(name) else {
            continue;
        };
        let min = values.iter().copied().fold(Real::INFINITY, Real::min);
        let max = values.iter().copied().fold(Real::NEG_INFINITY, Real::max);
        println!("  {:<6} shape {:?}  min {:>14.6e}  max {:>14.6e}", name, values.shape(), min, max);
    }
    Ok(())
}

fn load_spline(path: &Path) -> CliResult<GibbsSpline> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let gibbs: GibbsSpline = serde_json::from_str(&text).map_err(|source| CliError::SplineFile {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        dims = gibbs.spline().dim_count(),
        solution = gibbs.is_solution(),
        "loaded Gibbs spline"
    );
    Ok(gibbs)
}

fn points_from_axes(args: &EvalArgs) -> CliResult<PointSet> {
    let p = args.p.as_deref().ok_or(CliError::MissingAxis("pressure"))?;
    let t = args.t.as_deref().ok_or(CliError::MissingAxis("temperature"))?;
    let mut axes = vec![parse_range(p)?, parse_range(t)?];
    if let Some(m) = &args.m {
        axes.push(parse_range(m)?);
    }
    Ok(PointSet::Grid(axes))
}

fn load_points(path: &Path) -> CliResult<PointSet> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_points(&text).map_err(|source| CliError::PointsFile {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_points(text: &str) -> Result<PointSet, serde_yaml::Error> {
    serde_yaml::from_str(text)
}

fn load_options(path: &Path) -> CliResult<EvalOptions> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| CliError::OptionsFile {
        path: path.to_path_buf(),
        source,
    })
}
