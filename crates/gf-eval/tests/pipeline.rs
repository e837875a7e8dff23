mod common;

use common::{counting_engine, pure_spline, solution_spline};
use gf_core::{MW_WATER, PointSet, Real, Tolerances, nearly_equal, stepped_range};
use gf_eval::{EvalError, EvalOptions, EvalWarning, Parameters, eval_solution_gibbs};
use gf_spline::GibbsSpline;
use gf_vars::Registry;
use ndarray::{Axis, Slice};

const MW_NACL: Real = 0.058_44;

#[test]
fn pure_grid_with_default_variables() {
    let engine = counting_engine(EvalOptions::default());
    let gibbs = GibbsSpline::pure(pure_spline(), MW_WATER).unwrap();
    let points = PointSet::grid_pt(stepped_range(0.0, 3000.0, 200.0), stepped_range(0.0, 400.0, 50.0));

    let states = engine.evaluate_gibbs(&gibbs, &points, &[]).unwrap();

    assert_eq!(states.len(), Registry::standard().default_set(2).len());
    for (name, values) in states.iter() {
        assert_eq!(values.shape(), &[16, 9], "{name}");
    }
    assert!(states.warnings().is_empty());
    assert!(states.added().is_empty());
    assert_eq!(states.points(), &points);
    // G, d1P, d1T, d2P, d2T, d2PT, d3P
    assert_eq!(engine.evaluator().calls(), 7);
}

#[test]
fn added_dependencies_are_reported() {
    let engine = counting_engine(EvalOptions::default());
    let points = PointSet::grid_pt(vec![100.0, 200.0], vec![300.0]);
    let states = engine
        .evaluate(&pure_spline(), &points, &["Cv"], &Parameters::default())
        .unwrap();
    let mut added = states.added().to_vec();
    added.sort_unstable();
    assert_eq!(added, vec!["Cp", "Kt", "alpha", "rho"]);
    assert_eq!(states.len(), 5);
}

#[test]
fn missing_solvent_weight_fails_before_evaluation() {
    let engine = counting_engine(EvalOptions::default());
    let points = PointSet::grid_ptm(vec![10.0], vec![300.0], vec![0.0, 1.0]);
    let params = Parameters {
        mw_solvent: Some(0.0),
        ..Parameters::aqueous(MW_NACL, 2)
    };
    let err = engine
        .evaluate(&solution_spline(0.0), &points, &["muw", "rho"], &params)
        .unwrap_err();
    match err {
        EvalError::MissingParameter { variables, .. } => assert_eq!(variables, vec!["muw"]),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(engine.evaluator().calls(), 0);
}

#[test]
fn spline_without_zero_molality_fails_before_evaluation() {
    let engine = counting_engine(EvalOptions::default());
    let points = PointSet::grid_ptm(vec![10.0], vec![300.0], vec![1.0, 2.0]);
    let err = engine
        .evaluate(&solution_spline(0.5), &points, &["aw"], &Parameters::aqueous(MW_NACL, 2))
        .unwrap_err();
    assert!(matches!(err, EvalError::IncompatibleSpline { ref variables, .. } if variables == &["aw"]));
    assert_eq!(engine.evaluator().calls(), 0);
}

#[test]
fn pure_spline_cannot_give_solution_variables() {
    let engine = counting_engine(EvalOptions::default());
    let points = PointSet::grid_pt(vec![10.0], vec![300.0]);
    let err = engine
        .evaluate(&pure_spline(), &points, &["mus"], &Parameters::aqueous(MW_NACL, 2))
        .unwrap_err();
    assert!(matches!(err, EvalError::DimensionMismatch { ref variables, .. } if variables == &["mus"]));
    assert_eq!(engine.evaluator().calls(), 0);
}

#[test]
fn injected_zero_matches_explicit_zero() {
    let engine = counting_engine(EvalOptions::default());
    let spline = solution_spline(0.0);
    let params = Parameters::aqueous(MW_NACL, 2);
    let requested = ["Va", "Cpa", "phi", "aw", "mus"];
    let (p, t) = (vec![5.0, 50.0], vec![280.0, 300.0, 350.0]);

    let implicit = PointSet::grid_ptm(p.clone(), t.clone(), vec![0.5, 1.0, 2.0]);
    let explicit = PointSet::grid_ptm(p, t, vec![0.0, 0.5, 1.0, 2.0]);
    let without = engine.evaluate(&spline, &implicit, &requested, &params).unwrap();
    let with = engine.evaluate(&spline, &explicit, &requested, &params).unwrap();

    assert_eq!(without.points(), &implicit);
    assert_eq!(without.len(), with.len());
    let tol = Tolerances {
        abs: 1e-12,
        rel: 1e-12,
    };
    for (name, stripped) in without.iter() {
        assert_eq!(stripped.shape(), &[2, 3, 3], "{name}");
        let full = with.get(name).unwrap();
        let tail = full.slice_axis(Axis(2), Slice::from(1..));
        for (a, b) in stripped.iter().zip(tail.iter()) {
            assert!(nearly_equal(*a, *b, tol), "{name}: {a} vs {b}");
        }
    }
}

#[test]
fn single_points_give_one_element_arrays() {
    let engine = counting_engine(EvalOptions::default());

    let ptm = PointSet::Point(vec![10.0, 300.0, 1.0]);
    let states = engine
        .evaluate(&solution_spline(0.0), &ptm, &["aw", "Va", "Cp"], &Parameters::aqueous(MW_NACL, 2))
        .unwrap();
    for (name, values) in states.iter() {
        assert_eq!(values.shape(), &[1, 1, 1], "{name}");
    }

    let pt = PointSet::Point(vec![100.0, 300.0]);
    let states = engine
        .evaluate(&pure_spline(), &pt, &["rho", "vel"], &Parameters::default())
        .unwrap();
    for (name, values) in states.iter() {
        assert_eq!(values.shape(), &[1, 1], "{name}");
    }
}

#[test]
fn extrapolation_follows_policy() {
    let points = PointSet::grid_pt(vec![100.0, 4000.0], vec![300.0]);

    let strict = counting_engine(EvalOptions::default());
    let err = strict
        .evaluate(&pure_spline(), &points, &["G"], &Parameters::default())
        .unwrap_err();
    assert!(matches!(err, EvalError::Extrapolation { .. }));
    assert_eq!(strict.evaluator().calls(), 0);

    let lenient = counting_engine(EvalOptions::default().allow_extrapolation());
    let states = lenient
        .evaluate(&pure_spline(), &points, &["G"], &Parameters::default())
        .unwrap();
    assert_eq!(states.warnings().len(), 1);
    assert!(matches!(states.warnings()[0], EvalWarning::Extrapolation { .. }));
    assert_eq!(states.get("G").unwrap().shape(), &[2, 1]);
}

#[test]
fn parallel_batches_match_serial() {
    let points = PointSet::grid_ptm(vec![5.0, 50.0], vec![300.0], vec![0.5, 2.0]);
    let params = Parameters::aqueous(MW_NACL, 2);
    let serial = counting_engine(EvalOptions::default())
        .evaluate(&solution_spline(0.0), &points, &[], &params)
        .unwrap();
    let parallel = counting_engine(EvalOptions::default().with_parallel_batches(true))
        .evaluate(&solution_spline(0.0), &points, &[], &params)
        .unwrap();

    assert_eq!(serial.len(), Registry::standard().len());
    for (name, values) in serial.iter() {
        let other = parallel.get(name).unwrap();
        for (a, b) in values.iter().zip(other.iter()) {
            assert!(a.to_bits() == b.to_bits(), "{name}: {a} vs {b}");
        }
    }
}

#[test]
fn solution_gibbs_spline_carries_its_parameters() {
    let gibbs = GibbsSpline::solution(solution_spline(0.0), MW_WATER, MW_NACL, 2).unwrap();
    let points = PointSet::grid_ptm(vec![10.0, 20.0], vec![300.0], vec![0.0, 1.0, 3.0]);
    let states = eval_solution_gibbs(&gibbs, &points, &["phi", "mus"]).unwrap();

    let phi = states.get("phi").unwrap();
    assert_eq!(phi.shape(), &[2, 1, 3]);
    assert_eq!(phi[[0, 0, 0]], 1.0);
    assert!(states.contains("muw"));
    assert!(states.contains("G"));
}
