//! Spline derivatives needed by a closure.

use std::collections::BTreeSet;

use gf_core::{Real, Timer};
use gf_spline::{BSpline, SplineEvaluator};
use gf_vars::{DerivOrders, GibbsDerivatives, VarDescriptor};
use tracing::debug;

use crate::error::EvalResult;

/// Distinct derivatives consumed by `closure`, in a stable order.
pub fn required_derivatives(closure: &[&VarDescriptor]) -> Vec<DerivOrders> {
    closure
        .iter()
        .flat_map(|v| v.derivs.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Evaluate each requested derivative once on `axes`.
pub fn compute_derivatives<E: SplineEvaluator + ?Sized>(
    evaluator: &E,
    spline: &BSpline,
    axes: &[Vec<Real>],
    requests: &[DerivOrders],
) -> EvalResult<GibbsDerivatives> {
    let mut derivs = GibbsDerivatives::new();
    for &orders in requests {
        if derivs.contains(orders) {
            continue;
        }
        let timer = Timer::start(orders.name());
        let values = evaluator.evaluate(spline, axes, &orders.directive(spline.dim_count()))?;
        let (label, seconds) = timer.stop();
        debug!(deriv = %label, evaluator = evaluator.name(), seconds, "evaluated spline derivative");
        derivs.insert(orders, values);
    }
    Ok(derivs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_spline::TensorBSplineEvaluator;
    use gf_vars::Registry;
    use ndarray::{ArrayD, IxDyn};

    #[test]
    fn requests_are_distinct() {
        let registry = Registry::standard();
        let closure: Vec<_> = ["Kt", "Kp", "rho", "vel"]
            .iter()
            .filter_map(|n| registry.get(n))
            .collect();
        let requests = required_derivatives(&closure);
        assert_eq!(requests.len(), 5);
        for orders in [
            DerivOrders::D1P,
            DerivOrders::D2P,
            DerivOrders::D2T,
            DerivOrders::D2PT,
            DerivOrders::D3P,
        ] {
            assert!(requests.contains(&orders), "{orders}");
        }
    }

    #[test]
    fn derivatives_are_shaped_to_the_axes() {
        let spline = BSpline::new(
            vec![vec![0.0, 0.0, 1.0, 1.0], vec![0.0, 0.0, 1.0, 1.0]],
            vec![2, 2],
            ArrayD::from_shape_vec(IxDyn(&[2, 2]), vec![0.0, 1.0, 2.0, 3.0]).unwrap(),
        )
        .unwrap();
        let axes = vec![vec![0.0, 0.5, 1.0], vec![0.25, 0.75]];
        let derivs = compute_derivatives(
            &TensorBSplineEvaluator,
            &spline,
            &axes,
            &[DerivOrders::G, DerivOrders::D1P, DerivOrders::G],
        )
        .unwrap();
        assert_eq!(derivs.len(), 2);
        assert_eq!(derivs.get(DerivOrders::G).unwrap().shape(), &[3, 2]);
        // f = 2p + t
        let d1p = derivs.get(DerivOrders::D1P).unwrap();
        assert!(d1p.iter().all(|&v| (v - 2.0).abs() < 1e-12));
    }
}
