//! Univariate B-spline basis functions and their derivatives.
//!
//! Follows the Cox-de Boor recurrence in the triangular-table form
//! (Piegl & Tiller, "The NURBS Book", algorithms A2.1 and A2.3).

use gf_core::Real;
use ndarray::Array2;

/// Index of the knot span used to evaluate `x`.
///
/// Returns the largest `i` in `[order-1, number-1]` with `knots[i] <= x` and
/// `knots[i] < knots[i+1]`. Points left of the basis domain use the first
/// span of positive width and points right of it use the last, so evaluation
/// outside the knots extends the end polynomials.
pub fn find_span(knots: &[Real], order: usize, number: usize, x: Real) -> usize {
    let degree = order - 1;
    let (mut lo, mut hi) = (degree, number - 1);
    if x >= knots[hi] {
        // end knots repeated beyond the order leave empty spans at the top
        while hi > lo && knots[hi] >= knots[hi + 1] {
            hi -= 1;
        }
        return hi;
    }
    if x < knots[lo + 1] {
        while lo < hi && knots[lo] >= knots[lo + 1] {
            lo += 1;
        }
        return lo;
    }
    // Invariant: knots[lo] <= x < knots[hi]
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if x < knots[mid] {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    lo
}

/// Nonzero basis functions at `x` and their derivatives up to `n_ders`.
///
/// `ders[k][j]` is the k-th derivative of basis function `span - degree + j`.
/// Derivatives above the polynomial degree are zero.
pub fn ders_basis_funs(knots: &[Real], order: usize, span: usize, x: Real, n_ders: usize) -> Vec<Vec<Real>> {
    let p = order - 1;
    let mut ndu = vec![vec![0.0; p + 1]; p + 1];
    let mut left = vec![0.0; p + 1];
    let mut right = vec![0.0; p + 1];
    ndu[0][0] = 1.0;

    for j in 1..=p {
        left[j] = x - knots[span + 1 - j];
        right[j] = knots[span + j] - x;
        let mut saved = 0.0;
        for r in 0..j {
            // lower triangle holds knot differences
            ndu[j][r] = right[r + 1] + left[j - r];
            let temp = ndu[r][j - 1] / ndu[j][r];
            // upper triangle holds basis values
            ndu[r][j] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        ndu[j][j] = saved;
    }

    let mut ders = vec![vec![0.0; p + 1]; n_ders + 1];
    for j in 0..=p {
        ders[0][j] = ndu[j][p];
    }

    let top = n_ders.min(p);
    let mut a = vec![vec![0.0; p + 1]; 2];
    for r in 0..=p {
        let (mut s1, mut s2) = (0, 1);
        a[0][0] = 1.0;
        for k in 1..=top {
            let mut d = 0.0;
            let rk = r as isize - k as isize;
            let pk = p - k;
            if rk >= 0 {
                let rk = rk as usize;
                a[s2][0] = a[s1][0] / ndu[pk + 1][rk];
                d = a[s2][0] * ndu[rk][pk];
            }
            let j1 = if rk >= -1 { 1 } else { (-rk) as usize };
            let j2 = if r <= pk + 1 { k - 1 } else { p - r };
            for j in j1..=j2 {
                let idx = (rk + j as isize) as usize;
                a[s2][j] = (a[s1][j] - a[s1][j - 1]) / ndu[pk + 1][idx];
                d += a[s2][j] * ndu[idx][pk];
            }
            if r <= pk {
                a[s2][k] = -a[s1][k - 1] / ndu[pk + 1][r];
                d += a[s2][k] * ndu[r][pk];
            }
            ders[k][r] = d;
            std::mem::swap(&mut s1, &mut s2);
        }
    }

    let mut factor = p as Real;
    for k in 1..=top {
        for value in ders[k].iter_mut() {
            *value *= factor;
        }
        factor *= (p - k) as Real;
    }
    ders
}

/// Collocation matrix of the `deriv`-th derivative of every basis function.
///
/// Row `i` holds the basis derivatives at `xs[i]`; the matrix has one column
/// per coefficient.
pub fn basis_matrix(knots: &[Real], order: usize, number: usize, xs: &[Real], deriv: usize) -> Array2<Real> {
    let degree = order - 1;
    let mut out = Array2::zeros((xs.len(), number));
    if deriv > degree {
        return out;
    }
    for (i, &x) in xs.iter().enumerate() {
        let span = find_span(knots, order, number, x);
        let ders = ders_basis_funs(knots, order, span, x, deriv);
        for (j, &value) in ders[deriv].iter().enumerate() {
            out[[i, span - degree + j]] = value;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_core::{Tolerances, nearly_equal};

    const TOL: Tolerances = Tolerances {
        abs: 1e-12,
        rel: 1e-10,
    };

    fn cubic_knots() -> Vec<Real> {
        vec![0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0, 3.0, 3.0]
    }

    #[test]
    fn span_lookup_clamps_to_domain() {
        let knots = cubic_knots();
        // order 4, 6 coefficients: spans 3..=5
        assert_eq!(find_span(&knots, 4, 6, -1.0), 3);
        assert_eq!(find_span(&knots, 4, 6, 0.0), 3);
        assert_eq!(find_span(&knots, 4, 6, 1.5), 4);
        assert_eq!(find_span(&knots, 4, 6, 2.0), 5);
        assert_eq!(find_span(&knots, 4, 6, 3.0), 5);
        assert_eq!(find_span(&knots, 4, 6, 7.0), 5);
    }

    #[test]
    fn span_lookup_skips_empty_end_spans() {
        // order 2, 3 coefficients: span 2 is [1, 1]
        let knots = vec![0.0, 0.0, 1.0, 1.0, 1.0];
        assert_eq!(find_span(&knots, 2, 3, 0.5), 1);
        assert_eq!(find_span(&knots, 2, 3, 1.0), 1);
        assert_eq!(find_span(&knots, 2, 3, 2.0), 1);

        // same at the lower end: span 1 is [0, 0]
        let knots = vec![0.0, 0.0, 0.0, 1.0, 1.0];
        assert_eq!(find_span(&knots, 2, 3, -1.0), 2);
        assert_eq!(find_span(&knots, 2, 3, 0.0), 2);
    }

    #[test]
    fn repeated_end_knot_gives_finite_basis() {
        let knots = vec![0.0, 0.0, 1.0, 1.0, 1.0];
        for deriv in 0..2 {
            let m = basis_matrix(&knots, 2, 3, &[0.0, 0.5, 1.0], deriv);
            assert!(m.iter().all(|v| v.is_finite()), "{m:?}");
        }
        let m = basis_matrix(&knots, 2, 3, &[1.0], 0);
        assert!(nearly_equal(m[[0, 0]], 0.0, TOL));
        assert!(nearly_equal(m[[0, 1]], 1.0, TOL));
        assert_eq!(m[[0, 2]], 0.0);
    }

    #[test]
    fn partition_of_unity() {
        let knots = cubic_knots();
        for &x in &[0.0, 0.3, 1.0, 1.7, 2.5, 3.0] {
            let span = find_span(&knots, 4, 6, x);
            let ders = ders_basis_funs(&knots, 4, span, x, 2);
            let sum: Real = ders[0].iter().sum();
            assert!(nearly_equal(sum, 1.0, TOL), "sum = {sum} at x = {x}");
            // derivatives of a constant vanish
            assert!(ders[1].iter().sum::<Real>().abs() < 1e-10);
            assert!(ders[2].iter().sum::<Real>().abs() < 1e-10);
        }
    }

    #[test]
    fn derivatives_above_degree_are_zero() {
        let knots = vec![0.0, 0.0, 1.0, 1.0];
        let m = basis_matrix(&knots, 2, 2, &[0.25, 0.75], 2);
        assert!(m.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn linear_basis_values() {
        let knots = vec![0.0, 0.0, 1.0, 1.0];
        let m = basis_matrix(&knots, 2, 2, &[0.25], 0);
        assert!(nearly_equal(m[[0, 0]], 0.75, TOL));
        assert!(nearly_equal(m[[0, 1]], 0.25, TOL));

        let d = basis_matrix(&knots, 2, 2, &[0.25], 1);
        assert!(nearly_equal(d[[0, 0]], -1.0, TOL));
        assert!(nearly_equal(d[[0, 1]], 1.0, TOL));
    }
}
