//! Removal of the injected zero-molality row.

use gf_core::{Dim, Real};
use gf_vars::VarValues;
use ndarray::{ArrayD, Axis, Slice};

/// Drop index 0 along the molality axis of every array.
pub fn strip_zero_molality(values: &mut VarValues) {
    for (_, array) in values.iter_mut() {
        *array = without_first_molality(array);
    }
}

fn without_first_molality(array: &ArrayD<Real>) -> ArrayD<Real> {
    let axis = Axis(Dim::M.index());
    if array.ndim() <= axis.index() || array.len_of(axis) == 0 {
        return array.clone();
    }
    array.slice_axis(axis, Slice::from(1..)).to_owned()
}
