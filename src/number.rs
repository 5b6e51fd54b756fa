use std::cmp::Ordering;

use crate::{Axis, MeshError, Result};

pub type Number = f64;

#[inline]
pub fn cmp_number(lhs: Number, rhs: Number) -> Ordering {
    if lhs < rhs {
        Ordering::Less
    } else if lhs > rhs {
        Ordering::Greater
    } else {
        // all NaNs are equal
        Ordering::Equal
    }
}

#[inline]
pub fn cmp_number_ref(lhs: &Number, rhs: &Number) -> Ordering {
    cmp_number(*lhs, *rhs)
}

/// Smallest and largest value of `values`.
///
/// Fails on empty input and on NaN or infinite values, since neither has a
/// meaningful extent.
pub fn bounds(values: &[Number], axis: Axis) -> Result<(Number, Number)> {
    let Some(&first) = values.first() else {
        return Err(MeshError::EmptyInput { axis });
    };

    let mut min = first;
    let mut max = first;

    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(MeshError::NonFiniteInput { axis, index });
        }
        if cmp_number(value, min).is_lt() {
            min = value;
        }
        if cmp_number(value, max).is_gt() {
            max = value;
        }
    }

    Ok((min, max))
}
