use crate::{MeshError, Number, Result};

/// Upper bound on the number of samples along one axis and on the number of
/// points in one grid.
pub const MAX_POINTS: usize = 1 << 28;

#[inline]
pub(crate) fn check_step(step: Number) -> Result<()> {
    if step.is_finite() && step > 0.0 {
        Ok(())
    } else {
        Err(MeshError::InvalidStep(step))
    }
}

#[inline]
pub(crate) fn check_points(count: u64) -> Result<usize> {
    if count > MAX_POINTS as u64 {
        return Err(MeshError::TooManySamples { count, limit: MAX_POINTS });
    }

    Ok(count as usize)
}

/// Float to count, saturating. NaN comes from an unbounded span.
#[inline]
fn saturating_count(count: Number) -> u64 {
    if count.is_nan() { u64::MAX } else { count as u64 }
}

/// Number of samples `start + i * step` strictly below `end`.
///
/// Zero when `end <= start`.
pub fn sample_count(start: Number, end: Number, step: Number) -> Result<usize> {
    check_step(step)?;

    let quotient = ((end - start) / step).ceil();
    if quotient <= 0.0 {
        return Ok(0);
    }

    let mut count = check_points(saturating_count(quotient))?;

    // rounding in the quotient can put the last sample on or past `end`
    while count > 0 && start + (count - 1) as Number * step >= end {
        count -= 1;
    }

    Ok(count)
}

/// Evenly spaced values in the half-open interval `[start, end)`.
///
/// Each value is computed from its index rather than by repeated addition, so
/// rounding does not accumulate along the range.
pub fn arange(start: Number, end: Number, step: Number) -> Result<Vec<Number>> {
    let count = sample_count(start, end, step)?;

    Ok(samples(start, step, count))
}

#[inline]
pub(crate) fn samples(start: Number, step: Number, count: usize) -> Vec<Number> {
    (0..count).map(|index| start + index as Number * step).collect()
}
