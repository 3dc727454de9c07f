use core_types::{RasterError, Result};

/// Computes row-major strides for `shape` without validating it.
pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let n = shape.len();
    let mut strides = vec![0; n];
    if n == 0 {
        return strides;
    }
    // The last dimension has stride 1
    strides[n - 1] = 1;
    for i in (0..n - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Number of elements `shape` describes, or `None` if it overflows `usize`.
pub fn element_count(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

/// [`element_count`], reporting overflow as a shape error.
pub(crate) fn checked_element_count(shape: &[usize]) -> Result<usize> {
    element_count(shape).ok_or_else(|| {
        RasterError::Shape(format!("shape {shape:?} describes more than usize::MAX elements"))
    })
}

/// Validating variant of [`compute_strides`]: `shape` must be non-empty
/// with positive entries and, when `expected_len` is given, describe
/// exactly that many elements.
pub fn derive_strides(shape: &[usize], expected_len: Option<usize>) -> Result<Vec<usize>> {
    if shape.is_empty() {
        return Err(RasterError::Shape("shape must have at least one dimension".into()));
    }
    if let Some(axis) = shape.iter().position(|&d| d == 0) {
        return Err(RasterError::Shape(format!(
            "shape {shape:?} has a non-positive extent on axis {axis}"
        )));
    }
    let count = checked_element_count(shape)?;
    if let Some(len) = expected_len {
        if count != len {
            return Err(RasterError::Shape(format!(
                "shape {shape:?} describes {count} elements, buffer holds {len}"
            )));
        }
    }
    Ok(compute_strides(shape))
}

/// Construction reports shape problems as configuration errors.
pub(crate) fn as_configuration_error(err: RasterError) -> RasterError {
    match err {
        RasterError::Shape(msg) => RasterError::Configuration(msg),
        other => other,
    }
}
