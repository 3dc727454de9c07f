use core_types::{Element, RasterError, Result};
use memory::{Storage, allocate_zeroed};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::Raster;
use crate::position::Positions;
use crate::utils::{checked_element_count, derive_strides};

/// Region selection for [`Raster::slice`].
///
/// `min` is inclusive and defaults to the origin; `max` is exclusive and
/// defaults to the shape. Out-of-range bounds are clamped unless `strict`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceOptions {
    pub min:    Option<Vec<isize>>,
    pub max:    Option<Vec<isize>>,
    pub strict: bool,
}

impl SliceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min(mut self, min: impl Into<Vec<isize>>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn with_max(mut self, max: impl Into<Vec<isize>>) -> Self {
        self.max = Some(max.into());
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn is_whole(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl<T: Element> Raster<'_, T> {
    /// Copy the region selected by `options` into a new, owned raster.
    pub fn slice(&self, options: &SliceOptions) -> Result<Raster<'static, T>> {
        self.slice_as::<T>(options)
    }

    /// [`Raster::slice`], converting into `U` with saturation.
    pub fn slice_as<U: Element>(&self, options: &SliceOptions) -> Result<Raster<'static, U>> {
        if options.is_whole() {
            return Ok(self.as_type::<U>());
        }
        let (min, max) = self.resolve_region(options)?;
        let shape: Vec<usize> = min.iter().zip(&max).map(|(lo, hi)| hi - lo).collect();
        let strides = derive_strides(&shape, None)?;

        let mut data = allocate_zeroed::<U>(checked_element_count(&shape)?);
        for (dst, position) in data.iter_mut().zip(Positions::new(min, max)) {
            *dst = U::saturating_from(self.get(&position)?);
        }
        Ok(Raster { shape, strides, data: Storage::Owned(data) })
    }

    /// Validate and clamp the slice bounds against this raster's shape.
    fn resolve_region(&self, options: &SliceOptions) -> Result<(Vec<usize>, Vec<usize>)> {
        let ndim = self.dimensions();
        let min = options.min.clone().unwrap_or_else(|| vec![0; ndim]);
        let max = options
            .max
            .clone()
            .unwrap_or_else(|| self.shape().iter().map(|&d| d as isize).collect());
        if min.len() != ndim || max.len() != ndim {
            return Err(RasterError::Shape(format!(
                "slice bounds have {} and {} entries, raster has {ndim} dimensions",
                min.len(),
                max.len()
            )));
        }

        let mut lo_out = Vec::with_capacity(ndim);
        let mut hi_out = Vec::with_capacity(ndim);
        for (axis, ((&lo, &hi), &size)) in min.iter().zip(&max).zip(self.shape()).enumerate() {
            let size = size as isize;
            if options.strict {
                if lo < 0 || lo >= size {
                    return Err(RasterError::Position(format!(
                        "slice min {lo} out of range for axis {axis} of size {size}"
                    )));
                }
                if hi < 1 || hi > size {
                    return Err(RasterError::Position(format!(
                        "slice max {hi} out of range for axis {axis} of size {size}"
                    )));
                }
            }
            let lo = lo.clamp(0, size);
            let hi = hi.clamp(0, size);
            if hi <= lo {
                return Err(RasterError::Shape(format!(
                    "empty slice region on axis {axis}: [{lo}, {hi})"
                )));
            }
            lo_out.push(lo as usize);
            hi_out.push(hi as usize);
        }
        trace!(min = ?lo_out, max = ?hi_out, "resolved slice region");
        Ok((lo_out, hi_out))
    }
}
