use core_types::{Element, Result};
use memory::{Storage, allocate_zeroed, convert};
use tracing::debug;

use crate::Raster;
use crate::nested::Nested;
use crate::utils::{as_configuration_error, checked_element_count, derive_strides};

/* ------------------------------------------------------------------------- */
/* Owning constructors                                                       */
/* ------------------------------------------------------------------------- */

impl<T: Element> Raster<'static, T> {
    /// Allocate a zero-filled raster.
    pub fn zeros(shape: &[usize]) -> Result<Self> {
        derive_strides(shape, None).map_err(as_configuration_error)?;
        let len = checked_element_count(shape).map_err(as_configuration_error)?;
        let data = allocate_zeroed::<T>(len);
        Raster::assemble(Storage::Owned(data), Some(shape))
    }

    /// Take ownership of an already-typed vector. No conversion happens.
    /// Without a shape the raster is one-dimensional.
    pub fn from_vec(data: Vec<T>, shape: Option<&[usize]>) -> Result<Self> {
        Raster::assemble(Storage::Owned(data), shape)
    }

    /// Allocate a new buffer and copy `data` into it, saturating each
    /// element into `T`'s range.
    pub fn from_slice<S: Element>(data: &[S], shape: Option<&[usize]>) -> Result<Self> {
        debug!(len = data.len(), from = %S::DTYPE, to = %T::DTYPE, "copying caller buffer");
        Raster::assemble(Storage::Owned(convert::<S, T>(data)), shape)
    }

    /// Flatten nested sequences into a new buffer.
    ///
    /// The shape comes from the nesting unless `shape` overrides it, in
    /// which case it must describe the same number of elements.
    pub fn from_nested(data: &Nested, shape: Option<&[usize]>) -> Result<Self> {
        let (inferred, values) = data.flatten()?;
        debug!(shape = ?inferred, to = %T::DTYPE, "flattened nested input");
        let shape = shape.unwrap_or(&inferred);
        Raster::assemble(Storage::Owned(convert::<f64, T>(&values)), Some(shape))
    }
}

/* ------------------------------------------------------------------------- */
/* Aliasing constructor                                                      */
/* ------------------------------------------------------------------------- */

impl<'a, T: Element> Raster<'a, T> {
    /// Wrap caller-owned storage without allocating or converting.
    ///
    /// Writes through the raster land in `data`; the raster cannot outlive it.
    pub fn borrowed(data: &'a mut [T], shape: Option<&[usize]>) -> Result<Self> {
        debug!(len = data.len(), dtype = %T::DTYPE, "aliasing caller buffer");
        Raster::assemble(Storage::Borrowed(data), shape)
    }
}
