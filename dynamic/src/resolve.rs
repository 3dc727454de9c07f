use core_types::{RasterError, Result, with_element_type};
use derive_more::From;
use raster::{Nested, Raster};
use tracing::debug;

use crate::options::RasterOptions;
use crate::types::{FlatBuffer, RasterAny};

/// Data handed to [`RasterAny::new`].
#[derive(Debug, From)]
pub enum Input<'a> {
    /// A typed, caller-owned buffer; may be aliased.
    Flat(FlatBuffer<'a>),
    /// Nested sequences; always flattened into a new buffer.
    Nested(Nested),
}

impl<'a> RasterAny<'a> {
    /// Build a raster from optional data and construction options.
    ///
    /// - no data: a zero-filled raster of `options.shape`
    /// - nested data: flattened and converted into `options.dtype`
    /// - a flat buffer of `options.dtype` without `copy`: aliased in place
    /// - any other flat buffer: copied and converted into `options.dtype`
    ///
    /// An explicit `options.shape` always wins over the shape implied by
    /// the data, but must describe the same number of elements.
    pub fn new(data: Option<Input<'a>>, options: &RasterOptions) -> Result<Self> {
        let shape = options.shape.as_deref();
        match data {
            None => {
                let shape = shape.ok_or_else(|| {
                    RasterError::Configuration("neither data nor shape supplied".into())
                })?;
                debug!(?shape, dtype = %options.dtype, "allocating zeroed raster");
                with_element_type!(options.dtype, T => {
                    Raster::<T>::zeros(shape).map(RasterAny::from)
                })
            }
            Some(Input::Nested(nested)) => with_element_type!(options.dtype, T => {
                Raster::<T>::from_nested(&nested, shape).map(RasterAny::from)
            }),
            Some(Input::Flat(buffer)) => Self::from_flat(buffer, options),
        }
    }

    fn from_flat(buffer: FlatBuffer<'a>, options: &RasterOptions) -> Result<Self> {
        let shape = options.shape.as_deref();
        if buffer.dtype() == options.dtype && !options.copy {
            return dispatch_flat!(buffer, data => {
                Raster::borrowed(data, shape).map(RasterAny::from)
            });
        }
        dispatch_flat!(buffer, data => with_element_type!(options.dtype, T => {
            Raster::<T>::from_slice(&*data, shape).map(RasterAny::from)
        }))
    }
}

impl<'a, T> From<&'a mut [T]> for Input<'a>
where
    FlatBuffer<'a>: From<&'a mut [T]>,
{
    fn from(data: &'a mut [T]) -> Self {
        Input::Flat(FlatBuffer::from(data))
    }
}
