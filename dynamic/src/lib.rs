#[macro_use]
pub mod types;
mod options;
mod resolve;

use core_types::{Bounds, DataType, Element, Result, with_element_type};
use raster::{Raster, SliceOptions};

pub use options::RasterOptions;
pub use resolve::Input;
pub use types::{AnyElement, FlatBuffer, RasterAny};

impl<'a> RasterAny<'a> {
    /* --------------------------------------------------------------------- */
    /* Accessors                                                             */
    /* --------------------------------------------------------------------- */

    pub fn shape(&self) -> &[usize] {
        dispatch_any!(self, r => r.shape())
    }

    pub fn strides(&self) -> &[usize] {
        dispatch_any!(self, r => r.strides())
    }

    pub fn dimensions(&self) -> usize {
        dispatch_any!(self, r => r.dimensions())
    }

    pub fn len(&self) -> usize {
        dispatch_any!(self, r => r.len())
    }

    pub fn is_empty(&self) -> bool {
        dispatch_any!(self, r => r.is_empty())
    }

    /// Saturation range of the dtype, widened to `f64`
    pub fn bounds(&self) -> Bounds<f64> {
        self.dtype().bounds()
    }

    pub fn as_bytes(&self) -> &[u8] {
        dispatch_any!(self, r => r.as_bytes())
    }

    pub fn is_borrowed(&self) -> bool {
        dispatch_any!(self, r => r.is_borrowed())
    }

    /* --------------------------------------------------------------------- */
    /* Typed access                                                          */
    /* --------------------------------------------------------------------- */

    pub fn as_raster<T: AnyElement>(&self) -> Option<&Raster<'a, T>> {
        T::downcast_ref(self)
    }

    pub fn as_raster_mut<T: AnyElement>(&mut self) -> Option<&mut Raster<'a, T>> {
        T::downcast_mut(self)
    }

    pub fn into_raster<T: AnyElement>(self) -> Option<Raster<'a, T>> {
        T::downcast(self)
    }

    /* --------------------------------------------------------------------- */
    /* Addressing                                                            */
    /* --------------------------------------------------------------------- */

    /// Read the element at `position`, widened to `f64`.
    pub fn get_f64(&self, position: &[usize]) -> Result<f64> {
        dispatch_any!(self, r => r.get(position).map(f64::saturating_from))
    }

    /// Write `value` at `position`, saturated into the dtype's range.
    pub fn set_f64(&mut self, position: &[usize], value: f64) -> Result<()> {
        dispatch_any!(self, r => r.set(position, value))
    }

    pub fn reshape(&mut self, shape: &[usize]) -> Result<()> {
        dispatch_any!(self, r => r.reshape(shape))
    }

    /* --------------------------------------------------------------------- */
    /* Copy / cast / slice                                                   */
    /* --------------------------------------------------------------------- */

    /// Owned copy, converted into `dtype` when given.
    pub fn copy(&self, dtype: Option<DataType>) -> RasterAny<'static> {
        match dtype {
            Some(dtype) => self.as_type(dtype),
            None => dispatch_any!(self, r => RasterAny::from(r.copy())),
        }
    }

    pub fn as_type(&self, dtype: DataType) -> RasterAny<'static> {
        dispatch_any!(self, r => with_element_type!(dtype, U => {
            RasterAny::from(r.as_type::<U>())
        }))
    }

    /// Owned copy of a region, converted into `dtype` (default: this
    /// raster's dtype).
    pub fn slice(
        &self,
        options: &SliceOptions,
        dtype:   Option<DataType>,
    ) -> Result<RasterAny<'static>> {
        let dtype = dtype.unwrap_or(self.dtype());
        dispatch_any!(self, r => with_element_type!(dtype, U => {
            r.slice_as::<U>(options).map(RasterAny::from)
        }))
    }
}

/* ------------------------------------------------------------------------- */
/*                                     Tests                                 */
/* ------------------------------------------------------------------------- */
