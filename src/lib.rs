//! Fixed-width N-dimensional numeric rasters.
//!
//! A [`Raster`] interprets a flat buffer through a shape and row-major
//! strides. Its element type bounds every write: out-of-range values are
//! clamped to the dtype's range rather than wrapped.
//!
//! Typed code works with [`Raster<'a, T>`] directly; [`RasterAny`] covers
//! the case where the dtype is only known at runtime.

pub use core_types::{
    ALL_DATA_TYPES, Bounds, DataType, Element, MAX_DIMS, NumericClass, RasterError, Result,
    bounds_of, infer_dtype, is_valid_dtype, with_element_type,
};
pub use memory::Storage;
pub use raster::{
    Nested, Positions, Raster, SliceOptions, compute_strides, derive_strides, element_count,
    next_position,
};
pub use raster_dyn::{AnyElement, FlatBuffer, Input, RasterAny, RasterOptions};
