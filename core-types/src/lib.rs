mod error;

use std::fmt;
use std::str::FromStr;

pub use error::{RasterError, Result};

include!("generated_data_types.rs");

/// Deepest nesting accepted when flattening nested input
pub const MAX_DIMS: usize = 32;

/// Storage class of a dtype
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericClass {
    Unsigned,
    Signed,
    Float,
}

/// Inclusive `[min, max]` range of a dtype
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DataType {
    type Err = RasterError;

    fn from_str(tag: &str) -> Result<Self> {
        DataType::from_tag(tag)
            .ok_or_else(|| RasterError::Configuration(format!("invalid dtype `{tag}`")))
    }
}

pub fn is_valid_dtype(tag: &str) -> bool {
    DataType::from_tag(tag).is_some()
}

pub fn bounds_of(dtype: DataType) -> Bounds<f64> {
    dtype.bounds()
}

/// The storage kind of a typed buffer is its element type.
pub fn infer_dtype<T: Element>(_buffer: &[T]) -> DataType {
    T::DTYPE
}
