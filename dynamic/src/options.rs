use core_types::{DataType, Result};
use serde::{Deserialize, Serialize};

/// Construction directives for [`RasterAny::new`](crate::RasterAny::new).
///
/// ```yaml
/// dtype: uint8
/// copy: true
/// shape: [4, 4]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterOptions {
    /// Storage type of the result, `float64` unless set
    pub dtype: DataType,
    /// Always allocate, even when a flat buffer could be aliased
    pub copy:  bool,
    /// Overrides the shape implied by the data
    pub shape: Option<Vec<usize>>,
}

impl RasterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dtype(mut self, dtype: DataType) -> Self {
        self.dtype = dtype;
        self
    }

    /// [`with_dtype`](Self::with_dtype) from a tag such as `"int16"`.
    pub fn with_dtype_tag(self, tag: &str) -> Result<Self> {
        Ok(self.with_dtype(tag.parse()?))
    }

    pub fn with_copy(mut self, copy: bool) -> Self {
        self.copy = copy;
        self
    }

    pub fn with_shape(mut self, shape: impl Into<Vec<usize>>) -> Self {
        self.shape = Some(shape.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use core_types::RasterError;

    use super::*;

    #[test]
    fn test_defaults() {
        let options = RasterOptions::new();
        assert_eq!(options.dtype, DataType::F64);
        assert!(!options.copy);
        assert_eq!(options.shape, None);
    }

    #[test]
    fn test_dtype_tag() {
        let options = RasterOptions::new().with_dtype_tag("int16").unwrap();
        assert_eq!(options.dtype, DataType::I16);
        let err = RasterOptions::new().with_dtype_tag("bfloat16").unwrap_err();
        assert!(matches!(err, RasterError::Configuration(_)));
    }

    #[test]
    fn test_from_yaml() {
        let options: RasterOptions =
            serde_yaml::from_str("dtype: uint8\ncopy: true\nshape: [4, 4]").unwrap();
        assert_eq!(
            options,
            RasterOptions::new()
                .with_dtype(DataType::U8)
                .with_copy(true)
                .with_shape([4, 4])
        );

        let options: RasterOptions = serde_yaml::from_str("shape: [3]").unwrap();
        assert_eq!(options.dtype, DataType::F64);

        assert!(serde_yaml::from_str::<RasterOptions>("dtype: uint7").is_err());
    }
}
