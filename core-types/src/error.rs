use thiserror::Error;

/// Every failure a raster operation can report.
///
/// Saturating a value into a dtype's range is never an error; only
/// malformed requests end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// Construction was asked for something it cannot build: no data and
    /// no shape, an unknown dtype tag, a malformed shape, or a shape whose
    /// element count disagrees with the data.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A reshape or slice request does not fit the raster.
    #[error("shape error: {0}")]
    Shape(String),

    /// A coordinate has the wrong arity or lies outside the raster.
    #[error("position error: {0}")]
    Position(String),

    /// A value cannot be stored at all (e.g. `NaN`).
    #[error("value error: {0}")]
    Value(String),

    /// Input data is neither a typed buffer nor a regular nested sequence.
    #[error("data error: {0}")]
    Data(String),
}

pub type Result<T, E = RasterError> = std::result::Result<T, E>;
