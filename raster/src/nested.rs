use core_types::{MAX_DIMS, RasterError, Result};
use serde::{Deserialize, Serialize};

/// Multi-dimensional data as sequences of sequences, before flattening.
///
/// Deserializes from plain nested arrays of numbers, e.g. `[[1, 2], [3, 4]]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested {
    Scalar(f64),
    List(Vec<Nested>),
}

impl Nested {
    /// Shape implied by the nesting: one entry per level, taken from the
    /// first element at each depth.
    pub fn infer_shape(&self) -> Result<Vec<usize>> {
        let mut shape = Vec::new();
        let mut node = self;
        while let Nested::List(items) = node {
            if items.is_empty() {
                return Err(RasterError::Data(format!(
                    "empty sequence at depth {}",
                    shape.len()
                )));
            }
            if shape.len() == MAX_DIMS {
                return Err(RasterError::Data(format!(
                    "nesting deeper than {MAX_DIMS} levels"
                )));
            }
            shape.push(items.len());
            node = &items[0];
        }
        if shape.is_empty() {
            return Err(RasterError::Data("expected a sequence, found a scalar".into()));
        }
        Ok(shape)
    }

    /// Shape and row-major values, checking every level is regular.
    pub fn flatten(&self) -> Result<(Vec<usize>, Vec<f64>)> {
        let shape = self.infer_shape()?;
        let mut values = Vec::new();
        self.collect_into(&shape, 0, &mut values)?;
        Ok((shape, values))
    }

    fn collect_into(&self, shape: &[usize], depth: usize, out: &mut Vec<f64>) -> Result<()> {
        match (self, shape.get(depth)) {
            (Nested::Scalar(v), None) => {
                out.push(*v);
                Ok(())
            }
            (Nested::List(items), Some(&len)) => {
                if items.len() != len {
                    return Err(RasterError::Data(format!(
                        "irregular nesting at depth {depth}: expected {len} elements, found {}",
                        items.len()
                    )));
                }
                items
                    .iter()
                    .try_for_each(|item| item.collect_into(shape, depth + 1, out))
            }
            (Nested::Scalar(_), Some(_)) => Err(RasterError::Data(format!(
                "irregular nesting at depth {depth}: expected a sequence, found a scalar"
            ))),
            (Nested::List(_), None) => Err(RasterError::Data(format!(
                "irregular nesting at depth {depth}: expected a scalar, found a sequence"
            ))),
        }
    }
}

impl From<f64> for Nested {
    fn from(v: f64) -> Self {
        Nested::Scalar(v)
    }
}

impl<T: Into<Nested>> From<Vec<T>> for Nested {
    fn from(items: Vec<T>) -> Self {
        Nested::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Nested>, const N: usize> From<[T; N]> for Nested {
    fn from(items: [T; N]) -> Self {
        Nested::List(items.into_iter().map(Into::into).collect())
    }
}
