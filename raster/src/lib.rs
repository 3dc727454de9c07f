mod ingest;
mod nested;
mod position;
mod slice;
mod utils;

use core_types::{Bounds, DataType, Element, RasterError, Result};
use memory::{Storage, convert, duplicate};
use num_traits::ToPrimitive;

pub use nested::Nested;
pub use position::{Positions, next_position};
pub use slice::SliceOptions;
pub use utils::{compute_strides, derive_strides, element_count};

/// An N-dimensional, row-major view over a flat buffer of `T`.
///
/// The buffer is either owned by the raster or borrowed from the caller
/// for `'a`; rasters produced by [`Raster::copy`], [`Raster::as_type`] and
/// [`Raster::slice`] always own theirs.
#[derive(Debug)]
pub struct Raster<'a, T: Element> {
    shape:   Vec<usize>,
    strides: Vec<usize>,
    data:    Storage<'a, T>,
}

impl<'a, T: Element> Raster<'a, T> {
    /// Pair `data` with `shape` (or `[data.len()]`), checking the element count.
    /// Shape problems surface as configuration errors.
    pub(crate) fn assemble(data: Storage<'a, T>, shape: Option<&[usize]>) -> Result<Self> {
        let shape = match shape {
            Some(shape) => shape.to_vec(),
            None => vec![data.len()],
        };
        let strides =
            derive_strides(&shape, Some(data.len())).map_err(utils::as_configuration_error)?;
        Ok(Self { shape, strides, data })
    }

    /* --------------------------------------------------------------------- */
    /* Accessors                                                             */
    /* --------------------------------------------------------------------- */

    pub fn dtype(&self) -> DataType {
        T::DTYPE
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of dimensions
    pub fn dimensions(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a raster holds at least one element.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn bounds(&self) -> Bounds<T> {
        T::bounds()
    }

    /// The flat buffer, in row-major order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Direct mutable access to the flat buffer. Writes here bypass
    /// saturation, but every `T` is already in range.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// The flat buffer reinterpreted as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.data())
    }

    /// Whether the buffer aliases caller-owned storage.
    pub fn is_borrowed(&self) -> bool {
        self.data.is_borrowed()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    /* --------------------------------------------------------------------- */
    /* Addressing                                                            */
    /* --------------------------------------------------------------------- */

    /// Flat buffer offset of `position`, after checking its arity and that
    /// every coordinate lies inside the shape.
    pub fn offset_of(&self, position: &[usize]) -> Result<usize> {
        if position.len() != self.shape.len() {
            return Err(RasterError::Position(format!(
                "expected {} coordinates, got {}",
                self.shape.len(),
                position.len()
            )));
        }
        for (axis, (&p, &size)) in position.iter().zip(&self.shape).enumerate() {
            if p >= size {
                return Err(RasterError::Position(format!(
                    "coordinate {p} out of range for axis {axis} of size {size}"
                )));
            }
        }
        Ok(position.iter().zip(&self.strides).map(|(p, s)| p * s).sum())
    }

    pub fn get(&self, position: &[usize]) -> Result<T> {
        let offset = self.offset_of(position)?;
        Ok(self.data[offset])
    }

    /// Store `value` at `position`, clamped into `T`'s range.
    ///
    /// Fails without writing anything if the position is invalid or the
    /// value is `NaN`.
    pub fn set<V: Element>(&mut self, position: &[usize], value: V) -> Result<()> {
        let offset = self.offset_of(position)?;
        if ToPrimitive::to_f64(&value).is_some_and(f64::is_nan) {
            return Err(RasterError::Value(format!(
                "cannot store NaN in a {} raster",
                T::DTYPE
            )));
        }
        self.data[offset] = T::saturating_from(value);
        Ok(())
    }

    /// Reinterpret the buffer with a new shape of the same element count.
    /// Elements are not moved.
    pub fn reshape(&mut self, shape: &[usize]) -> Result<()> {
        let strides = derive_strides(shape, Some(self.data.len()))?;
        self.shape = shape.to_vec();
        self.strides = strides;
        Ok(())
    }

    /* --------------------------------------------------------------------- */
    /* Copy / cast                                                           */
    /* --------------------------------------------------------------------- */

    /// Duplicate into a new, owned buffer.
    pub fn copy(&self) -> Raster<'static, T> {
        Raster {
            shape:   self.shape.clone(),
            strides: self.strides.clone(),
            data:    Storage::Owned(duplicate(self.data())),
        }
    }

    /// Convert into a new, owned raster of `U`, saturating every element.
    pub fn as_type<U: Element>(&self) -> Raster<'static, U> {
        Raster {
            shape:   self.shape.clone(),
            strides: self.strides.clone(),
            data:    Storage::Owned(convert::<T, U>(self.data())),
        }
    }
}

impl<T: Element> PartialEq<Raster<'_, T>> for Raster<'_, T> {
    fn eq(&self, other: &Raster<'_, T>) -> bool {
        self.shape == other.shape && self.data() == other.data()
    }
}

/* ------------------------------------------------------------------------- */
/*                                     Tests                                 */
/* ------------------------------------------------------------------------- */
#[cfg(test)]
mod tests {
    use super::*;

    fn iota(shape: &[usize]) -> Raster<'static, f64> {
        let data = (0..element_count(shape).unwrap()).map(|v| v as f64).collect();
        Raster::from_vec(data, Some(shape)).unwrap()
    }

    #[test]
    fn test_zeros_dtype_and_layout() {
        let r = Raster::<f32>::zeros(&[2, 3, 4]).unwrap();
        assert_eq!(r.dtype(), DataType::F32);
        assert_eq!(r.shape(), &[2, 3, 4]);
        assert_eq!(r.strides(), &[12, 4, 1]);
        assert_eq!(r.dimensions(), 3);
        assert_eq!(r.len(), 24);
        assert!(r.data().iter().all(|&v| v == 0.0));
        assert!(!r.is_borrowed());
    }

    #[test]
    fn test_get_uses_row_major_offsets() {
        let r = iota(&[2, 3, 4]);
        assert_eq!(r.get(&[0, 0, 0]).unwrap(), 0.0);
        assert_eq!(r.get(&[0, 0, 3]).unwrap(), 3.0);
        assert_eq!(r.get(&[0, 2, 1]).unwrap(), 9.0);
        assert_eq!(r.get(&[1, 2, 3]).unwrap(), 23.0);
        assert_eq!(r.offset_of(&[1, 1, 1]).unwrap(), 17);
    }

    #[test]
    fn test_position_errors_on_every_axis() {
        let mut r = Raster::<i32>::zeros(&[2, 3, 4]).unwrap();
        let shape = r.shape().to_vec();
        for axis in 0..shape.len() {
            let mut p = vec![0; shape.len()];
            p[axis] = shape[axis];
            assert!(matches!(r.get(&p), Err(RasterError::Position(_))));
            assert!(matches!(r.set(&p, 1), Err(RasterError::Position(_))));
        }
        assert!(matches!(r.get(&[0, 0]), Err(RasterError::Position(_))));
        assert!(matches!(r.set(&[0, 0, 0, 0], 1), Err(RasterError::Position(_))));
        assert!(r.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_set_saturates_uint8() {
        let mut r = Raster::<u8>::zeros(&[2, 2]).unwrap();
        r.set(&[0, 0], 300).unwrap();
        r.set(&[0, 1], -5).unwrap();
        r.set(&[1, 0], 42.7f64).unwrap();
        r.set(&[1, 1], f64::INFINITY).unwrap();
        assert_eq!(r.get(&[0, 0]).unwrap(), 255);
        assert_eq!(r.get(&[0, 1]).unwrap(), 0);
        assert_eq!(r.get(&[1, 0]).unwrap(), 42);
        assert_eq!(r.get(&[1, 1]).unwrap(), 255);
    }

    #[test]
    fn test_set_get_round_trip_every_dtype() {
        fn check<T: Element>() {
            let mut r = Raster::<T>::zeros(&[2, 2]).unwrap();
            for v in [0.0f64, 7.0, -7.5, 1e300, -1e300, 65_536.25] {
                r.set(&[1, 0], v).unwrap();
                assert_eq!(r.get(&[1, 0]).unwrap(), T::saturating_from(v));
            }
            r.set(&[0, 1], i64::MIN).unwrap();
            assert_eq!(r.get(&[0, 1]).unwrap(), T::saturating_from(i64::MIN));
        }
        check::<u8>();
        check::<u16>();
        check::<u32>();
        check::<u64>();
        check::<i8>();
        check::<i16>();
        check::<i32>();
        check::<i64>();
        check::<f32>();
        check::<f64>();
    }

    #[test]
    fn test_integer_writes_clamp_to_bounds() {
        fn check<T: Element>() {
            let mut r = Raster::<T>::zeros(&[2]).unwrap();
            r.set(&[0], 1e300f64).unwrap();
            r.set(&[1], -1e300f64).unwrap();
            assert_eq!(r.get(&[0]).unwrap(), T::MAX);
            assert_eq!(r.get(&[1]).unwrap(), T::MIN);
        }
        check::<u8>();
        check::<u16>();
        check::<u32>();
        check::<u64>();
        check::<i8>();
        check::<i16>();
        check::<i32>();
        check::<i64>();
        check::<f32>();
    }

    #[test]
    fn test_set_rejects_nan_without_writing() {
        let mut r = Raster::<f64>::from_vec(vec![1.0, 2.0], None).unwrap();
        assert!(matches!(r.set(&[1], f64::NAN), Err(RasterError::Value(_))));
        assert!(matches!(r.set(&[0], f32::NAN), Err(RasterError::Value(_))));
        assert_eq!(r.data(), &[1.0, 2.0]);
    }

    #[test]
    fn test_reshape_keeps_data() {
        let mut r = iota(&[4, 3]);
        r.reshape(&[2, 6]).unwrap();
        assert_eq!(r.shape(), &[2, 6]);
        assert_eq!(r.strides(), &[6, 1]);
        assert_eq!(r.get(&[1, 0]).unwrap(), 6.0);

        assert!(matches!(r.reshape(&[5, 2]), Err(RasterError::Shape(_))));
        assert!(matches!(r.reshape(&[12, 0]), Err(RasterError::Shape(_))));
        assert_eq!(r.shape(), &[2, 6]);
        assert_eq!(r.strides(), &[6, 1]);
    }

    #[test]
    fn test_reshape_rejects_overflowing_shape() {
        let mut r = Raster::<u8>::zeros(&[4]).unwrap();
        assert!(matches!(r.reshape(&[(1 << 62) + 1, 4]), Err(RasterError::Shape(_))));
        assert!(matches!(r.reshape(&[usize::MAX, usize::MAX]), Err(RasterError::Shape(_))));
        assert_eq!(r.shape(), &[4]);
        assert_eq!(r.strides(), &[1]);
        assert!(matches!(r.get(&[1 << 40]), Err(RasterError::Position(_))));
    }

    #[test]
    fn test_copy_is_independent() {
        let src = iota(&[2, 2]);
        let mut dup = src.copy();
        assert_eq!(dup, src);
        dup.set(&[0, 0], 100.0).unwrap();
        assert_eq!(src.get(&[0, 0]).unwrap(), 0.0);
        assert!(!dup.is_borrowed());
    }

    #[test]
    fn test_as_type_saturates() {
        let src = Raster::<f64>::from_vec(vec![-3.0, 12.5, 1000.0], None).unwrap();
        let bytes = src.as_type::<u8>();
        assert_eq!(bytes.dtype(), DataType::U8);
        assert_eq!(bytes.data(), &[0, 12, 255]);
        assert_eq!(bytes.shape(), src.shape());
        assert_eq!(bytes.as_bytes(), &[0, 12, 255]);
    }

    #[test]
    fn test_bounds_accessor() {
        let r = Raster::<i16>::zeros(&[1]).unwrap();
        assert_eq!(r.bounds(), Bounds { min: i16::MIN, max: i16::MAX });
    }
}
