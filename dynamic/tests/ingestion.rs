use anyhow::Result;
use core_types::{DataType, RasterError};
use raster::{Nested, SliceOptions};
use raster_dyn::{FlatBuffer, Input, RasterAny, RasterOptions};

#[test]
fn zero_filled_from_shape_defaults_to_float64() -> Result<()> {
    let r = RasterAny::new(None, &RasterOptions::new().with_shape([3, 2]))?;
    assert_eq!(r.dtype(), DataType::F64);
    assert_eq!(r.shape(), &[3, 2]);
    assert_eq!(r.strides(), &[2, 1]);
    assert_eq!(r.len(), 6);
    assert!(!r.is_borrowed());
    Ok(())
}

#[test]
fn no_data_and_no_shape_is_a_configuration_error() {
    let err = RasterAny::new(None, &RasterOptions::new()).unwrap_err();
    assert!(matches!(err, RasterError::Configuration(_)));
}

#[test]
fn malformed_shapes_are_configuration_errors() {
    for shape in [Vec::<usize>::new(), vec![2, 0, 3]] {
        let err = RasterAny::new(None, &RasterOptions::new().with_shape(shape)).unwrap_err();
        assert!(matches!(err, RasterError::Configuration(_)));
    }

    let mut backing = vec![0u8; 6];
    let options = RasterOptions::new().with_dtype(DataType::U8).with_shape([4, 2]);
    let err = RasterAny::new(Some(Input::from(backing.as_mut_slice())), &options).unwrap_err();
    assert!(matches!(err, RasterError::Configuration(_)));
}

#[test]
fn matching_flat_buffer_is_aliased() -> Result<()> {
    let mut backing = vec![0.0f32; 4];
    {
        let options = RasterOptions::new().with_dtype(DataType::F32).with_shape([2, 2]);
        let mut r = RasterAny::new(Some(Input::from(backing.as_mut_slice())), &options)?;
        assert!(r.is_borrowed());
        r.set_f64(&[1, 0], 2.5)?;
    }
    assert_eq!(backing, vec![0.0, 0.0, 2.5, 0.0]);
    Ok(())
}

#[test]
fn copy_flag_never_aliases() -> Result<()> {
    let mut backing = vec![1i32, 2, 3];
    {
        let options = RasterOptions::new().with_dtype(DataType::I32).with_copy(true);
        let mut r = RasterAny::new(Some(Input::from(backing.as_mut_slice())), &options)?;
        assert!(!r.is_borrowed());
        assert_eq!(r.shape(), &[3]);
        r.set_f64(&[0], 100.0)?;
        assert_eq!(r.get_f64(&[0])?, 100.0);
    }
    assert_eq!(backing, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn differing_dtype_copy_converts() -> Result<()> {
    let mut backing = vec![-1.0f64, 0.5, 70_000.0];
    {
        let buffer = FlatBuffer::from(backing.as_mut_slice());
        assert_eq!(buffer.dtype(), DataType::F64);
        let options = RasterOptions::new().with_dtype(DataType::U16);
        let mut r = RasterAny::new(Some(Input::Flat(buffer)), &options)?;
        assert!(!r.is_borrowed());
        assert_eq!(r.as_raster::<u16>().unwrap().data(), &[0, 0, u16::MAX]);
        r.set_f64(&[0], 9.0)?;
    }
    assert_eq!(backing[0], -1.0);
    Ok(())
}

#[test]
fn nested_input_infers_shape_and_order() -> Result<()> {
    let nested = Nested::from(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    let r = RasterAny::new(Some(Input::from(nested)), &RasterOptions::new())?;
    assert_eq!(r.shape(), &[2, 3]);
    assert_eq!(r.as_raster::<f64>().unwrap().data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    Ok(())
}

#[test]
fn nested_input_honours_explicit_shape_and_dtype() -> Result<()> {
    let nested: Nested = serde_yaml::from_str("[[1, 2, 3], [4, 5, 300]]")?;
    let options: RasterOptions = serde_yaml::from_str("dtype: uint8\nshape: [3, 2]")?;
    let r = RasterAny::new(Some(Input::from(nested)), &options)?;
    assert_eq!(r.dtype(), DataType::U8);
    assert_eq!(r.shape(), &[3, 2]);
    assert_eq!(r.get_f64(&[2, 1])?, 255.0);
    Ok(())
}

#[test]
fn irregular_or_scalar_nested_input_is_a_data_error() {
    let irregular = Nested::from(vec![vec![1.0, 2.0], vec![3.0]]);
    let err = RasterAny::new(Some(Input::from(irregular)), &RasterOptions::new()).unwrap_err();
    assert!(matches!(err, RasterError::Data(_)));

    let scalar = Nested::Scalar(4.0);
    let err = RasterAny::new(Some(Input::from(scalar)), &RasterOptions::new()).unwrap_err();
    assert!(matches!(err, RasterError::Data(_)));
}

#[test]
fn slice_of_borrowed_raster_owns_its_buffer() -> Result<()> {
    let mut backing: Vec<f64> = (0..16).map(f64::from).collect();
    let mut out = {
        let options = RasterOptions::new().with_shape([4, 4]);
        let src = RasterAny::new(Some(Input::from(backing.as_mut_slice())), &options)?;
        assert!(src.is_borrowed());
        src.slice(&SliceOptions::new().with_min([1, 1]).with_max([3, 3]), None)?
    };
    assert!(!out.is_borrowed());
    assert_eq!(out.as_raster::<f64>().unwrap().data(), &[5.0, 6.0, 9.0, 10.0]);
    out.set_f64(&[0, 0], -1.0)?;
    assert_eq!(backing[5], 5.0);
    Ok(())
}

#[test]
fn whole_slice_equals_copy() -> Result<()> {
    let nested = Nested::from([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    let options = RasterOptions::new().with_dtype(DataType::I8);
    let r = RasterAny::new(Some(Input::from(nested)), &options)?;
    let sliced = r.slice(&SliceOptions::new(), None)?;
    let copied = r.copy(None);
    assert_eq!(sliced.as_raster::<i8>(), copied.as_raster::<i8>());
    Ok(())
}
