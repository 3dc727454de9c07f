/// Dynamically-typed Raster: wraps `Raster<'a, T>` for every supported T
#[derive(Debug, From)]
pub enum RasterAny<'a> {
    U8(Raster<'a, u8>),
    U16(Raster<'a, u16>),
    U32(Raster<'a, u32>),
    U64(Raster<'a, u64>),
    I8(Raster<'a, i8>),
    I16(Raster<'a, i16>),
    I32(Raster<'a, i32>),
    I64(Raster<'a, i64>),
    F32(Raster<'a, f32>),
    F64(Raster<'a, f64>),
}

/// Caller-owned flat buffer, tagged with its element type
#[derive(Debug, From)]
pub enum FlatBuffer<'a> {
    U8(&'a mut [u8]),
    U16(&'a mut [u16]),
    U32(&'a mut [u32]),
    U64(&'a mut [u64]),
    I8(&'a mut [i8]),
    I16(&'a mut [i16]),
    I32(&'a mut [i32]),
    I64(&'a mut [i64]),
    F32(&'a mut [f32]),
    F64(&'a mut [f64]),
}

impl RasterAny<'_> {
    pub fn dtype(&self) -> DataType {
        match self {
            RasterAny::U8(_) => DataType::U8,
            RasterAny::U16(_) => DataType::U16,
            RasterAny::U32(_) => DataType::U32,
            RasterAny::U64(_) => DataType::U64,
            RasterAny::I8(_) => DataType::I8,
            RasterAny::I16(_) => DataType::I16,
            RasterAny::I32(_) => DataType::I32,
            RasterAny::I64(_) => DataType::I64,
            RasterAny::F32(_) => DataType::F32,
            RasterAny::F64(_) => DataType::F64,
        }
    }
}

impl FlatBuffer<'_> {
    pub fn dtype(&self) -> DataType {
        match self {
            FlatBuffer::U8(_) => DataType::U8,
            FlatBuffer::U16(_) => DataType::U16,
            FlatBuffer::U32(_) => DataType::U32,
            FlatBuffer::U64(_) => DataType::U64,
            FlatBuffer::I8(_) => DataType::I8,
            FlatBuffer::I16(_) => DataType::I16,
            FlatBuffer::I32(_) => DataType::I32,
            FlatBuffer::I64(_) => DataType::I64,
            FlatBuffer::F32(_) => DataType::F32,
            FlatBuffer::F64(_) => DataType::F64,
        }
    }
}

/// Element types that can be pulled back out of a [`RasterAny`]
pub trait AnyElement: Element {
    fn downcast_ref<'r, 'a>(any: &'r RasterAny<'a>) -> Option<&'r Raster<'a, Self>>;
    fn downcast_mut<'r, 'a>(any: &'r mut RasterAny<'a>) -> Option<&'r mut Raster<'a, Self>>;
    fn downcast(any: RasterAny<'_>) -> Option<Raster<'_, Self>>;
}

impl AnyElement for u8 {
    fn downcast_ref<'r, 'a>(any: &'r RasterAny<'a>) -> Option<&'r Raster<'a, Self>> {
        match any {
            RasterAny::U8(r) => Some(r),
            _ => None,
        }
    }

    fn downcast_mut<'r, 'a>(any: &'r mut RasterAny<'a>) -> Option<&'r mut Raster<'a, Self>> {
        match any {
            RasterAny::U8(r) => Some(r),
            _ => None,
        }
    }

    fn downcast(any: RasterAny<'_>) -> Option<Raster<'_, Self>> {
        match any {
            RasterAny::U8(r) => Some(r),
            _ => None,
        }
    }
}

impl AnyElement for u16 {
    fn downcast_ref<'r, 'a>(any: &'r RasterAny<'a>) -> Option<&'r Raster<'a, Self>> {
        match any {
            RasterAny::U16(r) => Some(r),
            _ => None,
        }
    }

    fn downcast_mut<'r, 'a>(any: &'r mut RasterAny<'a>) -> Option<&'r mut Raster<'a, Self>> {
        match any {
            RasterAny::U16(r) => Some(r),
            _ => None,
        }
    }

    fn downcast(any: RasterAny<'_>) -> Option<Raster<'_, Self>> {
        match any {
            RasterAny::U16(r) => Some(r),
            _ => None,
        }
    }
}

impl AnyElement for u32 {
    fn downcast_ref<'r, 'a>(any: &'r RasterAny<'a>) -> Option<&'r Raster<'a, Self>> {
        match any {
            RasterAny::U32(r) => Some(r),
            _ => None,
        }
    }

    fn downcast_mut<'r, 'a>(any: &'r mut RasterAny<'a>) -> Option<&'r mut Raster<'a, Self>> {
        match any {
            RasterAny::U32(r) => Some(r),
            _ => None,
        }
    }

    fn downcast(any: RasterAny<'_>) -> Option<Raster<'_, Self>> {
        match any {
            RasterAny::U32(r) => Some(r),
            _ => None,
        }
    }
}

impl AnyElement for u64 {
    fn downcast_ref<'r, 'a>(any: &'r RasterAny<'a>) -> Option<&'r Raster<'a, Self>> {
        match any {
            RasterAny::U64(r) => Some(r),
            _ => None,
        }
    }

    fn downcast_mut<'r, 'a>(any: &'r mut RasterAny<'a>) -> Option<&'r mut Raster<'a, Self>> {
        match any {
            RasterAny::U64(r) => Some(r),
            _ => None,
        }
    }

    fn downcast(any: RasterAny<'_>) -> Option<Raster<'_, Self>> {
        match any {
            RasterAny::U64(r) => Some(r),
            _ => None,
        }
    }
}

impl AnyElement for i8 {
    fn downcast_ref<'r, 'a>(any: &'r RasterAny<'a>) -> Option<&'r Raster<'a, Self>> {
        match any {
            RasterAny::I8(r) => Some(r),
            _ => None,
        }
    }

    fn downcast_mut<'r, 'a>(any: &'r mut RasterAny<'a>) -> Option<&'r mut Raster<'a, Self>> {
        match any {
            RasterAny::I8(r) => Some(r),
            _ => None,
        }
    }

    fn downcast(any: RasterAny<'_>) -> Option<Raster<'_, Self>> {
        match any {
            RasterAny::I8(r) => Some(r),
            _ => None,
        }
    }
}

impl AnyElement for i16 {
    fn downcast_ref<'r, 'a>(any: &'r RasterAny<'a>) -> Option<&'r Raster<'a, Self>> {
        match any {
            RasterAny::I16(r) => Some(r),
            _ => None,
        }
    }

    fn downcast_mut<'r, 'a>(any: &'r mut RasterAny<'a>) -> Option<&'r mut Raster<'a, Self>> {
        match any {
            RasterAny::I16(r) => Some(r),
            _ => None,
        }
    }

    fn downcast(any: RasterAny<'_>) -> Option<Raster<'_, Self>> {
        match any {
            RasterAny::I16(r) => Some(r),
            _ => None,
        }
    }
}

impl AnyElement for i32 {
    fn downcast_ref<'r, 'a>(any: &'r RasterAny<'a>) -> Option<&'r Raster<'a, Self>> {
        match any {
            RasterAny::I32(r) => Some(r),
            _ => None,
        }
    }

    fn downcast_mut<'r, 'a>(any: &'r mut RasterAny<'a>) -> Option<&'r mut Raster<'a, Self>> {
        match any {
            RasterAny::I32(r) => Some(r),
            _ => None,
        }
    }

    fn downcast(any: RasterAny<'_>) -> Option<Raster<'_, Self>> {
        match any {
            RasterAny::I32(r) => Some(r),
            _ => None,
        }
    }
}

impl AnyElement for i64 {
    fn downcast_ref<'r, 'a>(any: &'r RasterAny<'a>) -> Option<&'r Raster<'a, Self>> {
        match any {
            RasterAny::I64(r) => Some(r),
            _ => None,
        }
    }

    fn downcast_mut<'r, 'a>(any: &'r mut RasterAny<'a>) -> Option<&'r mut Raster<'a, Self>> {
        match any {
            RasterAny::I64(r) => Some(r),
            _ => None,
        }
    }

    fn downcast(any: RasterAny<'_>) -> Option<Raster<'_, Self>> {
        match any {
            RasterAny::I64(r) => Some(r),
            _ => None,
        }
    }
}

impl AnyElement for f32 {
    fn downcast_ref<'r, 'a>(any: &'r RasterAny<'a>) -> Option<&'r Raster<'a, Self>> {
        match any {
            RasterAny::F32(r) => Some(r),
            _ => None,
        }
    }

    fn downcast_mut<'r, 'a>(any: &'r mut RasterAny<'a>) -> Option<&'r mut Raster<'a, Self>> {
        match any {
            RasterAny::F32(r) => Some(r),
            _ => None,
        }
    }

    fn downcast(any: RasterAny<'_>) -> Option<Raster<'_, Self>> {
        match any {
            RasterAny::F32(r) => Some(r),
            _ => None,
        }
    }
}

impl AnyElement for f64 {
    fn downcast_ref<'r, 'a>(any: &'r RasterAny<'a>) -> Option<&'r Raster<'a, Self>> {
        match any {
            RasterAny::F64(r) => Some(r),
            _ => None,
        }
    }

    fn downcast_mut<'r, 'a>(any: &'r mut RasterAny<'a>) -> Option<&'r mut Raster<'a, Self>> {
        match any {
            RasterAny::F64(r) => Some(r),
            _ => None,
        }
    }

    fn downcast(any: RasterAny<'_>) -> Option<Raster<'_, Self>> {
        match any {
            RasterAny::F64(r) => Some(r),
            _ => None,
        }
    }
}

/// Expands `$body` with `$r` bound to the typed raster inside `$value`.
macro_rules! dispatch_any {
    ($value:expr, $r:ident => $body:expr) => {
        match $value {
            RasterAny::U8($r) => $body,
            RasterAny::U16($r) => $body,
            RasterAny::U32($r) => $body,
            RasterAny::U64($r) => $body,
            RasterAny::I8($r) => $body,
            RasterAny::I16($r) => $body,
            RasterAny::I32($r) => $body,
            RasterAny::I64($r) => $body,
            RasterAny::F32($r) => $body,
            RasterAny::F64($r) => $body,
        }
    };
}

/// Expands `$body` with `$b` bound to the typed slice inside `$value`.
macro_rules! dispatch_flat {
    ($value:expr, $b:ident => $body:expr) => {
        match $value {
            FlatBuffer::U8($b) => $body,
            FlatBuffer::U16($b) => $body,
            FlatBuffer::U32($b) => $body,
            FlatBuffer::U64($b) => $body,
            FlatBuffer::I8($b) => $body,
            FlatBuffer::I16($b) => $body,
            FlatBuffer::I32($b) => $body,
            FlatBuffer::I64($b) => $body,
            FlatBuffer::F32($b) => $body,
            FlatBuffer::F64($b) => $body,
        }
    };
}