/// Supported element types
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DataType {
    #[serde(rename = "uint8")]
    U8,
    #[serde(rename = "uint16")]
    U16,
    #[serde(rename = "uint32")]
    U32,
    #[serde(rename = "uint64")]
    U64,
    #[serde(rename = "int8")]
    I8,
    #[serde(rename = "int16")]
    I16,
    #[serde(rename = "int32")]
    I32,
    #[serde(rename = "int64")]
    I64,
    #[serde(rename = "float32")]
    F32,
    #[default]
    #[serde(rename = "float64")]
    F64,
}

/// Every supported element type, in declaration order
pub const ALL_DATA_TYPES: [DataType; 10] = [
    DataType::U8,
    DataType::U16,
    DataType::U32,
    DataType::U64,
    DataType::I8,
    DataType::I16,
    DataType::I32,
    DataType::I64,
    DataType::F32,
    DataType::F64,
];

impl DataType {
    /// Size of one element, in bytes
    pub fn size_in_bytes(self) -> usize {
        match self {
            DataType::U8 => std::mem::size_of::<u8>(),
            DataType::U16 => std::mem::size_of::<u16>(),
            DataType::U32 => std::mem::size_of::<u32>(),
            DataType::U64 => std::mem::size_of::<u64>(),
            DataType::I8 => std::mem::size_of::<i8>(),
            DataType::I16 => std::mem::size_of::<i16>(),
            DataType::I32 => std::mem::size_of::<i32>(),
            DataType::I64 => std::mem::size_of::<i64>(),
            DataType::F32 => std::mem::size_of::<f32>(),
            DataType::F64 => std::mem::size_of::<f64>(),
        }
    }

    /// Lowercase tag, as accepted by [`DataType::from_tag`]
    pub fn tag(self) -> &'static str {
        match self {
            DataType::U8 => "uint8",
            DataType::U16 => "uint16",
            DataType::U32 => "uint32",
            DataType::U64 => "uint64",
            DataType::I8 => "int8",
            DataType::I16 => "int16",
            DataType::I32 => "int32",
            DataType::I64 => "int64",
            DataType::F32 => "float32",
            DataType::F64 => "float64",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "uint8" => Some(DataType::U8),
            "uint16" => Some(DataType::U16),
            "uint32" => Some(DataType::U32),
            "uint64" => Some(DataType::U64),
            "int8" => Some(DataType::I8),
            "int16" => Some(DataType::I16),
            "int32" => Some(DataType::I32),
            "int64" => Some(DataType::I64),
            "float32" => Some(DataType::F32),
            "float64" => Some(DataType::F64),
            _ => None,
        }
    }

    pub fn class(self) -> NumericClass {
        match self {
            DataType::U8 => NumericClass::Unsigned,
            DataType::U16 => NumericClass::Unsigned,
            DataType::U32 => NumericClass::Unsigned,
            DataType::U64 => NumericClass::Unsigned,
            DataType::I8 => NumericClass::Signed,
            DataType::I16 => NumericClass::Signed,
            DataType::I32 => NumericClass::Signed,
            DataType::I64 => NumericClass::Signed,
            DataType::F32 => NumericClass::Float,
            DataType::F64 => NumericClass::Float,
        }
    }

    /// Inclusive representable range, widened to `f64`
    pub fn bounds(self) -> Bounds<f64> {
        match self {
            DataType::U8 => Bounds { min: u8::MIN as f64, max: u8::MAX as f64 },
            DataType::U16 => Bounds { min: u16::MIN as f64, max: u16::MAX as f64 },
            DataType::U32 => Bounds { min: u32::MIN as f64, max: u32::MAX as f64 },
            DataType::U64 => Bounds { min: u64::MIN as f64, max: u64::MAX as f64 },
            DataType::I8 => Bounds { min: i8::MIN as f64, max: i8::MAX as f64 },
            DataType::I16 => Bounds { min: i16::MIN as f64, max: i16::MAX as f64 },
            DataType::I32 => Bounds { min: i32::MIN as f64, max: i32::MAX as f64 },
            DataType::I64 => Bounds { min: i64::MIN as f64, max: i64::MAX as f64 },
            DataType::F32 => Bounds { min: f32::NEG_INFINITY as f64, max: f32::INFINITY as f64 },
            DataType::F64 => Bounds { min: f64::NEG_INFINITY as f64, max: f64::INFINITY as f64 },
        }
    }
}

/// Marker‐trait so we can go from T to DataType
pub trait Element:
    bytemuck::Pod + num_traits::NumCast + PartialOrd + Default + std::fmt::Debug + Send + Sync + 'static
{
    const DTYPE: DataType;
    const MIN: Self;
    const MAX: Self;

    fn bounds() -> Bounds<Self> {
        Bounds { min: Self::MIN, max: Self::MAX }
    }

    /// Convert `value`, clamping anything out of range to `MIN`/`MAX`.
    /// `NaN` becomes zero for integer targets.
    fn saturating_from<S: Element>(value: S) -> Self {
        if let Some(v) = <Self as num_traits::NumCast>::from(value) {
            return v;
        }
        match num_traits::ToPrimitive::to_f64(&value) {
            Some(v) if v.is_nan() => Self::default(),
            Some(v) if v < 0.0 => Self::MIN,
            _ => Self::MAX,
        }
    }
}

impl Element for u8 {
    const DTYPE: DataType = DataType::U8;
    const MIN: Self = u8::MIN;
    const MAX: Self = u8::MAX;
}

impl Element for u16 {
    const DTYPE: DataType = DataType::U16;
    const MIN: Self = u16::MIN;
    const MAX: Self = u16::MAX;
}

impl Element for u32 {
    const DTYPE: DataType = DataType::U32;
    const MIN: Self = u32::MIN;
    const MAX: Self = u32::MAX;
}

impl Element for u64 {
    const DTYPE: DataType = DataType::U64;
    const MIN: Self = u64::MIN;
    const MAX: Self = u64::MAX;
}

impl Element for i8 {
    const DTYPE: DataType = DataType::I8;
    const MIN: Self = i8::MIN;
    const MAX: Self = i8::MAX;
}

impl Element for i16 {
    const DTYPE: DataType = DataType::I16;
    const MIN: Self = i16::MIN;
    const MAX: Self = i16::MAX;
}

impl Element for i32 {
    const DTYPE: DataType = DataType::I32;
    const MIN: Self = i32::MIN;
    const MAX: Self = i32::MAX;
}

impl Element for i64 {
    const DTYPE: DataType = DataType::I64;
    const MIN: Self = i64::MIN;
    const MAX: Self = i64::MAX;
}

impl Element for f32 {
    const DTYPE: DataType = DataType::F32;
    const MIN: Self = f32::NEG_INFINITY;
    const MAX: Self = f32::INFINITY;
}

impl Element for f64 {
    const DTYPE: DataType = DataType::F64;
    const MIN: Self = f64::NEG_INFINITY;
    const MAX: Self = f64::INFINITY;
}

/// Expands `$body` once per element type, with `$t` bound to the Rust type
/// matching the runtime `$dtype`.
#[macro_export]
macro_rules! with_element_type {
    ($dtype:expr, $t:ident => $body:expr) => {
        match $dtype {
            $crate::DataType::U8 => {
                type $t = u8;
                $body
            }
            $crate::DataType::U16 => {
                type $t = u16;
                $body
            }
            $crate::DataType::U32 => {
                type $t = u32;
                $body
            }
            $crate::DataType::U64 => {
                type $t = u64;
                $body
            }
            $crate::DataType::I8 => {
                type $t = i8;
                $body
            }
            $crate::DataType::I16 => {
                type $t = i16;
                $body
            }
            $crate::DataType::I32 => {
                type $t = i32;
                $body
            }
            $crate::DataType::I64 => {
                type $t = i64;
                $body
            }
            $crate::DataType::F32 => {
                type $t = f32;
                $body
            }
            $crate::DataType::F64 => {
                type $t = f64;
                $body
            }
        }
    };
}