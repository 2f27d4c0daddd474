use super::{Type, Value};
use crate::Error;

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) {
                $to:ident
                $is:ident
            } )*
    ) => {
        impl Type {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant)
                }
            )*
        }

        impl Value {
            $(
                /// Converts to this integer width, checking the range when the
                /// stored width differs.
                pub fn $to(self) -> crate::Result<$ty> {
                    <$ty>::try_from(self)
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> crate::Result<Self> {
                    match value {
                        Value::I8(v) => try_convert!(v, Value::I8, $ty),
                        Value::I16(v) => try_convert!(v, Value::I16, $ty),
                        Value::I32(v) => try_convert!(v, Value::I32, $ty),
                        Value::I64(v) => try_convert!(v, Value::I64, $ty),
                        Value::U8(v) => try_convert!(v, Value::U8, $ty),
                        Value::U16(v) => try_convert!(v, Value::U16, $ty),
                        Value::U32(v) => try_convert!(v, Value::U32, $ty),
                        Value::U64(v) => try_convert!(v, Value::U64, $ty),
                        value => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

// Out-of-range values keep their original variant in the error
macro_rules! try_convert {
    ($val:expr, $variant:path, $target_ty:ty) => {
        <$target_ty>::try_from($val)
            .map_err(|_| Error::type_conversion($variant($val), stringify!($target_ty)))
    };
}

impl_num! {
    I8(i8) {
        to_i8
        is_i8
    }
    I16(i16) {
        to_i16
        is_i16
    }
    I32(i32) {
        to_i32
        is_i32
    }
    I64(i64) {
        to_i64
        is_i64
    }
    U8(u8) {
        to_u8
        is_u8
    }
    U16(u16) {
        to_u16
        is_u16
    }
    U32(u32) {
        to_u32
        is_u32
    }
    U64(u64) {
        to_u64
        is_u64
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::F32(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl TryFrom<Value> for f32 {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::F32(v) => Ok(v),
            // Drivers widen REAL columns to f64
            Value::F64(v) => Ok(v as f32),
            value => Err(Error::type_conversion(value, "f32")),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::F32(v) => Ok(v.into()),
            Value::I32(v) => Ok(v.into()),
            Value::U32(v) => Ok(v.into()),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }
}
