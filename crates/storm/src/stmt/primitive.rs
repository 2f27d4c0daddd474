use crate::Result;

use storm_core::stmt;

/// A field type that maps to a single column.
pub trait Primitive: Sized {
    const NULLABLE: bool = false;

    fn to_value(&self) -> stmt::Value;

    fn load(value: stmt::Value) -> Result<Self>;
}

macro_rules! impl_primitive_num {
    ( $( $ty:ty ),* ) => {
        $(
            impl Primitive for $ty {
                fn to_value(&self) -> stmt::Value {
                    stmt::Value::from(*self)
                }

                fn load(value: stmt::Value) -> Result<Self> {
                    value.try_into()
                }
            }
        )*
    };
}

impl_primitive_num!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl Primitive for bool {
    fn to_value(&self) -> stmt::Value {
        stmt::Value::Bool(*self)
    }

    fn load(value: stmt::Value) -> Result<Self> {
        value.to_bool()
    }
}

impl Primitive for String {
    fn to_value(&self) -> stmt::Value {
        stmt::Value::String(self.clone())
    }

    fn load(value: stmt::Value) -> Result<Self> {
        value.to_string()
    }
}

impl Primitive for Vec<u8> {
    fn to_value(&self) -> stmt::Value {
        stmt::Value::Bytes(self.clone())
    }

    fn load(value: stmt::Value) -> Result<Self> {
        value.to_bytes()
    }
}

impl Primitive for uuid::Uuid {
    fn to_value(&self) -> stmt::Value {
        stmt::Value::Uuid(*self)
    }

    fn load(value: stmt::Value) -> Result<Self> {
        value.to_uuid()
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const NULLABLE: bool = true;

    fn to_value(&self) -> stmt::Value {
        match self {
            Some(value) => value.to_value(),
            None => stmt::Value::Null,
        }
    }

    fn load(value: stmt::Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}
