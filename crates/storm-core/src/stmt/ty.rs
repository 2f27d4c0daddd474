/// The type of a [`Value`](super::Value), as inferred from the value itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// The type of `Value::Null`
    Null,

    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit float
    F32,

    /// 64-bit float
    F64,

    /// String type
    String,

    /// Opaque byte string
    Bytes,

    /// UUID
    Uuid,

    /// A fixed-length tuple where each item can have a different type.
    Record(Vec<Type>),
}
