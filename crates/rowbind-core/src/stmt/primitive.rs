use super::{Type, Value};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

/// A field type that can be read into a statement [`Value`].
///
/// `#[derive(Entity)]` requires every field type to implement this trait and
/// records `TYPE` and `NULLABLE` in the generated schema.
pub trait Primitive {
    const TYPE: Type;
    const NULLABLE: bool = false;

    fn to_value(&self) -> Value;
}

macro_rules! impl_copy_primitive {
    ( $( $ty:ty => $name:ident, )* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: Type = Type::$name;

                fn to_value(&self) -> Value {
                    Value::$name(*self)
                }
            }
        )*
    };
}

impl_copy_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Uuid => Uuid,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => DateTime,
    DateTime<Utc> => Timestamp,
}

impl Primitive for String {
    const TYPE: Type = Type::String;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Primitive for Vec<u8> {
    const TYPE: Type = Type::Bytes;

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}
