/// The declared type of an entity field.
///
/// Recorded in the entity schema so statement sinks can bind parameters with
/// a type hint, including `NULL` values whose type cannot be recovered from
/// the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
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

    /// Raw bytes
    Bytes,

    /// UUID
    Uuid,

    /// Calendar date without a time zone
    Date,

    /// Time of day without a time zone
    Time,

    /// Date and time without a time zone
    DateTime,

    /// Instant in UTC
    Timestamp,
}
