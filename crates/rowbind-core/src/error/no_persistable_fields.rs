use super::Error;

/// Error when an entity has no field eligible for an `INSERT` or `UPDATE`.
///
/// Emitting the statement anyway would produce `()` column lists or an
/// empty `SET` clause, neither of which is valid SQL.
#[derive(Debug)]
pub(super) struct NoPersistableFieldsError {
    entity: Box<str>,
}

impl std::error::Error for NoPersistableFieldsError {}

impl core::fmt::Display for NoPersistableFieldsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "entity `{}` has no persistable fields", self.entity)
    }
}

impl Error {
    /// Creates an error for an entity without eligible fields.
    pub fn no_persistable_fields(entity: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NoPersistableFields(
            NoPersistableFieldsError {
                entity: entity.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a no persistable fields error.
    pub fn is_no_persistable_fields(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoPersistableFields(_))
    }
}
