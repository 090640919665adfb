use super::Error;

/// Error when two fields of one statement resolve to the same column name.
///
/// Parameter bag keys are column names, so a collision would silently drop
/// one of the values.
#[derive(Debug)]
pub(super) struct DuplicateColumnError {
    entity: Box<str>,
    column: Box<str>,
}

impl std::error::Error for DuplicateColumnError {}

impl core::fmt::Display for DuplicateColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "entity `{}` maps more than one field to column `{}`",
            self.entity, self.column
        )
    }
}

impl Error {
    /// Creates a duplicate column error.
    pub fn duplicate_column(entity: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateColumn(DuplicateColumnError {
            entity: entity.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate column error.
    pub fn is_duplicate_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateColumn(_))
    }
}
