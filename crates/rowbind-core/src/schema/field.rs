use crate::{casing::Casing, stmt::Type};

/// Whether a field takes part in generated statements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Persistence {
    /// Written by `INSERT` and `UPDATE`.
    #[default]
    Persisted,

    /// Never written; set with `#[skip]` for computed or transient fields.
    Excluded,
}

/// Descriptor of one declared entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Declared field name
    pub name: &'static str,

    /// Column name override from `#[column("...")]`
    pub column: Option<&'static str>,

    /// Field type. `None` for excluded fields, whose type is not inspected.
    pub ty: Option<Type>,

    /// True when the field type is `Option<T>`
    pub nullable: bool,

    pub persistence: Persistence,
}

impl FieldSchema {
    pub const fn new(name: &'static str, ty: Type) -> FieldSchema {
        FieldSchema {
            name,
            column: None,
            ty: Some(ty),
            nullable: false,
            persistence: Persistence::Persisted,
        }
    }

    /// Sets the column name override.
    pub const fn with_column(mut self, column: &'static str) -> FieldSchema {
        self.column = Some(column);
        self
    }

    pub const fn with_nullable(mut self) -> FieldSchema {
        self.nullable = true;
        self
    }

    pub const fn with_persistence(mut self, persistence: Persistence) -> FieldSchema {
        self.persistence = persistence;
        self
    }

    pub const fn has_column_override(&self) -> bool {
        self.column.is_some()
    }

    pub const fn column_override(&self) -> Option<&'static str> {
        self.column
    }

    pub const fn is_excluded(&self) -> bool {
        matches!(self.persistence, Persistence::Excluded)
    }

    /// Resolves the column name: the override verbatim if present, else the
    /// declared name under `casing`.
    pub fn column_name(&self, casing: Casing) -> String {
        match self.column {
            Some(column) => column.to_owned(),
            None => casing.apply(self.name),
        }
    }
}
