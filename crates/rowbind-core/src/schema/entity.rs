use super::FieldSchema;
use crate::{casing::Casing, Error, Pluralize, Result};

/// Descriptor of an entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    /// Type name, e.g. `UserProfile`
    pub name: &'static str,

    /// Table name override from `#[table = "..."]`
    pub table: Option<&'static str>,

    /// Declared fields, in declaration order. Includes the identity field.
    pub fields: &'static [FieldSchema],

    /// Index of the identity field in `fields`
    pub identity: usize,
}

impl EntitySchema {
    pub const fn has_table_override(&self) -> bool {
        self.table.is_some()
    }

    pub const fn table_override(&self) -> Option<&'static str> {
        self.table
    }

    /// Resolves the table name: the override verbatim if present, else the
    /// pluralized type name under `casing`, prefixed with `prefix`.
    pub fn table_name(&self, casing: Casing, pluralize: Pluralize, prefix: &str) -> String {
        match self.table {
            Some(table) => table.to_owned(),
            None => {
                let name = pluralize.table_name(self.name, casing);
                if prefix.is_empty() {
                    name
                } else {
                    format!("{prefix}{name}")
                }
            }
        }
    }

    /// Returns the identity field.
    pub fn identity_field(&self) -> Result<&'static FieldSchema> {
        self.fields.get(self.identity).ok_or_else(|| {
            Error::invalid_schema(format!(
                "identity index {} out of range for `{}` ({} fields)",
                self.identity,
                self.name,
                self.fields.len()
            ))
        })
    }

    /// Returns `true` if the field at `index` takes part in `INSERT` and
    /// `UPDATE` statements: it exists, is not the identity, and is not
    /// excluded.
    pub fn is_eligible(&self, index: usize) -> bool {
        match self.fields.get(index) {
            Some(field) => index != self.identity && !field.is_excluded(),
            None => false,
        }
    }

    /// Iterates eligible fields with their declaration-order index.
    pub fn eligible_fields(&self) -> impl Iterator<Item = (usize, &'static FieldSchema)> + '_ {
        let fields: &'static [FieldSchema] = self.fields;
        fields
            .iter()
            .enumerate()
            .filter(move |(index, _)| self.is_eligible(*index))
    }
}
