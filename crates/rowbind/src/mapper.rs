mod builder;
pub use builder::Builder;

use crate::{
    stmt::{ColumnValue, Insert, Key, Update},
    Casing, Entity, Error, ParamBag, Pluralize, Result, Serializer, Statement,
};

use std::{collections::HashSet, sync::Arc};

/// Generates `INSERT` and `UPDATE` statements for [`Entity`] values.
///
/// A mapper is immutable once built and cheap to clone. Every operation is a
/// pure function of the entity's schema, its current field values, and the
/// mapper's configuration.
///
/// ```
/// use rowbind::{Casing, Mapper};
///
/// let mapper = Mapper::builder().column_casing(Casing::Snake).build();
/// # let _ = mapper;
/// ```
#[derive(Debug, Clone)]
pub struct Mapper {
    pub(crate) table_casing: Casing,
    pub(crate) column_casing: Casing,
    pub(crate) pluralize: Pluralize,
    pub(crate) table_name_prefix: Option<Arc<str>>,
    pub(crate) serializer: Serializer,
    pub(crate) identity_param: IdentityParam,
}

/// Whether update statements bind the identity value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum IdentityParam {
    /// Bind the identity value under its placeholder name.
    #[default]
    Include,

    /// Render the identity placeholder without binding a value. The caller
    /// supplies it before executing the statement.
    Omit,
}

/// A generated statement and its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Sql {
    /// Statement text, terminated by `;`
    pub text: String,

    /// Parameters keyed by placeholder name, in placeholder order
    pub params: ParamBag,
}

impl Sql {
    pub fn into_parts(self) -> (String, ParamBag) {
        (self.text, self.params)
    }
}

impl Default for Mapper {
    fn default() -> Mapper {
        Mapper::builder().build()
    }
}

impl Mapper {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Returns the table name of `E` under the configured table casing.
    pub fn table_name<E: Entity>(&self, entity: &E) -> String {
        self.table_name_with(entity, self.table_casing)
    }

    /// Returns the table name of `E` under `casing`.
    ///
    /// A `#[table]` override is returned verbatim, regardless of `casing` and
    /// the configured prefix.
    pub fn table_name_with<E: Entity>(&self, _entity: &E, casing: Casing) -> String {
        E::SCHEMA.table_name(casing, self.pluralize, self.prefix())
    }

    /// Generates an `INSERT` for `entity`.
    ///
    /// Every eligible field contributes one column and one parameter, in
    /// declaration order.
    pub fn insert<E: Entity>(&self, entity: &E) -> Result<Sql> {
        let stmt = self.insert_statement(entity)?;

        log::debug!(
            "insert into `{}` for `{}`; columns={}",
            stmt.table,
            E::SCHEMA.name,
            stmt.columns.len()
        );

        Ok(self.serialize(&stmt.into()))
    }

    /// Generates an `UPDATE` of `entity`, filtered on its identity.
    ///
    /// The `WHERE` column is the identity field's name in snake case (`id`
    /// for the usual `id` field, `order_id` for `#[key] order_id`). Its
    /// placeholder is the identity name under the column casing.
    pub fn update<E: Entity>(&self, entity: &E) -> Result<Sql> {
        let stmt = self.update_statement(entity)?;

        log::debug!(
            "update `{}` for `{}`; columns={} identity={}",
            stmt.table,
            E::SCHEMA.name,
            stmt.assignments.len(),
            stmt.key.param
        );

        Ok(self.serialize(&stmt.into()))
    }

    /// Resolves the `INSERT` for `entity` without serializing it.
    pub fn insert_statement<E: Entity>(&self, entity: &E) -> Result<Insert> {
        Ok(Insert {
            table: self.table_name(entity),
            columns: self.columns(entity)?,
        })
    }

    /// Resolves the `UPDATE` for `entity` without serializing it.
    pub fn update_statement<E: Entity>(&self, entity: &E) -> Result<Update> {
        let schema = E::SCHEMA;
        let identity = schema.identity_field()?;
        let assignments = self.columns(entity)?;

        let param = self.column_casing.apply(identity.name);

        if assignments.iter().any(|column| column.name == param) {
            return Err(Error::duplicate_column(schema.name, param));
        }

        let value = match self.identity_param {
            IdentityParam::Include => Some(entity.id_value()),
            IdentityParam::Omit => None,
        };

        Ok(Update {
            table: self.table_name(entity),
            assignments,
            key: Key {
                column: crate::casing::to_snake_case(identity.name),
                param,
                ty: identity.ty,
                value,
            },
        })
    }

    /// Returns the serializer used for generated statements.
    pub fn serializer(&self) -> Serializer {
        self.serializer
    }

    fn columns<E: Entity>(&self, entity: &E) -> Result<Vec<ColumnValue>> {
        let schema = E::SCHEMA;

        // Validates the identity index before eligibility depends on it.
        schema.identity_field()?;

        let mut seen = HashSet::new();
        let mut columns = vec![];

        for (index, field) in schema.eligible_fields() {
            let name = field.column_name(self.column_casing);

            if !seen.insert(name.clone()) {
                return Err(Error::duplicate_column(schema.name, name));
            }

            log::trace!("`{}.{}` -> column `{name}`", schema.name, field.name);

            columns.push(ColumnValue {
                name,
                ty: field.ty,
                value: entity.field_value(index),
            });
        }

        if columns.is_empty() {
            return Err(Error::no_persistable_fields(schema.name));
        }

        Ok(columns)
    }

    fn prefix(&self) -> &str {
        self.table_name_prefix.as_deref().unwrap_or("")
    }

    fn serialize(&self, stmt: &Statement) -> Sql {
        let mut params = ParamBag::new();
        let text = self.serializer.serialize(stmt, &mut params);

        Sql { text, params }
    }
}
