use crate::{schema::EntitySchema, stmt::Value};

/// A record type that can be mapped to `INSERT` and `UPDATE` statements.
///
/// Implementations are usually generated with `#[derive(Entity)]`, which
/// builds [`Entity::SCHEMA`] at compile time. The schema lists every declared
/// field in declaration order; `field_value` reads the field at a given
/// position of that list.
pub trait Entity {
    /// Static field registry for the entity type.
    const SCHEMA: &'static EntitySchema;

    /// Reads the current value of the field at `index` (declaration order).
    ///
    /// Excluded fields are never read by the mapper; derived impls return
    /// `Value::Null` for them. Panics if `index` is not a field index of
    /// [`Entity::SCHEMA`].
    fn field_value(&self, index: usize) -> Value;

    /// Reads the value of the identity field.
    fn id_value(&self) -> Value {
        self.field_value(Self::SCHEMA.identity)
    }
}
