use crate::{Casing, Entity, Mapper, ParamBag, Result};

/// Statement helpers available on every [`Entity`].
///
/// Each call uses a default [`Mapper`] whose column casing is chosen by the
/// `use_snake_case` flag. Table names always follow the default rule: snake
/// case with a naive plural.
pub trait EntityExt: Entity + Sized {
    /// Returns the table name under `casing`.
    fn get_table_name(&self, casing: Casing) -> String {
        Mapper::default().table_name_with(self, casing)
    }

    /// Returns the `INSERT` text and its parameters.
    fn to_insert_statement(&self, use_snake_case: bool) -> Result<(String, ParamBag)> {
        Ok(mapper(use_snake_case).insert(self)?.into_parts())
    }

    /// Returns the `UPDATE` text and its parameters, identity included.
    fn to_update_statement(&self, use_snake_case: bool) -> Result<(String, ParamBag)> {
        Ok(mapper(use_snake_case).update(self)?.into_parts())
    }
}

impl<T: Entity> EntityExt for T {}

fn mapper(use_snake_case: bool) -> Mapper {
    Mapper::builder()
        .column_casing(Casing::snake_if(use_snake_case))
        .build()
}
