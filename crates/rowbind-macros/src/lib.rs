extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `rowbind::Entity` for a struct with named fields.
///
/// Attributes:
///
/// - `#[table = "name"]` on the struct: table name used verbatim.
/// - `#[key]` on a field: the identity field. Defaults to the field named `id`.
/// - `#[column("name")]` on a field: column name used verbatim.
/// - `#[skip]` on a field: never written by `INSERT` or `UPDATE`.
#[proc_macro_derive(Entity, attributes(table, key, column, skip))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    match rowbind_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
