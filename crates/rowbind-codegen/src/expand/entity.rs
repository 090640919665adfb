use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_entity_impl(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let entity_ident = &self.entity.ident;
        let entity_schema = self.expand_entity_schema();
        let field_value_arms = self.expand_field_value_arms();
        let out_of_range = format!(
            "field index {{}} out of range for `{}`",
            self.entity.name
        );

        quote! {
            impl #rowbind::Entity for #entity_ident {
                const SCHEMA: &'static #rowbind::EntitySchema = #entity_schema;

                fn field_value(&self, index: usize) -> #rowbind::Value {
                    match index {
                        #field_value_arms
                        _ => panic!(#out_of_range, index),
                    }
                }
            }
        }
    }

    fn expand_field_value_arms(&self) -> TokenStream {
        let rowbind = &self.rowbind;

        self.entity
            .fields
            .iter()
            .map(|field| {
                let index = field.index;
                let ident = &field.ident;

                if field.is_skipped() {
                    quote!(#index => #rowbind::Value::Null,)
                } else {
                    quote!(#index => #rowbind::Primitive::to_value(&self.#ident),)
                }
            })
            .collect()
    }
}
