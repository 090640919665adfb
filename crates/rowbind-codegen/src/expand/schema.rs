use super::Expand;
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Builds the `EntitySchema` constant expression.
    pub(super) fn expand_entity_schema(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let name = &self.entity.name;
        let identity = self.entity.identity;
        let fields = self.entity.fields.iter().map(|field| self.expand_field_schema(field));

        let table = match &self.entity.table {
            Some(table) => quote!(#rowbind::Option::Some(#table)),
            None => quote!(#rowbind::Option::None),
        };

        quote! {
            &#rowbind::EntitySchema {
                name: #name,
                table: #table,
                fields: &[ #( #fields, )* ],
                identity: #identity,
            }
        }
    }

    fn expand_field_schema(&self, field: &Field) -> TokenStream {
        let rowbind = &self.rowbind;
        let name = &field.name;
        let ty = &field.ty;

        let column = match &field.attrs.column {
            Some(column) => {
                let lit = &column.name;
                quote!(#rowbind::Option::Some(#lit))
            }
            None => quote!(#rowbind::Option::None),
        };

        if field.is_skipped() {
            quote! {
                #rowbind::FieldSchema {
                    name: #name,
                    column: #column,
                    ty: #rowbind::Option::None,
                    nullable: false,
                    persistence: #rowbind::Persistence::Excluded,
                }
            }
        } else {
            quote! {
                #rowbind::FieldSchema {
                    name: #name,
                    column: #column,
                    ty: #rowbind::Option::Some(<#ty as #rowbind::Primitive>::TYPE),
                    nullable: <#ty as #rowbind::Primitive>::NULLABLE,
                    persistence: #rowbind::Persistence::Persisted,
                }
            }
        }
    }
}
