mod entity;
mod schema;

use crate::schema::Entity;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The entity being expanded
    entity: &'a Entity,

    /// Path prefix for rowbind types
    rowbind: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let entity_impl = self.expand_entity_impl();

        wrap_in_const(quote! {
            #entity_impl
        })
    }
}

pub(super) fn entity(entity: &Entity) -> TokenStream {
    Expand {
        entity,
        rowbind: quote!(_rowbind::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowbind as _rowbind;
            #code
        };
    }
}
