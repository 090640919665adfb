use super::ErrorSet;

#[derive(Debug, Default)]
pub(crate) struct EntityAttr {
    /// Optional database table name to map the entity to
    pub(crate) table: Option<syn::LitStr>,
}

impl EntityAttr {
    pub(super) fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut result = EntityAttr::default();
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if !attr.path().is_ident("table") {
                continue;
            }

            if result.table.is_some() {
                errs.push(syn::Error::new_spanned(attr, "duplicate #[table] attribute"));
                continue;
            }

            match table_name(attr) {
                Ok(lit) => result.table = Some(lit),
                Err(err) => errs.push(err),
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(result),
        }
    }
}

fn table_name(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let expected = || syn::Error::new_spanned(attr, "expected `#[table = \"table_name\"]`");

    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(expected());
    };

    let syn::Expr::Lit(lit) = &meta.value else {
        return Err(expected());
    };

    let syn::Lit::Str(lit) = &lit.lit else {
        return Err(expected());
    };

    if lit.value().is_empty() {
        return Err(syn::Error::new_spanned(lit, "table name cannot be empty"));
    }

    Ok(lit.clone())
}
