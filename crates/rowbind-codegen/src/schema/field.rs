use super::{Column, ErrorSet};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing entity
    pub(crate) index: usize,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Rust identifier used to read the field
    pub(crate) ident: syn::Ident,

    /// Declared name, without any `r#` prefix
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Set if the field is annotated with `#[skip]`
    pub(crate) skip: Option<syn::Attribute>,

    /// Optional database column name
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, index: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("skip") {
                if attrs.skip.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    attrs.skip = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        if let (Some(skip), Some(_)) = (&attrs.skip, &attrs.column) {
            errs.push(syn::Error::new_spanned(
                skip,
                "#[skip] and #[column] cannot be combined on the same field",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            index,
            attrs,
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
        })
    }

    pub(crate) fn is_skipped(&self) -> bool {
        self.attrs.skip.is_some()
    }
}
