use super::{EntityAttr, ErrorSet, Field};

use std::collections::HashSet;
use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Entity {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Declared type name
    pub(crate) name: String,

    /// Optional table to map the entity to
    pub(crate) table: Option<syn::LitStr>,

    /// Entity fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Index of the identity field
    pub(crate) identity: usize,
}

impl Entity {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "entity fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "entity generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut fields = vec![];

        let attr = match EntityAttr::from_ast(&ast.attrs) {
            Ok(attr) => attr,
            Err(err) => {
                errs.push(err);
                EntityAttr::default()
            }
        };

        for (index, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, index) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        let mut columns = HashSet::new();

        for column in fields.iter().filter_map(|field| field.attrs.column.as_ref()) {
            if !columns.insert(column.name.value()) {
                errs.push(syn::Error::new_spanned(
                    &column.name,
                    format!("column `{}` is used by more than one field", column.name.value()),
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let identity = identity(ast, &fields)?;

        Ok(Self {
            ident: ast.ident.clone(),
            name: ast.ident.unraw().to_string(),
            table: attr.table,
            fields,
            identity,
        })
    }
}

/// Finds the identity field: the one annotated with `#[key]`, or else the
/// field named `id`.
fn identity(ast: &syn::ItemStruct, fields: &[Field]) -> syn::Result<usize> {
    let mut errs = ErrorSet::new();
    let mut keys = fields.iter().filter(|field| field.attrs.key.is_some());

    let identity = match keys.next() {
        Some(field) => {
            for extra in keys {
                if let Some(attr) = &extra.attrs.key {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "entity can only have one #[key] field",
                    ));
                }
            }
            field
        }
        None => match fields.iter().find(|field| field.name == "id") {
            Some(field) => field,
            None => {
                return Err(syn::Error::new_spanned(
                    &ast.ident,
                    "entity must have a field named `id` or a field annotated with #[key]",
                ));
            }
        },
    };

    if let Some(skip) = &identity.attrs.skip {
        errs.push(syn::Error::new_spanned(
            skip,
            "the identity field cannot be annotated with #[skip]",
        ));
    }

    if let Some(column) = &identity.attrs.column {
        errs.push(syn::Error::new_spanned(
            &column.name,
            "the identity field cannot be renamed with #[column]",
        ));
    }

    match errs.collect() {
        Some(err) => Err(err),
        None => Ok(identity.index),
    }
}
