/// Arguments of `#[column("name")]`.
#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: syn::LitStr,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let name: syn::LitStr = input.parse().map_err(|err| {
            syn::Error::new(err.span(), "expected `#[column(\"column_name\")]`")
        })?;

        if !input.is_empty() {
            return Err(syn::Error::new(
                input.span(),
                "expected `#[column(\"column_name\")]`",
            ));
        }

        if name.value().is_empty() {
            return Err(syn::Error::new_spanned(&name, "column name cannot be empty"));
        }

        Ok(Column { name })
    }
}
