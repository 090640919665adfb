use super::{IdentityParam, Mapper};
use crate::{Casing, Flavor, Pluralize};

use std::sync::Arc;

/// Configures a [`Mapper`].
#[derive(Debug, Clone, Default)]
pub struct Builder {
    table_casing: Casing,
    column_casing: Casing,
    pluralize: Pluralize,
    table_name_prefix: Option<Arc<str>>,
    flavor: Flavor,
    identity_param: IdentityParam,
}

impl Builder {
    pub(super) fn new() -> Builder {
        Builder {
            table_casing: Casing::Snake,
            column_casing: Casing::Preserve,
            ..Builder::default()
        }
    }

    /// Casing for derived table names. Overrides are never cased.
    pub fn table_casing(&mut self, casing: Casing) -> &mut Self {
        self.table_casing = casing;
        self
    }

    /// Casing for derived column names. Overrides are never cased.
    pub fn column_casing(&mut self, casing: Casing) -> &mut Self {
        self.column_casing = casing;
        self
    }

    pub fn pluralize(&mut self, pluralize: Pluralize) -> &mut Self {
        self.pluralize = pluralize;
        self
    }

    /// Set the prefix for derived table names
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = if prefix.is_empty() {
            None
        } else {
            Some(prefix.into())
        };
        self
    }

    /// Placeholder syntax of generated statements.
    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = flavor;
        self
    }

    pub fn identity_param(&mut self, identity_param: IdentityParam) -> &mut Self {
        self.identity_param = identity_param;
        self
    }

    pub fn build(&self) -> Mapper {
        Mapper {
            table_casing: self.table_casing,
            column_casing: self.column_casing,
            pluralize: self.pluralize,
            table_name_prefix: self.table_name_prefix.clone(),
            serializer: crate::Serializer::new(self.flavor),
            identity_param: self.identity_param,
        }
    }
}
