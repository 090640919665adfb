#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;
pub use flavor::Flavor;

mod params;
pub use params::{ParamBag, Params, TypedValue};
use params::Placeholder;

// Fragment serializers
mod statement;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer {
    /// The placeholder syntax to emit
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// Number of placeholders written so far. Positional flavors number
    /// their placeholders from this.
    placeholders: usize,
}

impl Serializer {
    pub fn new(flavor: Flavor) -> Serializer {
        Serializer { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Serializes `stmt`, pushing one parameter per bound placeholder into
    /// `params` in placeholder order. The returned SQL ends with `;`.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            placeholders: 0,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }
}
