use super::{ColumnValue, Type, Value};

/// `UPDATE <table> SET <column> = <placeholder>, ... WHERE <key>`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,
    pub assignments: Vec<ColumnValue>,
    pub key: Key,
}

impl Update {
    pub fn column_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.assignments.iter().map(|column| &column.name[..])
    }
}

/// Identity filter of an update: `WHERE <column> = <placeholder>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    pub column: String,

    /// Placeholder name
    pub param: String,

    pub ty: Option<Type>,

    /// Identity value. When `None` the placeholder is still rendered but no
    /// parameter is bound; the caller must supply it.
    pub value: Option<Value>,
}
