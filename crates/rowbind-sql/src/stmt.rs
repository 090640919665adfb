mod column_value;
pub use column_value::ColumnValue;

mod insert;
pub use insert::Insert;

mod update;
pub use update::{Key, Update};

pub use rowbind_core::stmt::*;

/// A resolved statement: every table and column name is final.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Insert(Insert),
    Update(Update),
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
