use super::{Type, Value};

/// A column together with the value written to it.
///
/// The column name doubles as the placeholder name.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnValue {
    pub name: String,

    /// Declared type of the source field, used as a binding hint
    pub ty: Option<Type>,

    pub value: Value,
}

impl ColumnValue {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> ColumnValue {
        ColumnValue {
            name: name.into(),
            ty: None,
            value: value.into(),
        }
    }

    pub fn with_ty(mut self, ty: Type) -> ColumnValue {
        self.ty = Some(ty);
        self
    }
}
