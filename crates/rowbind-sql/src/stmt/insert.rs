use super::ColumnValue;

/// `INSERT INTO <table> (<columns>) VALUES(<placeholders>)`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<ColumnValue>,
}

impl Insert {
    pub fn column_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.columns.iter().map(|column| &column.name[..])
    }
}
