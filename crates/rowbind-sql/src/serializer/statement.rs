use super::{Comma, Formatter, Params, Placeholder, ToSql};

use crate::stmt;

/// Column name only, as it appears in an `INSERT` column list.
struct ColumnName<'a>(&'a stmt::ColumnValue);

/// Placeholder bound to the column's value.
struct Bind<'a>(&'a stmt::ColumnValue);

/// `<column> = <placeholder>`
struct Assignment<'a>(&'a stmt::ColumnValue);

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let columns = Comma(self.columns.iter().map(ColumnName));
        let values = Comma(self.columns.iter().map(Bind));
        let table = &self.table;

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES(" values ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let assignments = Comma(self.assignments.iter().map(Assignment));
        let table = &self.table;
        let key = &self.key;

        fmt!(f, "UPDATE " table " SET " assignments " WHERE " key);
    }
}

impl ToSql for &stmt::Key {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.placeholder(&self.param);

        if let Some(value) = &self.value {
            f.params.push(&self.param, value, self.ty);
        }

        let column = &self.column;
        fmt!(f, column " = " placeholder);
    }
}

impl ToSql for ColumnName<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = &self.0.name;
        fmt!(f, name);
    }
}

impl ToSql for Bind<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = self.0;
        let placeholder = f.placeholder(&column.name);
        f.params.push(&column.name, &column.value, column.ty);

        fmt!(f, placeholder);
    }
}

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = &self.0.name;
        fmt!(f, name " = " Bind(self.0));
    }
}

impl<T> Formatter<'_, T> {
    /// Allocates the next placeholder position.
    fn placeholder<'b>(&mut self, name: &'b str) -> Placeholder<'b> {
        self.placeholders += 1;
        Placeholder {
            name,
            position: self.placeholders,
        }
    }
}
