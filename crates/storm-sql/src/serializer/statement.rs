use super::{And, Comma, Formatter, Ident, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::Statement::Delete(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

/// `column = <placeholder>`
impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = Ident(&self.column);
        let value = &self.value;

        fmt!(f, column " = " value);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let filter = And(&self.filter);

        fmt!(f, "DELETE FROM " table " WHERE " filter);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let columns = Comma(self.values.iter().map(|value| Ident(&value.column)));
        let values = Comma(self.values.iter().map(|value| &value.value));

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let assignments = Comma(&self.assignments);
        let filter = And(&self.filter);

        fmt!(f, "UPDATE " table " SET " assignments " WHERE " filter);
    }
}
