use super::{Assignment, Statement};

/// `DELETE FROM <table> WHERE k1 = ? AND ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Target table
    pub table: String,

    /// Equality terms joined with `AND`
    pub filter: Vec<Assignment>,
}

impl Statement {
    pub fn delete(table: impl Into<String>, filter: Vec<Assignment>) -> Self {
        Delete {
            table: table.into(),
            filter,
        }
        .into()
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
