use super::{Assignment, Statement};

/// `INSERT INTO <table> (<columns>) VALUES (<placeholders>)`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Target table
    pub table: String,

    /// Columns and the values inserted into them, in column order
    pub values: Vec<Assignment>,
}

impl Statement {
    pub fn insert(table: impl Into<String>, values: Vec<Assignment>) -> Self {
        Insert {
            table: table.into(),
            values,
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
