use super::{Assignment, Statement};

/// `UPDATE <table> SET c1 = ?, ... WHERE k1 = ? AND ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Target table
    pub table: String,

    /// Columns to set
    pub assignments: Vec<Assignment>,

    /// Equality terms joined with `AND`
    pub filter: Vec<Assignment>,
}

impl Statement {
    pub fn update(
        table: impl Into<String>,
        assignments: Vec<Assignment>,
        filter: Vec<Assignment>,
    ) -> Self {
        Update {
            table: table.into(),
            assignments,
            filter,
        }
        .into()
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
