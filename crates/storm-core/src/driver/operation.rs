use crate::stmt::Statement;

/// A single round trip to the database.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Run a statement returning rows
    Query(Statement),

    /// Run a statement returning the number of affected rows
    Execute(Statement),
}

impl Operation {
    pub fn statement(&self) -> &Statement {
        match self {
            Self::Query(stmt) | Self::Execute(stmt) => stmt,
        }
    }

    pub fn into_statement(self) -> Statement {
        match self {
            Self::Query(stmt) | Self::Execute(stmt) => stmt,
        }
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    pub fn is_execute(&self) -> bool {
        matches!(self, Self::Execute(_))
    }
}
