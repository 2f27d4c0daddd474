use super::Value;

/// A column paired with a value. Used for `SET` lists and for the equality
/// terms of a `WHERE` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

impl Assignment {
    pub fn new(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

impl<C: Into<String>, V: Into<Value>> From<(C, V)> for Assignment {
    fn from((column, value): (C, V)) -> Self {
        Self::new(column, value)
    }
}
