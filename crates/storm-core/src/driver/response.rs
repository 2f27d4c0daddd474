use crate::{
    stmt::{Value, ValueStream},
    Result,
};

#[derive(Debug)]
pub enum Response {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as a cursor over rows
    Rows(Rows),
}

/// A forward-only row cursor.
///
/// Each item of `values` is a `Value::Record` holding one row, with one
/// entry per name in `columns`. Dropping the cursor releases it.
#[derive(Debug, Default)]
pub struct Rows {
    pub columns: Vec<String>,
    pub values: ValueStream,
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self::Count(count)
    }

    pub fn rows(columns: Vec<String>, values: impl Into<ValueStream>) -> Self {
        Self::Rows(Rows::new(columns, values))
    }

    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_rows(&self) -> bool {
        matches!(self, Self::Rows(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Self::Count(count) => Ok(count),
            Self::Rows(_) => bail!("expected an affected-row count, the driver returned rows"),
        }
    }

    pub fn into_rows(self) -> Result<Rows> {
        match self {
            Self::Rows(rows) => Ok(rows),
            Self::Count(_) => bail!("expected rows, the driver returned an affected-row count"),
        }
    }
}

impl Rows {
    pub fn new(columns: Vec<String>, values: impl Into<ValueStream>) -> Self {
        Self {
            columns,
            values: values.into(),
        }
    }

    /// Builds a buffered cursor from row vectors.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self::new(
            columns,
            rows.into_iter()
                .map(Value::record_from_vec)
                .collect::<Vec<_>>(),
        )
    }

    /// Returns the next row, if any.
    pub async fn next(&mut self) -> Option<Result<Value>> {
        self.values.next().await
    }
}
