use super::Error;

/// Error surfaced while advancing a row cursor.
///
/// Used as context around the cursor's own error, so the cause is kept in
/// the chain.
#[derive(Debug)]
pub(super) struct RowIteration {
    rows_read: usize,
}

impl std::error::Error for RowIteration {}

impl core::fmt::Display for RowIteration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let noun = if self.rows_read == 1 { "row" } else { "rows" };
        write!(f, "row iteration failed after {} {}", self.rows_read, noun)
    }
}

impl Error {
    /// Creates a row iteration error. `rows_read` is the number of rows
    /// successfully read before the failure.
    pub fn row_iteration(rows_read: usize) -> Error {
        Error::from(super::ErrorKind::RowIteration(RowIteration { rows_read }))
    }

    /// Returns `true` if this error is a row iteration error.
    pub fn is_row_iteration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RowIteration(_))
    }
}
