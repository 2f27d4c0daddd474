use super::Error;

/// Error when two result columns resolve to the same model field.
#[derive(Debug)]
pub(super) struct DuplicateColumn {
    model: Box<str>,
    field: Box<str>,
}

impl std::error::Error for DuplicateColumn {}

impl core::fmt::Display for DuplicateColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "duplicate column: more than one result column maps to `{}.{}`",
            self.model, self.field
        )
    }
}

impl Error {
    /// Creates a duplicate column error.
    pub fn duplicate_column(model: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateColumn(DuplicateColumn {
            model: model.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate column error.
    pub fn is_duplicate_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateColumn(_))
    }
}
