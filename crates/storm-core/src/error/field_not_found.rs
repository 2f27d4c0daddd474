use super::Error;

/// Error when a result column has no corresponding field on the destination model.
///
/// Raised while resolving the result set's columns, before any row is hydrated.
#[derive(Debug)]
pub(super) struct FieldNotFound {
    model: Box<str>,
    column: Box<str>,
}

impl std::error::Error for FieldNotFound {}

impl core::fmt::Display for FieldNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field not found: column `{}` has no matching field on `{}`",
            self.column, self.model
        )
    }
}

impl Error {
    /// Creates a field not found error.
    pub fn field_not_found(model: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::FieldNotFound(FieldNotFound {
            model: model.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a field not found error.
    pub fn is_field_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FieldNotFound(_))
    }
}
