use super::Error;

/// Error when an entity does not produce a record matching its mapping table.
///
/// Derived models always produce records. Dynamic entities can carry any
/// value, so this is checked before a statement is built.
#[derive(Debug)]
pub(super) struct InvalidEntityKind {
    model: Box<str>,
    mismatch: Mismatch,
}

#[derive(Debug)]
enum Mismatch {
    /// The value is not a record at all
    Kind(Box<str>),

    /// A record, but not one entry per field
    Width { expected: usize, found: usize },
}

impl std::error::Error for InvalidEntityKind {}

impl core::fmt::Display for InvalidEntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.mismatch {
            Mismatch::Kind(found) => write!(
                f,
                "invalid entity kind: `{}` must be a record, got {}",
                self.model, found
            ),
            Mismatch::Width { expected, found } => write!(
                f,
                "invalid entity kind: `{}` expected {} fields, got {}",
                self.model, expected, found
            ),
        }
    }
}

impl Error {
    /// Creates an invalid entity kind error.
    pub fn invalid_entity_kind(model: impl Into<String>, found: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidEntityKind(InvalidEntityKind {
            model: model.into().into(),
            mismatch: Mismatch::Kind(found.into().into()),
        }))
    }

    /// Creates an invalid entity kind error for a record whose width does not
    /// match the entity's mapping table.
    pub fn entity_width_mismatch(model: impl Into<String>, expected: usize, found: usize) -> Error {
        Error::from(super::ErrorKind::InvalidEntityKind(InvalidEntityKind {
            model: model.into().into(),
            mismatch: Mismatch::Width { expected, found },
        }))
    }

    /// Returns `true` if this error is an invalid entity kind error.
    pub fn is_invalid_entity_kind(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidEntityKind(_))
    }
}
