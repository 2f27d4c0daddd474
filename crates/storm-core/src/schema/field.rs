/// One field of a model, as seen by the mapping table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Rust field name
    pub name: String,

    /// Column the field is persisted to. Fields without a column take no
    /// part in generated statements.
    pub column: Option<String>,

    /// True when the field was marked `#[key]`
    pub primary_key: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, column: Option<String>) -> Self {
        Self {
            name: name.into(),
            column,
            primary_key: false,
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(&self.column, Some(column) if !column.is_empty())
    }

    pub fn column_name(&self) -> Option<&str> {
        self.column.as_deref().filter(|column| !column.is_empty())
    }
}
