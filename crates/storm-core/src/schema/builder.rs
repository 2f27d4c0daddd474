use super::{Field, ModelSchema};
use crate::Result;

/// Builds a [`ModelSchema`] at run time, for entities whose mapping table is
/// only known once the application starts.
#[derive(Debug)]
pub struct Builder {
    name: String,
    table_name: Option<String>,
    fields: Vec<Field>,
}

impl Builder {
    pub(super) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: None,
            fields: vec![],
        }
    }

    /// Overrides the table name derived from the type name.
    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Adds a field persisted to `column`.
    pub fn field(mut self, name: impl Into<String>, column: impl Into<String>) -> Self {
        self.fields.push(Field::new(name, Some(column.into())));
        self
    }

    /// Adds an identifier field persisted to `column`.
    pub fn key(mut self, name: impl Into<String>, column: impl Into<String>) -> Self {
        let mut field = Field::new(name, Some(column.into()));
        field.primary_key = true;
        self.fields.push(field);
        self
    }

    /// Adds a field that is never persisted.
    pub fn unmapped(mut self, name: impl Into<String>) -> Self {
        self.fields.push(Field::new(name, None));
        self
    }

    pub fn build(self) -> Result<ModelSchema> {
        let table_name = self
            .table_name
            .unwrap_or_else(|| super::table_name(&self.name));

        let schema = ModelSchema {
            name: self.name,
            table_name,
            fields: self.fields,
        };

        schema.verify()?;
        Ok(schema)
    }
}
