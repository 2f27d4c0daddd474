use super::{Builder, Field};

use heck::ToSnakeCase;

/// The mapping table for one entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSchema {
    /// Rust type name of the model
    pub name: String,

    /// Table the model is stored in
    pub table_name: String,

    /// Fields, in declaration order
    pub fields: Vec<Field>,
}

impl ModelSchema {
    /// Starts building a schema at run time.
    pub fn builder(type_name: impl Into<String>) -> Builder {
        Builder::new(type_name)
    }

    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index]
    }

    pub fn width(&self) -> usize {
        self.fields.len()
    }

    /// Mapped fields with their position in the model, in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = (usize, &Field)> + '_ {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.is_mapped())
    }

    /// Positions of the identifier fields.
    ///
    /// Fields marked `#[key]` win. Without any, a mapped field named `id` is
    /// the identifier. Empty when the model has neither.
    pub fn key_fields(&self) -> Vec<usize> {
        let explicit: Vec<_> = self
            .fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.primary_key && field.is_mapped())
            .map(|(index, _)| index)
            .collect();

        if !explicit.is_empty() {
            return explicit;
        }

        self.columns()
            .filter(|(_, field)| field.name == "id")
            .map(|(index, _)| index)
            .collect()
    }

    /// Finds the field a result column hydrates.
    ///
    /// An exact match on a column annotation is tried first, then the column
    /// name in snake_case against the names of mapped fields. Unmapped fields
    /// are never hydrated.
    pub fn resolve_column(&self, column: &str) -> Option<usize> {
        if let Some((index, _)) = self
            .columns()
            .find(|(_, field)| field.column_name() == Some(column))
        {
            return Some(index);
        }

        let name = column.to_snake_case();
        self.columns()
            .find(|(_, field)| field.name == name)
            .map(|(index, _)| index)
    }
}
