use super::ModelSchema;
use crate::{Error, Result};

use std::collections::HashSet;

struct Verify<'a> {
    schema: &'a ModelSchema,
}

impl ModelSchema {
    /// Checks the mapping table is usable: a table name, unique field names,
    /// and unique non-empty column names.
    pub fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        self.verify_table_name()?;
        self.verify_field_names_are_unique()?;
        self.verify_columns_are_not_empty()?;
        self.verify_columns_are_unique()?;
        Ok(())
    }

    fn verify_table_name(&self) -> Result<()> {
        if self.schema.table_name.is_empty() {
            return Err(Error::invalid_schema(format!(
                "`{}` has an empty table name",
                self.schema.name
            )));
        }

        Ok(())
    }

    fn verify_field_names_are_unique(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for field in &self.schema.fields {
            if !seen.insert(&field.name) {
                return Err(Error::invalid_schema(format!(
                    "field `{}.{}` is declared more than once",
                    self.schema.name, field.name
                )));
            }
        }

        Ok(())
    }

    fn verify_columns_are_not_empty(&self) -> Result<()> {
        for field in &self.schema.fields {
            if field.column.as_deref() == Some("") {
                return Err(Error::invalid_schema(format!(
                    "field `{}.{}` has an empty column name",
                    self.schema.name, field.name
                )));
            }

            if field.primary_key && !field.is_mapped() {
                return Err(Error::invalid_schema(format!(
                    "key field `{}.{}` has no column",
                    self.schema.name, field.name
                )));
            }
        }

        Ok(())
    }

    fn verify_columns_are_unique(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for (_, field) in self.schema.columns() {
            let column = field.column_name().unwrap_or_default();

            if !seen.insert(column) {
                return Err(Error::invalid_schema(format!(
                    "`{}` maps more than one field to column `{column}`",
                    self.schema.name
                )));
            }
        }

        Ok(())
    }
}
