use crate::{Entity, Result};

use storm_core::{stmt::Value, Error};

/// What an entity value looks like to the statement builder.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor<'a> {
    /// Rust type name of the entity
    pub model: &'a str,

    /// Table the entity is stored in
    pub table: &'a str,

    /// Every mapped field, in declaration order
    pub columns: Vec<ColumnValue<'a>>,
}

/// A mapped field's column and current value.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnValue<'a> {
    pub column: &'a str,
    pub value: Value,

    /// True when the field identifies the row
    pub is_key: bool,
}

impl Descriptor<'_> {
    /// Identifier columns, in declaration order.
    pub fn key(&self) -> impl Iterator<Item = &ColumnValue<'_>> + '_ {
        self.columns.iter().filter(|column| column.is_key)
    }

    /// Non-identifier columns, in declaration order.
    pub fn non_key(&self) -> impl Iterator<Item = &ColumnValue<'_>> + '_ {
        self.columns.iter().filter(|column| !column.is_key)
    }

    pub fn has_key(&self) -> bool {
        self.columns.iter().any(|column| column.is_key)
    }
}

/// Derives the table name, mapped columns and identifier of an entity.
///
/// Fails with `InvalidEntityKind` when the entity's value is not a record
/// matching its mapping table. A missing identifier is not an error here;
/// update and delete check for one.
pub fn describe<E: Entity + ?Sized>(entity: &E) -> Result<Descriptor<'_>> {
    let schema = entity.schema();

    let record = match entity.to_value() {
        Value::Record(record) => record,
        value => {
            return Err(Error::invalid_entity_kind(
                &schema.name,
                format!("{:?}", value.infer_ty()),
            ))
        }
    };

    if record.len() != schema.width() {
        return Err(Error::entity_width_mismatch(
            &schema.name,
            schema.width(),
            record.len(),
        ));
    }

    let key = schema.key_fields();

    let columns = record
        .into_iter()
        .zip(&schema.fields)
        .enumerate()
        .filter_map(|(index, (value, field))| {
            Some(ColumnValue {
                column: field.column_name()?,
                value,
                is_key: key.contains(&index),
            })
        })
        .collect();

    Ok(Descriptor {
        model: &schema.name,
        table: &schema.table_name,
        columns,
    })
}
