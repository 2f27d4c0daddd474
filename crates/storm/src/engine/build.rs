use super::{ColumnValue, Descriptor};
use crate::Result;

use storm_core::Error;
use storm_sql::stmt::{Assignment, Statement};

pub(super) fn insert(desc: Descriptor<'_>) -> Result<Statement> {
    if desc.columns.is_empty() {
        return Err(Error::invalid_statement(format!(
            "`{}` has no mapped columns to insert",
            desc.model
        )));
    }

    let values = desc.columns.into_iter().map(assignment).collect();
    Ok(Statement::insert(desc.table, values))
}

pub(super) fn update(desc: Descriptor<'_>) -> Result<Statement> {
    let (key, assignments) = split_key(desc)?;

    if assignments.is_empty() {
        return Err(Error::invalid_statement(format!(
            "`{}` has no non-key columns to update",
            key.model
        )));
    }

    Ok(Statement::update(key.table, assignments, key.filter))
}

pub(super) fn delete(desc: Descriptor<'_>) -> Result<Statement> {
    let (key, _) = split_key(desc)?;
    Ok(Statement::delete(key.table, key.filter))
}

struct Key<'a> {
    model: &'a str,
    table: &'a str,
    filter: Vec<Assignment>,
}

/// Separates identifier columns from the rest, failing when the entity has
/// no identifier.
fn split_key(desc: Descriptor<'_>) -> Result<(Key<'_>, Vec<Assignment>)> {
    if !desc.has_key() {
        return Err(Error::missing_identifier(desc.model));
    }

    let (key, rest): (Vec<_>, Vec<_>) = desc.columns.into_iter().partition(|column| column.is_key);

    let key = Key {
        model: desc.model,
        table: desc.table,
        filter: key.into_iter().map(assignment).collect(),
    };

    Ok((key, rest.into_iter().map(assignment).collect()))
}

fn assignment(column: ColumnValue<'_>) -> Assignment {
    Assignment::new(column.column, column.value)
}
