use crate::{Model, Result};

use storm_core::{
    driver::Rows,
    schema::ModelSchema,
    stmt::{SparseRecord, Value},
    Error,
};

/// Reads every row of `rows` into models.
///
/// Result columns are resolved to fields before the first row is read, so
/// an unknown or doubly mapped column fails without loading anything. Rows
/// are returned only once the cursor is exhausted; the cursor is dropped on
/// every path out of this function.
pub(crate) async fn hydrate<M: Model>(rows: Rows) -> Result<Vec<M>> {
    let schema = M::schema();
    let Rows { columns, mut values } = rows;
    let mapping = resolve(schema, &columns)?;

    let mut staged = Vec::with_capacity(values.min_len());

    loop {
        let row = match values.next().await {
            Some(Ok(row)) => row,
            Some(Err(err)) => return Err(err.context(Error::row_iteration(staged.len()))),
            None => break,
        };

        staged.push(load(schema, &mapping, row)?);
    }

    Ok(staged)
}

/// Maps each result column to the position of the field it hydrates.
fn resolve(schema: &ModelSchema, columns: &[String]) -> Result<Vec<usize>> {
    let mut seen = vec![false; schema.width()];

    columns
        .iter()
        .map(|column| {
            let index = schema
                .resolve_column(column)
                .ok_or_else(|| Error::field_not_found(&schema.name, column))?;

            if std::mem::replace(&mut seen[index], true) {
                return Err(Error::duplicate_column(
                    &schema.name,
                    &schema.field(index).name,
                ));
            }

            Ok(index)
        })
        .collect()
}

fn load<M: Model>(schema: &ModelSchema, mapping: &[usize], row: Value) -> Result<M> {
    let row = row.into_record()?;

    if row.len() != mapping.len() {
        storm_core::bail!(
            "row has {} values but the result set has {} columns",
            row.len(),
            mapping.len()
        );
    }

    let mut record = SparseRecord::new(schema.width());

    for (value, &index) in row.into_iter().zip(mapping) {
        record.set(index, value);
    }

    M::load(record)
}
