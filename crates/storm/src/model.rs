use crate::{stmt::Primitive, Result};

use storm_core::{
    schema::ModelSchema,
    stmt::{SparseRecord, Value},
};

/// A struct persisted through its mapping table. Implemented with
/// `#[derive(Model)]`.
pub trait Model: Sized + Send + 'static {
    /// The mapping table, built once per type.
    fn schema() -> &'static ModelSchema;

    /// Returns the model as a record with one entry per field.
    fn to_value(&self) -> Value;

    /// Load an instance of the model, populating fields from the given record.
    /// Fields with no value in the record take their default.
    fn load(record: SparseRecord) -> Result<Self>;
}

/// Loads field `index` from `record`, defaulting when the result set did not
/// carry it.
pub fn load_field<T: Primitive + Default>(record: &mut SparseRecord, index: usize) -> Result<T> {
    match record.take(index) {
        Some(value) => T::load(value),
        None => Ok(T::default()),
    }
}
