use crate::Model;

use storm_core::{schema::ModelSchema, stmt::Value};

use std::sync::Arc;

/// Anything the statement builder can persist: a mapping table plus the
/// values to write.
pub trait Entity {
    fn schema(&self) -> &ModelSchema;

    /// The entity's values. Must be a `Value::Record` with one entry per
    /// field of [`Entity::schema`].
    fn to_value(&self) -> Value;
}

impl<M: Model> Entity for M {
    fn schema(&self) -> &ModelSchema {
        M::schema()
    }

    fn to_value(&self) -> Value {
        Model::to_value(self)
    }
}

/// An entity whose mapping table is only known at run time.
///
/// ```
/// use storm::{schema::ModelSchema, DynamicEntity, Value};
///
/// let schema = ModelSchema::builder("Tag")
///     .key("id", "id")
///     .field("label", "label")
///     .build()?;
///
/// let tag = DynamicEntity::from_fields(schema, vec![Value::I64(1), Value::from("rust")]);
/// assert_eq!(storm::describe(&tag)?.table, "tags");
/// # Ok::<(), storm::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DynamicEntity {
    schema: Arc<ModelSchema>,
    value: Value,
}

impl DynamicEntity {
    /// Pairs a schema with a value. The value is only checked when the entity
    /// is described, so a non-record value fails there.
    pub fn new(schema: impl Into<Arc<ModelSchema>>, value: impl Into<Value>) -> Self {
        Self {
            schema: schema.into(),
            value: value.into(),
        }
    }

    pub fn from_fields(schema: impl Into<Arc<ModelSchema>>, fields: Vec<Value>) -> Self {
        Self::new(schema, Value::record_from_vec(fields))
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Entity for DynamicEntity {
    fn schema(&self) -> &ModelSchema {
        &self.schema
    }

    fn to_value(&self) -> Value {
        self.value.clone()
    }
}
