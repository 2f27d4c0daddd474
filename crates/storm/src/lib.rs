pub mod db;
pub use db::Db;

mod engine;
pub use engine::{describe, ColumnValue, Descriptor};

mod entity;
pub use entity::{DynamicEntity, Entity};

mod model;
pub use model::Model;

pub mod stmt;
pub use stmt::{Primitive, Value};

pub use storm_core::{driver, schema, Error, Result};

pub use storm_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{model::load_field, stmt::Primitive, Model, Result};
    pub use storm_core::{
        schema::{table_name, Field, ModelSchema},
        stmt::{SparseRecord, Value},
    };
}
