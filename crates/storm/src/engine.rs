mod build;

mod hydrate;
pub(crate) use hydrate::hydrate;

mod reflect;
pub use reflect::{describe, ColumnValue, Descriptor};

use crate::{Entity, Result};

use storm_core::{driver::Flavor, stmt::Statement};
use storm_sql::Serializer;

/// Turns entities into statements for one placeholder flavor.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Engine {
    serializer: Serializer,
}

impl Engine {
    pub(crate) fn new(serializer: Serializer) -> Self {
        Self { serializer }
    }

    pub(crate) fn flavor(&self) -> Flavor {
        self.serializer.flavor()
    }

    pub(crate) fn insert(&self, entity: &(impl Entity + ?Sized)) -> Result<Statement> {
        let stmt = build::insert(describe(entity)?)?;
        Ok(self.render(&stmt))
    }

    pub(crate) fn update(&self, entity: &(impl Entity + ?Sized)) -> Result<Statement> {
        let stmt = build::update(describe(entity)?)?;
        Ok(self.render(&stmt))
    }

    pub(crate) fn delete(&self, entity: &(impl Entity + ?Sized)) -> Result<Statement> {
        let stmt = build::delete(describe(entity)?)?;
        Ok(self.render(&stmt))
    }

    fn render(&self, stmt: &storm_sql::Statement) -> Statement {
        let mut args = vec![];
        let sql = self.serializer.serialize(stmt, &mut args);
        Statement::new(sql, args)
    }
}
