mod builder;
mod connect;

pub use builder::Builder;
pub use connect::*;

use crate::{engine::Engine, Entity, Model, Result};

use storm_core::{
    driver::{Connection, Flavor, Operation},
    stmt::{Statement, Value},
};

/// A database handle holding one connection.
///
/// Every operation makes exactly one round trip through the connection.
/// Operations take `&mut self`, so a result cursor is only ever read by the
/// call that opened it.
#[derive(Debug)]
pub struct Db {
    connection: Box<dyn Connection>,
    engine: Engine,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects using a URL such as `sqlite::memory:`, with the driver's
    /// placeholder flavor.
    pub async fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url).await
    }

    /// Placeholder flavor used for generated statements
    pub fn flavor(&self) -> Flavor {
        self.engine.flavor()
    }

    /// Inserts `entity`, returning the number of affected rows.
    pub async fn create<E: Entity + ?Sized>(&mut self, entity: &E) -> Result<u64> {
        let stmt = self.engine.insert(entity)?;
        self.execute(stmt).await
    }

    /// Updates the row identified by `entity`'s key, returning the number of
    /// affected rows.
    pub async fn update<E: Entity + ?Sized>(&mut self, entity: &E) -> Result<u64> {
        let stmt = self.engine.update(entity)?;
        self.execute(stmt).await
    }

    /// Deletes the row identified by `entity`'s key, returning the number of
    /// affected rows.
    pub async fn delete<E: Entity + ?Sized>(&mut self, entity: &E) -> Result<u64> {
        let stmt = self.engine.delete(entity)?;
        self.execute(stmt).await
    }

    /// Runs `sql` and appends one `M` per returned row to `dst`.
    ///
    /// On any error `dst` is left as it was.
    pub async fn find<M: Model>(&mut self, dst: &mut Vec<M>, sql: &str, args: &[Value]) -> Result<()> {
        tracing::debug!(sql, args = args.len(), "running query");

        let stmt = Statement::new(sql, args.to_vec());
        let rows = self
            .connection
            .exec(Operation::Query(stmt))
            .await?
            .into_rows()?;

        let loaded = crate::engine::hydrate::<M>(rows).await?;

        tracing::debug!(model = %M::schema().name, rows = loaded.len(), "hydrated rows");

        dst.extend(loaded);
        Ok(())
    }

    /// Closes the underlying connection.
    pub async fn close(mut self) -> Result<()> {
        self.connection.close().await
    }

    async fn execute(&mut self, stmt: Statement) -> Result<u64> {
        tracing::debug!(sql = stmt.sql(), args = stmt.args().len(), "executing statement");

        self.connection
            .exec(Operation::Execute(stmt))
            .await?
            .into_count()
    }
}
