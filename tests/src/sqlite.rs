use storm_core::{
    async_trait,
    driver::{Capability, Connection, Driver, Operation},
    stmt::Statement,
    Result,
};
use storm_driver_sqlite::Sqlite;

/// An in-memory SQLite driver that runs `ddl` on every new connection.
#[derive(Debug)]
pub struct Seeded {
    inner: Sqlite,
    ddl: Vec<String>,
}

impl Seeded {
    pub fn new<I>(ddl: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            inner: Sqlite::in_memory(),
            ddl: ddl.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl Driver for Seeded {
    fn capability(&self) -> &Capability {
        self.inner.capability()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        let mut connection = self.inner.connect().await?;

        for sql in &self.ddl {
            tracing::debug!(sql, "seeding sqlite database");
            connection
                .exec(Operation::Execute(Statement::new(sql.as_str(), vec![])))
                .await?;
        }

        Ok(connection)
    }
}

/// Connects to a fresh in-memory database holding the `users` table.
pub async fn users_db() -> storm::Db {
    crate::connect(Seeded::new([
        "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, email TEXT)",
    ]))
    .await
}
