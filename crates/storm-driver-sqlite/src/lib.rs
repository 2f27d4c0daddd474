mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use std::path::{Path, PathBuf};
use storm_core::{
    async_trait,
    driver::{Capability, Driver, Operation, Response, Rows},
    stmt, Error, Result,
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a `sqlite::memory:` or
    /// `sqlite:<path>` connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "connection URL has no database path; url={url_str}"
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn capability(&self) -> &Capability {
        &Capability::SQLITE
    }

    async fn connect(&self) -> Result<Box<dyn storm_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    /// `None` once closed
    connection: Option<RusqliteConnection>,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        tracing::debug!(path = ":memory:", "opened sqlite database");

        Ok(Self {
            connection: Some(connection),
        })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let connection = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        tracing::debug!(path = %path.display(), "opened sqlite database");

        Ok(Self {
            connection: Some(connection),
        })
    }

    fn connection(&self) -> Result<&RusqliteConnection> {
        match &self.connection {
            Some(connection) => Ok(connection),
            None => Err(storm_core::err!("sqlite connection is closed")),
        }
    }

    fn execute(&self, stmt: &stmt::Statement) -> Result<u64> {
        let mut prepared = self
            .connection()?
            .prepare_cached(stmt.sql())
            .map_err(Error::driver_operation_failed)?;

        let params = stmt.args().iter().cloned().map(Value::from).collect::<Vec<_>>();

        let count = prepared
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        Ok(count as u64)
    }

    fn query(&self, stmt: &stmt::Statement) -> Result<Rows> {
        let mut prepared = self
            .connection()?
            .prepare_cached(stmt.sql())
            .map_err(Error::driver_operation_failed)?;

        let columns: Vec<String> = prepared
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();

        let params = stmt.args().iter().cloned().map(Value::from).collect::<Vec<_>>();

        let mut rows = prepared
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        // A failure part way through is handed to the caller as the cursor's
        // last item, after the rows read before it.
        let mut ret = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => match read_row(row, width) {
                    Ok(row) => ret.push(Ok(row)),
                    Err(err) => {
                        ret.push(Err(Error::driver_operation_failed(err)));
                        break;
                    }
                },
                Ok(None) => break,
                Err(err) => {
                    ret.push(Err(Error::driver_operation_failed(err)));
                    break;
                }
            }
        }

        Ok(Rows::new(columns, stmt::ValueStream::from_iter(ret.into_iter())))
    }
}

fn read_row(row: &rusqlite::Row<'_>, width: usize) -> rusqlite::Result<stmt::Value> {
    let mut items = Vec::with_capacity(width);

    for index in 0..width {
        items.push(Value::from_sql(row, index)?.into_inner());
    }

    Ok(stmt::Value::record_from_vec(items))
}

#[storm_core::async_trait]
impl storm_core::driver::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::Execute(stmt) => Ok(Response::count(self.execute(&stmt)?)),
            Operation::Query(stmt) => Ok(Response::Rows(self.query(&stmt)?)),
        }
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(connection) = self.connection.take() {
            connection
                .close()
                .map_err(|(_, err)| Error::driver_operation_failed(err))?;
            tracing::debug!("closed sqlite database");
        }

        Ok(())
    }
}
