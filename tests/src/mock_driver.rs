use crate::exec_log::{DriverOp, ExecLog, Outcome};

use std::{
    collections::VecDeque,
    io,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};
use storm_core::{
    async_trait,
    driver::{Capability, Connection, Driver, Operation, Response, Rows},
    stmt::{Value, ValueStream},
    Error, Result,
};

/// A driver answering from a script of expected operations.
///
/// Each operation the connection receives must match the next expectation
/// in order (kind and SQL, plus arguments when the expectation names them).
/// Every operation is logged, matched or not.
#[derive(Debug, Clone)]
pub struct MockDriver {
    capability: Capability,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
    cursors_opened: Arc<AtomicUsize>,
    cursors_released: Arc<AtomicUsize>,
}

#[derive(Debug)]
pub struct Expectation {
    query: bool,
    sql: String,
    args: Option<Vec<Value>>,
    reply: Reply,
}

#[derive(Debug)]
enum Reply {
    Count(u64),
    Rows {
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
        /// Raised by the cursor after `rows` are read
        error: Option<String>,
    },
    Error(String),
}

#[derive(Debug)]
struct MockConnection {
    driver: MockDriver,
    closed: bool,
}

/// Wraps the cursor's rows so the driver can tell when it is dropped.
struct Cursor<I> {
    rows: I,
    released: Arc<AtomicUsize>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::with_capability(Capability::GENERIC)
    }

    pub fn with_capability(capability: Capability) -> Self {
        Self {
            capability,
            expectations: Arc::default(),
            ops_log: Arc::default(),
            cursors_opened: Arc::default(),
            cursors_released: Arc::default(),
        }
    }

    /// Queue an expectation behind the ones already queued
    pub fn expect(&self, expectation: Expectation) -> &Self {
        self.expectations.lock().unwrap().push_back(expectation);
        self
    }

    pub fn log(&self) -> ExecLog {
        ExecLog::new(
            self.ops_log.clone(),
            self.cursors_opened.clone(),
            self.cursors_released.clone(),
        )
    }

    /// Panics if a queued expectation was never met.
    pub fn verify(&self) {
        let pending = self.expectations.lock().unwrap();
        assert!(
            pending.is_empty(),
            "unmet expectations: {:#?}",
            pending.iter().map(|e| &e.sql).collect::<Vec<_>>()
        );
    }

    fn respond(&self, operation: &Operation) -> Result<(Response, Outcome)> {
        let Some(expectation) = self.expectations.lock().unwrap().pop_front() else {
            return Err(driver_error(format!(
                "unexpected operation: {}",
                operation.statement().sql()
            )));
        };

        expectation.check(operation)?;

        match expectation.reply {
            Reply::Count(count) => Ok((Response::count(count), Outcome::Count(count))),
            Reply::Rows {
                columns,
                rows,
                error,
            } => {
                let outcome = Outcome::Rows(rows.len());
                let rows = rows
                    .into_iter()
                    .map(|row| Ok(Value::record_from_vec(row)))
                    .chain(error.map(|message| Err(driver_error(message))));

                self.cursors_opened.fetch_add(1, Ordering::SeqCst);
                let cursor = Cursor {
                    rows: rows.collect::<Vec<Result<Value>>>().into_iter(),
                    released: self.cursors_released.clone(),
                };

                let rows = Rows::new(columns, ValueStream::from_iter(cursor));
                Ok((Response::Rows(rows), outcome))
            }
            Reply::Error(message) => Err(driver_error(message)),
        }
    }
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Driver for MockDriver {
    fn capability(&self) -> &Capability {
        &self.capability
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(MockConnection {
            driver: self.clone(),
            closed: false,
        }))
    }
}

#[async_trait]
impl Connection for MockConnection {
    async fn exec(&mut self, operation: Operation) -> Result<Response> {
        if self.closed {
            return Err(storm_core::err!("mock connection is closed"));
        }

        let (response, outcome) = match self.driver.respond(&operation) {
            Ok((response, outcome)) => (Ok(response), outcome),
            Err(err) => {
                let outcome = Outcome::Failed(err.to_string());
                (Err(err), outcome)
            }
        };

        self.driver
            .ops_log
            .lock()
            .unwrap()
            .push(DriverOp { operation, outcome });

        response
    }

    async fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

impl Expectation {
    /// Expect a row-returning query. Answers with an empty cursor unless
    /// told otherwise.
    pub fn query(sql: impl Into<String>) -> Self {
        Self {
            query: true,
            sql: sql.into(),
            args: None,
            reply: Reply::Rows {
                columns: vec![],
                rows: vec![],
                error: None,
            },
        }
    }

    /// Expect a write statement. Answers with a count of 1 unless told
    /// otherwise.
    pub fn exec(sql: impl Into<String>) -> Self {
        Self {
            query: false,
            sql: sql.into(),
            args: None,
            reply: Reply::Count(1),
        }
    }

    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    pub fn returns_count(mut self, count: u64) -> Self {
        self.reply = Reply::Count(count);
        self
    }

    pub fn returns_rows(mut self, columns: &[&str], rows: Vec<Vec<Value>>) -> Self {
        self.reply = Reply::Rows {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
            error: None,
        };
        self
    }

    /// The cursor fails with `message` once its rows are read.
    pub fn then_fails(mut self, message: impl Into<String>) -> Self {
        match &mut self.reply {
            Reply::Rows { error, .. } => *error = Some(message.into()),
            _ => panic!("then_fails only applies to row replies"),
        }
        self
    }

    /// The driver rejects the operation with `message`.
    pub fn returns_error(mut self, message: impl Into<String>) -> Self {
        self.reply = Reply::Error(message.into());
        self
    }

    fn check(&self, operation: &Operation) -> Result<()> {
        let statement = operation.statement();

        if self.query != operation.is_query() {
            return Err(driver_error(format!(
                "expected {} `{}`, got `{}`",
                if self.query { "query" } else { "execute" },
                self.sql,
                statement.sql()
            )));
        }

        if self.sql != statement.sql() {
            return Err(driver_error(format!(
                "expected `{}`, got `{}`",
                self.sql,
                statement.sql()
            )));
        }

        if let Some(args) = &self.args {
            if args.as_slice() != statement.args() {
                return Err(driver_error(format!(
                    "arguments for `{}` differ; expected {:?}, got {:?}",
                    self.sql,
                    args,
                    statement.args()
                )));
            }
        }

        Ok(())
    }
}

impl<I: Iterator> Iterator for Cursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.rows.next()
    }
}

impl<I> Drop for Cursor<I> {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

fn driver_error(message: impl Into<String>) -> Error {
    Error::driver_operation_failed(io::Error::new(io::ErrorKind::Other, message.into()))
}
