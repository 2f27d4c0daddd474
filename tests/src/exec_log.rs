use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use storm_core::{driver::Operation, stmt::Statement};

/// One operation the mock driver received, with what it answered.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverOp {
    pub operation: Operation,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Answered with an affected-row count
    Count(u64),

    /// Answered with a cursor holding this many rows
    Rows(usize),

    /// Answered with an error
    Failed(String),
}

/// A handle on the mock driver's operations log
#[derive(Debug, Clone)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
    cursors_opened: Arc<AtomicUsize>,
    cursors_released: Arc<AtomicUsize>,
}

impl ExecLog {
    pub(crate) fn new(
        ops: Arc<Mutex<Vec<DriverOp>>>,
        cursors_opened: Arc<AtomicUsize>,
        cursors_released: Arc<AtomicUsize>,
    ) -> Self {
        Self {
            ops,
            cursors_opened,
            cursors_released,
        }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    pub fn queries(&self) -> usize {
        self.count(Operation::is_query)
    }

    pub fn executes(&self) -> usize {
        self.count(Operation::is_execute)
    }

    /// Remove and return the oldest operation
    pub fn pop(&mut self) -> Option<DriverOp> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            Some(ops.remove(0))
        }
    }

    /// Remove the oldest operation and return its statement
    pub fn pop_statement(&mut self) -> Option<Statement> {
        self.pop().map(|op| op.operation.into_statement())
    }

    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Number of row cursors handed out and not yet dropped
    pub fn open_cursors(&self) -> usize {
        self.cursors_opened.load(Ordering::SeqCst) - self.cursors_released.load(Ordering::SeqCst)
    }

    pub fn cursors_released(&self) -> usize {
        self.cursors_released.load(Ordering::SeqCst)
    }
}
