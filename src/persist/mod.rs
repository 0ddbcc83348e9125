pub mod text;

use std::{
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::op::Op;

/// Failure while writing an operation to a sink.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The log file could not be opened or written.
    #[error("failed to append to {}: {source}", .path.display())]
    Io {
        /// Log file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for sink operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Receiver for operations applied to a shelf.
///
/// A shelf calls [`OpSink::append`] once per successful add or remove,
/// after the in-memory change has been made.
pub trait OpSink: Send {
    /// Records a single operation.
    fn append(&mut self, op: &Op) -> PersistResult<()>;

    /// Forces buffered output out. Sinks that write through need not override this.
    fn flush(&mut self) -> PersistResult<()> {
        Ok(())
    }
}

/// Sink that drops every operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl OpSink for NullSink {
    fn append(&mut self, _op: &Op) -> PersistResult<()> {
        Ok(())
    }
}

/// In-memory sink. Clones share the same buffer, so a clone kept by the
/// caller observes everything appended through the clone given to a shelf.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    ops: Arc<Mutex<Vec<Op>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations recorded so far, oldest first.
    pub fn ops(&self) -> Vec<Op> {
        self.guard().clone()
    }

    /// Rendered log lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.guard().iter().map(Op::log_line).collect()
    }

    /// Number of recorded operations.
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Op>> {
        self.ops.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl OpSink for MemorySink {
    fn append(&mut self, op: &Op) -> PersistResult<()> {
        self.guard().push(op.clone());
        Ok(())
    }
}
