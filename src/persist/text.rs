//! Append-only plain-text operation log.

use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use crate::op::Op;

use super::{OpSink, PersistError, PersistResult};

/// Relative path used when no log path is configured.
pub const DEFAULT_LOG_PATH: &str = "library.log";

/// File-backed implementation of [`crate::persist::OpSink`].
///
/// The file is opened in append mode for each operation and closed before
/// [`OpSink::append`] returns, so no handle is held between calls.
#[derive(Debug, Clone)]
pub struct TextLogSink {
    path: PathBuf,
}

impl TextLogSink {
    /// Creates a sink that appends to `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this sink appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistError {
        PersistError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for TextLogSink {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

impl OpSink for TextLogSink {
    fn append(&mut self, op: &Op) -> PersistResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| self.io_error(err))?;
        writeln!(file, "{op}").map_err(|err| self.io_error(err))
    }
}
