//! Mutation operation model handed to log sinks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::book::Book;

/// Operation applied to a shelf, recorded after the mutation succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    /// A book was appended.
    Added {
        /// Copy of the appended book.
        book: Book,
    },
    /// One or more books were removed; carries the first one matched.
    Removed {
        /// Copy of the first removed book.
        book: Book,
    },
}

impl Op {
    /// Verb written at the start of the log line.
    pub fn verb(&self) -> &'static str {
        match self {
            Op::Added { .. } => "Added",
            Op::Removed { .. } => "Removed",
        }
    }

    /// Book the operation refers to.
    pub fn book(&self) -> &Book {
        match self {
            Op::Added { book } | Op::Removed { book } => book,
        }
    }

    /// Log line without the trailing newline, e.g. `Added: 1984 by George Orwell (1949)`.
    pub fn log_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.book();
        write!(
            f,
            "{}: {} by {} ({})",
            self.verb(),
            book.title(),
            book.author(),
            book.year()
        )
    }
}
