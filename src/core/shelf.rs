use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    book::Book,
    config::ShelfConfig,
    op::Op,
    persist::{NullSink, OpSink, PersistResult, text::TextLogSink},
    types::SortKey,
};

/// Lookup or removal that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No book carries this exact title.
    #[error("no book titled {0:?}")]
    TitleNotFound(String),
}

/// Result of a mutation that has been applied in memory.
///
/// `journal` reports whether the sink accepted the operation. A failed
/// journal write never rolls the mutation back.
#[derive(Debug)]
pub struct Applied<T> {
    /// Value produced by the mutation.
    pub value: T,
    /// Outcome of handing the operation to the sink.
    pub journal: PersistResult<()>,
}

impl<T> Applied<T> {
    /// True when the sink accepted the operation.
    pub fn is_journaled(&self) -> bool {
        self.journal.is_ok()
    }
}

/// Point-in-time copy of a shelf's books, in shelf order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShelfSnapshot {
    /// Books in shelf order.
    pub books: Vec<Book>,
}

/// Ordered collection of books with an operation sink.
///
/// Books are owned by the shelf; callers keep nothing that aliases them
/// beyond borrows, which end before the next mutating call. Indices from
/// [`Shelf::position_of`] are valid only until the next add, remove or sort.
pub struct Shelf {
    books: Vec<Book>,
    sink: Box<dyn OpSink>,
}

impl Default for Shelf {
    fn default() -> Self {
        Self::with_config(&ShelfConfig::default())
    }
}

impl Shelf {
    /// Empty shelf logging to [`crate::persist::text::DEFAULT_LOG_PATH`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty shelf that hands operations to `sink`.
    pub fn with_sink(sink: impl OpSink + 'static) -> Self {
        Self {
            books: Vec::new(),
            sink: Box::new(sink),
        }
    }

    /// Empty shelf built from `config`.
    pub fn with_config(config: &ShelfConfig) -> Self {
        if config.journal {
            Self::with_sink(TextLogSink::new(config.log_path.clone()))
        } else {
            Self::with_sink(NullSink)
        }
    }

    /// Rebuilds a shelf from a snapshot. Nothing is written to the sink.
    pub fn from_snapshot(snapshot: ShelfSnapshot, sink: impl OpSink + 'static) -> Self {
        Self {
            books: snapshot.books,
            sink: Box::new(sink),
        }
    }

    /// Copies the current books into a snapshot.
    pub fn export_snapshot(&self) -> ShelfSnapshot {
        ShelfSnapshot {
            books: self.books.clone(),
        }
    }

    /// Appends `book` and logs an `Added` operation. Returns its position.
    pub fn add(&mut self, book: Book) -> Applied<usize> {
        let position = self.books.len();
        let op = Op::Added { book: book.clone() };
        self.books.push(book);
        debug!(title = op.book().title(), position, "book added");

        Applied {
            value: position,
            journal: self.journal(&op),
        }
    }

    /// Removes every book whose title equals `title` exactly.
    ///
    /// The remaining books keep their relative order. A single `Removed`
    /// operation is logged for the first match; nothing is logged when no
    /// book matches.
    pub fn remove_book(&mut self, title: &str) -> Result<Applied<Vec<Book>>, StoreError> {
        let (removed, kept): (Vec<Book>, Vec<Book>) = std::mem::take(&mut self.books)
            .into_iter()
            .partition(|book| book.title() == title);
        self.books = kept;

        let Some(first) = removed.first() else {
            return Err(StoreError::TitleNotFound(title.to_string()));
        };

        let op = Op::Removed {
            book: first.clone(),
        };
        debug!(title, count = removed.len(), "books removed");

        Ok(Applied {
            journal: self.journal(&op),
            value: removed,
        })
    }

    /// Owned copy of the first book titled `title`.
    pub fn find_book_by_title(&self, title: &str) -> Option<Book> {
        self.books.iter().find(|book| book.title() == title).cloned()
    }

    /// Index of the first book titled `title`.
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.books.iter().position(|book| book.title() == title)
    }

    /// Book at `index`.
    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    /// Mutable book at `index`. Edits are not logged.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Book> {
        self.books.get_mut(index)
    }

    /// Owned copies of all books by `author`, in shelf order.
    pub fn find_all_by_author(&self, author: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|book| book.author() == author)
            .cloned()
            .collect()
    }

    /// Books in shelf order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True when the shelf holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Prints one listing line per book to stdout.
    pub fn list_books(&self) {
        for book in &self.books {
            book.display();
        }
    }

    /// Writes one listing line per book to `out`.
    pub fn write_listing<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for book in &self.books {
            writeln!(out, "{book}")?;
        }
        Ok(())
    }

    /// Sorts by the field named in `criteria` (`title`, `author` or `year`).
    ///
    /// Any other value leaves the shelf untouched and returns `false`.
    pub fn sort_books_by(&mut self, criteria: &str) -> bool {
        match criteria.parse::<SortKey>() {
            Ok(key) => {
                self.sort_by_field(key);
                true
            }
            Err(err) => {
                debug!("ignoring sort request: {err}");
                false
            }
        }
    }

    /// Stable ascending sort on `key`.
    pub fn sort_by_field(&mut self, key: SortKey) {
        match key {
            SortKey::Title => self.books.sort_by(|a, b| a.title().cmp(b.title())),
            SortKey::Author => self.books.sort_by(|a, b| a.author().cmp(b.author())),
            SortKey::Year => self.books.sort_by_key(Book::year),
        }
        debug!(%key, len = self.books.len(), "shelf sorted");
    }

    /// Flushes the sink.
    pub fn flush(&mut self) -> PersistResult<()> {
        self.sink.flush()
    }

    fn journal(&mut self, op: &Op) -> PersistResult<()> {
        let result = self.sink.append(op);
        if let Err(err) = &result {
            warn!("failed to log {}: {err}", op.verb());
        }
        result
    }
}
