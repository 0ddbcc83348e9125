//! In-memory book collection with an append-only operation log.
//!
//! # Examples
//!
//! In-memory usage with [`persist::MemorySink`]:
//! ```
//! use bookshelf::{book::Book, core::shelf::Shelf, persist::MemorySink};
//!
//! let log = MemorySink::new();
//! let mut shelf = Shelf::with_sink(log.clone());
//! let _ = shelf.add(Book::with_genre("1984", "George Orwell", 1949, "Dystopian"));
//! let _ = shelf.add(Book::new("Brave New World", "Aldous Huxley", 1932));
//!
//! assert!(shelf.sort_books_by("author"));
//! assert_eq!(shelf.books()[0].author(), "Aldous Huxley");
//! assert_eq!(log.lines()[0], "Added: 1984 by George Orwell (1949)");
//! ```
//!
//! Logging to a text file:
//! ```no_run
//! use bookshelf::{book::Book, config::ShelfConfig, core::shelf::Shelf};
//!
//! let config = ShelfConfig { log_path: "books.log".into(), ..ShelfConfig::default() };
//! let mut shelf = Shelf::with_config(&config);
//! let added = shelf.add(Book::new("Dune", "Frank Herbert", 1965));
//! if let Err(err) = added.journal {
//!     eprintln!("log write failed: {err}");
//! }
//! ```
#![deny(missing_docs)]

/// Book record type.
pub mod book;
/// Shelf construction settings.
pub mod config;
/// Ordered in-memory collection.
pub mod core;
/// Operation model handed to log sinks.
pub mod op;
/// Log sink abstraction and text-file implementation.
pub mod persist;
/// Shared primitive types and enums.
pub mod types;
