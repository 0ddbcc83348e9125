//! Book record type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Year;

/// Genre stored when the caller does not supply one.
pub const DEFAULT_GENRE: &str = "Unknown";

/// A single book entry.
///
/// Nothing is validated: empty titles and negative years are stored as
/// given. Titles act as the lookup key on a [`crate::core::shelf::Shelf`]
/// but are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    year: Year,
    genre: String,
}

impl Book {
    /// Creates a book with the [`DEFAULT_GENRE`].
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: Year) -> Self {
        Self::with_genre(title, author, year, DEFAULT_GENRE)
    }

    /// Creates a book with every field supplied.
    pub fn with_genre(
        title: impl Into<String>,
        author: impl Into<String>,
        year: Year,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
        }
    }

    /// Title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author text.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Publication year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Genre text.
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the author.
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    /// Replaces the year.
    pub fn set_year(&mut self, year: Year) {
        self.year = year;
    }

    /// Replaces the genre.
    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = genre.into();
    }

    /// Prints the listing line for this book to stdout.
    pub fn display(&self) {
        println!("{self}");
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Year: {}, Genre: {}",
            self.title, self.author, self.year, self.genre
        )
    }
}
