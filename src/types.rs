//! Shared primitive types and sort criteria.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Publication year. Negative values are accepted.
pub type Year = i32;

/// Field used to order the shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Byte-lexicographic by title.
    Title,
    /// Byte-lexicographic by author.
    Author,
    /// Numeric by year.
    Year,
}

impl SortKey {
    /// Criteria name accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Year => "year",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Criteria string that names no known field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort criteria: {0:?}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortKey::Title),
            "author" => Ok(SortKey::Author),
            "year" => Ok(SortKey::Year),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}
