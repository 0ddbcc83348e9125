//! In-memory book collection.

/// Ordered book collection and its query/mutation operations.
pub mod shelf;
