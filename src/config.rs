//! Shelf construction settings.

use std::path::PathBuf;

use crate::persist::text::DEFAULT_LOG_PATH;

/// Settings used by [`crate::core::shelf::Shelf::with_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// File the operation log is appended to.
    pub log_path: PathBuf,
    /// When false, operations are discarded instead of written.
    pub journal: bool,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            journal: true,
        }
    }
}
