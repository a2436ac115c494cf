//! Error values reported by table operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// No entry with this key in its bucket's chain
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// The bucket array has zero length
    #[error("entries not found")]
    EmptyEntries,

    #[error("capacity must be at least 1")]
    ZeroCapacity,
}

impl TableError {
    pub(crate) fn key_not_found(key: &str) -> Self {
        TableError::KeyNotFound(key.to_owned())
    }

    /// True for the missing-key case, whatever the key was
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, TableError::KeyNotFound(_))
    }
}
