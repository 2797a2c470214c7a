//! Storage error types

use bytes::Bytes;
use thiserror::Error;

/// Errors returned by [`Store`](super::Store) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The requested key has no mapping
    #[error("no such key: {:?}", String::from_utf8_lossy(.0))]
    KeyNotFound(Bytes),

    /// Backend failure not tied to a particular key
    #[error("storage failure: {0}")]
    Internal(String),
}

impl StoreError {
    /// Whether this error means the key was absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::KeyNotFound(_))
    }
}
