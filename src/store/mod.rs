//! In-memory storage module
//!
//! Provides the key-value storage used by the HTTP layer.
//! This module is independent of request handling (loose coupling).

mod error;
mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

use bytes::Bytes;

/// Storage backend behind the HTTP handlers
///
/// Implementations are owned by the shared application state, which
/// serializes access, so methods take plain `&self`/`&mut self`.
///
/// Keys are opaque bytes; they need not be valid UTF-8.
pub trait Store: Send + 'static {
    /// Insert or overwrite the value for `key`
    fn put(&mut self, key: Bytes, value: Bytes) -> Result<(), StoreError>;

    /// Get the value for `key`, or [`StoreError::KeyNotFound`] if absent
    fn get(&self, key: &[u8]) -> Result<Bytes, StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError>;
}
