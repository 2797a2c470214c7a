//! In-memory storage implementation

use super::{Store, StoreError};
use bytes::Bytes;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use siphasher::sip::SipHasher13;
use tracing::debug;

/// Type alias for our hash map with SipHasher
type StoreMap = HashMap<Bytes, Bytes, BuildHasherDefault<SipHasher13>>;

/// In-memory key-value store
///
/// A plain HashMap with no locking of its own; callers share it behind
/// a mutex. Contents live as long as the process.
pub struct MemoryStore {
    /// The main storage map
    store: StoreMap,
}

impl MemoryStore {
    /// Create a new memory store with default capacity
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a new memory store with specified initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        MemoryStore {
            store: HashMap::with_capacity_and_hasher(
                capacity,
                BuildHasherDefault::<SipHasher13>::default(),
            ),
        }
    }

    /// Get the number of stored keys
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Store for MemoryStore {
    fn put(&mut self, key: Bytes, value: Bytes) -> Result<(), StoreError> {
        debug!(key = %key.escape_ascii(), bytes = value.len(), "put");
        self.store.insert(key, value);
        Ok(())
    }

    fn get(&self, key: &[u8]) -> Result<Bytes, StoreError> {
        match self.store.get(key) {
            Some(value) => {
                debug!(key = %key.escape_ascii(), bytes = value.len(), "get hit");
                Ok(value.clone())
            }
            None => {
                debug!(key = %key.escape_ascii(), "get miss");
                Err(StoreError::KeyNotFound(Bytes::copy_from_slice(key)))
            }
        }
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError> {
        let existed = self.store.remove(key).is_some();
        debug!(key = %key.escape_ascii(), existed, "delete");
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
