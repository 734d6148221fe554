//! In-memory blob backend using DashMap

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use super::BlobBackend;
use crate::error::StoreError;

/// An in-memory backend backed by a concurrent hash map.
///
/// Data is lost when the last clone is dropped. Clones share the same map,
/// so a clone can stand in for "the same storage after a restart".
///
/// # Example
///
/// ```
/// use roster_lib::store::MemoryBackend;
///
/// let backend = MemoryBackend::new();
/// assert!(backend.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    store: Arc<DashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    /// Creates a new empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[async_trait]
impl BlobBackend for MemoryBackend {
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.store.get(key).map(|entry| entry.value().clone()))
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.store.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.store.remove(key);
        Ok(())
    }
}
