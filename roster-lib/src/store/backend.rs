//! Blob backend trait.

use async_trait::async_trait;

use crate::error::StoreError;

/// Backend trait for named blob storage.
///
/// Implementations handle raw byte storage/retrieval.
/// [`LocalUserStore`](super::LocalUserStore) wraps this with JSON
/// serialization.
#[async_trait]
pub trait BlobBackend: Send + Sync {
    /// Get raw bytes for a key.
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Set raw bytes for a key.
    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Delete a key.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
