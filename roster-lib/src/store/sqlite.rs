//! SQLite blob backend with in-memory cache.

use std::path::Path;

use async_sqlite::rusqlite;
use async_sqlite::Client;
use async_sqlite::ClientBuilder;
use async_sqlite::JournalMode;
use async_trait::async_trait;
use dashmap::DashMap;

use super::BlobBackend;
use crate::error::StoreError;

/// SQLite-backed blob storage with DashMap cache.
///
/// Persists across process restarts. Uses WAL journal mode for file
/// databases.
///
/// # Example
///
/// ```ignore
/// use roster_lib::store::SqliteBackend;
///
/// let backend = SqliteBackend::open("roster.db").await?;
/// ```
pub struct SqliteBackend {
    client: Client,
    cache: DashMap<String, Vec<u8>>,
}

impl SqliteBackend {
    /// Opens (or creates) a database at the given path.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let client = ClientBuilder::new()
            .path(path)
            .journal_mode(JournalMode::Wal)
            .open()
            .await?;

        Self::init_schema(&client).await?;

        Ok(Self {
            client,
            cache: DashMap::new(),
        })
    }

    /// Opens an in-memory database. Data is lost when the backend is dropped.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let client = ClientBuilder::new().path(":memory:").open().await?;

        Self::init_schema(&client).await?;

        Ok(Self {
            client,
            cache: DashMap::new(),
        })
    }

    async fn init_schema(client: &Client) -> Result<(), StoreError> {
        client
            .conn(|conn| {
                conn.execute(
                    "CREATE TABLE IF NOT EXISTS kv (
                        key TEXT PRIMARY KEY,
                        value BLOB NOT NULL
                    )",
                    [],
                )
            })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl BlobBackend for SqliteBackend {
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if let Some(value) = self.cache.get(key) {
            return Ok(Some(value.clone()));
        }

        let key_owned = key.to_string();
        let result = self
            .client
            .conn(move |conn| {
                let mut stmt = conn.prepare("SELECT value FROM kv WHERE key = ?")?;
                let mut rows = stmt.query([&key_owned])?;
                match rows.next()? {
                    Some(row) => Ok(Some(row.get::<_, Vec<u8>>(0)?)),
                    None => Ok(None),
                }
            })
            .await?;

        if let Some(ref value) = result {
            self.cache.insert(key.to_string(), value.clone());
        }

        Ok(result)
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let key_owned = key.to_string();
        let value_clone = value.clone();

        self.client
            .conn(move |conn| {
                conn.execute(
                    "INSERT INTO kv (key, value) VALUES (?, ?)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                    rusqlite::params![&key_owned, &value_clone],
                )
            })
            .await?;

        self.cache.insert(key.to_string(), value);

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let key_owned = key.to_string();

        self.client
            .conn(move |conn| conn.execute("DELETE FROM kv WHERE key = ?", [&key_owned]))
            .await?;

        self.cache.remove(key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_roundtrip_and_delete() {
        let backend = SqliteBackend::open_in_memory().await.unwrap();
        assert_eq!(backend.get_bytes("k").await.unwrap(), None);

        backend.set_bytes("k", b"one".to_vec()).await.unwrap();
        backend.set_bytes("k", b"two".to_vec()).await.unwrap();
        assert_eq!(backend.get_bytes("k").await.unwrap(), Some(b"two".to_vec()));

        backend.delete("k").await.unwrap();
        assert_eq!(backend.get_bytes("k").await.unwrap(), None);
    }
}
