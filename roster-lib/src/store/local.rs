//! The local users collection.

use std::sync::Arc;

use log::debug;
use log::warn;
use serde::Deserialize;
use serde::Serialize;

use super::BlobBackend;
use crate::error::StoreError;
use crate::model::LocalUser;
use crate::model::UserFields;
use crate::model::UserId;

/// Key of the persisted collection blob.
pub const STORAGE_KEY: &str = "local-users-storage";

/// Identifier handed to the first record of a fresh collection.
pub const FIRST_ID: u64 = 1;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    #[serde(default)]
    users: Vec<LocalUser>,
    #[serde(default = "first_id")]
    next_id: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRef<'a> {
    users: &'a [LocalUser],
    next_id: u64,
}

fn first_id() -> u64 {
    FIRST_ID
}

/// Persisted CRUD collection of local users.
///
/// Identifiers come from a counter that only moves forward: removing a
/// record never frees its identifier. [`clear`](Self::clear) returns the
/// collection to its first-run state, counter included.
///
/// Every mutation writes the whole collection before it takes effect, so a
/// failed write leaves the in-memory state unchanged.
///
/// # Example
///
/// ```ignore
/// use roster_lib::store::{LocalUserStore, MemoryBackend};
///
/// let mut store = LocalUserStore::open(MemoryBackend::new()).await?;
/// let user = store.add(fields).await?;
/// assert_eq!(user.id.get(), 1);
/// ```
pub struct LocalUserStore {
    backend: Arc<dyn BlobBackend>,
    key: String,
    users: Vec<LocalUser>,
    next_id: u64,
}

impl LocalUserStore {
    /// Opens the collection stored under [`STORAGE_KEY`].
    pub async fn open(backend: impl BlobBackend + 'static) -> Result<Self, StoreError> {
        Self::open_with_key(backend, STORAGE_KEY).await
    }

    /// Opens the collection stored under `key`.
    ///
    /// A missing blob is a first run. A blob that does not decode is logged
    /// and replaced by an empty collection on the next write.
    pub async fn open_with_key(
        backend: impl BlobBackend + 'static,
        key: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let key = key.into();
        let snapshot = match backend.get_bytes(&key).await? {
            Some(bytes) => decode(&key, &bytes),
            None => None,
        };

        let (users, next_id) = match snapshot {
            Some(snapshot) => {
                let floor = snapshot
                    .users
                    .iter()
                    .map(|u| u.id.get().saturating_add(1))
                    .max()
                    .unwrap_or(FIRST_ID);
                (snapshot.users, snapshot.next_id.max(floor))
            }
            None => (Vec::new(), FIRST_ID),
        };

        debug!("opened '{}' with {} local users, next id {}", key, users.len(), next_id);

        Ok(Self {
            backend: Arc::new(backend),
            key,
            users,
            next_id,
        })
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[LocalUser] {
        &self.users
    }

    /// Looks up a record by identifier.
    pub fn get(&self, id: UserId) -> Option<&LocalUser> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Identifier the next [`add`](Self::add) will assign.
    pub fn next_id(&self) -> UserId {
        UserId(self.next_id)
    }

    /// Appends a record with the next identifier.
    pub async fn add(&mut self, fields: UserFields) -> Result<LocalUser, StoreError> {
        let user = fields.with_id(UserId(self.next_id));
        let mut users = self.users.clone();
        users.push(user.clone());

        self.commit(users, self.next_id.saturating_add(1)).await?;
        debug!("added local user {}", user.id);
        Ok(user)
    }

    /// Replaces every field of record `id` except the identifier.
    ///
    /// Fails with [`StoreError::NotFound`] when `id` is not in the collection.
    pub async fn update(&mut self, id: UserId, fields: UserFields) -> Result<LocalUser, StoreError> {
        let position = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        let user = fields.with_id(id);
        let mut users = self.users.clone();
        users[position] = user.clone();

        self.commit(users, self.next_id).await?;
        debug!("updated local user {}", id);
        Ok(user)
    }

    /// Removes record `id`, returning it. Unknown identifiers are a no-op.
    pub async fn remove(&mut self, id: UserId) -> Result<Option<LocalUser>, StoreError> {
        let Some(position) = self.users.iter().position(|u| u.id == id) else {
            return Ok(None);
        };

        let mut users = self.users.clone();
        let removed = users.remove(position);

        self.commit(users, self.next_id).await?;
        debug!("removed local user {}", id);
        Ok(Some(removed))
    }

    /// Deletes every record and resets the identifier counter.
    ///
    /// The blob is removed from the backend, so the next open is a first run.
    pub async fn clear(&mut self) -> Result<(), StoreError> {
        self.backend.delete(&self.key).await?;
        self.users.clear();
        self.next_id = FIRST_ID;
        debug!("cleared local users");
        Ok(())
    }

    async fn commit(&mut self, users: Vec<LocalUser>, next_id: u64) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(&SnapshotRef {
            users: &users,
            next_id,
        })?;
        self.backend.set_bytes(&self.key, bytes).await?;
        self.users = users;
        self.next_id = next_id;
        Ok(())
    }
}

impl std::fmt::Debug for LocalUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalUserStore")
            .field("key", &self.key)
            .field("users", &self.users.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

fn decode(key: &str, bytes: &[u8]) -> Option<Snapshot> {
    match serde_json::from_slice::<Snapshot>(bytes) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!("ignoring malformed blob '{}': {}", key, e);
            None
        }
    }
}
