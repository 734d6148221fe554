//! Local collection store errors

use crate::model::UserId;

/// Errors raised by the local collection store and its backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] async_sqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// `update` was called with an identifier the store does not hold.
    #[error("no local user with id {id}")]
    NotFound { id: UserId },
}

impl StoreError {
    /// Creates a new not-found error.
    pub fn not_found(id: UserId) -> Self {
        Self::NotFound { id }
    }
}
