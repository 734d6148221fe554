//! Listing source abstraction

use async_trait::async_trait;

use super::UserPage;
use crate::error::FetchError;

/// Anything that can serve a page of users.
///
/// Implemented by [`UsersClient`](super::UsersClient); views only depend on
/// this trait.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetches the 1-based page `page_index` holding up to `page_size` users.
    async fn fetch_page(&self, page_index: usize, page_size: usize) -> Result<UserPage, FetchError>;
}
