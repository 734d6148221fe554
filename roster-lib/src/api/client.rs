//! HTTP client for the remote listing endpoint.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use url::Url;

use super::parse_listing;
use super::UserPage;
use super::UserSource;
use crate::error::FetchError;

/// Base URL used when none is configured.
///
/// Set `ROSTER_API_BASE_URL` at build time to point release builds elsewhere.
pub const DEFAULT_BASE_URL: &str = match option_env!("ROSTER_API_BASE_URL") {
    Some(url) => url,
    None => "https://dummyjson.com",
};

/// Path of the users listing below the base URL.
pub const USERS_PATH: &str = "users";

/// Client for the remote users listing.
///
/// This client is cheap to clone (uses `Arc` internally).
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use roster_lib::UsersClient;
///
/// let client = UsersClient::builder()
///     .base_url("https://dummyjson.com")
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let page = client.fetch_page(1, 10).await?;
/// println!("{} of {}", page.len(), page.total());
/// ```
#[derive(Clone)]
pub struct UsersClient {
    inner: Arc<UsersClientInner>,
}

struct UsersClientInner {
    users_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl UsersClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> UsersClientBuilder {
        UsersClientBuilder::new()
    }

    /// Builds a client against [`DEFAULT_BASE_URL`].
    pub fn new() -> Result<Self, FetchError> {
        Self::builder().build()
    }

    /// Returns the users listing URL without paging parameters.
    pub fn users_url(&self) -> &Url {
        &self.inner.users_url
    }

    /// Returns the listing URL for a page window.
    ///
    /// `skip = (page_index - 1) * page_size`; page 0 is treated as page 1.
    pub fn page_url(&self, page_index: usize, page_size: usize) -> Url {
        let skip = page_index.saturating_sub(1).saturating_mul(page_size);
        let mut url = self.inner.users_url.clone();
        url.query_pairs_mut()
            .append_pair("limit", &page_size.to_string())
            .append_pair("skip", &skip.to_string());
        url
    }

    /// Fetches one page of users.
    pub async fn fetch_page(&self, page_index: usize, page_size: usize) -> Result<UserPage, FetchError> {
        let url = self.page_url(page_index, page_size);
        debug!("GET {}", url);

        let mut request = self.inner.http_client.get(url.as_str());
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.map_transport(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_transport(e))?;

        if !status.is_success() {
            return Err(FetchError::http(status.as_u16(), body));
        }

        let page = parse_listing(&body)?;
        debug!("fetched {} of {} users", page.len(), page.total());
        Ok(page)
    }

    fn map_transport(&self, error: reqwest::Error) -> FetchError {
        match self.inner.timeout {
            Some(timeout) if error.is_timeout() => FetchError::Timeout(timeout),
            _ => FetchError::Network(error),
        }
    }
}

#[async_trait]
impl UserSource for UsersClient {
    async fn fetch_page(&self, page_index: usize, page_size: usize) -> Result<UserPage, FetchError> {
        UsersClient::fetch_page(self, page_index, page_size).await
    }
}

impl std::fmt::Debug for UsersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersClient")
            .field("users_url", &self.inner.users_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for constructing a [`UsersClient`].
///
/// # Example
///
/// ```ignore
/// let client = UsersClient::builder()
///     .base_url("http://127.0.0.1:8080")
///     .connect_timeout(Duration::from_secs(2))
///     .build()?;
/// ```
pub struct UsersClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl UsersClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the base URL of the listing service.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`UsersClient`].
    pub fn build(self) -> Result<UsersClient, FetchError> {
        let users_url = users_url(&self.base_url)?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(UsersClient {
            inner: Arc::new(UsersClientInner {
                users_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for UsersClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn users_url(base_url: &str) -> Result<Url, FetchError> {
    let joined = format!("{}/{}", base_url.trim_end_matches('/'), USERS_PATH);
    let url = Url::parse(&joined).map_err(|e| FetchError::InvalidUrl(format!("{base_url}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(FetchError::InvalidUrl(base_url.to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> UsersClient {
        UsersClient::builder().base_url(base).build().unwrap()
    }

    #[test]
    fn test_page_url() {
        let client = client("https://dummyjson.com/");
        assert_eq!(
            client.page_url(1, 10).as_str(),
            "https://dummyjson.com/users?limit=10&skip=0"
        );
        assert_eq!(
            client.page_url(3, 20).as_str(),
            "https://dummyjson.com/users?limit=20&skip=40"
        );
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let client = client("https://dummyjson.com");
        assert_eq!(
            client.page_url(0, 5).as_str(),
            "https://dummyjson.com/users?limit=5&skip=0"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = UsersClient::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
