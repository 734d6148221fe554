//! Table over the remote listing.

use std::sync::Arc;

use log::debug;
use log::warn;

use crate::api::UserPage;
use crate::api::UserSource;
use crate::error::FetchError;
use crate::model::User;
use crate::model::UserId;
use crate::table::PageInfo;
use crate::table::Pagination;
use crate::table::PaginationConfig;
use crate::table::SelectionSummary;
use crate::table::visible_ids;

/// A pending fetch for one page window.
///
/// Carries the generation it was issued under; only the outcome of the most
/// recently issued request is applied by the view.
#[must_use = "a fetch request does nothing until it is run"]
pub struct FetchRequest {
    generation: u64,
    page_index: usize,
    page_size: usize,
    source: Arc<dyn UserSource>,
}

impl FetchRequest {
    /// Generation token of this request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Requested 1-based page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Requested page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Performs the fetch. Can be moved into a spawned task.
    pub async fn run(self) -> FetchOutcome {
        let result = self.source.fetch_page(self.page_index, self.page_size).await;
        FetchOutcome {
            generation: self.generation,
            result,
        }
    }

    /// Wraps an already obtained result, for callers that fetch themselves.
    pub fn complete(self, result: Result<UserPage, FetchError>) -> FetchOutcome {
        FetchOutcome {
            generation: self.generation,
            result,
        }
    }
}

impl std::fmt::Debug for FetchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchRequest")
            .field("generation", &self.generation)
            .field("page_index", &self.page_index)
            .field("page_size", &self.page_size)
            .finish()
    }
}

/// The finished result of a [`FetchRequest`].
#[derive(Debug)]
pub struct FetchOutcome {
    generation: u64,
    result: Result<UserPage, FetchError>,
}

impl FetchOutcome {
    /// Generation token of the request that produced this outcome.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What [`RemoteUsersView::apply`] did with an outcome.
#[derive(Debug)]
pub enum Applied {
    /// Rows and total were replaced by the fetched page.
    Loaded,
    /// The fetch failed; the table now shows no rows and a zero total.
    Failed,
    /// A newer request was issued since; the outcome was dropped.
    Stale,
    /// The reported total no longer reaches the requested page. The page index
    /// was clamped and the carried request fetches the clamped window.
    Clamped(FetchRequest),
}

impl PartialEq for Applied {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Clamped(a), Self::Clamped(b)) => a.generation == b.generation,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Eq for Applied {}

/// A paginated, selectable table backed by a [`UserSource`].
///
/// Every page or page-size change that moves the window returns a
/// [`FetchRequest`]. Requests are numbered; an outcome is applied only if no
/// newer request has been issued, so late responses for abandoned windows
/// never overwrite the current page.
///
/// # Example
///
/// ```ignore
/// let mut view = RemoteUsersView::new(UsersClient::new()?);
/// view.refresh().await;
///
/// if let Some(request) = view.next_page() {
///     if let Applied::Clamped(request) = view.apply(request.run().await) {
///         view.apply(request.run().await);
///     }
/// }
/// ```
pub struct RemoteUsersView {
    source: Arc<dyn UserSource>,
    config: PaginationConfig,
    pagination: Pagination,
    rows: Vec<User>,
    total: usize,
    loading: bool,
    generation: u64,
}

impl RemoteUsersView {
    /// Creates a view with the default page size.
    pub fn new(source: impl UserSource + 'static) -> Self {
        Self::with_config(source, &PaginationConfig::default())
    }

    /// Creates a view using the config's default page size.
    pub fn with_config(source: impl UserSource + 'static, config: &PaginationConfig) -> Self {
        Self {
            source: Arc::new(source),
            config: config.clone(),
            pagination: Pagination::from_config(config),
            rows: Vec::new(),
            total: 0,
            loading: false,
            generation: 0,
        }
    }

    /// Pagination and selection state.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Page sizes this view accepts.
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Rows of the current page, as returned by the source.
    pub fn rows(&self) -> &[User] {
        &self.rows
    }

    /// Total reported by the last applied fetch.
    pub fn total(&self) -> usize {
        self.total
    }

    /// `true` between issuing a request and applying its outcome.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Generation of the most recently issued request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Finds a row of the current page, for the details dialog.
    pub fn row(&self, id: UserId) -> Option<&User> {
        self.rows.iter().find(|u| u.id == id)
    }

    /// Identifiers of the current page.
    pub fn visible_ids(&self) -> Vec<UserId> {
        visible_ids(&self.rows)
    }

    /// Footer values.
    pub fn page_info(&self) -> PageInfo {
        self.pagination.page_info(self.total)
    }

    /// Header checkbox state for the current page.
    pub fn selection_summary(&self) -> SelectionSummary {
        self.pagination.selection_summary(&self.visible_ids())
    }

    // -------------------------------------------------------------------------
    // Fetching
    // -------------------------------------------------------------------------

    /// Issues a request for the current window, superseding any in flight.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.generation += 1;
        self.loading = true;
        debug!(
            "fetch #{} page {} size {}",
            self.generation,
            self.pagination.page_index(),
            self.pagination.page_size()
        );
        FetchRequest {
            generation: self.generation,
            page_index: self.pagination.page_index(),
            page_size: self.pagination.page_size(),
            source: Arc::clone(&self.source),
        }
    }

    /// Applies a finished fetch unless a newer one has been issued.
    ///
    /// Failures are not surfaced: the table shows no rows and a zero total,
    /// and nothing is retried. If a loaded total no longer reaches the current
    /// page, the page is clamped and [`Applied::Clamped`] carries the request
    /// for the clamped window.
    pub fn apply(&mut self, outcome: FetchOutcome) -> Applied {
        if outcome.generation != self.generation {
            debug!(
                "discarding stale fetch #{} (latest #{})",
                outcome.generation, self.generation
            );
            return Applied::Stale;
        }

        self.loading = false;
        match outcome.result {
            Ok(page) => {
                let (rows, total) = page.into_parts();
                self.rows = rows;
                self.total = total;
                if self.pagination.clamp_to(self.total) {
                    debug!("page clamped to {} after total changed", self.pagination.page_index());
                    return Applied::Clamped(self.begin_fetch());
                }
                Applied::Loaded
            }
            Err(e) => {
                warn!("fetch #{} failed: {}", outcome.generation, e);
                self.rows.clear();
                self.total = 0;
                self.pagination.clamp_to(0);
                Applied::Failed
            }
        }
    }

    /// Fetches the current window and applies the result.
    ///
    /// A clamped outcome is followed by one fetch of the clamped window.
    pub async fn refresh(&mut self) -> Applied {
        let request = self.begin_fetch();
        let outcome = request.run().await;
        match self.apply(outcome) {
            Applied::Clamped(request) => {
                let outcome = request.run().await;
                self.apply(outcome)
            }
            applied => applied,
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Changes the page size, returning to page 1.
    ///
    /// Sizes outside the configured options are rejected.
    pub fn set_page_size(&mut self, size: usize) -> Option<FetchRequest> {
        if !self.config.is_allowed(size) {
            debug!("page size {} not in {:?}", size, self.config.page_size_options);
            return None;
        }
        let before = self.window();
        if !self.pagination.set_page_size(size) || self.window() == before {
            return None;
        }
        Some(self.begin_fetch())
    }

    /// Moves to a page, clamped into range.
    pub fn go_to_page(&mut self, page: i64) -> Option<FetchRequest> {
        let moved = self.pagination.go_to_page(page, self.total);
        self.fetch_if(moved)
    }

    /// Advances one page.
    pub fn next_page(&mut self) -> Option<FetchRequest> {
        let moved = self.pagination.next_page(self.total);
        self.fetch_if(moved)
    }

    /// Goes back one page.
    pub fn prev_page(&mut self) -> Option<FetchRequest> {
        let moved = self.pagination.prev_page(self.total);
        self.fetch_if(moved)
    }

    /// Goes to page 1.
    pub fn first_page(&mut self) -> Option<FetchRequest> {
        let moved = self.pagination.first_page(self.total);
        self.fetch_if(moved)
    }

    /// Goes to the last page.
    pub fn last_page(&mut self) -> Option<FetchRequest> {
        let moved = self.pagination.last_page(self.total);
        self.fetch_if(moved)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Selects or deselects one row.
    pub fn toggle_select(&mut self, id: UserId, selected: bool) -> bool {
        self.pagination.toggle_select(id, selected)
    }

    /// Selects or deselects every row of the current page.
    pub fn toggle_select_all_on_page(&mut self, selected: bool) -> usize {
        let ids = self.visible_ids();
        self.pagination.toggle_select_all_on_page(selected, &ids)
    }

    fn window(&self) -> (usize, usize) {
        (self.pagination.page_index(), self.pagination.page_size())
    }

    fn fetch_if(&mut self, moved: bool) -> Option<FetchRequest> {
        moved.then(|| self.begin_fetch())
    }
}

impl std::fmt::Debug for RemoteUsersView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteUsersView")
            .field("pagination", &self.pagination)
            .field("rows", &self.rows.len())
            .field("total", &self.total)
            .field("loading", &self.loading)
            .field("generation", &self.generation)
            .finish()
    }
}
