//! Table over the local collection store.

use log::debug;

use crate::error::Error;
use crate::model::LocalUser;
use crate::model::UserId;
use crate::store::LocalUserStore;
use crate::table::PageInfo;
use crate::table::Pagination;
use crate::table::PaginationConfig;
use crate::table::SelectionSummary;
use crate::table::visible_ids;
use crate::validation::UserForm;

/// A paginated, selectable table over a [`LocalUserStore`], with create,
/// edit and remove actions.
///
/// The full collection is in memory, so pages are sliced locally and every
/// navigation is synchronous.
#[derive(Debug)]
pub struct LocalUsersView {
    store: LocalUserStore,
    config: PaginationConfig,
    pagination: Pagination,
}

impl LocalUsersView {
    /// Creates a view with the default page size.
    pub fn new(store: LocalUserStore) -> Self {
        Self::with_config(store, &PaginationConfig::default())
    }

    /// Creates a view using the config's default page size.
    pub fn with_config(store: LocalUserStore, config: &PaginationConfig) -> Self {
        Self {
            store,
            config: config.clone(),
            pagination: Pagination::from_config(config),
        }
    }

    /// The backing store.
    pub fn store(&self) -> &LocalUserStore {
        &self.store
    }

    /// Consumes the view, returning the store.
    pub fn into_store(self) -> LocalUserStore {
        self.store
    }

    /// Pagination and selection state.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Page sizes this view accepts.
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Number of records in the collection.
    pub fn total(&self) -> usize {
        self.store.len()
    }

    /// Rows of the current page.
    pub fn rows(&self) -> &[LocalUser] {
        self.pagination.visible_slice(self.store.list())
    }

    /// Looks up any record, for the details and edit dialogs.
    pub fn row(&self, id: UserId) -> Option<&LocalUser> {
        self.store.get(id)
    }

    /// Identifiers of the current page.
    pub fn visible_ids(&self) -> Vec<UserId> {
        visible_ids(self.rows())
    }

    /// Footer values.
    pub fn page_info(&self) -> PageInfo {
        self.pagination.page_info(self.total())
    }

    /// Header checkbox state for the current page.
    pub fn selection_summary(&self) -> SelectionSummary {
        self.pagination.selection_summary(&self.visible_ids())
    }

    /// Prefilled form for editing `id`.
    pub fn edit_form(&self, id: UserId) -> Option<UserForm> {
        self.row(id).map(UserForm::from_user)
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Changes the page size, returning to page 1.
    ///
    /// Sizes outside the configured options are rejected.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !self.config.is_allowed(size) {
            debug!("page size {} not in {:?}", size, self.config.page_size_options);
            return false;
        }
        self.pagination.set_page_size(size)
    }

    /// Moves to a page, clamped into range.
    pub fn go_to_page(&mut self, page: i64) -> bool {
        let total = self.total();
        self.pagination.go_to_page(page, total)
    }

    /// Advances one page.
    pub fn next_page(&mut self) -> bool {
        let total = self.total();
        self.pagination.next_page(total)
    }

    /// Goes back one page.
    pub fn prev_page(&mut self) -> bool {
        let total = self.total();
        self.pagination.prev_page(total)
    }

    /// Goes to page 1.
    pub fn first_page(&mut self) -> bool {
        let total = self.total();
        self.pagination.first_page(total)
    }

    /// Goes to the last page.
    pub fn last_page(&mut self) -> bool {
        let total = self.total();
        self.pagination.last_page(total)
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

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Validates `form`, appends the record and jumps to the page showing it.
    pub async fn create(&mut self, form: &UserForm) -> Result<LocalUser, Error> {
        let fields = form.validate()?;
        let user = self.store.add(fields).await?;
        self.pagination.after_insert(self.store.len());
        debug!("created {} on page {}", user.id, self.pagination.page_index());
        Ok(user)
    }

    /// Validates `form` and replaces the fields of record `id`.
    ///
    /// The page and selection are left as they are.
    pub async fn edit(&mut self, id: UserId, form: &UserForm) -> Result<LocalUser, Error> {
        let fields = form.validate()?;
        Ok(self.store.update(id, fields).await?)
    }

    /// Removes record `id`, deselecting it and keeping the page in range.
    ///
    /// Returns `None` if the record did not exist.
    pub async fn remove(&mut self, id: UserId) -> Result<Option<LocalUser>, Error> {
        let removed = self.store.remove(id).await?;
        if removed.is_some() {
            self.pagination.after_remove(id, self.store.len());
        }
        Ok(removed)
    }

    /// Deletes every record and clears the selection.
    pub async fn clear_all(&mut self) -> Result<(), Error> {
        self.store.clear().await?;
        self.pagination.clear_selection();
        self.pagination.clamp_to(0);
        Ok(())
    }
}
