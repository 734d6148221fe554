//! Pagination configuration

/// Page sizes offered by the "rows per page" control.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];

/// Initial page size of every table.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration for table pagination.
///
/// # Example
///
/// ```
/// use roster_lib::table::PaginationConfig;
///
/// let config = PaginationConfig::default()
///     .with_page_size_options(vec![25, 50])
///     .with_default_page_size(25);
/// assert!(config.is_allowed(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page sizes the user can pick from.
    ///
    /// Default: 5, 10, 20
    pub page_size_options: Vec<usize>,

    /// Page size used when a table is created.
    ///
    /// Default: 10
    pub default_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selectable page sizes. Zero entries are dropped.
    pub fn with_page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options.into_iter().filter(|&n| n > 0).collect();
        self
    }

    /// Sets the initial page size. Zero is ignored.
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        if size > 0 {
            self.default_page_size = size;
        }
        self
    }

    /// Returns `true` if `size` is one of the configured options.
    pub fn is_allowed(&self, size: usize) -> bool {
        self.page_size_options.contains(&size)
    }
}
