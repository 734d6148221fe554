//! Pagination and selection state shared by every table view.
//!
//! The state is a small reducer: `{ page_index, page_size, selection }`.
//! Rows and totals are owned by the data source and passed in on each call,
//! so every derived value is a pure function of the inputs.
//!
//! # Example
//!
//! ```
//! use roster_lib::model::UserId;
//! use roster_lib::table::Pagination;
//!
//! let mut pagination = Pagination::new(5);
//! pagination.go_to_page(9999, 12);
//! assert_eq!(pagination.page_index(), 3);
//!
//! pagination.toggle_select(UserId(11), true);
//! pagination.first_page(12);
//! assert!(pagination.selection().contains(UserId(11)));
//! ```

mod config;
mod page_info;
mod pagination;
mod selection;

pub use config::*;
pub use page_info::*;
pub use pagination::*;
pub use selection::*;

use crate::model::User;
use crate::model::UserId;

/// A row that can be selected by identifier.
pub trait TableRow {
    /// Stable identifier used for selection.
    fn row_id(&self) -> UserId;
}

impl TableRow for User {
    fn row_id(&self) -> UserId {
        self.id
    }
}

/// Collects the identifiers of the given rows, in order.
pub fn visible_ids<R: TableRow>(rows: &[R]) -> Vec<UserId> {
    rows.iter().map(TableRow::row_id).collect()
}
