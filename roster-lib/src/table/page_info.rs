//! Footer summary of a table.

use std::fmt;

use super::Pagination;

/// Everything the table footer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub selected_count: usize,
    pub total: usize,
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

impl Pagination {
    /// Footer values for `total` rows.
    pub fn page_info(&self, total: usize) -> PageInfo {
        PageInfo {
            page_index: self.page_index(),
            page_count: self.page_count(total),
            page_size: self.page_size(),
            selected_count: self.selection().len(),
            total,
            can_go_prev: self.can_go_prev(),
            can_go_next: self.can_go_next(total),
        }
    }
}

impl PageInfo {
    /// `"3 of 208 row(s) selected."`
    pub fn selection_label(&self) -> String {
        format!("{} of {} row(s) selected.", self.selected_count, self.total)
    }

    /// `"Page 2 of 21"`
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page_index, self.page_count)
    }
}

impl fmt::Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.selection_label(), self.page_label())
    }
}
