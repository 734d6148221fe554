//! Page window and navigation transitions.

use super::PaginationConfig;
use super::Selection;
use super::SelectionSummary;
use super::DEFAULT_PAGE_SIZE;
use crate::model::UserId;

/// Number of pages needed to show `total` rows, never less than one.
///
/// A zero `page_size` is treated as a single page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Returns the rows on the 1-based page `page_index`.
///
/// Out-of-range pages yield an empty slice; the last page may be short.
pub fn visible_slice<T>(rows: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_sub(1).saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Pagination and selection state for one table.
///
/// Holds the page window and the cross-page selection. The row total is
/// always supplied by the caller, so `1 <= page_index <= page_count(total)`
/// holds after every transition that takes a total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
    selection: Selection,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Creates state on page 1 with the given page size.
    ///
    /// A zero size falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 1,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            selection: Selection::new(),
        }
    }

    /// Creates state using the config's default page size.
    pub fn from_config(config: &PaginationConfig) -> Self {
        Self::new(config.default_page_size)
    }

    /// Current 1-based page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Current rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The cross-page selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Page count for `total` rows at the current page size.
    pub fn page_count(&self, total: usize) -> usize {
        page_count(total, self.page_size)
    }

    /// Offset of the first row of the current page.
    pub fn offset(&self) -> usize {
        (self.page_index - 1).saturating_mul(self.page_size)
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Changes the page size and returns to page 1.
    ///
    /// Returns `false` and leaves the state alone when `size` is zero.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if size == 0 {
            return false;
        }
        self.page_size = size;
        self.page_index = 1;
        true
    }

    /// Moves to page `page`, clamped into `1..=page_count(total)`.
    ///
    /// Returns `true` if the page index changed.
    pub fn go_to_page(&mut self, page: i64, total: usize) -> bool {
        let last = i64::try_from(self.page_count(total)).unwrap_or(i64::MAX);
        // clamp keeps the value in 1..=last, which always fits in usize
        let target = page.clamp(1, last) as usize;
        let changed = target != self.page_index;
        self.page_index = target;
        changed
    }

    /// Advances one page; no-op on the last page.
    pub fn next_page(&mut self, total: usize) -> bool {
        if !self.can_go_next(total) {
            return false;
        }
        self.go_to_page(self.page_index_i64().saturating_add(1), total)
    }

    /// Goes back one page; no-op on the first page.
    pub fn prev_page(&mut self, total: usize) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.go_to_page(self.page_index_i64() - 1, total)
    }

    /// Goes to page 1; no-op when already there.
    pub fn first_page(&mut self, total: usize) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.go_to_page(1, total)
    }

    /// Goes to the last page; no-op when already there.
    pub fn last_page(&mut self, total: usize) -> bool {
        if !self.can_go_next(total) {
            return false;
        }
        let last = i64::try_from(self.page_count(total)).unwrap_or(i64::MAX);
        self.go_to_page(last, total)
    }

    /// Whether the "previous" and "first" controls are enabled.
    pub fn can_go_prev(&self) -> bool {
        self.page_index > 1
    }

    /// Whether the "next" and "last" controls are enabled.
    pub fn can_go_next(&self, total: usize) -> bool {
        self.page_index < self.page_count(total)
    }

    /// Pulls the page index back into range after the total shrank.
    ///
    /// Returns `true` if the page index changed.
    pub fn clamp_to(&mut self, total: usize) -> bool {
        self.go_to_page(self.page_index_i64(), total)
    }

    /// Rows of the current page from a fully loaded collection.
    pub fn visible_slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        visible_slice(rows, self.page_index, self.page_size)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Selects or deselects one row.
    pub fn toggle_select(&mut self, id: UserId, selected: bool) -> bool {
        self.selection.set(id, selected)
    }

    /// Selects or deselects exactly the visible rows.
    pub fn toggle_select_all_on_page(&mut self, selected: bool, visible_ids: &[UserId]) -> usize {
        self.selection.set_all(visible_ids, selected)
    }

    /// Selection summary of the visible rows.
    pub fn selection_summary(&self, visible_ids: &[UserId]) -> SelectionSummary {
        SelectionSummary::of(&self.selection, visible_ids)
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) -> Vec<UserId> {
        self.selection.clear()
    }

    // -------------------------------------------------------------------------
    // Collection changes
    // -------------------------------------------------------------------------

    /// Jumps to the last page so an appended row is visible.
    pub fn after_insert(&mut self, new_total: usize) {
        self.page_index = self.page_count(new_total);
    }

    /// Forgets a removed row and keeps the page index in range.
    pub fn after_remove(&mut self, id: UserId, new_total: usize) {
        self.selection.set(id, false);
        let last = self.page_count(new_total);
        if self.page_index > last {
            self.page_index = last;
        }
    }

    fn page_index_i64(&self) -> i64 {
        i64::try_from(self.page_index).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<UserId> {
        raw.iter().copied().map(UserId).collect()
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(208, 20), 11);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut pagination = Pagination::new(5);
        pagination.go_to_page(-5, 12);
        assert_eq!(pagination.page_index(), 1);
        pagination.go_to_page(9999, 12);
        assert_eq!(pagination.page_index(), 3);
        pagination.go_to_page(0, 12);
        assert_eq!(pagination.page_index(), 1);
        pagination.go_to_page(i64::MAX, 0);
        assert_eq!(pagination.page_index(), 1);
    }

    #[test]
    fn test_go_to_page_in_range_for_many_inputs() {
        for total in [0usize, 1, 4, 5, 6, 49, 50, 51] {
            for size in [1usize, 5, 10, 20] {
                for page in [-3i64, 0, 1, 2, 3, 7, 100] {
                    let mut pagination = Pagination::new(size);
                    pagination.go_to_page(page, total);
                    let index = pagination.page_index();
                    assert!((1..=page_count(total, size)).contains(&index));
                }
            }
        }
    }

    #[test]
    fn test_set_page_size_resets_index() {
        let mut pagination = Pagination::new(5);
        pagination.go_to_page(4, 40);
        assert_eq!(pagination.page_index(), 4);
        assert!(pagination.set_page_size(20));
        assert_eq!(pagination.page_index(), 1);
        assert_eq!(pagination.page_size(), 20);
    }

    #[test]
    fn test_set_page_size_rejects_zero() {
        let mut pagination = Pagination::new(5);
        pagination.go_to_page(2, 40);
        assert!(!pagination.set_page_size(0));
        assert_eq!(pagination.page_size(), 5);
        assert_eq!(pagination.page_index(), 2);
    }

    #[test]
    fn test_boundary_navigation_is_noop() {
        let mut pagination = Pagination::new(10);
        assert!(!pagination.prev_page(25));
        assert!(!pagination.first_page(25));
        assert!(pagination.next_page(25));
        assert!(pagination.last_page(25));
        assert_eq!(pagination.page_index(), 3);
        assert!(!pagination.next_page(25));
        assert!(!pagination.last_page(25));
        assert!(pagination.prev_page(25));
        assert_eq!(pagination.page_index(), 2);
        assert!(pagination.first_page(25));
        assert_eq!(pagination.page_index(), 1);
    }

    #[test]
    fn test_visible_slice() {
        let rows: Vec<u32> = (1..=12).collect();
        assert_eq!(visible_slice(&rows, 1, 5), &[1, 2, 3, 4, 5]);
        assert_eq!(visible_slice(&rows, 3, 5), &[11, 12]);
        assert!(visible_slice(&rows, 4, 5).is_empty());
        assert!(visible_slice::<u32>(&[], 1, 5).is_empty());
    }

    #[test]
    fn test_select_all_then_one_off() {
        let mut pagination = Pagination::new(5);
        let page = ids(&[1, 2, 3, 4, 5]);
        pagination.toggle_select_all_on_page(true, &page);
        assert_eq!(
            pagination.selection_summary(&page),
            SelectionSummary {
                all_selected: true,
                some_selected: false
            }
        );
        pagination.toggle_select(UserId(3), false);
        assert_eq!(
            pagination.selection_summary(&page),
            SelectionSummary {
                all_selected: false,
                some_selected: true
            }
        );
    }

    #[test]
    fn test_select_all_does_not_touch_other_pages() {
        let mut pagination = Pagination::new(2);
        pagination.toggle_select(UserId(9), true);
        pagination.toggle_select_all_on_page(true, &ids(&[1, 2]));
        pagination.toggle_select_all_on_page(false, &ids(&[1, 2]));
        assert_eq!(pagination.selection().ids(), ids(&[9]));
    }

    #[test]
    fn test_selection_survives_navigation() {
        let mut pagination = Pagination::new(5);
        pagination.toggle_select(UserId(3), true);
        pagination.go_to_page(2, 12);
        pagination.go_to_page(1, 12);
        assert!(pagination.selection().contains(UserId(3)));
    }

    #[test]
    fn test_toggle_select_twice_is_idempotent() {
        let mut pagination = Pagination::new(5);
        pagination.toggle_select(UserId(4), true);
        let after_first = pagination.clone();
        pagination.toggle_select(UserId(4), true);
        assert_eq!(pagination, after_first);
    }

    #[test]
    fn test_after_insert_shows_last_page() {
        let mut pagination = Pagination::new(5);
        // 9 rows: two pages, currently on page 1
        pagination.after_insert(10);
        assert_eq!(pagination.page_index(), 2);
        assert_eq!(pagination.page_count(10), 2);

        pagination.after_insert(11);
        assert_eq!(pagination.page_index(), 3);
    }

    #[test]
    fn test_after_remove_clamps_and_deselects() {
        let mut pagination = Pagination::new(5);
        pagination.go_to_page(2, 6);
        pagination.toggle_select(UserId(6), true);
        pagination.toggle_select(UserId(1), true);

        pagination.after_remove(UserId(6), 5);
        assert_eq!(pagination.page_index(), 1);
        assert!(!pagination.selection().contains(UserId(6)));
        assert!(pagination.selection().contains(UserId(1)));
    }

    #[test]
    fn test_after_remove_keeps_page_when_still_valid() {
        let mut pagination = Pagination::new(5);
        pagination.go_to_page(2, 12);
        pagination.after_remove(UserId(1), 11);
        assert_eq!(pagination.page_index(), 2);
    }

    #[test]
    fn test_clamp_to_after_shrink() {
        let mut pagination = Pagination::new(10);
        pagination.go_to_page(5, 50);
        assert!(pagination.clamp_to(0));
        assert_eq!(pagination.page_index(), 1);
        assert_eq!(pagination.offset(), 0);
    }
}
