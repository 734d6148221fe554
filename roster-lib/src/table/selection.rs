//! Cross-page selection set.

use std::collections::HashSet;

use crate::model::UserId;

/// Identifier-based selection that survives page navigation.
///
/// Only ever shrinks through an explicit deselect or through
/// [`Pagination::after_remove`](super::Pagination::after_remove).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashSet<UserId>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn ids(&self) -> Vec<UserId> {
        let mut ids: Vec<_> = self.selected.iter().copied().collect();
        ids.sort();
        ids
    }

    /// Check if an ID is selected.
    pub fn contains(&self, id: UserId) -> bool {
        self.selected.contains(&id)
    }

    /// Get the number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Select or deselect a single ID.
    /// Returns `true` if the set changed.
    pub fn set(&mut self, id: UserId, selected: bool) -> bool {
        if selected {
            self.selected.insert(id)
        } else {
            self.selected.remove(&id)
        }
    }

    /// Select or deselect every ID in `ids`, leaving all others untouched.
    /// Returns the number of IDs whose state changed.
    pub fn set_all(&mut self, ids: &[UserId], selected: bool) -> usize {
        let mut changed = 0;
        for &id in ids {
            if self.set(id, selected) {
                changed += 1;
            }
        }
        changed
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<UserId> {
        self.selected.drain().collect()
    }

    /// Counts how many of `ids` are selected. Duplicate entries count once.
    pub fn count_in(&self, ids: &[UserId]) -> usize {
        let unique: HashSet<&UserId> = ids.iter().collect();
        unique.into_iter().filter(|id| self.selected.contains(*id)).count()
    }
}

impl FromIterator<UserId> for Selection {
    fn from_iter<I: IntoIterator<Item = UserId>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

/// Selection state of the rows currently on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionSummary {
    /// Every visible row is selected (and there is at least one).
    pub all_selected: bool,
    /// At least one, but not every, visible row is selected.
    pub some_selected: bool,
}

impl SelectionSummary {
    /// Computes the summary of `visible_ids` against `selection`.
    pub fn of(selection: &Selection, visible_ids: &[UserId]) -> Self {
        let unique = visible_ids.iter().collect::<HashSet<_>>().len();
        let selected = selection.count_in(visible_ids);
        Self {
            all_selected: unique > 0 && selected == unique,
            some_selected: selected > 0 && selected < unique,
        }
    }

    /// The header checkbox state this summary maps to.
    pub fn checkbox(&self) -> HeaderCheckbox {
        if self.all_selected {
            HeaderCheckbox::Checked
        } else if self.some_selected {
            HeaderCheckbox::Indeterminate
        } else {
            HeaderCheckbox::Unchecked
        }
    }
}

/// Three-state "select all on page" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckbox {
    Checked,
    Indeterminate,
    Unchecked,
}

impl HeaderCheckbox {
    /// The selection a click on the header should apply.
    ///
    /// An unchecked or indeterminate header selects every visible row; a
    /// checked header clears them.
    pub fn toggled(self) -> bool {
        !matches!(self, Self::Checked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<UserId> {
        raw.iter().copied().map(UserId).collect()
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut selection = Selection::new();
        assert!(selection.set(UserId(3), true));
        let snapshot = selection.clone();
        assert!(!selection.set(UserId(3), true));
        assert_eq!(selection, snapshot);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_deselect_unknown_is_noop() {
        let mut selection = Selection::new();
        assert!(!selection.set(UserId(9), false));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_set_all_leaves_other_ids() {
        let mut selection: Selection = ids(&[1, 7]).into_iter().collect();
        assert_eq!(selection.set_all(&ids(&[1, 2, 3]), true), 2);
        assert_eq!(selection.ids(), ids(&[1, 2, 3, 7]));
        assert_eq!(selection.set_all(&ids(&[1, 2, 3]), false), 3);
        assert_eq!(selection.ids(), ids(&[7]));
    }

    #[test]
    fn test_summary_states() {
        let visible = ids(&[1, 2, 3]);
        let mut selection = Selection::new();
        assert_eq!(
            SelectionSummary::of(&selection, &visible).checkbox(),
            HeaderCheckbox::Unchecked
        );

        selection.set(UserId(2), true);
        let summary = SelectionSummary::of(&selection, &visible);
        assert!(!summary.all_selected);
        assert!(summary.some_selected);
        assert_eq!(summary.checkbox(), HeaderCheckbox::Indeterminate);

        selection.set_all(&visible, true);
        assert_eq!(
            SelectionSummary::of(&selection, &visible),
            SelectionSummary {
                all_selected: true,
                some_selected: false
            }
        );
    }

    #[test]
    fn test_summary_of_empty_page() {
        let selection: Selection = ids(&[1]).into_iter().collect();
        assert_eq!(SelectionSummary::of(&selection, &[]), SelectionSummary::default());
    }

    #[test]
    fn test_header_toggle_direction() {
        assert!(HeaderCheckbox::Unchecked.toggled());
        assert!(HeaderCheckbox::Indeterminate.toggled());
        assert!(!HeaderCheckbox::Checked.toggled());
    }
}
