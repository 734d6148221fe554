//! Page type for listing results.

use crate::model::User;

/// One page of users along with the total the endpoint reported.
///
/// The rows are exactly what the endpoint returned for the requested window;
/// they are never re-sliced locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPage {
    rows: Vec<User>,
    total: usize,
}

impl UserPage {
    /// Creates a new page.
    pub fn new(rows: Vec<User>, total: usize) -> Self {
        Self { rows, total }
    }

    /// Returns a reference to the users in this page.
    pub fn rows(&self) -> &[User] {
        &self.rows
    }

    /// Consumes the page and returns `(rows, total)`.
    pub fn into_parts(self) -> (Vec<User>, usize) {
        (self.rows, self.total)
    }

    /// Total number of users across all pages.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns `true` if this page has no users.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of users in this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
