//! Roster library
//!
//! Paginated, selectable user tables backed by a remote listing endpoint or a
//! persisted local collection.

pub mod api;
pub mod error;
pub mod model;
pub mod store;
pub mod table;
pub mod validation;
pub mod view;

pub use api::UserPage;
pub use api::UserSource;
pub use api::UsersClient;
pub use error::Error;
