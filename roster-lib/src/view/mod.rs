//! Table controllers
//!
//! Each view owns its [`Pagination`](crate::table::Pagination) and connects
//! user actions (navigate, select, add, edit, remove) to a data source.
//! Rendering is left to the caller.

mod local;
mod remote;

pub use local::*;
pub use remote::*;
