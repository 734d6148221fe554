//! Local collection store
//!
//! A persisted collection of [`LocalUser`](crate::model::LocalUser) records
//! with auto-incrementing identifiers. The whole collection is one JSON blob
//! kept in a [`BlobBackend`]; it is read once on open and rewritten after
//! every mutation.

mod backend;
mod local;
mod memory;
mod sqlite;

pub use backend::*;
pub use local::*;
pub use memory::*;
pub use sqlite::*;
