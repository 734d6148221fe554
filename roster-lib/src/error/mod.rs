//! Error types

mod fetch;
mod store;
mod validation;

pub use fetch::*;
pub use store::*;
pub use validation::*;

/// Top-level error for view and application code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Remote listing failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Form input was rejected before reaching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Local collection store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
