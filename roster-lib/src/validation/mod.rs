//! Form validation for locally created and edited users.
//!
//! Constraints are a static table of `(field, predicate, message)` rows,
//! evaluated in order. Each field reports its first failing constraint.

mod constraints;
mod form;

pub use constraints::*;
pub use form::*;
