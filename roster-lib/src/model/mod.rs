//! Data model types

mod gender;
mod user;

pub use gender::*;
pub use user::*;
