//! Remote listing client
//!
//! Fetches one page of users at a time with `limit`/`skip` paging and
//! remaps the endpoint's records onto [`User`](crate::model::User).

mod client;
mod page;
mod remote;
mod source;

pub use client::*;
pub use page::*;
pub use remote::*;
pub use source::*;
