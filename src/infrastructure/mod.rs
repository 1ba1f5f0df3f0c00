//! Infrastructure layer for page address interactions.
//!
//! This module isolates everything that in a browser would be `window.location`
//! and `window.history`: reading the startup query string, building the
//! reflected address, and replacing it without navigation.

pub mod page;
pub mod query;

pub use page::{History, Location, PageUrl};
pub use query::{address_for, query_for, reference_from_query};
