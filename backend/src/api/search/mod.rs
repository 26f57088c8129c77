//! Search-as-you-type endpoint and module exports.

mod search_catalog;
pub use search_catalog::{search_catalog, search_catalog_in};
