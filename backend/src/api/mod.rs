//! Catalog endpoints consumed by the storefront server functions.

pub mod catalog_queries;
pub mod search;
pub mod listing;
pub mod catalog;
