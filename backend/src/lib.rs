//! Catalog data access for the storefront.

pub mod api;
pub mod config;
pub mod db_utils;
