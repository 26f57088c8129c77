pub(crate) mod error_boundary;
pub(crate) mod suspend_boundary;
pub(crate) mod navbar;
pub(crate) mod search_components;
pub(crate) mod filter_components;
pub(crate) mod product_components;
