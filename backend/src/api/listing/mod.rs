//! Category listing endpoints.

mod list_category_products;
pub use list_category_products::{list_category_products, list_category_products_in};

mod category_filter_defaults;
pub use category_filter_defaults::{category_filter_defaults, category_filter_defaults_in};
