pub(crate) mod home_page;
pub(crate) mod category_page;
pub(crate) mod product_page;
pub(crate) mod not_found_page;
