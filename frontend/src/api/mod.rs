pub(crate) mod catalog_api;
