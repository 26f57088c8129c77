//! Client API calls for catalog endpoints.

use common::{
    catalog::{CategorySummary, ProductDetail, ProductSummary},
    filter_criteria::{CategoryFilterDefaults, FilterCriteria},
    search_result::SearchResultSet,
};
use dioxus::prelude::*;


#[server]
pub async fn search_catalog(term: String) -> Result<SearchResultSet, ServerFnError> {
    let x = backend::api::search::search_catalog(term).await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{:#}", e), code: 500, details: None })
}

#[server]
pub async fn list_category_products(category_slug: String, criteria: FilterCriteria) -> Result<Vec<ProductSummary>, ServerFnError> {
    let x = backend::api::listing::list_category_products(category_slug, criteria).await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{:#}", e), code: 500, details: None })
}

#[server]
pub async fn category_filter_defaults(category_slug: String) -> Result<CategoryFilterDefaults, ServerFnError> {
    let x = backend::api::listing::category_filter_defaults(category_slug).await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{:#}", e), code: 500, details: None })
}

#[server]
pub async fn get_category(slug: String) -> Result<CategorySummary, ServerFnError> {
    let x = backend::api::catalog::get_category(slug).await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{:#}", e), code: 404, details: None })
}

#[server]
pub async fn get_product(slug: String) -> Result<ProductDetail, ServerFnError> {
    let x = backend::api::catalog::get_product(slug).await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{:#}", e), code: 404, details: None })
}

#[server]
pub async fn list_categories() -> Result<Vec<CategorySummary>, ServerFnError> {
    let x = backend::api::catalog::list_categories().await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{:#}", e), code: 500, details: None })
}
