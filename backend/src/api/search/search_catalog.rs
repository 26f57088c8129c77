//! Combined product and category lookup for the search box.

use common::search_const::{SEARCH_CATEGORY_LIMIT, SEARCH_MIN_TERM_LENGTH, SEARCH_PRODUCT_LIMIT};
use common::catalog::{CategorySummary, ProductSummary};
use common::search_result::SearchResultSet;

use crate::api::catalog_queries::{category_search_query, product_search_query};
use crate::db_utils::data_source::{DataSource, get_data_source};

pub async fn search_catalog(term: String) -> anyhow::Result<SearchResultSet> {
    let source = get_data_source().await?;
    search_catalog_in(source, &term).await
}

/// Products and categories are looked up concurrently; either failing fails
/// the whole lookup.
pub async fn search_catalog_in(source: &DataSource, term: &str) -> anyhow::Result<SearchResultSet> {
    let term = term.trim();
    if term.chars().count() < SEARCH_MIN_TERM_LENGTH {
        return Ok(SearchResultSet::default());
    }
    let product_query = product_search_query(term, SEARCH_PRODUCT_LIMIT);
    let category_query = category_search_query(term, SEARCH_CATEGORY_LIMIT);
    let (products, categories) = futures::try_join!(
        source.select::<ProductSummary>(&product_query),
        source.select::<CategorySummary>(&category_query),
    )
    .inspect_err(|e| tracing::warn!("search for {:?} failed: {:#}", term, e))?;

    tracing::info!("search for {:?}: {} products, {} categories", term, products.len(), categories.len());
    Ok(SearchResultSet { products, categories }.truncated(SEARCH_PRODUCT_LIMIT, SEARCH_CATEGORY_LIMIT))
}
