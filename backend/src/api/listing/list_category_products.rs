//! Product grid for committed filter criteria.

use common::catalog::{CategorySummary, ProductSummary};
use common::filter_criteria::FilterCriteria;

use crate::api::catalog_queries::{category_by_slug_query, category_products_query};
use crate::db_utils::data_source::{DataSource, get_data_source};

pub async fn list_category_products(category_slug: String, criteria: FilterCriteria) -> anyhow::Result<Vec<ProductSummary>> {
    let source = get_data_source().await?;
    list_category_products_in(source, &category_slug, &criteria).await
}

pub async fn list_category_products_in(source: &DataSource, category_slug: &str, criteria: &FilterCriteria) -> anyhow::Result<Vec<ProductSummary>> {
    // the panel never applies an invalid draft; reject anything that slips through
    if let Err(e) = criteria.validate() {
        anyhow::bail!("invalid filter criteria: {}", e);
    }
    let category = source.select_one::<CategorySummary>(&category_by_slug_query(category_slug), "category").await?;
    let products = source.select::<ProductSummary>(&category_products_query(category.id, criteria)).await?;
    tracing::info!("listing {}: {} products for {:?}", category.slug, products.len(), criteria);
    Ok(products)
}
