//! Single-record lookups and the category list.

use common::catalog::{CategorySummary, ProductDetail};

use crate::api::catalog_queries::{active_categories_query, category_by_slug_query, product_by_slug_query};
use crate::db_utils::data_source::{DataSource, get_data_source};

pub async fn get_category(slug: String) -> anyhow::Result<CategorySummary> {
    let source = get_data_source().await?;
    get_category_in(source, &slug).await
}

pub async fn get_category_in(source: &DataSource, slug: &str) -> anyhow::Result<CategorySummary> {
    source.select_one(&category_by_slug_query(slug), "category").await
}

pub async fn get_product(slug: String) -> anyhow::Result<ProductDetail> {
    let source = get_data_source().await?;
    get_product_in(source, &slug).await
}

pub async fn get_product_in(source: &DataSource, slug: &str) -> anyhow::Result<ProductDetail> {
    source.select_one(&product_by_slug_query(slug), "product").await
}

pub async fn list_categories() -> anyhow::Result<Vec<CategorySummary>> {
    let source = get_data_source().await?;
    source.select(&active_categories_query()).await
}
