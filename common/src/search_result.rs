use serde::{Deserialize, Serialize};

use crate::catalog::{CategorySummary, ProductSummary};


/// Combined products and categories matching one search term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchResultSet {
    pub products: Vec<ProductSummary>,
    pub categories: Vec<CategorySummary>,
}

impl SearchResultSet {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.categories.is_empty()
    }

    pub fn truncated(mut self, product_limit: usize, category_limit: usize) -> Self {
        self.products.truncate(product_limit);
        self.categories.truncate(category_limit);
        self
    }
}

/// Where a clicked search result leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchSelection {
    Product { slug: String },
    Category { slug: String },
}

impl From<&ProductSummary> for SearchSelection {
    fn from(product: &ProductSummary) -> Self {
        SearchSelection::Product { slug: product.slug.clone() }
    }
}

impl From<&CategorySummary> for SearchSelection {
    fn from(category: &CategorySummary) -> Self {
        SearchSelection::Category { slug: category.slug.clone() }
    }
}
