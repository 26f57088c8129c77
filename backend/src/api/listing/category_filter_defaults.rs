//! Full price range and selectable values of a category.

use std::collections::{BTreeMap, BTreeSet};

use common::catalog::{CategorySummary, Color};
use common::filter_criteria::{CategoryFilterDefaults, Facet};
use serde::Deserialize;

use crate::api::catalog_queries::{category_by_slug_query, category_facet_rows_query, colors_query};
use crate::db_utils::data_source::{DataSource, get_data_source};

#[derive(Debug, Clone, Deserialize)]
struct ProductFacetRow {
    price: f64,
    #[serde(default)]
    color_id: Option<u64>,
    #[serde(default)]
    finish: Option<String>,
    #[serde(default)]
    material: Option<String>,
}

impl ProductFacetRow {
    fn facet(&self, facet: Facet) -> Option<&String> {
        match facet {
            Facet::Finish => self.finish.as_ref(),
            Facet::Material => self.material.as_ref(),
        }
    }
}

pub async fn category_filter_defaults(category_slug: String) -> anyhow::Result<CategoryFilterDefaults> {
    let source = get_data_source().await?;
    category_filter_defaults_in(source, &category_slug).await
}

pub async fn category_filter_defaults_in(source: &DataSource, category_slug: &str) -> anyhow::Result<CategoryFilterDefaults> {
    let category = source.select_one::<CategorySummary>(&category_by_slug_query(category_slug), "category").await?;
    let rows = source.select::<ProductFacetRow>(&category_facet_rows_query(category.id)).await?;

    if rows.is_empty() {
        return Ok(CategoryFilterDefaults { price_floor: 0.0, price_ceiling: 0.0, colors: vec![], facet_values: BTreeMap::new() });
    }

    // whole currency units so the range inputs start on round numbers
    let price_floor = rows.iter().map(|r| r.price).fold(f64::INFINITY, f64::min).floor();
    let price_ceiling = rows.iter().map(|r| r.price).fold(f64::NEG_INFINITY, f64::max).ceil();

    let color_ids = rows.iter().filter_map(|r| r.color_id).collect::<BTreeSet<_>>();
    let colors = if color_ids.is_empty() {
        vec![]
    } else {
        source.select::<Color>(&colors_query(color_ids)).await?
    };

    let mut facet_values = BTreeMap::new();
    for facet in Facet::ALL {
        let values = rows.iter().filter_map(|r| r.facet(facet).cloned()).collect::<BTreeSet<_>>();
        if !values.is_empty() {
            facet_values.insert(facet, values.into_iter().collect::<Vec<_>>());
        }
    }

    Ok(CategoryFilterDefaults { price_floor, price_ceiling, colors, facet_values })
}
