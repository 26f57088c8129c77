//! In-memory catalog tables used when no REST endpoint is configured.

use std::collections::BTreeMap;

use anyhow::Context;
use serde_json::Value;

use crate::db_utils::table_query::TableQuery;

const BUNDLED_CATALOG: &str = include_str!("../../fixtures/catalog.json");

#[derive(Debug, Clone, Default)]
pub struct FixtureTables {
    tables: BTreeMap<String, Vec<Value>>,
}

impl FixtureTables {
    pub fn bundled() -> anyhow::Result<Self> {
        Self::from_json(BUNDLED_CATALOG).context("bundled fixture catalog is invalid")
    }

    pub fn from_path(path: &std::path::Path) -> anyhow::Result<Self> {
        let txt = std::fs::read_to_string(path).with_context(|| format!("failed to read fixture catalog {}", path.display()))?;
        Self::from_json(&txt).with_context(|| format!("failed to parse fixture catalog {}", path.display()))
    }

    /// Parses `{"table": [row, ...]}` and resolves the embeddings the REST
    /// endpoint would return (`category` and `color` on products).
    pub fn from_json(txt: &str) -> anyhow::Result<Self> {
        let mut tables: BTreeMap<String, Vec<Value>> = serde_json::from_str(txt)?;
        let categories = index_by_id(tables.get("categories"));
        let colors = index_by_id(tables.get("colors"));
        if let Some(products) = tables.get_mut("products") {
            for product in products.iter_mut() {
                embed(product, "category_id", "category", &categories, &["id", "name", "slug"]);
                embed(product, "color_id", "color", &colors, &["id", "name", "hex"]);
            }
        }
        Ok(Self { tables })
    }

    pub fn select(&self, query: &TableQuery) -> anyhow::Result<Vec<Value>> {
        let rows = self.tables.get(query.table).with_context(|| format!("unknown fixture table {}", query.table))?;
        Ok(query.apply_to_rows(rows))
    }
}

fn index_by_id(rows: Option<&Vec<Value>>) -> BTreeMap<u64, Value> {
    rows.into_iter()
        .flatten()
        .filter_map(|r| r.get("id").and_then(Value::as_u64).map(|id| (id, r.clone())))
        .collect()
}

fn embed(row: &mut Value, key_column: &str, as_field: &str, lookup: &BTreeMap<u64, Value>, columns: &[&str]) {
    let Some(target) = row.get(key_column).and_then(Value::as_u64).and_then(|id| lookup.get(&id)) else { return };
    let embedded = columns.iter().filter_map(|c| target.get(*c).map(|v| (c.to_string(), v.clone()))).collect::<serde_json::Map<_, _>>();
    if let Value::Object(map) = row {
        map.entry(as_field.to_string()).or_insert(Value::Object(embedded));
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::db_utils::table_query::Filter;

    #[test]
    fn products_get_category_and_color_embedded() {
        let tables = FixtureTables::from_json(
            r##"{
                "categories": [{"id": 7, "name": "Wall Tiles", "slug": "wall-tiles", "is_active": true}],
                "colors": [{"id": 2, "name": "Grey", "hex": "#808080"}],
                "products": [{"id": 1, "name": "Slate", "category_id": 7, "color_id": 2}]
            }"##,
        )
        .unwrap();
        let rows = tables.select(&TableQuery::from("products")).unwrap();
        assert_eq!(rows[0]["category"]["slug"], "wall-tiles");
        assert_eq!(rows[0]["color"]["name"], "Grey");
        assert!(rows[0]["category"].get("is_active").is_none());
    }

    #[test]
    fn unknown_table_is_an_error() {
        let tables = FixtureTables::from_json("{}").unwrap();
        assert!(tables.select(&TableQuery::from("orders")).is_err());
    }

    #[test]
    fn bundled_catalog_loads() {
        let tables = FixtureTables::bundled().unwrap();
        let active = tables.select(&TableQuery::from("products").filter(Filter::eq("is_active", true))).unwrap();
        assert!(!active.is_empty());
    }
}
