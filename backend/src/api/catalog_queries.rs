//! Table queries behind the catalog endpoints.

use common::catalog::CategoryId;
use common::filter_criteria::{Facet, FilterCriteria};

use crate::db_utils::table_query::{Filter, TableQuery};

pub const PRODUCT_SUMMARY_COLUMNS: &str = "id,name,slug,price,image_url,dimensions,category:categories(id,name,slug)";
pub const PRODUCT_DETAIL_COLUMNS: &str =
    "id,name,slug,price,image_url,dimensions,description,finish,material,stock,category:categories(id,name,slug),color:colors(id,name,hex)";
pub const PRODUCT_FACET_COLUMNS: &str = "price,color_id,finish,material";
pub const CATEGORY_COLUMNS: &str = "id,name,slug";
pub const COLOR_COLUMNS: &str = "id,name,hex";

pub fn product_search_query(term: &str, limit: usize) -> TableQuery {
    TableQuery::from("products")
        .select(PRODUCT_SUMMARY_COLUMNS)
        .filter(Filter::ilike_any(&["name", "description"], term))
        .filter(Filter::eq("is_active", true))
        .order_asc("name")
        .limit(limit)
}

pub fn category_search_query(term: &str, limit: usize) -> TableQuery {
    TableQuery::from("categories")
        .select(CATEGORY_COLUMNS)
        .filter(Filter::ilike_any(&["name"], term))
        .filter(Filter::eq("is_active", true))
        .order_asc("name")
        .limit(limit)
}

pub fn category_by_slug_query(slug: &str) -> TableQuery {
    TableQuery::from("categories")
        .select(CATEGORY_COLUMNS)
        .filter(Filter::eq("slug", slug))
        .filter(Filter::eq("is_active", true))
}

pub fn active_categories_query() -> TableQuery {
    TableQuery::from("categories").select(CATEGORY_COLUMNS).filter(Filter::eq("is_active", true)).order_asc("name")
}

pub fn product_by_slug_query(slug: &str) -> TableQuery {
    TableQuery::from("products")
        .select(PRODUCT_DETAIL_COLUMNS)
        .filter(Filter::eq("slug", slug))
        .filter(Filter::eq("is_active", true))
}

/// Products of one category restricted by committed filter criteria.
pub fn category_products_query(category_id: CategoryId, criteria: &FilterCriteria) -> TableQuery {
    let mut query = TableQuery::from("products")
        .select(PRODUCT_SUMMARY_COLUMNS)
        .filter(Filter::eq("category_id", category_id.0))
        .filter(Filter::eq("is_active", true))
        .filter(Filter::Gte { column: "price", value: criteria.price_min })
        .filter(Filter::Lte { column: "price", value: criteria.price_max });
    if !criteria.colors.is_empty() {
        query = query.filter(Filter::is_in("color_id", criteria.colors.iter().map(|c| c.0)));
    }
    for facet in Facet::ALL {
        if let Some(values) = criteria.facets.get(&facet).filter(|v| !v.is_empty()) {
            query = query.filter(Filter::is_in(facet.column(), values.iter().cloned()));
        }
    }
    query.order_asc("name")
}

/// Unfiltered facet columns of a category, used to derive its defaults.
pub fn category_facet_rows_query(category_id: CategoryId) -> TableQuery {
    TableQuery::from("products")
        .select(PRODUCT_FACET_COLUMNS)
        .filter(Filter::eq("category_id", category_id.0))
        .filter(Filter::eq("is_active", true))
}

pub fn colors_query(ids: impl IntoIterator<Item = u64>) -> TableQuery {
    TableQuery::from("colors").select(COLOR_COLUMNS).filter(Filter::is_in("id", ids)).order_asc("name")
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::catalog::ColorId;
    use common::filter_criteria::CriterionValue;

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Vec<&'a str> {
        params.iter().filter(|(k, _)| k == key).map(|(_, v)| v.as_str()).collect()
    }

    #[test]
    fn search_queries_are_capped_and_ordered() {
        let params = product_search_query("gre", 8).to_postgrest_params();
        assert_eq!(param(&params, "limit"), vec!["8"]);
        assert_eq!(param(&params, "order"), vec!["name.asc"]);
        assert_eq!(param(&params, "is_active"), vec!["eq.true"]);

        let params = category_search_query("gre", 3).to_postgrest_params();
        assert_eq!(param(&params, "or"), vec!["(name.ilike.\"%gre%\")"]);
        assert_eq!(param(&params, "limit"), vec!["3"]);
    }

    #[test]
    fn unrestricted_criteria_only_filter_price() {
        let params = category_products_query(CategoryId(4), &FilterCriteria::unrestricted(0.0, 120.0)).to_postgrest_params();
        assert_eq!(param(&params, "category_id"), vec!["eq.4"]);
        assert_eq!(param(&params, "price"), vec!["gte.0", "lte.120"]);
        assert!(param(&params, "color_id").is_empty());
        assert!(param(&params, "finish").is_empty());
    }

    #[test]
    fn selected_colors_and_facets_become_membership_filters() {
        let mut criteria = FilterCriteria::unrestricted(10.0, 90.0);
        criteria.insert(CriterionValue::Color(ColorId(3)));
        criteria.insert(CriterionValue::Color(ColorId(1)));
        criteria.insert(CriterionValue::Facet(Facet::Finish, "Matte".to_string()));
        let params = category_products_query(CategoryId(4), &criteria).to_postgrest_params();
        assert_eq!(param(&params, "color_id"), vec!["in.(1,3)"]);
        assert_eq!(param(&params, "finish"), vec!["in.(\"Matte\")"]);
        assert!(param(&params, "material").is_empty());
    }
}
