//! Table query builder shared by the REST and fixture data sources.
//!
//! A [`TableQuery`] renders to PostgREST query parameters for the hosted
//! endpoint, and can be evaluated directly against JSON rows for the fixture
//! catalog. Both paths must agree on semantics.

use std::cmp::Ordering;

use serde_json::Value;


#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Bool(bool),
    Int(u64),
    Text(String),
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Bool(v)
    }
}

impl From<u64> for FilterValue {
    fn from(v: u64) -> Self {
        FilterValue::Int(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

impl FilterValue {
    fn render(&self) -> String {
        match self {
            FilterValue::Bool(b) => b.to_string(),
            FilterValue::Int(i) => i.to_string(),
            FilterValue::Text(s) => s.clone(),
        }
    }

    fn render_quoted(&self) -> String {
        match self {
            FilterValue::Text(s) => quote(s),
            other => other.render(),
        }
    }

    fn matches(&self, cell: &Value) -> bool {
        match (self, cell) {
            (FilterValue::Bool(b), Value::Bool(c)) => b == c,
            (FilterValue::Int(i), Value::Number(n)) => n.as_u64() == Some(*i),
            (FilterValue::Text(s), Value::String(c)) => s == c,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Case-insensitive substring match on any of the columns.
    ILikeAny { columns: Vec<&'static str>, needle: String },
    Eq { column: &'static str, value: FilterValue },
    Gte { column: &'static str, value: f64 },
    Lte { column: &'static str, value: f64 },
    In { column: &'static str, values: Vec<FilterValue> },
}

impl Filter {
    /// The needle is kept as typed and escaped when rendered.
    pub fn ilike_any(columns: &[&'static str], term: &str) -> Self {
        Filter::ILikeAny { columns: columns.to_vec(), needle: term.trim().to_string() }
    }

    /// An empty needle would match every row; it matches none instead.
    pub fn matches_nothing(&self) -> bool {
        matches!(self, Filter::ILikeAny { needle, .. } if needle.is_empty())
    }

    pub fn eq(column: &'static str, value: impl Into<FilterValue>) -> Self {
        Filter::Eq { column, value: value.into() }
    }

    pub fn is_in<V: Into<FilterValue>>(column: &'static str, values: impl IntoIterator<Item = V>) -> Self {
        Filter::In { column, values: values.into_iter().map(Into::into).collect() }
    }

    fn to_param(&self) -> (String, String) {
        match self {
            Filter::ILikeAny { columns, needle } => {
                let alternatives = columns.iter().map(|c| substring_condition(c, needle)).collect::<Vec<_>>().join(",");
                ("or".to_string(), format!("({alternatives})"))
            }
            Filter::Eq { column, value } => (column.to_string(), format!("eq.{}", value.render())),
            Filter::Gte { column, value } => (column.to_string(), format!("gte.{value}")),
            Filter::Lte { column, value } => (column.to_string(), format!("lte.{value}")),
            Filter::In { column, values } => {
                let list = values.iter().map(|v| v.render_quoted()).collect::<Vec<_>>().join(",");
                (column.to_string(), format!("in.({list})"))
            }
        }
    }

    fn matches(&self, row: &Value) -> bool {
        match self {
            Filter::ILikeAny { columns, needle } => {
                if needle.is_empty() {
                    return false;
                }
                let needle = needle.to_lowercase();
                columns.iter().any(|c| row.get(c).and_then(Value::as_str).map(|s| s.to_lowercase().contains(&needle)).unwrap_or(false))
            }
            Filter::Eq { column, value } => row.get(column).map(|cell| value.matches(cell)).unwrap_or(false),
            Filter::Gte { column, value } => row.get(column).and_then(Value::as_f64).map(|v| v >= *value).unwrap_or(false),
            Filter::Lte { column, value } => row.get(column).and_then(Value::as_f64).map(|v| v <= *value).unwrap_or(false),
            Filter::In { column, values } => row.get(column).map(|cell| values.iter().any(|v| v.matches(cell))).unwrap_or(false),
        }
    }
}

/// Renders one column's substring test. `\`, `%` and `_` are escaped in the
/// `ilike` pattern. PostgREST turns every `*` in a like pattern into `%`, so
/// a needle containing `*` is sent as an escaped `imatch` regex instead.
fn substring_condition(column: &str, needle: &str) -> String {
    if needle.contains('*') {
        let mut regex = String::new();
        for c in needle.chars() {
            if "\\.+*?()[]{}|^$".contains(c) {
                regex.push('\\');
            }
            regex.push(c);
        }
        return format!("{column}.imatch.{}", quote(&regex));
    }
    let mut pattern = String::from("%");
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    format!("{column}.ilike.{}", quote(&pattern))
}

/// PostgREST reserves `,.:()` inside logic trees and lists; double quotes
/// make the value literal.
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    pub table: &'static str,
    pub select: &'static str,
    pub filters: Vec<Filter>,
    pub order_by: Option<&'static str>,
    pub limit: Option<usize>,
}

impl TableQuery {
    pub fn from(table: &'static str) -> Self {
        Self { table, select: "*", filters: vec![], order_by: None, limit: None }
    }

    pub fn select(mut self, columns: &'static str) -> Self {
        self.select = columns;
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn order_asc(mut self, column: &'static str) -> Self {
        self.order_by = Some(column);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn to_postgrest_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.select.to_string())];
        params.extend(self.filters.iter().map(Filter::to_param));
        if let Some(column) = self.order_by {
            params.push(("order".to_string(), format!("{column}.asc")));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }

    pub fn matches_nothing(&self) -> bool {
        self.filters.iter().any(Filter::matches_nothing)
    }

    pub fn matches(&self, row: &Value) -> bool {
        self.filters.iter().all(|f| f.matches(row))
    }

    /// Evaluates the query over in-memory rows.
    pub fn apply_to_rows<'a>(&self, rows: impl IntoIterator<Item = &'a Value>) -> Vec<Value> {
        let mut selected = rows.into_iter().filter(|r| self.matches(r)).cloned().collect::<Vec<_>>();
        if let Some(column) = self.order_by {
            selected.sort_by(|a, b| compare_cells(a.get(column), b.get(column)));
        }
        if let Some(limit) = self.limit {
            selected.truncate(limit);
        }
        selected
    }
}

// Text sorts case-insensitively, like the database's default collation.
fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(a)), Some(Value::String(b))) => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            a.as_f64().unwrap_or(0.0).partial_cmp(&b.as_f64().unwrap_or(0.0)).unwrap_or(Ordering::Equal)
        }
        // nulls last
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "grey Slate", "description": "Honed stone", "price": 45.0, "color_id": 2, "is_active": true}),
            json!({"id": 2, "name": "Green Mosaic", "description": "Glass GREEN tiles", "price": 80.0, "color_id": 3, "is_active": true}),
            json!({"id": 3, "name": "Gres Porcelain", "description": null, "price": 25.5, "color_id": 2, "is_active": false}),
            json!({"id": 4, "name": "White Metro", "description": "Subway tile, greige grout", "price": 12.0, "color_id": 1, "is_active": true}),
        ]
    }

    fn ids(rows: &[Value]) -> Vec<u64> {
        rows.iter().filter_map(|r| r["id"].as_u64()).collect()
    }

    #[test]
    fn renders_postgrest_parameters() {
        let q = TableQuery::from("products")
            .select("id,name")
            .filter(Filter::ilike_any(&["name", "description"], " gre "))
            .filter(Filter::eq("is_active", true))
            .filter(Filter::Gte { column: "price", value: 10.0 })
            .filter(Filter::Lte { column: "price", value: 99.5 })
            .filter(Filter::is_in("color_id", [1_u64, 2]))
            .order_asc("name")
            .limit(8);
        let params = q.to_postgrest_params();
        let expected = [
            ("select", "id,name"),
            ("or", "(name.ilike.\"%gre%\",description.ilike.\"%gre%\")"),
            ("is_active", "eq.true"),
            ("price", "gte.10"),
            ("price", "lte.99.5"),
            ("color_id", "in.(1,2)"),
            ("order", "name.asc"),
            ("limit", "8"),
        ];
        assert_eq!(params, expected.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<Vec<_>>());
    }

    #[test]
    fn text_values_are_quoted_in_lists_and_patterns() {
        let q = TableQuery::from("products")
            .filter(Filter::is_in("finish", ["Matte", "Semi, \"gloss\""]))
            .filter(Filter::ilike_any(&["name"], "50x50%_cm"));
        let params = q.to_postgrest_params();
        assert_eq!(params[1].1, r#"in.("Matte","Semi, \"gloss\"")"#);
        assert_eq!(params[2].1, r#"(name.ilike."%50x50\\%\\_cm%")"#);
    }

    #[test]
    fn substring_match_is_case_insensitive_across_columns() {
        let q = TableQuery::from("products").filter(Filter::ilike_any(&["name", "description"], "GRE"));
        assert_eq!(ids(&q.apply_to_rows(&rows())), vec![1, 2, 3, 4]);
        let q = TableQuery::from("products").filter(Filter::ilike_any(&["name"], "GRE"));
        assert_eq!(ids(&q.apply_to_rows(&rows())), vec![1, 2, 3]);
    }

    #[test]
    fn active_flag_order_and_limit() {
        let q = TableQuery::from("products").filter(Filter::eq("is_active", true)).order_asc("name").limit(2);
        assert_eq!(ids(&q.apply_to_rows(&rows())), vec![2, 1]);
    }

    #[test]
    fn price_range_and_membership() {
        let q = TableQuery::from("products")
            .filter(Filter::Gte { column: "price", value: 20.0 })
            .filter(Filter::Lte { column: "price", value: 50.0 })
            .filter(Filter::is_in("color_id", [2_u64]));
        assert_eq!(ids(&q.apply_to_rows(&rows())), vec![1, 3]);
    }

    #[test]
    fn missing_or_null_cells_never_match() {
        let q = TableQuery::from("products").filter(Filter::ilike_any(&["description"], "stone"));
        assert_eq!(ids(&q.apply_to_rows(&rows())), vec![1]);
        let q = TableQuery::from("products").filter(Filter::eq("finish", "Matte"));
        assert!(q.apply_to_rows(&rows()).is_empty());
    }

    #[test]
    fn wildcard_characters_in_the_term_match_literally() {
        let rows = vec![
            json!({"id": 1, "name": "Slate_Grey"}),
            json!({"id": 2, "name": "SlateXGrey"}),
            json!({"id": 3, "name": "50% off"}),
            json!({"id": 4, "name": "Back\\slash"}),
        ];
        let search = |term: &str| ids(&TableQuery::from("products").filter(Filter::ilike_any(&["name"], term)).apply_to_rows(&rows));
        assert_eq!(search("slate_g"), vec![1]);
        assert_eq!(search("0%"), vec![3]);
        assert_eq!(search("k\\s"), vec![4]);
        assert!(search("%_").is_empty());
        assert!(search("__").is_empty());
        assert!(search("**").is_empty());
        assert!(search("   ").is_empty());
    }

    #[test]
    fn rendered_pattern_escapes_like_wildcards() {
        let q = TableQuery::from("products").filter(Filter::ilike_any(&["name"], "Slate_G"));
        assert_eq!(q.to_postgrest_params()[1].1, r#"(name.ilike."%Slate\\_G%")"#);
        assert_eq!(q.apply_to_rows(&[json!({"id": 1, "name": "slate_grey"})]).len(), 1);

        // `*` cannot appear literally in a PostgREST like pattern
        let q = TableQuery::from("products").filter(Filter::ilike_any(&["name", "description"], "a*b.c"));
        assert_eq!(q.to_postgrest_params()[1].1, r#"(name.imatch."a\\*b\\.c",description.imatch."a\\*b\\.c")"#);
        let rows = [json!({"id": 1, "name": "A*B.C"}), json!({"id": 2, "name": "axb.c"}), json!({"id": 3, "name": "a*bxc"})];
        assert_eq!(ids(&q.apply_to_rows(&rows)), vec![1]);
    }

    #[test]
    fn blank_needle_matches_nothing() {
        let q = TableQuery::from("products").filter(Filter::ilike_any(&["name"], "  "));
        assert!(q.matches_nothing());
        assert!(q.apply_to_rows(&rows()).is_empty());
        assert!(!TableQuery::from("products").filter(Filter::eq("is_active", true)).matches_nothing());
    }
}
